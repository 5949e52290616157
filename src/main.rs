use clap::Parser;
use taskhub::{api::routes::create_router, db::DatabaseProvider, AppState, Config};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Taskhub - task tracker backend
#[derive(Parser, Debug)]
#[command(
    name = "taskhub-server",
    author = "Dirmacs <build@dirmacs.com>",
    version,
    about = "Taskhub - a task tracker backend with session authentication",
    long_about = "A task tracker backend (users, statuses, tasks, labels) with\n\
                  signed-cookie session authentication and ownership-based\n\
                  authorization.\n\n\
                  Configuration is read from the environment (optionally via a\n\
                  .env file): SESSION_SECRET (required), SESSION_TTL_SECS,\n\
                  DATABASE_PATH, HOST, PORT."
)]
struct Cli {
    /// Bind address override (defaults to HOST from the environment)
    #[arg(long)]
    host: Option<String>,

    /// Port override (defaults to PORT from the environment)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("taskhub=info,tower_http=info")
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env()
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let store = DatabaseProvider::from_env()
        .create_client()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open database: {}", e))?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::new(config, store.into());

    let app = create_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    tracing::info!(%addr, "taskhub-server listening");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
