//! Environment-driven configuration.

#![allow(missing_docs)]

use serde::Deserialize;
use std::env;

/// Process configuration, loaded once at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub session: SessionConfig,
}

/// HTTP bind configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Session signing configuration. The secret is read once at startup and
/// injected into the session manager; it is never mutated afterwards.
/// Rotating it invalidates every outstanding session.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    pub ttl_secs: i64,
}

impl Config {
    /// Loads configuration from the environment, honoring a `.env` file.
    /// `SESSION_SECRET` is required; everything else has a default.
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
            },
            session: SessionConfig {
                secret: env::var("SESSION_SECRET")?,
                ttl_secs: env::var("SESSION_TTL_SECS")
                    .unwrap_or_else(|_| "86400".to_string())
                    .parse()?,
            },
        })
    }
}
