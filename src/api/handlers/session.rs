//! Session handlers (login, logout).

use crate::{
    auth::middleware::{extract_token, SESSION_COOKIE},
    types::{LoginRequest, Result, SessionResponse},
    AppState,
};
use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::AppendHeaders,
    Json,
};

fn session_cookie(token: &str, max_age: i64) -> String {
    format!(
        "{}={}; Path=/; HttpOnly; SameSite=Lax; Max-Age={}",
        SESSION_COOKIE, token, max_age
    )
}

/// Login with email and password
///
/// On success the signed session token is returned in the body and set as a
/// cookie. On failure the response never says whether the email or the
/// password was wrong.
#[utoipa::path(
    post,
    path = "/api/session",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = SessionResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "session"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<(
    AppendHeaders<[(header::HeaderName, String); 1]>,
    Json<SessionResponse>,
)> {
    let user = state
        .verifier
        .authenticate(&payload.email, &payload.password)
        .await?;

    let token = state.sessions.establish(&user)?;
    let expires_in = state.sessions.ttl_secs();

    Ok((
        AppendHeaders([(header::SET_COOKIE, session_cookie(&token, expires_in))]),
        Json(SessionResponse { token, expires_in }),
    ))
}

/// Logout
///
/// Destroys the presented session and clears the cookie. Succeeds even when
/// no valid session was presented.
#[utoipa::path(
    delete,
    path = "/api/session",
    responses(
        (status = 204, description = "Session destroyed")
    ),
    tag = "session"
)]
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> (
    StatusCode,
    AppendHeaders<[(header::HeaderName, String); 1]>,
) {
    if let Some(token) = extract_token(&headers) {
        state.sessions.destroy(&token);
    }

    (
        StatusCode::NO_CONTENT,
        AppendHeaders([(header::SET_COOKIE, session_cookie("", 0))]),
    )
}
