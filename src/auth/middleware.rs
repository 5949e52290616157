//! Request-lifecycle attachment of the authenticated user.
//!
//! The middleware runs on every request, anonymous ones included: it pulls
//! the opaque session token off the transport (a `session` cookie, or an
//! `Authorization: Bearer` header), resolves it, and stashes the resulting
//! [`SessionState`] in the request extensions. It never rejects a request;
//! handlers that need a user use the [`CurrentUser`] extractor, whose
//! rejection is a 401.

use crate::auth::session::SessionState;
use crate::types::{AppError, User};
use crate::AppState;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

/// Cookie under which the session token travels.
pub const SESSION_COOKIE: &str = "session";

/// Pulls the opaque token out of the request, if any. The token itself is
/// just a byte string here; whether it came as a cookie or a bearer header
/// is irrelevant past this point.
pub fn extract_token(headers: &HeaderMap) -> Option<String> {
    if let Some(value) = headers.get(header::AUTHORIZATION) {
        if let Some(token) = value.to_str().ok().and_then(|v| v.strip_prefix("Bearer ")) {
            return Some(token.to_string());
        }
    }

    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;
    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == SESSION_COOKIE).then(|| value.to_string())
    })
}

/// Resolves the session for every inbound request and attaches the outcome.
pub async fn session_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let session = match extract_token(req.headers()) {
        Some(token) => state.sessions.resolve(&token, state.store.as_ref()).await?,
        None => SessionState::Unauthenticated,
    };

    req.extensions_mut().insert(session);

    Ok(next.run(req).await)
}

/// Extracts the authenticated user; rejects anonymous requests with 401.
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<SessionState>() {
            Some(SessionState::Authenticated(user)) => Ok(CurrentUser(user.clone())),
            _ => Err(AppError::Auth("Authentication required".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn extracts_bearer_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            HeaderValue::from_static("Bearer abc.def.ghi"),
        );
        assert_eq!(extract_token(&headers), Some("abc.def.ghi".to_string()));
    }

    #[test]
    fn extracts_session_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; session=tok123; lang=en"),
        );
        assert_eq!(extract_token(&headers), Some("tok123".to_string()));
    }

    #[test]
    fn bearer_wins_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t1"));
        headers.insert(header::COOKIE, HeaderValue::from_static("session=t2"));
        assert_eq!(extract_token(&headers), Some("t1".to_string()));
    }

    #[test]
    fn no_token_is_none() {
        let headers = HeaderMap::new();
        assert_eq!(extract_token(&headers), None);

        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("theme=dark"));
        assert_eq!(extract_token(&headers), None);
    }
}
