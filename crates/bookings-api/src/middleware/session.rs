//! Attaches a visitor session to every request.
//!
//! The token is read from the configured header first, then from the
//! session cookie. A request with neither (or with a token this server
//! could not have issued) gets a fresh token, returned as a cookie.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::debug;

use bookings_session::token;

use crate::state::AppState;

/// The session token resolved for the current request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(pub String);

/// Resolve or issue the session token and expose it as a request extension.
pub async fn ensure_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let config = &state.config.session;
    let jar = CookieJar::from_headers(request.headers());

    let presented = request
        .headers()
        .get(config.header_name.as_str())
        .and_then(|v| v.to_str().ok())
        .map(String::from)
        .or_else(|| jar.get(&config.cookie_name).map(|c| c.value().to_string()))
        .filter(|t| token::is_well_formed(t));

    let (session_token, issued) = match presented {
        Some(t) => (t, false),
        None => (state.sessions.new_token(), true),
    };

    request
        .extensions_mut()
        .insert(SessionToken(session_token.clone()));

    let response = next.run(request).await;

    if !issued {
        return response;
    }

    debug!("Issued new session token");
    let cookie = Cookie::build((config.cookie_name.clone(), session_token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.secure_cookie || state.config.server.in_production);

    (jar.add(cookie), response).into_response()
}
