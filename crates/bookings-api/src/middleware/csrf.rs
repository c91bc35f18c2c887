//! Anti-forgery check for state-changing requests.
//!
//! Safe methods pass untouched. Anything else must echo the session's
//! token, either in the `x-csrf-token` header or as the `csrf_token`
//! field of an url-encoded form. The form body is buffered to read the
//! field and handed on to the handler unchanged.

use axum::body::{self, Body};
use axum::extract::{FromRequest, Request, State};
use axum::http::{self, Method, header};
use axum::middleware::Next;
use axum::Form;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use tracing::warn;

use bookings_core::error::AppError;
use bookings_session::CSRF_HEADER;

use crate::error::ApiError;
use crate::middleware::session::SessionToken;
use crate::state::AppState;

/// Largest form body buffered for the check.
const MAX_FORM_BYTES: usize = 64 * 1024;

#[derive(Debug, Default, Deserialize)]
struct CsrfField {
    #[serde(default, rename = "csrf_token")]
    token: String,
}

/// Reject non-safe requests whose token does not match the session's.
pub async fn verify_csrf(State(state): State<AppState>, request: Request, next: Next) -> Response {
    if matches!(*request.method(), Method::GET | Method::HEAD | Method::OPTIONS) {
        return next.run(request).await;
    }

    let Some(SessionToken(session_token)) = request.extensions().get::<SessionToken>().cloned()
    else {
        return ApiError(AppError::internal("Session middleware is not installed")).into_response();
    };

    let header_token = request
        .headers()
        .get(CSRF_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(String::from);

    let (request, presented) = match header_token {
        Some(token) => (request, token),
        None => match read_form_token(request).await {
            Ok(found) => found,
            Err(e) => return ApiError(e).into_response(),
        },
    };

    let path = request.uri().path().to_string();
    match state.sessions.handle(session_token).verify_csrf(&presented).await {
        Ok(true) => next.run(request).await,
        Ok(false) => {
            warn!(path = %path, "Rejected request with a missing or stale anti-forgery token");
            ApiError(AppError::validation("Invalid CSRF token")).into_response()
        }
        Err(e) => ApiError(e).into_response(),
    }
}

/// Pull `csrf_token` out of an url-encoded body and rebuild the request
/// around the buffered bytes.
async fn read_form_token(request: Request) -> Result<(Request, String), AppError> {
    let (parts, body) = request.into_parts();
    let bytes = body::to_bytes(body, MAX_FORM_BYTES)
        .await
        .map_err(|_| AppError::validation("Request body is too large"))?;

    let mut copy = http::Request::builder().method(Method::POST);
    if let Some(content_type) = parts.headers.get(header::CONTENT_TYPE) {
        copy = copy.header(header::CONTENT_TYPE, content_type);
    }
    let token = match copy.body(Body::from(bytes.clone())) {
        Ok(form_request) => Form::<CsrfField>::from_request(form_request, &())
            .await
            .map(|Form(field)| field.token)
            .unwrap_or_default(),
        Err(_) => String::new(),
    };

    Ok((Request::from_parts(parts, Body::from(bytes)), token))
}
