//! `Visitor` extractor: the request context of an anonymous site visitor.

use std::net::SocketAddr;

use axum::extract::{ConnectInfo, FromRequestParts};
use axum::http::request::Parts;

use bookings_core::error::AppError;
use bookings_service::RequestContext;

use crate::error::ApiError;
use crate::middleware::logging::REQUEST_ID_HEADER;
use crate::middleware::session::SessionToken;
use crate::state::AppState;

/// Request context bound to the visitor's session.
#[derive(Debug, Clone)]
pub struct Visitor(pub RequestContext);

impl std::ops::Deref for Visitor {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for Visitor {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .extensions
            .get::<SessionToken>()
            .map(|t| t.0.clone())
            .ok_or_else(|| AppError::internal("Session middleware is not installed"))?;

        let request_id = header(parts, REQUEST_ID_HEADER);

        let ip_address = header(parts, "x-forwarded-for")
            .and_then(|v| v.split(',').next().map(|s| s.trim().to_string()))
            .or_else(|| {
                parts
                    .extensions
                    .get::<ConnectInfo<SocketAddr>>()
                    .map(|ConnectInfo(addr)| addr.ip().to_string())
            })
            .unwrap_or_else(|| "unknown".to_string());

        let user_agent = header(parts, "user-agent");

        Ok(Visitor(RequestContext::new(
            state.sessions.handle(token),
            request_id,
            ip_address,
            user_agent,
        )))
    }
}

fn header(parts: &Parts, name: &str) -> Option<String> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(String::from)
}
