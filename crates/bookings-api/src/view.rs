//! Rendering boundary: page view models and flow redirects.

use axum::Json;
use axum::response::{IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};
use tracing::warn;

use bookings_service::RequestContext;
use bookings_session::{FlashKind, FlashMessages};

/// Everything a page template needs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageView {
    /// Template name, e.g. `home.page`.
    pub page: String,
    /// Informational message carried over from the previous request.
    pub flash: Option<String>,
    /// Error message carried over from the previous request.
    pub error: Option<String>,
    /// Warning message carried over from the previous request.
    pub warning: Option<String>,
    /// Anti-forgery token every form on the page posts back.
    pub csrf_token: String,
    /// Page-specific data.
    pub data: serde_json::Value,
}

/// Render `page` with `data`, consuming any pending flash messages.
pub async fn render(ctx: &RequestContext, page: &str, data: serde_json::Value) -> Response {
    let flashes = match ctx.session.take_flashes().await {
        Ok(flashes) => flashes,
        Err(e) => {
            warn!(request_id = %ctx.request_id, error = %e, "Failed to read flash messages");
            FlashMessages::default()
        }
    };

    let csrf_token = match ctx.session.csrf_token().await {
        Ok(token) => token,
        Err(e) => {
            warn!(request_id = %ctx.request_id, error = %e, "Failed to issue anti-forgery token");
            String::new()
        }
    };

    Json(PageView {
        page: page.to_string(),
        flash: flashes.flash,
        error: flashes.error,
        warning: flashes.warning,
        csrf_token,
        data,
    })
    .into_response()
}

/// Send the visitor back to the home page (307) to start over.
///
/// A 307 keeps the method, so a failed POST arrives at `/` as a POST; the
/// home route answers both.
pub fn restart() -> Response {
    Redirect::temporary("/").into_response()
}

/// Leave `message` on the error channel, then [`restart`].
pub async fn restart_with_error(ctx: &RequestContext, message: &str) -> Response {
    if let Err(e) = ctx.session.flash(FlashKind::Error, message).await {
        warn!(request_id = %ctx.request_id, error = %e, "Failed to write flash message");
    }
    restart()
}

/// Move on to the next page of the flow (303).
pub fn see_other(uri: &str) -> Response {
    Redirect::to(uri).into_response()
}
