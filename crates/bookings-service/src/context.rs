//! Per-request context handed to every service call.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use bookings_session::SessionHandle;

/// Who is asking and which session their booking state lives in.
///
/// Built once per request by the HTTP layer.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// The visitor's session.
    pub session: SessionHandle,
    /// Correlation id for log lines of this request.
    pub request_id: String,
    /// Address of the request origin.
    pub ip_address: String,
    /// User-Agent header value.
    pub user_agent: Option<String>,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(
        session: SessionHandle,
        request_id: Option<String>,
        ip_address: String,
        user_agent: Option<String>,
    ) -> Self {
        Self {
            session,
            request_id: request_id.unwrap_or_else(|| Uuid::new_v4().to_string()),
            ip_address,
            user_agent,
            request_time: Utc::now(),
        }
    }
}
