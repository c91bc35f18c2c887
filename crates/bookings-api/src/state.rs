//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use bookings_cache::CacheManager;
use bookings_core::config::AppConfig;
use bookings_database::BookingStore;
use bookings_service::{AvailabilityService, ReservationWorkflow};
use bookings_session::SessionStore;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Room, reservation and restriction store
    pub store: Arc<dyn BookingStore>,
    /// Cache manager (Redis or in-memory)
    pub cache: Arc<CacheManager>,
    /// Visitor sessions
    pub sessions: Arc<SessionStore>,
    /// Availability engine
    pub availability: Arc<AvailabilityService>,
    /// Booking flow
    pub workflow: Arc<ReservationWorkflow>,
}

impl AppState {
    /// Wire services over a store and a cache.
    pub fn new(config: AppConfig, store: Arc<dyn BookingStore>, cache: CacheManager) -> Self {
        let sessions = SessionStore::new(cache.clone(), &config.session);
        Self {
            availability: Arc::new(AvailabilityService::new(store.clone())),
            workflow: Arc::new(ReservationWorkflow::new(store.clone())),
            sessions: Arc::new(sessions),
            cache: Arc::new(cache),
            config: Arc::new(config),
            store,
        }
    }
}
