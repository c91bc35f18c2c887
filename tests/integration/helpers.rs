//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use chrono::NaiveDate;
use http::{Request, StatusCode, header};
use serde_json::Value;
use tower::ServiceExt;

use bookings_api::AppState;
use bookings_cache::CacheManager;
use bookings_core::config::{AppConfig, DatabaseBackend};
use bookings_core::types::{DateRange, RoomId};
use bookings_database::{BookingStore, FaultPlan, MemoryBookingStore};
use bookings_entity::{NewRoomRestriction, ProvisionalReservation, Room};
use bookings_session::SessionHandle;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Store behind the router, for seeding and inspection
    pub store: MemoryBookingStore,
    /// Shared state, for direct session access
    pub state: AppState,
}

impl TestApp {
    /// App over the fixture store: rooms 1 and 2, failing reservation
    /// inserts for room 2 and restriction inserts for room 1000.
    pub async fn new() -> Self {
        Self::with_store(MemoryBookingStore::fixture()).await
    }

    /// App over a store with the site rooms and the given failures.
    pub async fn with_faults(faults: FaultPlan) -> Self {
        let store = MemoryBookingStore::new(faults)
            .with_room(Room::new(RoomId(1), "General's Quarters"))
            .with_room(Room::new(RoomId(2), "Major's Suite"));
        Self::with_store(store).await
    }

    async fn with_store(store: MemoryBookingStore) -> Self {
        let mut config = AppConfig::default();
        config.database.backend = DatabaseBackend::Memory;
        config.cache.provider = "memory".to_string();

        let cache = CacheManager::new(&config.cache)
            .await
            .expect("Failed to init cache");

        let dyn_store: Arc<dyn BookingStore> = Arc::new(store.clone());
        let state = AppState::new(config, dyn_store, cache);
        let router = bookings_api::build_app(state.clone());

        Self {
            router,
            store,
            state,
        }
    }

    /// A fresh, well-formed session token.
    pub fn new_session(&self) -> String {
        bookings_session::token::generate()
    }

    /// Direct handle on the session behind `token`.
    pub fn session(&self, token: &str) -> SessionHandle {
        self.state.sessions.handle(token)
    }

    /// Put a held reservation in the session, as a previous step would.
    pub async fn hold(&self, token: &str, provisional: &ProvisionalReservation) {
        self.session(token)
            .put(bookings_service::reservation::RESERVATION_KEY, provisional)
            .await
            .expect("Failed to seed session");
    }

    /// Block `room_id` for `range` with an owner block.
    pub async fn block(&self, room_id: RoomId, range: DateRange) {
        self.store
            .insert_room_restriction(&NewRoomRestriction::owner_block(room_id, range))
            .await
            .expect("Failed to insert restriction");
    }

    /// GET `path` within the session `token`.
    pub async fn get(&self, path: &str, token: Option<&str>) -> TestResponse {
        self.request("GET", path, None, token).await
    }

    /// POST an url-encoded form within the session `token`.
    pub async fn post_form(
        &self,
        path: &str,
        fields: &[(&str, &str)],
        token: Option<&str>,
    ) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&");
        self.request("POST", path, Some(body), token).await
    }

    /// The anti-forgery token of the session behind `token`.
    pub async fn csrf_token(&self, token: &str) -> String {
        self.session(token)
            .csrf_token()
            .await
            .expect("Failed to issue CSRF token")
    }

    /// Make an HTTP request to the test app.
    ///
    /// POSTs carry the session's anti-forgery token in the header, as the
    /// site's own pages would; a POST without a session gets a fresh one.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        form: Option<String>,
        token: Option<&str>,
    ) -> TestResponse {
        if method != "POST" {
            return self.send(method, path, form, token, None).await;
        }
        let token = token.map(String::from).unwrap_or_else(|| self.new_session());
        let csrf = self.csrf_token(&token).await;
        self.send(method, path, form, Some(&token), Some(&csrf)).await
    }

    /// Make an HTTP request exactly as given, with no anti-forgery header
    /// unless `csrf` is set.
    pub async fn send(
        &self,
        method: &str,
        path: &str,
        form: Option<String>,
        token: Option<&str>,
        csrf: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if form.is_some() {
            req = req.header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        }
        if let Some(token) = token {
            req = req.header("x-session", token);
        }
        if let Some(csrf) = csrf {
            req = req.header("x-csrf-token", csrf);
        }

        let req = req
            .body(Body::from(form.unwrap_or_default()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let location = response
            .headers()
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let set_cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            location,
            set_cookie,
            body,
        }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// `Location` header of redirects
    pub location: Option<String>,
    /// `Set-Cookie` header, when a session was issued
    pub set_cookie: Option<String>,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Page template name of a rendered view.
    pub fn page(&self) -> Option<&str> {
        self.body.get("page").and_then(Value::as_str)
    }

    /// Informational flash message shown with a rendered view.
    pub fn flash_text(&self) -> Option<&str> {
        self.body.get("flash").and_then(Value::as_str)
    }
}

/// `YYYY-MM-DD` shorthand.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

/// Range from two `YYYY-MM-DD` strings.
pub fn range(start: &str, end: &str) -> DateRange {
    DateRange::new(date(start), date(end))
}
