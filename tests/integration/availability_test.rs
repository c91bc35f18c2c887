//! Integration tests for availability search.

mod helpers;

use http::StatusCode;

use bookings_core::types::RoomId;
use bookings_database::FaultPlan;
use bookings_entity::ProvisionalReservation;

const SEARCH: &str = "/search-availability";
const JSON: &str = "/search-availability-json";

#[tokio::test]
async fn test_search_lists_free_rooms() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();

    let response = app
        .post_form(SEARCH, &[("start", "2050-01-01"), ("end", "2050-01-02")], Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.page(), Some("choose-room.page"));
    assert_eq!(response.body["data"]["rooms"].as_array().map(Vec::len), Some(2));
    assert_eq!(response.body["data"]["start_date"], "2050-01-01");
    assert_eq!(response.body["data"]["end_date"], "2050-01-02");

    let held: ProvisionalReservation = app
        .session(&token)
        .get("reservation")
        .await
        .expect("session read")
        .expect("held reservation");
    assert_eq!(held.range(), helpers::range("2050-01-01", "2050-01-02"));
    assert_eq!(held.room_id, None);
}

#[tokio::test]
async fn test_search_skips_blocked_room() {
    let app = helpers::TestApp::new().await;
    app.block(RoomId(1), helpers::range("2050-01-01", "2050-01-10"))
        .await;

    let response = app
        .post_form(SEARCH, &[("start", "2050-01-03"), ("end", "2050-01-05")], None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let rooms = response.body["data"]["rooms"].as_array().cloned().unwrap_or_default();
    assert_eq!(rooms.len(), 1);
    assert_eq!(rooms[0]["id"], 2);
}

#[tokio::test]
async fn test_search_without_availability_redirects_back() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();
    let stay = helpers::range("2050-01-01", "2050-01-10");
    app.block(RoomId(1), stay).await;
    app.block(RoomId(2), stay).await;

    let response = app
        .post_form(SEARCH, &[("start", "2050-01-02"), ("end", "2050-01-03")], Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some(SEARCH));

    let page = app.get(SEARCH, Some(&token)).await;
    assert_eq!(page.body["error"], "No availability");
}

#[tokio::test]
async fn test_departure_on_arrival_of_existing_stay_is_free() {
    let app = helpers::TestApp::new().await;
    let stay = helpers::range("2050-01-05", "2050-01-10");
    app.block(RoomId(1), stay).await;
    app.block(RoomId(2), stay).await;

    let response = app
        .post_form(SEARCH, &[("start", "2050-01-01"), ("end", "2050-01-05")], None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["rooms"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_search_rejects_bad_input() {
    let app = helpers::TestApp::new().await;

    let cases: [&[(&str, &str)]; 4] = [
        &[("start", "invalid"), ("end", "2050-01-02")],
        &[("start", "2050-01-01"), ("end", "invalid")],
        &[("start", "2050-01-05"), ("end", "2050-01-01")],
        &[("start", "2050-01-01")],
    ];

    for fields in cases {
        let response = app.post_form(SEARCH, fields, None).await;
        assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT, "{fields:?}");
        assert_eq!(response.location.as_deref(), Some("/"));
    }
}

#[tokio::test]
async fn test_search_without_body_restarts() {
    let app = helpers::TestApp::new().await;

    let response = app.request("POST", SEARCH, None, None).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_search_store_failure_restarts_with_error() {
    let app = helpers::TestApp::with_faults(FaultPlan::none().fail_searches()).await;
    let token = app.new_session();

    let response = app
        .post_form(SEARCH, &[("start", "2050-01-01"), ("end", "2050-01-02")], Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);

    let home = app.get("/", Some(&token)).await;
    assert_eq!(home.body["error"], "Can't get availability for rooms");
}

#[tokio::test]
async fn test_restart_after_failed_post_lands_on_home() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();
    let fields = [("start", "2050-01-05"), ("end", "2050-01-01")];

    let response = app.post_form(SEARCH, &fields, Some(&token)).await;
    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    let location = response.location.expect("restart location");

    // A browser repeats the POST, body included, against the new location.
    let home = app.post_form(&location, &fields, Some(&token)).await;
    assert_eq!(home.status, StatusCode::OK);
    assert_eq!(home.page(), Some("home.page"));
    assert!(home.body["error"].is_string());
}

#[tokio::test]
async fn test_json_room_available() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post_form(
            JSON,
            &[("start", "2050-01-01"), ("end", "2050-01-02"), ("room_id", "1")],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["ok"], true);
    assert_eq!(response.body["room_id"], "1");
    assert_eq!(response.body["start_date"], "2050-01-01");
    assert_eq!(response.body["end_date"], "2050-01-02");
}

#[tokio::test]
async fn test_json_room_unavailable() {
    let app = helpers::TestApp::new().await;
    app.block(RoomId(1), helpers::range("2050-01-01", "2050-01-03"))
        .await;

    let response = app
        .post_form(
            JSON,
            &[("start", "2050-01-02"), ("end", "2050-01-04"), ("room_id", "1")],
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["ok"], false);
    assert_eq!(response.body["message"], "");
}

#[tokio::test]
async fn test_json_bad_input() {
    let app = helpers::TestApp::new().await;

    let missing = app.request("POST", JSON, None, None).await;
    assert_eq!(missing.status, StatusCode::OK);
    assert_eq!(missing.body["ok"], false);
    assert_eq!(missing.body["message"], "Internal server error");

    let garbage = app
        .post_form(
            JSON,
            &[("start", "2050-01-01"), ("end", "2050-01-02"), ("room_id", "x")],
            None,
        )
        .await;
    assert_eq!(garbage.body["ok"], false);
    assert_eq!(garbage.body["message"], "Internal server error");
}

#[tokio::test]
async fn test_json_store_failure() {
    let app = helpers::TestApp::with_faults(FaultPlan::none().fail_searches()).await;

    let response = app
        .post_form(
            JSON,
            &[("start", "2050-01-01"), ("end", "2050-01-02"), ("room_id", "1")],
            None,
        )
        .await;

    assert_eq!(response.body["ok"], false);
    assert_eq!(response.body["message"], "Error querying database");
}
