//! Integration tests for the reservation flow.

mod helpers;

use http::StatusCode;

use bookings_core::types::RoomId;
use bookings_database::FaultPlan;
use bookings_entity::ProvisionalReservation;

const GUEST: [(&str, &str); 4] = [
    ("first_name", "John"),
    ("last_name", "Smith"),
    ("email", "john@smith.com"),
    ("phone", "555-555-5555"),
];

fn held(room_id: i32) -> ProvisionalReservation {
    ProvisionalReservation::for_room(RoomId(room_id), helpers::range("2050-01-01", "2050-01-02"))
}

#[tokio::test]
async fn test_choose_room_after_search() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();
    app.hold(&token, &ProvisionalReservation::for_range(helpers::range("2050-01-01", "2050-01-02")))
        .await;

    let response = app.get("/choose-room/1", Some(&token)).await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/make-reservation"));

    let held: ProvisionalReservation = app
        .session(&token)
        .get("reservation")
        .await
        .expect("session read")
        .expect("held reservation");
    assert_eq!(held.room_id, Some(RoomId(1)));
}

#[tokio::test]
async fn test_choose_room_without_search_restarts() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();

    let response = app.get("/choose-room/1", Some(&token)).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.location.as_deref(), Some("/"));

    let home = app.get("/", Some(&token)).await;
    assert_eq!(home.body["error"], "Can't get reservation from session");
}

#[tokio::test]
async fn test_choose_room_with_bad_id_restarts() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();
    app.hold(&token, &held(1)).await;

    let response = app.get("/choose-room/invalid", Some(&token)).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_book_room_holds_room_and_dates() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();

    let response = app
        .get("/book-room?id=1&s=2050-01-01&e=2050-01-02", Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/make-reservation"));

    let held: ProvisionalReservation = app
        .session(&token)
        .get("reservation")
        .await
        .expect("session read")
        .expect("held reservation");
    assert_eq!(held.room_id, Some(RoomId(1)));
    assert_eq!(held.room.map(|r| r.room_name), Some("General's Quarters".to_string()));
}

#[tokio::test]
async fn test_book_room_rejects_bad_query() {
    let app = helpers::TestApp::new().await;

    for path in [
        "/book-room",
        "/book-room?id=x&s=2050-01-01&e=2050-01-02",
        "/book-room?id=1&s=bad&e=2050-01-02",
        "/book-room?id=1&s=2050-01-02&e=2050-01-01",
        "/book-room?id=99&s=2050-01-01&e=2050-01-02",
    ] {
        let response = app.get(path, None).await;
        assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT, "GET {path}");
    }
}

#[tokio::test]
async fn test_make_reservation_form() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();
    app.hold(&token, &held(1)).await;

    let response = app.get("/make-reservation", Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.page(), Some("make-reservation.page"));
    assert_eq!(
        response.body["data"]["reservation"]["room"]["room_name"],
        "General's Quarters"
    );
    assert_eq!(response.body["data"]["start_date"], "2050-01-01");
    assert_eq!(response.body["data"]["end_date"], "2050-01-02");
}

#[tokio::test]
async fn test_make_reservation_without_session_restarts() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();

    let response = app.get("/make-reservation", Some(&token)).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_make_reservation_unknown_room_restarts() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();
    app.hold(&token, &held(100)).await;

    let response = app.get("/make-reservation", Some(&token)).await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    let home = app.get("/", Some(&token)).await;
    assert_eq!(home.body["error"], "Can't find room");
}

#[tokio::test]
async fn test_post_reservation_commits_and_shows_summary_once() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();
    app.hold(&token, &held(1)).await;

    let response = app
        .post_form("/make-reservation", &GUEST, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/reservation-summary"));
    assert_eq!(app.store.reservation_count(), 1);
    assert_eq!(app.store.restriction_count(), 1);

    let summary = app.get("/reservation-summary", Some(&token)).await;
    assert_eq!(summary.status, StatusCode::OK);
    assert_eq!(summary.page(), Some("reservation-summary.page"));
    assert_eq!(summary.flash_text(), Some("Reservation confirmed"));
    assert_eq!(summary.body["data"]["reservation"]["first_name"], "John");
    assert_eq!(summary.body["data"]["start_date"], "2050-01-01");

    let again = app.get("/reservation-summary", Some(&token)).await;
    assert_eq!(again.status, StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_committed_stay_blocks_the_room() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();
    app.hold(&token, &held(1)).await;
    app.post_form("/make-reservation", &GUEST, Some(&token))
        .await;

    let response = app
        .post_form(
            "/search-availability-json",
            &[("start", "2050-01-01"), ("end", "2050-01-02"), ("room_id", "1")],
            None,
        )
        .await;

    assert_eq!(response.body["ok"], false);
}

#[tokio::test]
async fn test_post_reservation_invalid_details_redisplays_form() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();
    app.hold(&token, &held(1)).await;

    let response = app
        .post_form(
            "/make-reservation",
            &[
                ("first_name", "J"),
                ("last_name", "Smith"),
                ("email", "not-an-email"),
                ("phone", ""),
            ],
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.page(), Some("make-reservation.page"));
    let errors = &response.body["data"]["errors"];
    assert_eq!(
        errors["first_name"][0],
        "This field must be at least 3 characters long"
    );
    assert_eq!(errors["email"][0], "Invalid email address");
    assert_eq!(errors["phone"][0], "This field cannot be blank");
    assert!(errors.get("last_name").is_none());
    assert_eq!(response.body["data"]["form"]["last_name"], "Smith");
    assert_eq!(app.store.reservation_count(), 0);
}

#[tokio::test]
async fn test_post_reservation_insert_failure_restarts() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();
    app.hold(&token, &held(2)).await;

    let response = app
        .post_form("/make-reservation", &GUEST, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(app.store.reservation_count(), 0);

    let home = app.get("/", Some(&token)).await;
    assert_eq!(home.body["error"], "Can't save the reservation");
}

#[tokio::test]
async fn test_post_reservation_restriction_failure_leaves_nothing() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();
    app.hold(&token, &held(1000)).await;

    let response = app
        .post_form("/make-reservation", &GUEST, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(app.store.reservation_count(), 0);
    assert_eq!(app.store.restriction_count(), 0);
}

#[tokio::test]
async fn test_post_reservation_scripted_failure() {
    let app = helpers::TestApp::with_faults(FaultPlan::none().fail_reservation_insert(RoomId(1))).await;
    let token = app.new_session();
    app.hold(&token, &held(1)).await;

    let response = app
        .post_form("/make-reservation", &GUEST, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);

    let held: Option<ProvisionalReservation> = app
        .session(&token)
        .get("reservation")
        .await
        .expect("session read");
    assert!(held.is_some(), "failed commit keeps the held reservation");
}

#[tokio::test]
async fn test_post_reservation_without_session_or_body_restarts() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();

    let no_session = app
        .post_form("/make-reservation", &GUEST, Some(&token))
        .await;
    assert_eq!(no_session.status, StatusCode::TEMPORARY_REDIRECT);

    app.hold(&token, &held(1)).await;
    let no_body = app
        .request("POST", "/make-reservation", None, Some(&token))
        .await;
    assert_eq!(no_body.status, StatusCode::TEMPORARY_REDIRECT);
}

#[tokio::test]
async fn test_post_reservation_before_choosing_room_restarts() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();
    app.hold(&token, &ProvisionalReservation::for_range(helpers::range("2050-01-01", "2050-01-02")))
        .await;

    let response = app
        .post_form("/make-reservation", &GUEST, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::TEMPORARY_REDIRECT);
    let home = app.get("/", Some(&token)).await;
    assert_eq!(home.body["error"], "Please choose a room first");
}

#[tokio::test]
async fn test_full_flow_from_search_to_summary() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();

    let search = app
        .post_form(
            "/search-availability",
            &[("start", "2050-02-01"), ("end", "2050-02-04")],
            Some(&token),
        )
        .await;
    assert_eq!(search.status, StatusCode::OK);

    let choose = app.get("/choose-room/1", Some(&token)).await;
    assert_eq!(choose.status, StatusCode::SEE_OTHER);

    let form = app.get("/make-reservation", Some(&token)).await;
    assert_eq!(form.status, StatusCode::OK);

    let submit = app
        .post_form("/make-reservation", &GUEST, Some(&token))
        .await;
    assert_eq!(submit.status, StatusCode::SEE_OTHER);

    let summary = app.get("/reservation-summary", Some(&token)).await;
    assert_eq!(summary.status, StatusCode::OK);
    assert_eq!(summary.body["data"]["end_date"], "2050-02-04");
}

#[tokio::test]
async fn test_summary_names_room_when_form_page_was_skipped() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();
    app.hold(&token, &held(1)).await;

    let submit = app
        .post_form("/make-reservation", &GUEST, Some(&token))
        .await;
    assert_eq!(submit.status, StatusCode::SEE_OTHER);

    let summary = app.get("/reservation-summary", Some(&token)).await;
    assert_eq!(summary.status, StatusCode::OK);
    assert_eq!(
        summary.body["data"]["reservation"]["room"]["room_name"],
        "General's Quarters"
    );
}

#[tokio::test]
async fn test_empty_search_discards_chosen_room() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();

    let first = app
        .post_form(
            "/search-availability",
            &[("start", "2050-01-01"), ("end", "2050-01-02")],
            Some(&token),
        )
        .await;
    assert_eq!(first.status, StatusCode::OK);
    app.get("/choose-room/1", Some(&token)).await;

    let june = helpers::range("2050-06-01", "2050-06-02");
    app.block(RoomId(1), june).await;
    app.block(RoomId(2), june).await;
    let second = app
        .post_form(
            "/search-availability",
            &[("start", "2050-06-01"), ("end", "2050-06-02")],
            Some(&token),
        )
        .await;
    assert_eq!(second.status, StatusCode::SEE_OTHER);

    let form = app.get("/make-reservation", Some(&token)).await;
    assert_eq!(form.status, StatusCode::TEMPORARY_REDIRECT);
}
