//! Integration tests for the anti-forgery check on form posts.

mod helpers;

use http::StatusCode;

const SEARCH: &str = "/search-availability";
const STAY: &str = "start=2050-01-01&end=2050-01-02";

#[tokio::test]
async fn test_pages_carry_a_stable_token() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();

    let first = app.get("/", Some(&token)).await;
    let second = app.get(SEARCH, Some(&token)).await;

    let csrf = first.body["csrf_token"].as_str().expect("csrf token");
    assert!(!csrf.is_empty());
    assert_eq!(second.body["csrf_token"].as_str(), Some(csrf));

    let other = app.get("/", Some(&app.new_session())).await;
    assert_ne!(other.body["csrf_token"].as_str(), Some(csrf));
}

#[tokio::test]
async fn test_post_without_token_is_rejected() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();
    app.get(SEARCH, Some(&token)).await;

    let response = app
        .send("POST", SEARCH, Some(STAY.to_string()), Some(&token), None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");
    let held: Option<serde_json::Value> = app
        .session(&token)
        .get("reservation")
        .await
        .expect("session read");
    assert!(held.is_none());
}

#[tokio::test]
async fn test_post_before_any_page_is_rejected() {
    let app = helpers::TestApp::new().await;

    let response = app
        .send("POST", SEARCH, Some(STAY.to_string()), None, None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_token_from_form_field_is_accepted() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();
    let page = app.get(SEARCH, Some(&token)).await;
    let csrf = page.body["csrf_token"].as_str().expect("csrf token");

    let body = format!("{STAY}&csrf_token={csrf}");
    let response = app
        .send("POST", SEARCH, Some(body), Some(&token), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.page(), Some("choose-room.page"));
}

#[tokio::test]
async fn test_token_of_another_session_is_rejected() {
    let app = helpers::TestApp::new().await;
    let victim = app.new_session();
    let attacker = app.new_session();
    let stolen = app.csrf_token(&attacker).await;
    app.csrf_token(&victim).await;

    let body = format!("{STAY}&csrf_token={stolen}");
    let in_form = app
        .send("POST", SEARCH, Some(body), Some(&victim), None)
        .await;
    assert_eq!(in_form.status, StatusCode::BAD_REQUEST);

    let in_header = app
        .send("POST", SEARCH, Some(STAY.to_string()), Some(&victim), Some(&stolen))
        .await;
    assert_eq!(in_header.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_json_endpoint_requires_token() {
    let app = helpers::TestApp::new().await;
    let token = app.new_session();
    let form = format!("{STAY}&room_id=1");

    let rejected = app
        .send("POST", "/search-availability-json", Some(form.clone()), Some(&token), None)
        .await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);

    let csrf = app.csrf_token(&token).await;
    let accepted = app
        .send("POST", "/search-availability-json", Some(form), Some(&token), Some(&csrf))
        .await;
    assert_eq!(accepted.status, StatusCode::OK);
    assert_eq!(accepted.body["ok"], true);
}

#[tokio::test]
async fn test_get_needs_no_token() {
    let app = helpers::TestApp::new().await;

    let response = app.send("GET", "/about", None, None, None).await;

    assert_eq!(response.status, StatusCode::OK);
}
