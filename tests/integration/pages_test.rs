//! Integration tests for the static pages and health endpoint.

mod helpers;

use http::StatusCode;

#[tokio::test]
async fn test_pages_render() {
    let app = helpers::TestApp::new().await;

    let pages = [
        ("/", "home.page"),
        ("/about", "about.page"),
        ("/contact", "contact.page"),
        ("/generals-quarters", "generals.page"),
        ("/majors-suite", "majors.page"),
        ("/search-availability", "search-availability.page"),
    ];

    for (path, page) in pages {
        let response = app.get(path, None).await;
        assert_eq!(response.status, StatusCode::OK, "GET {path}");
        assert_eq!(response.page(), Some(page), "GET {path}");
    }
}

#[tokio::test]
async fn test_room_page_includes_room() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/majors-suite", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["room_id"], 2);
    assert_eq!(response.body["data"]["room"]["room_name"], "Major's Suite");
}

#[tokio::test]
async fn test_first_visit_issues_session_cookie() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/", None).await;
    let cookie = response.set_cookie.expect("session cookie");
    assert!(cookie.starts_with("bookings_session="));
    assert!(cookie.contains("HttpOnly"));

    let token = app.new_session();
    let response = app.get("/", Some(&token)).await;
    assert!(response.set_cookie.is_none());
}

#[tokio::test]
async fn test_malformed_session_token_is_replaced() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/", Some("not a token")).await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.set_cookie.is_some());
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/totally-non-existent", None).await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/api/health", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert_eq!(response.body["data"]["backend"], "memory");
    assert_eq!(response.body["data"]["database"], true);
    assert_eq!(response.body["data"]["cache"], true);
}
