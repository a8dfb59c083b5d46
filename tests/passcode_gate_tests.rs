// SPDX-License-Identifier: MIT

//! Passcode gate cookie tests.
//!
//! Verify the gate cookie's attributes on entry and removal, and that the
//! gate actually opens once the cookie is presented.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
};
use serde_json::json;
use tower::ServiceExt;

mod common;

fn set_cookie_headers(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect()
}

fn passcode_request(passcode: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/auth/passcode")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "passcode": passcode }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_correct_passcode_sets_year_long_cookie() {
    let (app, state) = common::create_test_app();

    let response = app
        .oneshot(passcode_request(&state.config.passcode))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let cookies = set_cookie_headers(&response);
    let gate = cookies
        .iter()
        .find(|c| c.starts_with("junebug_authenticated=1"))
        .expect("gate cookie should be set");

    assert!(gate.contains("Max-Age=31536000"), "cookie: {gate}");
    assert!(gate.contains("HttpOnly"), "cookie: {gate}");
    assert!(gate.contains("SameSite=Lax"), "cookie: {gate}");
    assert!(gate.contains("Path=/"), "cookie: {gate}");
    // Test config uses an http frontend URL, so no Secure attribute
    assert!(!gate.contains("Secure"), "cookie: {gate}");
}

#[tokio::test]
async fn test_wrong_passcode_unauthorized_and_no_cookie() {
    let (app, _) = common::create_test_app();

    let response = app.oneshot(passcode_request("bad-dog")).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(set_cookie_headers(&response)
        .iter()
        .all(|c| !c.starts_with("junebug_authenticated=1")));
}

#[tokio::test]
async fn test_logout_removes_cookie() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/auth/logout")
                .header(header::COOKIE, "junebug_authenticated=1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let cookies = set_cookie_headers(&response);
    let removal = cookies
        .iter()
        .find(|c| c.starts_with("junebug_authenticated="))
        .expect("removal cookie should be set");

    assert!(removal.contains("Max-Age=0"), "cookie: {removal}");
    assert!(removal.contains("Path=/"), "cookie: {removal}");
}

#[tokio::test]
async fn test_gate_cookie_with_wrong_value_stays_closed() {
    let (app, _) = common::create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/activities")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::COOKIE, "junebug_authenticated=yes")
                .body(Body::from(
                    json!({
                        "activity_type": "meal",
                        "activity_time": "2024-06-01T09:30:00Z"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_reads_are_not_gated() {
    let (app, _) = common::create_test_app();

    // No cookie at all; the offline mock db means a 500, not a 401
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/activities")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
