//! Login, registration, logout and profile flows.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use sankalp_integration_tests::{ADMIN_EMAIL, TestApp, fixtures};

#[tokio::test]
async fn test_signed_out_getstarted_shows_login() {
    let app = TestApp::spawn().await;

    let res = app.get("/getstarted").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("action=\"/getstarted/login\""));
    assert!(!res.body.contains("action=\"/getstarted/register\""));

    let register = app.get("/getstarted?mode=register").await;
    assert!(register.body.contains("action=\"/getstarted/register\""));
}

#[tokio::test]
async fn test_admin_login_never_calls_backend() {
    let app = TestApp::spawn().await;
    Mock::given(path("/api/login"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&app.backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/admin-check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::registrations()))
        .mount(&app.backend)
        .await;

    let res = app.login_admin().await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), Some("/getstarted"));
    assert!(app.has_session());

    let dashboard = app.get("/getstarted").await;
    assert_eq!(dashboard.status, StatusCode::OK);
    assert!(dashboard.body.contains("Admin dashboard"));
    assert!(dashboard.body.contains("asha@example.com"));
    assert!(dashboard.body.contains("4/3/2026"));
    assert!(dashboard.body.contains("<dd data-stat=\"awaiting\">1</dd>"));
}

#[tokio::test]
async fn test_admin_email_with_wrong_password_goes_to_backend() {
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .expect(1)
        .mount(&app.backend)
        .await;

    let res = app
        .post_form(
            "/getstarted/login",
            &[("email", ADMIN_EMAIL), ("password", "not-the-password")],
        )
        .await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);

    let page = app.get("/getstarted").await;
    assert!(page.body.contains("Invalid credentials"));
    assert!(page.body.contains("action=\"/getstarted/login\""));
}

#[tokio::test]
async fn test_student_login_shows_catalog() {
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({ "email": "asha@example.com", "password": "student-pass" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::student("asha@example.com")))
        .expect(1)
        .mount(&app.backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/courses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::courses()))
        .mount(&app.backend)
        .await;

    app.login_student("asha@example.com").await;
    let res = app.get("/getstarted").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Welcome, Asha"));
    assert!(res.body.contains("href=\"/getstarted/courses/1\""));
    assert!(res.body.contains("href=\"/getstarted/courses/2\""));
    assert!(res.body.contains("\u{20b9}4999"));
    assert!(res.body.contains("My Courses"));
}

#[tokio::test]
async fn test_catalog_failure_keeps_dashboard_up() {
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::student("asha@example.com")))
        .mount(&app.backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/courses"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.backend)
        .await;

    app.login_student("asha@example.com").await;
    let res = app.get("/getstarted").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("load the course catalog"));
}

#[tokio::test]
async fn test_register_does_not_sign_in() {
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/api/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "userId": 42 })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let res = app
        .post_form(
            "/getstarted/register",
            &[
                ("name", "Asha Verma"),
                ("email", "asha@example.com"),
                ("phone", "9876543210"),
                ("password", "student-pass"),
            ],
        )
        .await;
    assert_eq!(res.location(), Some("/getstarted"));

    let page = app.get("/getstarted").await;
    assert!(page.body.contains("Registration successful!"));
    assert!(page.body.contains("action=\"/getstarted/login\""));
}

#[tokio::test]
async fn test_register_rejects_blank_fields_locally() {
    let app = TestApp::spawn().await;
    Mock::given(path("/api/register"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&app.backend)
        .await;

    let res = app
        .post_form(
            "/getstarted/register",
            &[("name", "Asha"), ("email", "asha@example.com"), ("phone", ""), ("password", "x")],
        )
        .await;
    assert_eq!(res.location(), Some("/getstarted?mode=register"));

    let page = app.get("/getstarted?mode=register").await;
    assert!(page.body.contains("All fields are required"));
}

#[tokio::test]
async fn test_logout_ends_session() {
    let app = TestApp::spawn().await;
    Mock::given(method("GET"))
        .and(path("/api/admin-check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .mount(&app.backend)
        .await;

    app.login_admin().await;
    assert!(app.get("/getstarted").await.body.contains("Admin dashboard"));

    let res = app.post_form("/getstarted/logout", &[]).await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);

    let page = app.get("/getstarted").await;
    assert!(page.body.contains("action=\"/getstarted/login\""));
    assert_eq!(
        app.get("/getstarted/profile").await.location(),
        Some("/getstarted")
    );
}

#[tokio::test]
async fn test_logout_without_session_still_redirects() {
    let app = TestApp::spawn().await;
    assert!(!app.has_session());

    let res = app.post_form("/getstarted/logout", &[]).await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), Some("/getstarted"));
    assert!(!app.has_session());
    let page = app.get("/getstarted").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("action=\"/getstarted/login\""));
}

#[tokio::test]
async fn test_profile_update_refreshes_session() {
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::student("asha@example.com")))
        .mount(&app.backend)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/update-profile"))
        .and(body_json(json!({
            "originalEmail": "asha@example.com",
            "name": "Asha V",
            "email": "asha.v@example.com",
            "phone": "9000000000"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.backend)
        .await;

    app.login_student("asha@example.com").await;
    let res = app
        .post_form(
            "/getstarted/profile",
            &[("name", "Asha V"), ("email", "asha.v@example.com"), ("phone", "9000000000")],
        )
        .await;
    assert_eq!(res.location(), Some("/getstarted/profile"));

    let page = app.get("/getstarted/profile").await;
    assert!(page.body.contains("Profile updated successfully"));
    assert!(page.body.contains("value=\"asha.v@example.com\""));
    assert!(page.body.contains("noindex, nofollow"));
}
