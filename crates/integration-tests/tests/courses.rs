//! Course pages, transaction submission and video playback.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use sankalp_integration_tests::{TestApp, fixtures};

const STUDENT: &str = "asha@example.com";

/// A signed-in student whose catalog request answers with `catalog`.
async fn student_app_with(catalog: ResponseTemplate) -> TestApp {
    let app = TestApp::spawn().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::student(STUDENT)))
        .mount(&app.backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/courses"))
        .respond_with(catalog)
        .mount(&app.backend)
        .await;
    app.login_student(STUDENT).await;
    app
}

/// A signed-in student with the catalog mocked.
async fn student_app() -> TestApp {
    student_app_with(ResponseTemplate::new(200).set_body_json(fixtures::courses())).await
}

async fn mock_pending_check(app: &TestApp, value: serde_json::Value) {
    Mock::given(method("POST"))
        .and(path("/api/pending-check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "value": value })))
        .mount(&app.backend)
        .await;
}

// =============================================================================
// Course views
// =============================================================================

#[tokio::test]
async fn test_course_requires_login() {
    let app = TestApp::spawn().await;

    let res = app.get("/getstarted/courses/1").await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), Some("/getstarted"));
}

#[tokio::test]
async fn test_unregistered_student_sees_payment_form() {
    let app = student_app().await;
    // A string flag is not conclusive, so the access check decides.
    mock_pending_check(&app, json!("1")).await;
    Mock::given(method("POST"))
        .and(path("/api/check-course-access"))
        .and(body_json(json!({ "email": STUDENT, "courseId": 1 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "hasAccess": false })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let res = app.get("/getstarted/courses/1").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Full Stack Web Development"));
    assert!(res.body.contains("src=\"/static/images/payment-qr.png\""));
    assert!(res.body.contains("action=\"/getstarted/courses/1/register\""));
}

#[tokio::test]
async fn test_pending_student_sees_review_notice() {
    let app = student_app().await;
    mock_pending_check(&app, json!(0)).await;

    let res = app.get("/getstarted/courses/1").await;

    assert!(res.body.contains("Registration Under Review"));
    assert!(!res.body.contains("name=\"transaction_id\""));
}

#[tokio::test]
async fn test_approved_student_sees_modules_in_day_order() {
    let app = student_app().await;
    mock_pending_check(&app, json!(1)).await;
    Mock::given(method("GET"))
        .and(path("/api/course-modules/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::modules()))
        .mount(&app.backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/module-materials/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::materials()))
        .mount(&app.backend)
        .await;

    let res = app.get("/getstarted/courses/1").await;

    let day1 = res.body.find("Day 1: HTML and CSS").unwrap();
    let day2 = res.body.find("Day 2: JavaScript Basics").unwrap();
    assert!(day1 < day2);
    assert!(res.body.contains("Slides: Semantic HTML"));
    assert!(res.body.contains("No materials available for this module."));
    assert!(res.body.contains("data-video-module=\"12\""));
}

#[tokio::test]
async fn test_materials_failure_keeps_modules_with_notice() {
    let app = student_app().await;
    mock_pending_check(&app, json!(1)).await;
    Mock::given(method("GET"))
        .and(path("/api/course-modules/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::modules()))
        .mount(&app.backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/module-materials/1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.backend)
        .await;

    let res = app.get("/getstarted/courses/1").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Day 1: HTML and CSS"));
    assert!(res.body.contains("data-video-module=\"11\""));
    assert!(res.body.contains("Course materials couldn"));
    assert!(!res.body.contains("No materials available for this module."));
}

#[tokio::test]
async fn test_modules_failure_renders_notice() {
    let app = student_app().await;
    mock_pending_check(&app, json!(1)).await;
    Mock::given(method("GET"))
        .and(path("/api/course-modules/1"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&app.backend)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/module-materials/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::materials()))
        .expect(0)
        .mount(&app.backend)
        .await;

    let res = app.get("/getstarted/courses/1").await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Full Stack Web Development"));
    assert!(res.body.contains("load the course modules"));
    assert!(!res.body.contains("data-video-module"));
}

#[tokio::test]
async fn test_catalog_failure_returns_to_dashboard() {
    let app = student_app_with(ResponseTemplate::new(500)).await;

    let res = app.get("/getstarted/courses/1").await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), Some("/getstarted"));
    let dashboard = app.get("/getstarted").await;
    assert_eq!(dashboard.status, StatusCode::OK);
    assert!(dashboard.body.contains("load the course catalog"));
}

#[tokio::test]
async fn test_unknown_course_returns_to_dashboard() {
    let app = student_app().await;

    let res = app.get("/getstarted/courses/99").await;

    assert_eq!(res.location(), Some("/getstarted"));
    let dashboard = app.get("/getstarted").await;
    assert!(dashboard.body.contains("no longer available"));
}

// =============================================================================
// Transaction submission
// =============================================================================

#[tokio::test]
async fn test_transaction_submission_moves_to_pending() {
    let app = student_app().await;
    Mock::given(method("POST"))
        .and(path("/api/pending"))
        .and(body_json(json!({
            "name": "Asha Verma",
            "email": STUDENT,
            "transid": "UPI998877",
            "courseName": "Full Stack Web Development",
            "amt": 4999,
            "courseId": 1
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "ok" })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let res = app
        .post_form("/getstarted/courses/1/register", &[("transaction_id", " UPI998877 ")])
        .await;

    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Registration Under Review"));
}

#[tokio::test]
async fn test_blank_transaction_id_is_refused_locally() {
    let app = student_app().await;
    Mock::given(path("/api/pending"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend)
        .await;

    let res = app
        .post_form("/getstarted/courses/1/register", &[("transaction_id", "   ")])
        .await;

    assert!(res.body.contains("Transaction ID is required"));
    assert!(res.body.contains("name=\"transaction_id\""));
}

#[tokio::test]
async fn test_failed_submission_keeps_entered_id() {
    let app = student_app().await;
    Mock::given(method("POST"))
        .and(path("/api/pending"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&app.backend)
        .await;

    let res = app
        .post_form("/getstarted/courses/1/register", &[("transaction_id", "UPI112233")])
        .await;

    assert!(res.body.contains("Failed to register for the course"));
    assert!(res.body.contains("value=\"UPI112233\""));
    assert!(!res.body.contains("Registration Under Review"));
}

#[tokio::test]
async fn test_catalog_failure_on_submission_flashes_and_submits_nothing() {
    let app = student_app_with(ResponseTemplate::new(500)).await;
    Mock::given(path("/api/pending"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&app.backend)
        .await;

    let res = app
        .post_form("/getstarted/courses/1/register", &[("transaction_id", "UPI445566")])
        .await;

    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location(), Some("/getstarted/courses/1"));
    let dashboard = app.get("/getstarted").await;
    assert!(dashboard.body.contains("Failed to register for the course"));
}

// =============================================================================
// Video playback
// =============================================================================

#[tokio::test]
async fn test_video_returns_playback_url() {
    let app = student_app().await;
    Mock::given(method("POST"))
        .and(path("/api/generate-video-token"))
        .and(body_json(json!({ "email": STUDENT, "moduleId": 11 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "token": "tok+1" })))
        .expect(1)
        .mount(&app.backend)
        .await;

    let res = app.post_form_json("/getstarted/modules/11/video", &[]).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(
        res.json()["url"],
        format!("{}/api/secure-video/11?token=tok%2B1", app.backend.uri())
    );
}

#[tokio::test]
async fn test_video_without_token_opens_nothing() {
    let app = student_app().await;
    Mock::given(method("POST"))
        .and(path("/api/generate-video-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&app.backend)
        .await;

    let res = app.post_form_json("/getstarted/modules/11/video", &[]).await;

    assert_eq!(res.status, StatusCode::BAD_GATEWAY);
    let body = res.json();
    assert!(body.get("url").is_none());
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_video_requires_session() {
    let app = TestApp::spawn().await;

    let res = app.post_form_json("/getstarted/modules/11/video", &[]).await;

    assert_eq!(res.status, StatusCode::UNAUTHORIZED);
}
