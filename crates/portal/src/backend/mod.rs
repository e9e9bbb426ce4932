//! Client for the course backend's JSON API.
//!
//! # Architecture
//!
//! - One method per backend endpoint, no retries and no backoff
//! - A per-request timeout from configuration
//! - The course list is cached in `moka` for 60 seconds; creating a course
//!   invalidates it. Modules and materials are never cached
//! - Non-success statuses become [`BackendError::Api`] carrying the backend's
//!   `message` field when it sent one
//!
//! # Example
//!
//! ```rust,ignore
//! use sankalp_portal::backend::BackendClient;
//!
//! let client = BackendClient::new(&config.backend)?;
//! let courses = client.courses().await?;
//! let token = client.video_token("a@x.com", ModuleId::new(4)).await?;
//! let url = client.playback_url(ModuleId::new(4), &token);
//! ```

mod cache;
pub mod types;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use reqwest::{Method, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use sankalp_core::{ApprovalStatus, CourseId, ModuleId};

use crate::config::BackendConfig;

use cache::CacheKey;
use types::{
    AdminCheckResponse, ApproveRequest, BackendUser, Course, CourseAccessResponse,
    CourseStatusRequest, CreatedCourse, ErrorBody, LoginRequest, LoginResponse, Material, Module,
    NewCourse, PendingCheckResponse, PendingRegistration, RegisterRequest, RegisterResponse,
    RegistrationRequest, UpdateProfileRequest, VideoTokenRequest, VideoTokenResponse,
};

/// How long the course list stays cached.
const CATALOG_TTL: Duration = Duration::from_secs(60);

/// Errors that can occur when talking to the course backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP request failed (connection refused, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("API error: {status}{}", message.as_deref().map(|m| format!(" - {m}")).unwrap_or_default())]
    Api {
        status: u16,
        message: Option<String>,
    },

    /// Backend answered with a body we could not decode.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A successful response lacked a field the caller needs.
    #[error("Missing field in backend response: {0}")]
    MissingField(&'static str),
}

impl BackendError {
    /// The backend's own error message, if it sent one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }

    /// The backend's message, or `fallback` when there is none.
    #[must_use]
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message().unwrap_or(fallback).to_string()
    }

    /// True when the backend could not be reached at all.
    #[must_use]
    pub const fn is_unreachable(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}

/// Client for the course backend.
///
/// Cheaply cloneable; clones share the connection pool and cache.
#[derive(Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

struct BackendClientInner {
    client: reqwest::Client,
    base_url: String,
    cache: Cache<CacheKey, Arc<Vec<Course>>>,
}

impl BackendClient {
    /// Create a new backend client.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &BackendConfig) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("sankalp-portal/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(CATALOG_TTL)
            .build();

        Ok(Self {
            inner: Arc::new(BackendClientInner {
                client,
                base_url: config.url.as_str().trim_end_matches('/').to_string(),
                cache,
            }),
        })
    }

    /// Backend origin without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.inner.base_url)
    }

    /// Send a request and turn non-success statuses into [`BackendError::Api`].
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<reqwest::Response, BackendError> {
        let mut request = self.inner.client.request(method, self.url(path));
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|body| body.message);
            debug!(status = status.as_u16(), ?message, "Backend returned error status");
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    /// Decode a JSON body.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, BackendError> {
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| BackendError::Parse(e.to_string()))
    }

    /// Decode a JSON body, treating an empty body as the default value.
    async fn decode_or_default<T: DeserializeOwned + Default>(
        response: reqwest::Response,
    ) -> Result<T, BackendError> {
        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(T::default());
        }
        serde_json::from_str(&text).map_err(|e| BackendError::Parse(e.to_string()))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let response = self.send::<()>(Method::GET, path, None).await?;
        Self::decode(response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned + Default>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BackendError> {
        let response = self.send(Method::POST, path, Some(body)).await?;
        Self::decode_or_default(response).await
    }

    async fn post_ack<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<(), BackendError> {
        self.send(Method::POST, path, Some(body)).await?;
        Ok(())
    }

    // =========================================================================
    // Accounts
    // =========================================================================

    /// Log a student in.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Api` with the backend's message on rejection.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<BackendUser, BackendError> {
        let response = self
            .send(Method::POST, "/api/login", Some(&LoginRequest { email, password }))
            .await?;
        let body: LoginResponse = Self::decode(response).await?;
        Ok(body.user)
    }

    /// Register a new student account.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Api` with the backend's message on rejection.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(
        &self,
        request: &RegisterRequest<'_>,
    ) -> Result<RegisterResponse, BackendError> {
        self.post_json("/api/register", request).await
    }

    /// Update a student's name, email and phone.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Api` with the backend's message on rejection.
    #[instrument(skip(self, request), fields(original_email = %request.original_email))]
    pub async fn update_profile(
        &self,
        request: &UpdateProfileRequest<'_>,
    ) -> Result<(), BackendError> {
        self.post_ack("/api/update-profile", request).await
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// List all courses.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a course list.
    #[instrument(skip(self))]
    pub async fn courses(&self) -> Result<Arc<Vec<Course>>, BackendError> {
        if let Some(courses) = self.inner.cache.get(&CacheKey::Courses).await {
            debug!("Cache hit for course list");
            return Ok(courses);
        }

        let courses: Arc<Vec<Course>> = Arc::new(self.get_json("/api/courses").await?);
        self.inner
            .cache
            .insert(CacheKey::Courses, Arc::clone(&courses))
            .await;
        Ok(courses)
    }

    /// Look up one course from the catalog.
    ///
    /// # Errors
    ///
    /// Returns an error if the course list cannot be fetched.
    pub async fn course(&self, id: CourseId) -> Result<Option<Course>, BackendError> {
        let courses = self.courses().await?;
        Ok(courses.iter().find(|course| course.id == id).cloned())
    }

    /// List the modules of a course.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a module list.
    #[instrument(skip(self))]
    pub async fn course_modules(&self, course_id: CourseId) -> Result<Vec<Module>, BackendError> {
        let mut modules: Vec<Module> = self
            .get_json(&format!("/api/course-modules/{course_id}"))
            .await?;
        modules.sort_by_key(|module| module.day);
        Ok(modules)
    }

    /// List the materials of every module in a course.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body is not a material list.
    #[instrument(skip(self))]
    pub async fn module_materials(
        &self,
        course_id: CourseId,
    ) -> Result<Vec<Material>, BackendError> {
        self.get_json(&format!("/api/module-materials/{course_id}"))
            .await
    }

    /// Create a course with its modules.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Api` with the backend's message on rejection.
    #[instrument(skip(self, course), fields(title = %course.title, modules = course.modules.len()))]
    pub async fn create_course(&self, course: &NewCourse) -> Result<CourseId, BackendError> {
        let response = self.send(Method::POST, "/api/courses", Some(course)).await?;
        let created: CreatedCourse = Self::decode(response).await?;
        self.invalidate_catalog().await;
        Ok(created.course_id)
    }

    /// Drop the cached course list.
    pub async fn invalidate_catalog(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }

    // =========================================================================
    // Registrations
    // =========================================================================

    /// Submit a payment transaction id for review.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend does not acknowledge the submission.
    #[instrument(skip(self, request), fields(email = %request.email, course_id = %request.course_id))]
    pub async fn submit_registration(
        &self,
        request: &RegistrationRequest<'_>,
    ) -> Result<(), BackendError> {
        self.post_ack("/api/pending", request).await
    }

    /// Ask whether a registration exists for this student and course.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn pending_check(
        &self,
        email: &str,
        course_id: CourseId,
    ) -> Result<PendingCheckResponse, BackendError> {
        self.post_json("/api/pending-check", &CourseStatusRequest { email, course_id })
            .await
    }

    /// Ask whether this student already has access to the course.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn course_access(&self, email: &str, course_id: CourseId) -> Result<bool, BackendError> {
        let body: CourseAccessResponse = self
            .post_json(
                "/api/check-course-access",
                &CourseStatusRequest { email, course_id },
            )
            .await?;
        Ok(body.has_access)
    }

    /// List submitted registrations for admin review.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    #[instrument(skip(self))]
    pub async fn pending_registrations(&self) -> Result<Vec<PendingRegistration>, BackendError> {
        let body: AdminCheckResponse = self.get_json("/api/admin-check").await?;
        Ok(body.data)
    }

    /// Approve every registration submitted under `email`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend does not acknowledge the approval.
    #[instrument(skip(self))]
    pub async fn approve(&self, email: &str) -> Result<(), BackendError> {
        self.post_ack(
            "/api/admin-approve",
            &ApproveRequest {
                value: ApprovalStatus::Approved.as_flag(),
                email,
            },
        )
        .await
    }

    // =========================================================================
    // Video access
    // =========================================================================

    /// Request a short-lived playback token for one module.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::MissingField` when the backend answers without a token.
    #[instrument(skip(self))]
    pub async fn video_token(&self, email: &str, module_id: ModuleId) -> Result<String, BackendError> {
        let body: VideoTokenResponse = self
            .post_json(
                "/api/generate-video-token",
                &VideoTokenRequest { email, module_id },
            )
            .await?;
        body.token.ok_or(BackendError::MissingField("token"))
    }

    /// URL of the backend's player for a module, authorised by `token`.
    #[must_use]
    pub fn playback_url(&self, module_id: ModuleId, token: &str) -> String {
        format!(
            "{}/api/secure-video/{module_id}?token={}",
            self.inner.base_url,
            urlencoding::encode(token)
        )
    }

    /// Check that the backend answers HTTP at all.
    ///
    /// Any response, including an error status, counts as reachable.
    ///
    /// # Errors
    ///
    /// Returns `BackendError::Http` if the backend cannot be reached.
    pub async fn ping(&self) -> Result<StatusCode, BackendError> {
        let response = self.inner.client.get(self.url("/")).send().await?;
        Ok(response.status())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> BackendClient {
        BackendClient::new(&BackendConfig {
            url: Url::parse(&server.uri()).unwrap(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_login_surfaces_server_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid password" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .login("a@x.com", "wrong")
            .await
            .unwrap_err();
        assert_eq!(err.server_message(), Some("Invalid password"));
        assert_eq!(err.user_message("Login failed"), "Invalid password");
    }

    #[tokio::test]
    async fn test_error_without_message_uses_fallback() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let err = client
            .register(&RegisterRequest {
                name: "Asha",
                email: "asha@x.com",
                phone: "9876543210",
                password: "pw",
            })
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::Api { status: 500, .. }));
        assert_eq!(err.user_message("Registration failed"), "Registration failed");
    }

    #[tokio::test]
    async fn test_course_list_is_cached_until_invalidated() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/courses"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 1, "title": "AR/VR", "price": 4999 }
            ])))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert_eq!(client.courses().await.unwrap().len(), 1);
        assert_eq!(client.courses().await.unwrap().len(), 1);
        client.invalidate_catalog().await;
        assert!(client.course(CourseId::new(1)).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_modules_come_back_in_day_order() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/course-modules/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "id": 12, "title": "Second", "day": 2 },
                { "id": 11, "title": "First", "day": "1" }
            ])))
            .mount(&server)
            .await;

        let modules = client_for(&server)
            .course_modules(CourseId::new(2))
            .await
            .unwrap();
        let titles: Vec<_> = modules.iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, ["First", "Second"]);
    }

    #[tokio::test]
    async fn test_materials_are_read_fresh_each_time() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/module-materials/2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(2)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.module_materials(CourseId::new(2)).await.unwrap();
        client.module_materials(CourseId::new(2)).await.unwrap();
    }

    #[tokio::test]
    async fn test_approve_sends_flag_and_email() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/admin-approve"))
            .and(body_json(json!({ "value": 1, "email": "a@x.com" })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        client_for(&server).approve("a@x.com").await.unwrap();
    }

    #[tokio::test]
    async fn test_video_token_missing_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/generate-video-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .video_token("a@x.com", ModuleId::new(4))
            .await
            .unwrap_err();
        assert!(matches!(err, BackendError::MissingField("token")));
    }

    #[test]
    fn test_playback_url_encodes_token() {
        let client = BackendClient::new(&BackendConfig {
            url: Url::parse("http://localhost:5000/").unwrap(),
            timeout: Duration::from_secs(1),
        })
        .unwrap();
        assert_eq!(
            client.playback_url(ModuleId::new(4), "a+b/c="),
            "http://localhost:5000/api/secure-video/4?token=a%2Bb%2Fc%3D"
        );
    }

    #[tokio::test]
    async fn test_unreachable_backend_is_http_error() {
        let client = BackendClient::new(&BackendConfig {
            url: Url::parse("http://127.0.0.1:9").unwrap(),
            timeout: Duration::from_secs(2),
        })
        .unwrap();
        let err = client.pending_registrations().await.unwrap_err();
        assert!(err.is_unreachable());
        assert_eq!(err.server_message(), None);
    }
}
