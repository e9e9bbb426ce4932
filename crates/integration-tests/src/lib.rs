//! Test harness for the Sankalp portal.
//!
//! Each [`TestApp`] builds the full router (sessions, CSP, rate limits and
//! all) against its own `wiremock` backend. Requests go through
//! `tower::ServiceExt::oneshot`; the session cookie is carried between
//! requests like a browser would.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p sankalp-integration-tests
//! ```

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use secrecy::SecretString;
use serde_json::Value;
use tower::ServiceExt;
use url::Url;
use wiremock::MockServer;

use sankalp_core::Email;
use sankalp_portal::config::{AdminCredential, BackendConfig, FeatureFlags, PortalConfig};
use sankalp_portal::state::AppState;

pub const ADMIN_EMAIL: &str = "admin@sankalp.com";
pub const ADMIN_PASSWORD: &str = "Vq7#mZ2p!Lr9xT4w";
pub const BASE_URL: &str = "http://sankalp.test";

/// Gives every app its own client address so rate-limit buckets never mix.
static NEXT_CLIENT: AtomicU8 = AtomicU8::new(1);

/// A response with its body already read.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.header("location")
    }

    #[must_use]
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// The portal router wired to a mock backend.
pub struct TestApp {
    pub backend: MockServer,
    router: Router,
    client_ip: IpAddr,
    cookie: Mutex<Option<String>>,
}

impl TestApp {
    /// App with the default feature flags.
    pub async fn spawn() -> Self {
        Self::spawn_with(FeatureFlags::default()).await
    }

    /// App with custom feature flags.
    pub async fn spawn_with(features: FeatureFlags) -> Self {
        let backend = MockServer::start().await;
        let config = PortalConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            base_url: BASE_URL.to_string(),
            backend: BackendConfig {
                url: Url::parse(&backend.uri()).unwrap(),
                timeout: Duration::from_secs(5),
            },
            admin: AdminCredential {
                email: Email::parse(ADMIN_EMAIL).unwrap(),
                password: SecretString::from(ADMIN_PASSWORD),
            },
            features,
            payment_qr_url: Some("/static/images/payment-qr.png".to_string()),
            sentry_dsn: None,
            sentry_environment: None,
        };
        let router = sankalp_portal::app(AppState::new(config).unwrap());
        let n = NEXT_CLIENT.fetch_add(1, Ordering::Relaxed);

        Self {
            backend,
            router,
            client_ip: IpAddr::V4(Ipv4Addr::new(10, 0, 0, n)),
            cookie: Mutex::new(None),
        }
    }

    fn request(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header("x-forwarded-for", self.client_ip.to_string());
        if let Some(cookie) = self.cookie.lock().unwrap().as_deref() {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();

        if let Some(set_cookie) = headers.get(header::SET_COOKIE) {
            let pair = set_cookie
                .to_str()
                .unwrap()
                .split(';')
                .next()
                .unwrap_or_default()
                .to_string();
            let cleared = pair.ends_with('=');
            *self.cookie.lock().unwrap() = (!cleared).then_some(pair);
        }

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(self.request("GET", uri).body(Body::empty()).unwrap())
            .await
    }

    /// Form post, as the browser sends it.
    pub async fn post_form(&self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{k}={}", form_encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        self.send(
            self.request("POST", uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    /// Form post from the dashboard script, asking for JSON back.
    pub async fn post_form_json(&self, uri: &str, fields: &[(&str, &str)]) -> TestResponse {
        let body = fields
            .iter()
            .map(|(k, v)| format!("{k}={}", form_encode(v)))
            .collect::<Vec<_>>()
            .join("&");
        self.send(
            self.request("POST", uri)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .header(header::ACCEPT, "application/json")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    pub async fn login_admin(&self) -> TestResponse {
        self.post_form(
            "/getstarted/login",
            &[("email", ADMIN_EMAIL), ("password", ADMIN_PASSWORD)],
        )
        .await
    }

    /// Log in as a student; the caller mounts the `/api/login` mock.
    pub async fn login_student(&self, email: &str) -> TestResponse {
        self.post_form(
            "/getstarted/login",
            &[("email", email), ("password", "student-pass")],
        )
        .await
    }

    #[must_use]
    pub fn has_session(&self) -> bool {
        self.cookie.lock().unwrap().is_some()
    }
}

fn form_encode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'*' => {
                char::from(b).to_string()
            }
            b' ' => "+".to_string(),
            _ => format!("%{b:02X}"),
        })
        .collect()
}

/// Mock bodies in the backend's wire format.
pub mod fixtures {
    use serde_json::{Value, json};

    #[must_use]
    pub fn student(email: &str) -> Value {
        json!({ "user": { "id": 7, "name": "Asha Verma", "email": email, "phone": "9876543210" } })
    }

    #[must_use]
    pub fn courses() -> Value {
        json!([
            {
                "id": 1,
                "title": "Full Stack Web Development",
                "description": "HTML to deployment in twelve weeks.",
                "duration": "12 weeks",
                "level": "Beginner",
                "price": "4999",
                "image": null
            },
            {
                "id": 2,
                "title": "Data Analytics",
                "description": "SQL, Python and dashboards.",
                "duration": "8 weeks",
                "level": "Intermediate",
                "price": 3999,
                "image": "https://cdn.example.com/data.png"
            }
        ])
    }

    #[must_use]
    pub fn modules() -> Value {
        json!([
            { "id": 12, "course_id": 1, "title": "JavaScript Basics", "day": 2, "description": "Types and functions" },
            { "id": 11, "course_id": 1, "title": "HTML and CSS", "day": 1 }
        ])
    }

    #[must_use]
    pub fn materials() -> Value {
        json!([
            { "id": 1, "module_id": 11, "course_id": 1, "material": "Slides: Semantic HTML" }
        ])
    }

    #[must_use]
    pub fn registrations() -> Value {
        json!({
            "data": [
                {
                    "id": 1,
                    "name": "Asha Verma",
                    "email": "asha@example.com",
                    "transactionid": "UPI123456",
                    "courseName": "Full Stack Web Development",
                    "amount": "4999",
                    "courseId": 1,
                    "status": 0,
                    "created_at": "2026-03-04T10:00:00Z"
                },
                {
                    "id": 2,
                    "name": "Ravi Kumar",
                    "email": "ravi@example.com",
                    "transactionid": "UPI654321",
                    "courseName": "Data Analytics",
                    "amount": 3999,
                    "courseId": 2,
                    "status": 1,
                    "created_at": "2026-03-01T08:30:00Z"
                }
            ]
        })
    }
}
