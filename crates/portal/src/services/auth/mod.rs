//! Authentication service.
//!
//! Login, registration and profile updates against the course backend, plus
//! the built-in admin credential which never reaches the backend.

mod error;

pub use error::AuthError;

use secrecy::ExposeSecret;
use tracing::{info, instrument};

use sankalp_core::Email;

use crate::backend::BackendClient;
use crate::backend::types::{RegisterRequest, UpdateProfileRequest};
use crate::config::AdminCredential;
use crate::models::SessionUser;

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const REGISTRATION_SUCCEEDED: &str = "Registration successful!";
pub const PROFILE_UPDATE_FAILED: &str = "Failed to update profile";
pub const PROFILE_UPDATED: &str = "Profile updated successfully";

/// Fields submitted by the registration form.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Registration {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
}

/// Fields submitted by the profile settings form.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct ProfileUpdate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// Authentication service.
pub struct AuthService<'a> {
    backend: &'a BackendClient,
    admin: &'a AdminCredential,
}

impl<'a> AuthService<'a> {
    #[must_use]
    pub const fn new(backend: &'a BackendClient, admin: &'a AdminCredential) -> Self {
        Self { backend, admin }
    }

    /// Log in with email and password.
    ///
    /// The configured admin pair yields an admin session without a network
    /// call. Anything else is sent to the backend exactly once; only blank
    /// fields are rejected locally.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` for blank fields, `AuthError::Rejected`
    /// with the backend's message (or "Login failed") when the backend refuses.
    #[instrument(skip(self, password))]
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionUser, AuthError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::Validation(
                "Please enter your email and password".to_string(),
            ));
        }

        if self.is_admin_credential(email, password) {
            info!("Admin login");
            return Ok(SessionUser::admin(self.admin.email.as_str()));
        }

        let user = self
            .backend
            .login(email, password)
            .await
            .map_err(|e| AuthError::from_backend(e, LOGIN_FAILED))?;

        Ok(SessionUser::student(user.name, user.email, user.phone))
    }

    fn is_admin_credential(&self, email: &str, password: &str) -> bool {
        self.admin.email.matches(email) && password == self.admin.password.expose_secret()
    }

    /// Register a student account. Does not log the student in.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` when a field is blank or the email is
    /// malformed, `AuthError::Rejected` when the backend refuses.
    #[instrument(skip(self, registration), fields(email = %registration.email))]
    pub async fn register(&self, registration: &Registration) -> Result<(), AuthError> {
        let name = registration.name.trim();
        let phone = registration.phone.trim();
        if name.is_empty()
            || registration.email.trim().is_empty()
            || phone.is_empty()
            || registration.password.is_empty()
        {
            return Err(AuthError::Validation("All fields are required".to_string()));
        }
        let email = parse_email(&registration.email)?;

        self.backend
            .register(&RegisterRequest {
                name,
                email: email.as_str(),
                phone,
                password: &registration.password,
            })
            .await
            .map_err(|e| AuthError::from_backend(e, REGISTRATION_FAILED))?;

        info!("Student registered");
        Ok(())
    }

    /// Update the logged-in user's profile and return the merged session user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Validation` when name or email is missing or the
    /// email is malformed, `AuthError::Rejected` when the backend refuses.
    #[instrument(skip(self, current, update), fields(email = %current.email))]
    pub async fn update_profile(
        &self,
        current: &SessionUser,
        update: &ProfileUpdate,
    ) -> Result<SessionUser, AuthError> {
        let name = update.name.trim();
        if name.is_empty() || update.email.trim().is_empty() {
            return Err(AuthError::Validation(
                "Name and email are required".to_string(),
            ));
        }
        let email = parse_email(&update.email)?;
        let phone = update.phone.trim();

        self.backend
            .update_profile(&UpdateProfileRequest {
                original_email: &current.email,
                name,
                email: email.as_str(),
                phone,
            })
            .await
            .map_err(|e| AuthError::from_backend(e, PROFILE_UPDATE_FAILED))?;

        let mut updated = current.clone();
        updated.apply_profile(name, email.as_str(), phone);
        Ok(updated)
    }
}

fn parse_email(raw: &str) -> Result<Email, AuthError> {
    Email::parse(raw)
        .map_err(|_| AuthError::Validation("Please enter a valid email address".to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use secrecy::SecretString;
    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::BackendConfig;

    const ADMIN_PASSWORD: &str = "Qz7!vR2#kLp9@wXe";

    fn fixtures(server: &MockServer) -> (BackendClient, AdminCredential) {
        let backend = BackendClient::new(&BackendConfig {
            url: Url::parse(&server.uri()).unwrap(),
            timeout: Duration::from_secs(5),
        })
        .unwrap();
        let admin = AdminCredential {
            email: Email::parse("admin@sankalp.com").unwrap(),
            password: SecretString::from(ADMIN_PASSWORD),
        };
        (backend, admin)
    }

    #[tokio::test]
    async fn test_admin_login_makes_no_backend_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(500))
            .expect(0)
            .mount(&server)
            .await;

        let (backend, admin) = fixtures(&server);
        let user = AuthService::new(&backend, &admin)
            .login(" Admin@Sankalp.com ", ADMIN_PASSWORD)
            .await
            .unwrap();
        assert!(user.is_admin());
    }

    #[tokio::test]
    async fn test_admin_email_with_wrong_password_goes_to_backend() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid email or password" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let (backend, admin) = fixtures(&server);
        let err = AuthService::new(&backend, &admin)
            .login("admin@sankalp.com", "admin")
            .await
            .unwrap_err();
        assert_eq!(err.user_message(LOGIN_FAILED), "Invalid email or password");
    }

    #[tokio::test]
    async fn test_student_login_builds_student_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "user": { "id": 9, "name": "Rahul Verma", "email": "rahul@x.com", "phone": "98765" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let (backend, admin) = fixtures(&server);
        let user = AuthService::new(&backend, &admin)
            .login("not-an-email", "pw")
            .await
            .unwrap();
        assert!(!user.is_admin());
        assert_eq!(user.email, "rahul@x.com");
    }

    #[tokio::test]
    async fn test_register_requires_every_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let (backend, admin) = fixtures(&server);
        let err = AuthService::new(&backend, &admin)
            .register(&Registration {
                name: "Asha".to_string(),
                email: "asha@x.com".to_string(),
                phone: String::new(),
                password: "pw".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
    }

    #[tokio::test]
    async fn test_register_failure_falls_back_to_generic_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/register"))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({})))
            .mount(&server)
            .await;

        let (backend, admin) = fixtures(&server);
        let err = AuthService::new(&backend, &admin)
            .register(&Registration {
                name: "Asha".to_string(),
                email: "asha@x.com".to_string(),
                phone: "98765".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap_err();
        assert_eq!(err.user_message(REGISTRATION_FAILED), REGISTRATION_FAILED);
    }

    #[tokio::test]
    async fn test_profile_update_merges_into_session() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/update-profile"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
            .expect(1)
            .mount(&server)
            .await;

        let (backend, admin) = fixtures(&server);
        let current = SessionUser::student(
            "Asha".to_string(),
            "asha@x.com".to_string(),
            "1".to_string(),
        );
        let updated = AuthService::new(&backend, &admin)
            .update_profile(
                &current,
                &ProfileUpdate {
                    name: "Asha K".to_string(),
                    email: "asha.k@x.com".to_string(),
                    phone: "2".to_string(),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Asha K");
        assert_eq!(updated.email, "asha.k@x.com");
        assert!(!updated.is_admin());
    }
}
