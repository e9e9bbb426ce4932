//! Contact form route handler.
//!
//! Enquiries are validated and written to the log; there is no mail relay.

use axum::{
    Form,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::{info, instrument};

use sankalp_core::Email;

use crate::error::AppError;
use crate::middleware::set_flash;
use crate::models::Flash;

const CONTACT_SECTION: &str = "/#contact";
const MAX_MESSAGE_CHARS: usize = 2000;

pub const CONTACT_THANKS: &str = "Thank you for reaching out! Our team will get back to you shortly.";

/// Contact form data.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Check required fields, returning the text to show when one is bad.
    fn validate(&self) -> Result<Email, &'static str> {
        if self.name.trim().is_empty() || self.message.trim().is_empty() {
            return Err("Name and message are required.");
        }
        if self.message.chars().count() > MAX_MESSAGE_CHARS {
            return Err("Please keep your message under 2000 characters.");
        }
        Email::parse(&self.email).map_err(|_| "Please enter a valid email address.")
    }
}

/// Accept an enquiry from the marketing page's contact section.
///
/// # Errors
///
/// Returns `AppError::Session` if the session store fails.
#[instrument(skip_all)]
pub async fn submit(session: Session, Form(form): Form<ContactForm>) -> Result<Response, AppError> {
    let flash = match form.validate() {
        Ok(email) => {
            info!(
                email = %email,
                message_chars = form.message.trim().chars().count(),
                "Contact enquiry received"
            );
            Flash::success(CONTACT_THANKS)
        }
        Err(message) => Flash::error(message),
    };

    set_flash(&session, &flash).await?;
    Ok(Redirect::to(CONTACT_SECTION).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            phone: String::new(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_valid_enquiry() {
        assert!(form("Asha", "asha@example.com", "Tell me about the internship").validate().is_ok());
    }

    #[test]
    fn test_rejects_missing_fields_and_bad_email() {
        assert_eq!(
            form("", "asha@example.com", "hi").validate().err(),
            Some("Name and message are required.")
        );
        assert_eq!(
            form("Asha", "not-an-email", "hi").validate().err(),
            Some("Please enter a valid email address.")
        );
        assert!(form("Asha", "asha@example.com", &"x".repeat(2001)).validate().is_err());
    }
}
