//! Session-related types.
//!
//! Types stored in the server-side session for authentication state and
//! one-shot page messages.

use serde::{Deserialize, Serialize};

use sankalp_core::Role;

/// Session-stored user identity.
///
/// Built by the portal from a successful login and never read back from the
/// browser, so the role cannot be asserted by the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub role: Role,
}

impl SessionUser {
    /// A student session from the backend's login response.
    #[must_use]
    pub fn student(name: String, email: String, phone: String) -> Self {
        Self {
            name,
            email,
            phone,
            role: Role::Student,
        }
    }

    /// The built-in admin session.
    #[must_use]
    pub fn admin(email: &str) -> Self {
        Self {
            name: "Admin".to_string(),
            email: email.to_string(),
            phone: String::new(),
            role: Role::Admin,
        }
    }

    #[must_use]
    pub const fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// First name, for greetings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    /// Apply a successful profile update. The role is left untouched.
    pub fn apply_profile(&mut self, name: &str, email: &str, phone: &str) {
        name.clone_into(&mut self.name);
        email.clone_into(&mut self.email);
        phone.clone_into(&mut self.phone);
    }
}

/// A message shown once on the next page render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub kind: FlashKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    Success,
    Error,
}

impl Flash {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            text: text.into(),
        }
    }

    /// CSS modifier for the message box.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self.kind {
            FlashKind::Success => "alert--success",
            FlashKind::Error => "alert--error",
        }
    }
}

/// Session keys.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the one-shot page message.
    pub const FLASH: &str = "flash";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_session_role() {
        let user = SessionUser::student(
            "Priya Sharma".to_string(),
            "priya@x.com".to_string(),
            "9876543210".to_string(),
        );
        assert!(!user.is_admin());
        assert_eq!(user.first_name(), "Priya");
    }

    #[test]
    fn test_apply_profile_keeps_role() {
        let mut user = SessionUser::admin("admin@sankalp.com");
        user.apply_profile("Ops", "ops@sankalp.com", "123");
        assert!(user.is_admin());
        assert_eq!(user.email, "ops@sankalp.com");
        assert_eq!(user.phone, "123");
    }
}
