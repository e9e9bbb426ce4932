//! Roles and registration states.

use serde::{Deserialize, Serialize};

/// Portal role of a signed-in user.
///
/// Students get this from a backend login. The admin role is only ever
/// granted by the configured admin credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    #[default]
    Student,
}

impl Role {
    /// True for the admin role.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Student => write!(f, "student"),
        }
    }
}

/// A student's standing for one course.
///
/// `Pending -> Approved` only happens through an admin approval; there is
/// no rejected state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationStatus {
    #[default]
    NotRegistered,
    Pending,
    Approved,
}

impl RegistrationStatus {
    /// Interpret the `value` returned by the pending-check endpoint.
    ///
    /// `1` means the registration was approved and `0` means it is still
    /// awaiting review. Anything else (including a missing value) is
    /// inconclusive and returns `None`, so the caller should fall back to
    /// the course-access check.
    #[must_use]
    pub const fn from_pending_check(value: Option<i64>) -> Option<Self> {
        match value {
            Some(1) => Some(Self::Approved),
            Some(0) => Some(Self::Pending),
            _ => None,
        }
    }

    /// Status implied by the course-access check.
    #[must_use]
    pub const fn from_access(has_access: bool) -> Self {
        if has_access {
            Self::Approved
        } else {
            Self::NotRegistered
        }
    }
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotRegistered => write!(f, "not_registered"),
            Self::Pending => write!(f, "pending"),
            Self::Approved => write!(f, "approved"),
        }
    }
}

/// Review status of a submitted payment, as stored by the backend.
///
/// The admin listing encodes this as an integer column: `0` awaiting
/// review, `1` approved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApprovalStatus {
    #[default]
    Awaiting,
    Approved,
}

impl ApprovalStatus {
    /// Wire value sent to and received from the backend.
    #[must_use]
    pub const fn as_flag(self) -> i64 {
        match self {
            Self::Awaiting => 0,
            Self::Approved => 1,
        }
    }

    /// Decode the backend flag. Any non-zero value counts as approved.
    #[must_use]
    pub const fn from_flag(flag: i64) -> Self {
        if flag == 0 { Self::Awaiting } else { Self::Approved }
    }
}

impl Serialize for ApprovalStatus {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.as_flag())
    }
}

impl<'de> Deserialize<'de> for ApprovalStatus {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(i64),
            Bool(bool),
            Text(String),
            Missing(()),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Flag(flag) => Self::from_flag(flag),
            Repr::Bool(approved) => {
                if approved {
                    Self::Approved
                } else {
                    Self::Awaiting
                }
            }
            Repr::Text(text) => match text.trim() {
                "1" | "approved" => Self::Approved,
                _ => Self::Awaiting,
            },
            Repr::Missing(()) => Self::Awaiting,
        })
    }
}

impl std::fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Awaiting => write!(f, "awaiting"),
            Self::Approved => write!(f, "approved"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_check_values() {
        assert_eq!(
            RegistrationStatus::from_pending_check(Some(1)),
            Some(RegistrationStatus::Approved)
        );
        assert_eq!(
            RegistrationStatus::from_pending_check(Some(0)),
            Some(RegistrationStatus::Pending)
        );
        assert_eq!(RegistrationStatus::from_pending_check(Some(-1)), None);
        assert_eq!(RegistrationStatus::from_pending_check(None), None);
    }

    #[test]
    fn test_access_fallback() {
        assert_eq!(
            RegistrationStatus::from_access(true),
            RegistrationStatus::Approved
        );
        assert_eq!(
            RegistrationStatus::from_access(false),
            RegistrationStatus::NotRegistered
        );
    }

    #[test]
    fn test_role_display_matches_serde() {
        for role in [Role::Admin, Role::Student] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{role}\""));
        }
        assert!(Role::Admin.is_admin());
        assert!(!Role::Student.is_admin());
    }

    #[test]
    fn test_approval_status_wire_forms() {
        let flag: ApprovalStatus = serde_json::from_str("1").unwrap();
        let text: ApprovalStatus = serde_json::from_str("\"0\"").unwrap();
        let missing: ApprovalStatus = serde_json::from_str("null").unwrap();
        assert_eq!(flag, ApprovalStatus::Approved);
        assert_eq!(text, ApprovalStatus::Awaiting);
        assert_eq!(missing, ApprovalStatus::Awaiting);
        assert_eq!(serde_json::to_string(&ApprovalStatus::Approved).unwrap(), "1");
    }
}
