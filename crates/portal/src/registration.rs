//! Course registration and access.
//!
//! A course page shows exactly one of three views, decided by the student's
//! [`RegistrationStatus`]:
//!
//! - `NotRegistered`: payment QR code and the transaction ID form
//! - `Pending`: "Registration Under Review"
//! - `Approved`: the module list with materials and video buttons
//!
//! The status comes from two backend checks made in order. The first is
//! conclusive only for an integer `value` of `1` (approved) or `0` (pending).
//! Anything else, including a failed call, moves on to the access check.

use thiserror::Error;
use tracing::{info, instrument, warn};

use sankalp_core::{CourseId, RegistrationStatus};

use crate::backend::types::{Course, Material, Module, RegistrationRequest};
use crate::backend::{BackendClient, BackendError};
use crate::models::SessionUser;

pub const TRANSACTION_ID_REQUIRED: &str = "Transaction ID is required";
pub const SUBMISSION_FAILED: &str = "Failed to register for the course. Please try again.";
pub const NO_MATERIALS: &str = "No materials available for this module.";

/// Errors from submitting a transaction ID.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Blank transaction ID. No call was made.
    #[error("transaction id is required")]
    MissingTransactionId,

    /// The backend did not acknowledge the submission.
    #[error("submission failed: {0}")]
    Submission(#[from] BackendError),
}

impl RegistrationError {
    /// The fixed text shown under the transaction ID field.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::MissingTransactionId => TRANSACTION_ID_REQUIRED,
            Self::Submission(_) => SUBMISSION_FAILED,
        }
    }
}

/// Resolve the student's registration status for a course.
///
/// Never fails: if both checks are inconclusive the student sees the
/// registration form.
#[instrument(skip(backend))]
pub async fn resolve_status(
    backend: &BackendClient,
    email: &str,
    course_id: CourseId,
) -> RegistrationStatus {
    match backend.pending_check(email, course_id).await {
        Ok(response) => {
            if let Some(status) = RegistrationStatus::from_pending_check(response.flag()) {
                return status;
            }
        }
        Err(e) => warn!(error = %e, "Pending check failed, falling back to access check"),
    }

    match backend.course_access(email, course_id).await {
        Ok(has_access) => RegistrationStatus::from_access(has_access),
        Err(e) => {
            warn!(error = %e, "Course access check failed");
            RegistrationStatus::NotRegistered
        }
    }
}

/// Submit a payment transaction ID and return the status to display next.
///
/// `NotRegistered` moves to `Pending` only once the backend acknowledges the
/// submission. On error the caller keeps showing the form.
///
/// # Errors
///
/// Returns `RegistrationError::MissingTransactionId` for a blank ID (no call
/// made) and `RegistrationError::Submission` when the backend call fails.
#[instrument(skip(backend, student, course), fields(email = %student.email, course_id = %course.id))]
pub async fn submit_transaction(
    backend: &BackendClient,
    student: &SessionUser,
    course: &Course,
    transaction_id: &str,
) -> Result<RegistrationStatus, RegistrationError> {
    let transaction_id = transaction_id.trim();
    if transaction_id.is_empty() {
        return Err(RegistrationError::MissingTransactionId);
    }

    backend
        .submit_registration(&RegistrationRequest {
            name: &student.name,
            email: &student.email,
            transid: transaction_id,
            course_name: &course.title,
            amt: course.price,
            course_id: course.id,
        })
        .await?;

    info!("Registration submitted for review");
    Ok(RegistrationStatus::Pending)
}

/// A module with its material descriptors, as shown to approved students.
#[derive(Debug, Clone)]
pub struct ModuleOutline {
    pub module: Module,
    pub materials: Vec<String>,
}

impl ModuleOutline {
    /// "Day N: title"
    #[must_use]
    pub fn heading(&self) -> String {
        format!("Day {}: {}", self.module.day, self.module.title)
    }

    #[must_use]
    pub fn has_materials(&self) -> bool {
        !self.materials.is_empty()
    }
}

/// Join modules with their materials by module id, keeping module order.
#[must_use]
pub fn module_outline(modules: &[Module], materials: &[Material]) -> Vec<ModuleOutline> {
    modules
        .iter()
        .map(|module| ModuleOutline {
            module: module.clone(),
            materials: materials
                .iter()
                .filter(|m| m.module_id == module.id && !m.material.trim().is_empty())
                .map(|m| m.material.clone())
                .collect(),
        })
        .collect()
}
