//! Commands that talk to the course backend.
//!
//! # Environment Variables
//!
//! - `BACKEND_URL` - Course backend origin (default: <http://localhost:5000>)
//! - `BACKEND_TIMEOUT_SECS` - Per-request timeout (default: 15)

use std::io::{self, Write};

use thiserror::Error;
use tracing::info;

use sankalp_core::ApprovalStatus;
use sankalp_portal::approvals::{self, ApprovalBoard, ApprovalError};
use sankalp_portal::backend::{BackendClient, BackendError};
use sankalp_portal::config::{BackendConfig, ConfigError};

/// Errors from backend commands.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Approval(#[from] ApprovalError),

    #[error("Output error: {0}")]
    Io(#[from] io::Error),
}

fn client() -> Result<BackendClient, CommandError> {
    dotenvy::dotenv().ok();
    let config = BackendConfig::from_env()?;
    info!(backend = %config.url, "Connecting to backend");
    Ok(BackendClient::new(&config)?)
}

/// List the course catalog.
///
/// # Errors
///
/// Returns an error if the backend is unreachable or stdout cannot be written.
pub async fn courses() -> Result<(), CommandError> {
    let courses = client()?.courses().await?;
    let mut out = io::stdout().lock();

    for course in courses.iter() {
        writeln!(
            out,
            "{:>5}  {:<40} {:>10}  {} / {}",
            course.id, course.title, course.price, course.duration, course.level
        )?;
    }
    writeln!(out, "{} courses", courses.len())?;
    Ok(())
}

/// List registrations that have not been approved yet.
///
/// # Errors
///
/// Returns an error if the backend is unreachable or stdout cannot be written.
pub async fn pending() -> Result<(), CommandError> {
    let board = ApprovalBoard::new(client()?.pending_registrations().await?);
    let mut out = io::stdout().lock();

    let mut count = 0usize;
    for entry in board.with_status(ApprovalStatus::Awaiting) {
        let reg = &entry.registration;
        writeln!(
            out,
            "{:<32} {:<24} {:<20} {:>10}  {}",
            reg.email,
            reg.course_name,
            reg.transactionid,
            reg.amount,
            entry.submitted_on()
        )?;
        count += 1;
    }
    writeln!(out, "{count} awaiting review")?;
    Ok(())
}

/// Approve every awaiting registration for `email`.
///
/// Applies the same local checks as the admin dashboard: unknown or already
/// approved emails are refused without calling the backend.
///
/// # Errors
///
/// Returns an error if the registrations cannot be loaded or the approval fails.
pub async fn approve(email: &str) -> Result<(), CommandError> {
    let backend = client()?;
    let mut board = ApprovalBoard::new(backend.pending_registrations().await?);
    approvals::approve(&backend, &mut board, email.trim()).await?;

    writeln!(io::stdout().lock(), "Approved {}", email.trim())?;
    Ok(())
}
