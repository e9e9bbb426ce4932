//! Admin approval of submitted registrations.
//!
//! Approval is optimistic with an explicit pending/committed pair:
//! [`ApprovalBoard::begin`] marks every row for an email as approving (shown
//! as approved), then exactly one of [`ApprovalBoard::commit`] or
//! [`ApprovalBoard::rollback`] settles it once the backend answers.

use std::collections::BTreeSet;

use chrono::DateTime;
use thiserror::Error;
use tracing::{info, instrument, warn};

use sankalp_core::{ApprovalStatus, RegistrationId};

use crate::backend::types::PendingRegistration;
use crate::backend::{BackendClient, BackendError};

pub const ALL_PROCESSED: &str = "All course registration requests have been processed.";

#[derive(Debug, Error)]
pub enum ApprovalError {
    #[error("no registration found for {0}")]
    UnknownEmail(String),

    #[error("{0} is already approved")]
    AlreadyApproved(String),

    #[error("approval for {0} is already in progress")]
    InProgress(String),

    #[error("approval failed: {0}")]
    Backend(#[from] BackendError),
}

impl ApprovalError {
    /// Text shown on the dashboard.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::UnknownEmail(email) => format!("No registration found for {email}"),
            Self::AlreadyApproved(email) => format!("{email} is already approved"),
            Self::InProgress(email) => format!("Approval for {email} is already in progress"),
            Self::Backend(e) => e.user_message("Approval failed. Please try again."),
        }
    }
}

/// Review state of one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApprovalState {
    /// Status as last confirmed by the backend.
    Committed(ApprovalStatus),
    /// Approval sent, answer not yet received.
    Approving { prior: ApprovalStatus },
}

impl ApprovalState {
    /// Status to display. An approval in flight already shows as approved.
    #[must_use]
    pub const fn displayed(self) -> ApprovalStatus {
        match self {
            Self::Committed(status) => status,
            Self::Approving { .. } => ApprovalStatus::Approved,
        }
    }
}

/// A registration row on the admin dashboard.
#[derive(Debug, Clone)]
pub struct ApprovalEntry {
    pub registration: PendingRegistration,
    pub state: ApprovalState,
}

impl ApprovalEntry {
    #[must_use]
    pub const fn status(&self) -> ApprovalStatus {
        self.state.displayed()
    }

    #[must_use]
    pub fn is_approved(&self) -> bool {
        self.status() == ApprovalStatus::Approved
    }

    /// Submission date as `d/m/yyyy`, or the raw value if it does not parse.
    #[must_use]
    pub fn submitted_on(&self) -> String {
        let Some(raw) = self.registration.created_at.as_deref() else {
            return String::from("-");
        };
        DateTime::parse_from_rfc3339(raw).map_or_else(
            |_| raw.to_string(),
            |date| date.format("%-d/%-m/%Y").to_string(),
        )
    }
}

/// Proof that [`ApprovalBoard::begin`] succeeded; consumed by commit or rollback.
#[derive(Debug)]
#[must_use = "an approval must be committed or rolled back"]
pub struct ApprovalTicket {
    email: String,
    priors: Vec<(RegistrationId, ApprovalStatus)>,
}

impl ApprovalTicket {
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }
}

/// Counts shown above the registration table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoardStats {
    pub total: usize,
    pub awaiting: usize,
    pub approved: usize,
    pub courses: usize,
}

/// The admin's list of registrations.
#[derive(Debug, Clone, Default)]
pub struct ApprovalBoard {
    entries: Vec<ApprovalEntry>,
}

impl ApprovalBoard {
    #[must_use]
    pub fn new(registrations: Vec<PendingRegistration>) -> Self {
        Self {
            entries: registrations
                .into_iter()
                .map(|registration| ApprovalEntry {
                    state: ApprovalState::Committed(registration.status),
                    registration,
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn entries(&self) -> &[ApprovalEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose displayed status is `status`.
    pub fn with_status(&self, status: ApprovalStatus) -> impl Iterator<Item = &ApprovalEntry> {
        self.entries.iter().filter(move |e| e.status() == status)
    }

    #[must_use]
    pub fn stats(&self) -> BoardStats {
        let approved = self.with_status(ApprovalStatus::Approved).count();
        let courses: BTreeSet<&str> = self
            .entries
            .iter()
            .map(|e| e.registration.course_name.as_str())
            .filter(|name| !name.is_empty())
            .collect();
        BoardStats {
            total: self.entries.len(),
            awaiting: self.entries.len() - approved,
            approved,
            courses: courses.len(),
        }
    }

    /// Mark every row for `email` as approving.
    ///
    /// # Errors
    ///
    /// Refuses an email with no rows, an email whose rows are all approved,
    /// and an email with an approval already in flight.
    pub fn begin(&mut self, email: &str) -> Result<ApprovalTicket, ApprovalError> {
        let email = email.trim();
        let matching: Vec<&mut ApprovalEntry> = self
            .entries
            .iter_mut()
            .filter(|e| e.registration.email.trim().eq_ignore_ascii_case(email))
            .collect();

        if matching.is_empty() {
            return Err(ApprovalError::UnknownEmail(email.to_string()));
        }
        if matching
            .iter()
            .any(|e| matches!(e.state, ApprovalState::Approving { .. }))
        {
            return Err(ApprovalError::InProgress(email.to_string()));
        }
        if matching
            .iter()
            .all(|e| e.state == ApprovalState::Committed(ApprovalStatus::Approved))
        {
            return Err(ApprovalError::AlreadyApproved(email.to_string()));
        }

        let mut priors = Vec::with_capacity(matching.len());
        for entry in matching {
            if let ApprovalState::Committed(prior) = entry.state {
                priors.push((entry.registration.id, prior));
                entry.state = ApprovalState::Approving { prior };
            }
        }

        Ok(ApprovalTicket {
            email: email.to_string(),
            priors,
        })
    }

    /// The backend confirmed the approval.
    pub fn commit(&mut self, ticket: ApprovalTicket) {
        self.settle(&ticket, |_| ApprovalStatus::Approved);
    }

    /// The backend refused the approval; restore each row's prior status.
    pub fn rollback(&mut self, ticket: ApprovalTicket) {
        self.settle(&ticket, |prior| prior);
    }

    fn settle(&mut self, ticket: &ApprovalTicket, outcome: impl Fn(ApprovalStatus) -> ApprovalStatus) {
        for (id, prior) in &ticket.priors {
            if let Some(entry) = self.entries.iter_mut().find(|e| e.registration.id == *id) {
                entry.state = ApprovalState::Committed(outcome(*prior));
            }
        }
    }
}

/// Approve `email` against the backend, settling the board either way.
///
/// # Errors
///
/// Returns the local refusal from [`ApprovalBoard::begin`] (no call made) or
/// `ApprovalError::Backend` after rolling the rows back.
#[instrument(skip(backend, board))]
pub async fn approve(
    backend: &BackendClient,
    board: &mut ApprovalBoard,
    email: &str,
) -> Result<(), ApprovalError> {
    let ticket = board.begin(email)?;

    match backend.approve(ticket.email()).await {
        Ok(()) => {
            info!("Registration approved");
            board.commit(ticket);
            Ok(())
        }
        Err(e) => {
            warn!(error = %e, "Approval failed, rolling back");
            board.rollback(ticket);
            Err(e.into())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::time::Duration;

    use serde_json::json;
    use url::Url;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::config::BackendConfig;

    fn board() -> ApprovalBoard {
        let rows: Vec<PendingRegistration> = serde_json::from_value(json!([
            { "id": 1, "email": "a@x.com", "courseName": "AI", "status": 0,
              "created_at": "2025-01-04T10:00:00.000Z" },
            { "id": 2, "email": "b@x.com", "courseName": "AI", "status": 1 },
            { "id": 3, "email": "a@x.com", "courseName": "AR/VR", "status": 0 }
        ]))
        .unwrap();
        ApprovalBoard::new(rows)
    }

    fn backend(server: &MockServer) -> BackendClient {
        BackendClient::new(&BackendConfig {
            url: Url::parse(&server.uri()).unwrap(),
            timeout: Duration::from_secs(5),
        })
        .unwrap()
    }

    #[test]
    fn test_begin_shows_rows_as_approved() {
        let mut board = board();
        let ticket = board.begin("a@x.com").unwrap();
        assert!(board.entries()[0].is_approved());
        assert!(board.entries()[2].is_approved());
        assert_eq!(
            board.entries()[0].state,
            ApprovalState::Approving {
                prior: ApprovalStatus::Awaiting
            }
        );
        board.commit(ticket);
        assert_eq!(
            board.entries()[0].state,
            ApprovalState::Committed(ApprovalStatus::Approved)
        );
    }

    #[test]
    fn test_rollback_restores_prior_status() {
        let mut board = board();
        let ticket = board.begin("A@X.com").unwrap();
        board.rollback(ticket);
        assert!(!board.entries()[0].is_approved());
        assert!(board.entries()[1].is_approved());
    }

    #[test]
    fn test_already_approved_is_refused() {
        let mut board = board();
        assert!(matches!(
            board.begin("b@x.com"),
            Err(ApprovalError::AlreadyApproved(_))
        ));
        assert!(matches!(
            board.begin("nobody@x.com"),
            Err(ApprovalError::UnknownEmail(_))
        ));
    }

    #[test]
    fn test_second_begin_while_in_flight_is_refused() {
        let mut board = board();
        let _ticket = board.begin("a@x.com").unwrap();
        assert!(matches!(
            board.begin("a@x.com"),
            Err(ApprovalError::InProgress(_))
        ));
    }

    #[test]
    fn test_stats_and_dates() {
        let board = board();
        assert_eq!(
            board.stats(),
            BoardStats {
                total: 3,
                awaiting: 2,
                approved: 1,
                courses: 2
            }
        );
        assert_eq!(board.entries()[0].submitted_on(), "4/1/2025");
        assert_eq!(board.entries()[1].submitted_on(), "-");
    }

    #[tokio::test]
    async fn test_backend_refusal_rolls_back() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/admin-approve"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let mut board = board();
        let err = approve(&backend(&server), &mut board, "a@x.com")
            .await
            .unwrap_err();
        assert!(matches!(err, ApprovalError::Backend(_)));
        assert_eq!(
            board.entries()[0].state,
            ApprovalState::Committed(ApprovalStatus::Awaiting)
        );
    }

    #[tokio::test]
    async fn test_already_approved_makes_no_call() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/admin-approve"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let mut board = board();
        let err = approve(&backend(&server), &mut board, "b@x.com")
            .await
            .unwrap_err();
        assert_eq!(err.user_message(), "b@x.com is already approved");
    }
}
