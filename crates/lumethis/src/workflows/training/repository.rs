use std::sync::{Mutex, MutexGuard};

use serde::Serialize;

use super::domain::{ProgramSubmission, SubmissionId, SubmissionStatus};
use crate::identity::OrganizationalUnit;

/// Storage abstraction so the review session can be exercised with arbitrary fixtures.
///
/// Implementations must return submissions in a stable order; visibility filtering
/// preserves it.
pub trait SubmissionRepository: Send + Sync {
    fn all(&self) -> Result<Vec<ProgramSubmission>, RepositoryError>;
    fn fetch(&self, id: &SubmissionId) -> Result<Option<ProgramSubmission>, RepositoryError>;
    /// Replace the status of one submission, returning the updated record.
    fn update_status(
        &self,
        id: &SubmissionId,
        status: SubmissionStatus,
    ) -> Result<ProgramSubmission, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Process-local repository; mutations are lost on restart.
#[derive(Debug, Default)]
pub struct InMemorySubmissionRepository {
    records: Mutex<Vec<ProgramSubmission>>,
}

impl InMemorySubmissionRepository {
    pub fn new(records: Vec<ProgramSubmission>) -> Self {
        Self {
            records: Mutex::new(records),
        }
    }

    pub fn seeded() -> Self {
        Self::new(super::seed::standard_submissions())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<ProgramSubmission>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("submission store poisoned".to_string()))
    }
}

impl SubmissionRepository for InMemorySubmissionRepository {
    fn all(&self) -> Result<Vec<ProgramSubmission>, RepositoryError> {
        Ok(self.lock()?.clone())
    }

    fn fetch(&self, id: &SubmissionId) -> Result<Option<ProgramSubmission>, RepositoryError> {
        Ok(self.lock()?.iter().find(|record| &record.id == id).cloned())
    }

    fn update_status(
        &self,
        id: &SubmissionId,
        status: SubmissionStatus,
    ) -> Result<ProgramSubmission, RepositoryError> {
        let mut guard = self.lock()?;
        let record = guard
            .iter_mut()
            .find(|record| &record.id == id)
            .ok_or(RepositoryError::NotFound)?;
        record.status = status;
        Ok(record.clone())
    }
}

/// Condensed list entry for the submission sidebar.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionSummaryView {
    pub id: SubmissionId,
    pub title: String,
    pub unit: OrganizationalUnit,
    pub unit_name: &'static str,
    pub status: &'static str,
    pub submission_date: String,
    pub submitted_by: String,
}

impl From<&ProgramSubmission> for SubmissionSummaryView {
    fn from(record: &ProgramSubmission) -> Self {
        Self {
            id: record.id.clone(),
            title: record.title.clone(),
            unit: record.unit,
            unit_name: record.unit.display_name(),
            status: record.status.label(),
            submission_date: record.submission_date.format("%Y-%m-%d").to_string(),
            submitted_by: record.submitted_by.clone(),
        }
    }
}
