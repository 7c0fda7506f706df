use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::identity::{OrganizationalUnit, UserIdentity};
use crate::workflows::training::domain::{
    ModuleContent, ProgramSubmission, SubmissionId, SubmissionStatus,
};
use crate::workflows::training::repository::{
    InMemorySubmissionRepository, RepositoryError, SubmissionRepository,
};
use crate::workflows::training::seed::standard_submissions;

pub(super) fn admin() -> UserIdentity {
    UserIdentity::group_admin("u1", "Group Admin").with_title("Group Manager - Training")
}

pub(super) fn manager(unit: OrganizationalUnit) -> UserIdentity {
    UserIdentity::subsidiary_manager("m-1", "Manager", unit)
}

pub(super) fn unassigned_manager() -> UserIdentity {
    let mut user = UserIdentity::subsidiary_manager("m-x", "Loose", OrganizationalUnit::Drone);
    user.unit = None;
    user
}

pub(super) fn submission(id: &str, unit: OrganizationalUnit) -> ProgramSubmission {
    ProgramSubmission {
        id: SubmissionId::new(id),
        unit,
        title: format!("Curriculum {id}"),
        version: "1.0".to_string(),
        submitted_by: "Training Supervisor".to_string(),
        submission_date: NaiveDate::from_ymd_opt(2026, 2, 1).expect("valid date"),
        status: SubmissionStatus::PendingReview,
        compliance_score: 80,
        overview: "Fixture curriculum".to_string(),
        modules: vec![ModuleContent {
            title: "Induction".to_string(),
            objectives: vec!["Know the values".to_string()],
            duration: None,
            key_topics: None,
        }],
        request_notes: None,
    }
}

/// Interleaved fixture: two broadcast entries separated by other units.
pub(super) fn mixed_submissions() -> Vec<ProgramSubmission> {
    vec![
        submission("b-1", OrganizationalUnit::Broadcast),
        submission("d-1", OrganizationalUnit::Drone),
        submission("b-2", OrganizationalUnit::Broadcast),
        submission("a-1", OrganizationalUnit::Automotive),
    ]
}

pub(super) fn seeded_repository() -> Arc<InMemorySubmissionRepository> {
    Arc::new(InMemorySubmissionRepository::new(standard_submissions()))
}

pub(super) fn drone_id() -> SubmissionId {
    SubmissionId::new("sub-002")
}

pub(super) struct UnavailableRepository;

impl SubmissionRepository for UnavailableRepository {
    fn all(&self) -> Result<Vec<ProgramSubmission>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &SubmissionId) -> Result<Option<ProgramSubmission>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update_status(
        &self,
        _id: &SubmissionId,
        _status: SubmissionStatus,
    ) -> Result<ProgramSubmission, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Serves reads until switched offline, then fails every call.
pub(super) struct SwitchableRepository {
    inner: InMemorySubmissionRepository,
    offline: AtomicBool,
}

impl SwitchableRepository {
    pub(super) fn new(records: Vec<ProgramSubmission>) -> Self {
        Self {
            inner: InMemorySubmissionRepository::new(records),
            offline: AtomicBool::new(false),
        }
    }

    pub(super) fn go_offline(&self) {
        self.offline.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> Result<(), RepositoryError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(RepositoryError::Unavailable("switched offline".to_string()))
        } else {
            Ok(())
        }
    }
}

impl SubmissionRepository for SwitchableRepository {
    fn all(&self) -> Result<Vec<ProgramSubmission>, RepositoryError> {
        self.check()?;
        self.inner.all()
    }

    fn fetch(&self, id: &SubmissionId) -> Result<Option<ProgramSubmission>, RepositoryError> {
        self.check()?;
        self.inner.fetch(id)
    }

    fn update_status(
        &self,
        id: &SubmissionId,
        status: SubmissionStatus,
    ) -> Result<ProgramSubmission, RepositoryError> {
        self.check()?;
        self.inner.update_status(id, status)
    }
}
