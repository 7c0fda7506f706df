//! Training-program submissions and the role-scoped review workflow.
//!
//! Group admins see every subsidiary's submissions and may change their status;
//! subsidiary managers see only their own unit's submissions, read-only.

pub mod domain;
pub mod repository;
pub mod review;
pub mod router;
pub mod seed;
pub mod visibility;

#[cfg(test)]
mod tests;

pub use domain::{ModuleContent, ProgramSubmission, ReviewAction, SubmissionId, SubmissionStatus};
pub use repository::{
    InMemorySubmissionRepository, RepositoryError, SubmissionRepository, SubmissionSummaryView,
};
pub use review::{ReviewError, ReviewSession};
pub use router::{training_router, StatusChangeRequest, SubmissionListView, USER_HEADER};
pub use visibility::{compute_visible, is_visible_to, panel_heading, EmptyState};
