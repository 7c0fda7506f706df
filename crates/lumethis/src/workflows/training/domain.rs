use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::identity::OrganizationalUnit;

/// Identifier wrapper for training-program submissions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(pub String);

impl SubmissionId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Approval state of a submission.
///
/// Any status may move to any other; only the requesting role is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[serde(rename = "Pending Review")]
    PendingReview,
    #[serde(rename = "Changes Requested")]
    ChangesRequested,
    #[serde(rename = "Group Approved")]
    GroupApproved,
    #[serde(rename = "Active")]
    Active,
}

impl SubmissionStatus {
    pub const ALL: [SubmissionStatus; 4] = [
        SubmissionStatus::PendingReview,
        SubmissionStatus::ChangesRequested,
        SubmissionStatus::GroupApproved,
        SubmissionStatus::Active,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            SubmissionStatus::PendingReview => "Pending Review",
            SubmissionStatus::ChangesRequested => "Changes Requested",
            SubmissionStatus::GroupApproved => "Group Approved",
            SubmissionStatus::Active => "Active",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        Self::ALL
            .into_iter()
            .find(|status| status.label().to_ascii_lowercase() == normalized)
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The two review controls offered to group administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    RequestChanges,
    Approve,
}

impl ReviewAction {
    pub const fn target_status(self) -> SubmissionStatus {
        match self {
            ReviewAction::RequestChanges => SubmissionStatus::ChangesRequested,
            ReviewAction::Approve => SubmissionStatus::GroupApproved,
        }
    }
}

/// One curriculum module inside a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleContent {
    pub title: String,
    pub objectives: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_topics: Option<Vec<String>>,
}

/// A versioned training-curriculum document under group review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramSubmission {
    pub id: SubmissionId,
    pub unit: OrganizationalUnit,
    pub title: String,
    pub version: String,
    pub submitted_by: String,
    pub submission_date: NaiveDate,
    pub status: SubmissionStatus,
    /// Advisory alignment with group standards, 0..=100. Never recomputed here.
    pub compliance_score: u8,
    pub overview: String,
    pub modules: Vec<ModuleContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_notes: Option<String>,
}

impl ProgramSubmission {
    pub fn objective_count(&self) -> usize {
        self.modules.iter().map(|module| module.objectives.len()).sum()
    }
}
