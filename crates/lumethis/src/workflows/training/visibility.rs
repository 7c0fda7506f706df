use serde::Serialize;

use super::domain::ProgramSubmission;
use crate::identity::{UserIdentity, UserRole};

/// Role-filtered view of `all` for `user`, in the original relative order.
///
/// Group admins see everything. Subsidiary managers see only their own unit's
/// submissions; a manager with no unit assigned sees nothing.
pub fn compute_visible(all: &[ProgramSubmission], user: &UserIdentity) -> Vec<ProgramSubmission> {
    match user.role {
        UserRole::GroupAdmin => all.to_vec(),
        UserRole::SubsidiaryManager => match user.unit {
            Some(unit) => all
                .iter()
                .filter(|submission| submission.unit == unit)
                .cloned()
                .collect(),
            None => Vec::new(),
        },
    }
}

pub fn is_visible_to(submission: &ProgramSubmission, user: &UserIdentity) -> bool {
    match user.role {
        UserRole::GroupAdmin => true,
        UserRole::SubsidiaryManager => user.unit == Some(submission.unit),
    }
}

pub const fn panel_heading(role: UserRole) -> &'static str {
    match role {
        UserRole::GroupAdmin => "Incoming Submissions",
        UserRole::SubsidiaryManager => "My Submissions",
    }
}

pub const fn panel_subheading(role: UserRole) -> &'static str {
    match role {
        UserRole::GroupAdmin => "Review and standardize subsidiary manuals",
        UserRole::SubsidiaryManager => "Manage your training documents",
    }
}

/// Message shown when a user's visible set is empty. Wording differs by role only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmptyState {
    pub heading: &'static str,
    pub message: &'static str,
}

impl EmptyState {
    pub const fn for_role(role: UserRole) -> Self {
        let message = match role {
            UserRole::GroupAdmin => "There are no pending submissions from any subsidiary.",
            UserRole::SubsidiaryManager => {
                "You haven't submitted any training programs yet. Please create a new submission."
            }
        };
        Self {
            heading: "No Submissions Found",
            message,
        }
    }
}
