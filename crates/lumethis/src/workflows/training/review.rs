use std::sync::Arc;

use tracing::{debug, info, warn};

use super::domain::{ProgramSubmission, ReviewAction, SubmissionId, SubmissionStatus};
use super::repository::{RepositoryError, SubmissionRepository};
use super::visibility::{compute_visible, EmptyState};
use crate::identity::{UserId, UserIdentity};

/// Per-user review state: who is looking, what they can see, and what is selected.
///
/// The repository is the authoritative submission list. The session keeps a
/// role-filtered copy that is recomputed whenever the user changes and patched in
/// place when a status transition succeeds.
pub struct ReviewSession<R> {
    repository: Arc<R>,
    current_user: UserIdentity,
    visible: Vec<ProgramSubmission>,
    selected: Option<SubmissionId>,
}

impl<R> ReviewSession<R>
where
    R: SubmissionRepository + 'static,
{
    pub fn open(repository: Arc<R>, user: UserIdentity) -> Result<Self, ReviewError> {
        let mut session = Self {
            repository,
            current_user: user.clone(),
            visible: Vec::new(),
            selected: None,
        };
        session.on_user_changed(user)?;
        Ok(session)
    }

    pub fn current_user(&self) -> &UserIdentity {
        &self.current_user
    }

    pub fn visible(&self) -> &[ProgramSubmission] {
        &self.visible
    }

    pub fn selected_id(&self) -> Option<&SubmissionId> {
        self.selected.as_ref()
    }

    pub fn selected(&self) -> Option<&ProgramSubmission> {
        let id = self.selected.as_ref()?;
        self.visible.iter().find(|submission| &submission.id == id)
    }

    /// Whether the review controls should be offered to the current user.
    pub fn can_review(&self) -> bool {
        self.current_user.is_group_admin()
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.visible.is_empty() {
            Some(EmptyState::for_role(self.current_user.role))
        } else {
            None
        }
    }

    /// Switch to `user`, recomputing the visible set and selecting its first entry.
    ///
    /// The session never keeps the previous user's view: if the repository cannot be
    /// read the visible set is cleared before the error is returned.
    pub fn on_user_changed(&mut self, user: UserIdentity) -> Result<(), ReviewError> {
        self.current_user = user;
        self.visible.clear();
        self.selected = None;

        let all = self.repository.all()?;
        self.visible = compute_visible(&all, &self.current_user);
        self.selected = self.visible.first().map(|submission| submission.id.clone());

        debug!(
            user = %self.current_user.id,
            role = self.current_user.role.label(),
            visible = self.visible.len(),
            "recomputed visible submissions"
        );
        Ok(())
    }

    /// Select `id` if it is in the visible set. Returns whether the selection changed.
    pub fn select(&mut self, id: &SubmissionId) -> bool {
        if !self.visible.iter().any(|submission| &submission.id == id) {
            return false;
        }
        self.selected = Some(id.clone());
        true
    }

    /// Re-read the repository for the current user, keeping the selection while it
    /// remains visible.
    pub fn refresh(&mut self) -> Result<(), ReviewError> {
        let all = self.repository.all()?;
        self.visible = compute_visible(&all, &self.current_user);
        let still_visible = self
            .selected
            .as_ref()
            .is_some_and(|id| self.visible.iter().any(|submission| &submission.id == id));
        if !still_visible {
            self.selected = self.visible.first().map(|submission| submission.id.clone());
        }
        Ok(())
    }

    /// Set the status of submission `id`. Only group admins may do this.
    ///
    /// Any status may follow any other. No other field is touched, and relative
    /// ordering is unchanged.
    pub fn request_status_change(
        &mut self,
        id: &SubmissionId,
        new_status: SubmissionStatus,
        requesting_user: &UserIdentity,
    ) -> Result<ProgramSubmission, ReviewError> {
        if !requesting_user.is_group_admin() {
            warn!(
                user = %requesting_user.id,
                submission = %id,
                "rejected status change from non-admin"
            );
            return Err(ReviewError::Permission {
                user: requesting_user.id.clone(),
                submission: id.clone(),
            });
        }

        let previous = self
            .repository
            .fetch(id)?
            .map(|submission| submission.status);

        let updated = match self.repository.update_status(id, new_status) {
            Ok(updated) => updated,
            Err(RepositoryError::NotFound) => {
                warn!(user = %requesting_user.id, submission = %id, "status change for unknown submission");
                return Err(ReviewError::NotFound(id.clone()));
            }
            Err(other) => return Err(other.into()),
        };

        if let Some(entry) = self
            .visible
            .iter_mut()
            .find(|submission| submission.id == updated.id)
        {
            entry.status = updated.status;
        }

        info!(
            submission = %id,
            from = previous.map(SubmissionStatus::label).unwrap_or("unknown"),
            to = new_status.label(),
            by = %requesting_user.id,
            "submission status changed"
        );
        Ok(updated)
    }

    /// Apply one of the review controls to the selected submission as the current user.
    pub fn review_selected(
        &mut self,
        action: ReviewAction,
    ) -> Result<ProgramSubmission, ReviewError> {
        let id = self.selected.clone().ok_or(ReviewError::NoSelection)?;
        let user = self.current_user.clone();
        self.request_status_change(&id, action.target_status(), &user)
    }
}

/// Error raised by the review session.
#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("user {user} is not authorized to change the status of {submission}")]
    Permission {
        user: UserId,
        submission: SubmissionId,
    },
    #[error("submission {0} not found")]
    NotFound(SubmissionId),
    #[error("no submission selected")]
    NoSelection,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
