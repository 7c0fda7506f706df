use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::domain::{SubmissionId, SubmissionStatus};
use super::repository::{RepositoryError, SubmissionRepository, SubmissionSummaryView};
use super::review::{ReviewError, ReviewSession};
use super::visibility::{panel_heading, panel_subheading, EmptyState};
use crate::identity::{Roster, UserIdentity};

/// Header carrying the roster id of the simulated logged-in user.
pub const USER_HEADER: &str = "x-lumethis-user";

pub struct TrainingState<R> {
    pub repository: Arc<R>,
    pub roster: Arc<Roster>,
}

impl<R> Clone for TrainingState<R> {
    fn clone(&self) -> Self {
        Self {
            repository: self.repository.clone(),
            roster: self.roster.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubmissionListView {
    pub heading: &'static str,
    pub subheading: &'static str,
    pub scope: String,
    pub can_review: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<SubmissionId>,
    pub submissions: Vec<SubmissionSummaryView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_state: Option<EmptyState>,
}

#[derive(Debug, Deserialize)]
pub struct StatusChangeRequest {
    pub status: SubmissionStatus,
}

/// Router builder exposing the review workflow over HTTP.
pub fn training_router<R>(repository: Arc<R>, roster: Arc<Roster>) -> Router
where
    R: SubmissionRepository + 'static,
{
    Router::new()
        .route("/api/v1/training/submissions", get(list_handler::<R>))
        .route(
            "/api/v1/training/submissions/:submission_id",
            get(detail_handler::<R>),
        )
        .route(
            "/api/v1/training/submissions/:submission_id/status",
            post(status_handler::<R>),
        )
        .with_state(TrainingState { repository, roster })
}

fn resolve_user(roster: &Roster, headers: &HeaderMap) -> Result<UserIdentity, Response> {
    let user_id = headers
        .get(USER_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty());

    match user_id.and_then(|id| roster.find(id)) {
        Some(user) => Ok(user.clone()),
        None => {
            let payload = json!({
                "error": format!("missing or unknown {USER_HEADER} header"),
            });
            Err((StatusCode::UNAUTHORIZED, Json(payload)).into_response())
        }
    }
}

fn review_error_response(error: ReviewError) -> Response {
    let status = match &error {
        ReviewError::Permission { .. } => StatusCode::FORBIDDEN,
        ReviewError::NotFound(_) | ReviewError::NoSelection => StatusCode::NOT_FOUND,
        ReviewError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        ReviewError::Repository(RepositoryError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
    };
    let payload = json!({ "error": error.to_string() });
    (status, Json(payload)).into_response()
}

pub(crate) async fn list_handler<R>(
    State(state): State<TrainingState<R>>,
    headers: HeaderMap,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let user = match resolve_user(&state.roster, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };

    let session = match ReviewSession::open(state.repository.clone(), user) {
        Ok(session) => session,
        Err(error) => return review_error_response(error),
    };

    let role = session.current_user().role;
    let view = SubmissionListView {
        heading: panel_heading(role),
        subheading: panel_subheading(role),
        scope: session.current_user().scope_label(),
        can_review: session.can_review(),
        selected: session.selected_id().cloned(),
        submissions: session
            .visible()
            .iter()
            .map(SubmissionSummaryView::from)
            .collect(),
        empty_state: session.empty_state(),
    };
    (StatusCode::OK, Json(view)).into_response()
}

pub(crate) async fn detail_handler<R>(
    State(state): State<TrainingState<R>>,
    Path(submission_id): Path<String>,
    headers: HeaderMap,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let user = match resolve_user(&state.roster, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };

    let mut session = match ReviewSession::open(state.repository.clone(), user) {
        Ok(session) => session,
        Err(error) => return review_error_response(error),
    };

    let id = SubmissionId(submission_id);
    if !session.select(&id) {
        return review_error_response(ReviewError::NotFound(id));
    }
    match session.selected() {
        Some(submission) => (StatusCode::OK, Json(submission.clone())).into_response(),
        None => review_error_response(ReviewError::NotFound(id)),
    }
}

pub(crate) async fn status_handler<R>(
    State(state): State<TrainingState<R>>,
    Path(submission_id): Path<String>,
    headers: HeaderMap,
    Json(request): Json<StatusChangeRequest>,
) -> Response
where
    R: SubmissionRepository + 'static,
{
    let user = match resolve_user(&state.roster, &headers) {
        Ok(user) => user,
        Err(response) => return response,
    };

    let mut session = match ReviewSession::open(state.repository.clone(), user.clone()) {
        Ok(session) => session,
        Err(error) => return review_error_response(error),
    };

    let id = SubmissionId(submission_id);
    match session.request_status_change(&id, request.status, &user) {
        Ok(updated) => (StatusCode::OK, Json(updated)).into_response(),
        Err(error) => review_error_response(error),
    }
}
