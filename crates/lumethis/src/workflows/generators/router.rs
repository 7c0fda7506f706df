use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::client::CompletionService;
use super::service::Generators;
use super::survey::DEFAULT_RESPONDENT_ROLE;

#[derive(Debug, Deserialize)]
pub struct StrategyRequest {
    pub topic: String,
    pub audience: String,
    #[serde(default)]
    pub duration: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillGapRequest {
    pub role: String,
    pub current_skills: String,
    #[serde(default)]
    pub business_goal: String,
}

#[derive(Debug, Deserialize)]
pub struct SurveyRequest {
    pub focus_area: String,
    #[serde(default)]
    pub respondent_role: Option<String>,
    pub intent: String,
}

/// `result` is `null` whenever generation produced nothing.
#[derive(Debug, Serialize)]
pub struct GenerationResponse<T> {
    pub result: Option<T>,
}

/// Router builder exposing the content generators over HTTP.
pub fn generator_router<C>(generators: Arc<Generators<C>>) -> Router
where
    C: CompletionService + 'static,
{
    Router::new()
        .route("/api/v1/generate/strategy", post(strategy_handler::<C>))
        .route("/api/v1/generate/skill-gap", post(skill_gap_handler::<C>))
        .route("/api/v1/generate/survey", post(survey_handler::<C>))
        .with_state(generators)
}

fn missing_fields(fields: &[(&'static str, &str)]) -> Option<Response> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        return None;
    }
    let payload = json!({
        "error": "required fields are blank",
        "fields": missing,
    });
    Some((StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response())
}

pub(crate) async fn strategy_handler<C>(
    State(generators): State<Arc<Generators<C>>>,
    Json(request): Json<StrategyRequest>,
) -> Response
where
    C: CompletionService + 'static,
{
    if let Some(rejection) =
        missing_fields(&[("topic", request.topic.as_str()), ("audience", request.audience.as_str())])
    {
        return rejection;
    }
    let result = generators
        .generate_training_strategy(&request.topic, &request.audience, &request.duration)
        .await;
    (StatusCode::OK, Json(GenerationResponse { result })).into_response()
}

pub(crate) async fn skill_gap_handler<C>(
    State(generators): State<Arc<Generators<C>>>,
    Json(request): Json<SkillGapRequest>,
) -> Response
where
    C: CompletionService + 'static,
{
    if let Some(rejection) = missing_fields(&[
        ("role", request.role.as_str()),
        ("current_skills", request.current_skills.as_str()),
    ]) {
        return rejection;
    }
    let result = generators
        .analyze_skill_gap(
            &request.role,
            &request.current_skills,
            &request.business_goal,
        )
        .await;
    (StatusCode::OK, Json(GenerationResponse { result })).into_response()
}

pub(crate) async fn survey_handler<C>(
    State(generators): State<Arc<Generators<C>>>,
    Json(request): Json<SurveyRequest>,
) -> Response
where
    C: CompletionService + 'static,
{
    if let Some(rejection) = missing_fields(&[
        ("focus_area", request.focus_area.as_str()),
        ("intent", request.intent.as_str()),
    ]) {
        return rejection;
    }
    let respondent_role = request
        .respondent_role
        .as_deref()
        .map(str::trim)
        .filter(|role| !role.is_empty())
        .unwrap_or(DEFAULT_RESPONDENT_ROLE);
    let result = generators
        .generate_needs_assessment_survey(&request.focus_area, respondent_role, &request.intent)
        .await;
    (StatusCode::OK, Json(GenerationResponse { result })).into_response()
}
