use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::client::{CompletionRequest, CompletionService, GenerationFailure};
use super::strategy::TrainingPlan;
use super::survey::SurveyPlan;
use super::{skill_gap, strategy, survey};

/// Stateless facade over the three content generators.
///
/// Every generator collapses failure into `None`: the cause is logged and the
/// caller only learns that nothing was produced.
pub struct Generators<C> {
    client: Arc<C>,
    model: String,
}

impl<C> Generators<C>
where
    C: CompletionService + 'static,
{
    pub fn new(client: Arc<C>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn generate_training_strategy(
        &self,
        topic: &str,
        target_audience: &str,
        duration: &str,
    ) -> Option<TrainingPlan> {
        let request = CompletionRequest::structured(
            &self.model,
            strategy::prompt(topic, target_audience, duration),
            strategy::schema(),
        );
        recover("training_strategy", self.structured(request).await)
    }

    pub async fn analyze_skill_gap(
        &self,
        role: &str,
        current_skills: &str,
        business_goal: &str,
    ) -> Option<String> {
        let request = CompletionRequest::text(
            &self.model,
            skill_gap::prompt(role, current_skills, business_goal),
        );
        let result = self
            .client
            .complete(request)
            .await
            .and_then(|text| match text.trim() {
                "" => Err(GenerationFailure::EmptyResponse),
                trimmed => Ok(trimmed.to_string()),
            });
        recover("skill_gap", result)
    }

    pub async fn generate_needs_assessment_survey(
        &self,
        focus_area: &str,
        respondent_role: &str,
        intent: &str,
    ) -> Option<SurveyPlan> {
        let request = CompletionRequest::structured(
            &self.model,
            survey::prompt(focus_area, respondent_role, intent),
            survey::schema(),
        );
        recover("needs_assessment_survey", self.structured(request).await)
    }

    async fn structured<T>(&self, request: CompletionRequest) -> Result<T, GenerationFailure>
    where
        T: DeserializeOwned,
    {
        let text = self.client.complete(request).await?;
        parse_structured(&text)
    }
}

fn recover<T>(generator: &'static str, result: Result<T, GenerationFailure>) -> Option<T> {
    match result {
        Ok(value) => {
            debug!(generator, "generation succeeded");
            Some(value)
        }
        Err(error) => {
            warn!(generator, %error, "generation failed");
            None
        }
    }
}

/// Parse a structured payload, tolerating a surrounding markdown code fence.
pub(crate) fn parse_structured<T>(text: &str) -> Result<T, GenerationFailure>
where
    T: DeserializeOwned,
{
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.trim_end().strip_suffix("```"))
        .unwrap_or(trimmed);

    serde_json::from_str(body.trim()).map_err(|err| GenerationFailure::Malformed(err.to_string()))
}
