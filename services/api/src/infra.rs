use lumethis::config::GenAiConfig;
use lumethis::error::AppError;
use lumethis::identity::Roster;
use lumethis::workflows::generators::{GeminiClient, Generators};
use lumethis::workflows::training::{SubmissionId, SubmissionStatus};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) roster: Arc<Roster>,
}

/// Wires the completion client. A missing key still yields working generators that
/// return nothing, so the routes stay mounted either way.
pub(crate) fn build_generators(
    config: &GenAiConfig,
) -> Result<Arc<Generators<GeminiClient>>, AppError> {
    let client = GeminiClient::new(config)?;
    Ok(Arc::new(Generators::new(Arc::new(client), config.model.clone())))
}

pub(crate) fn parse_status(raw: &str) -> Result<SubmissionStatus, String> {
    SubmissionStatus::from_label(raw).ok_or_else(|| {
        let known: Vec<&str> = SubmissionStatus::ALL
            .iter()
            .map(|status| status.label())
            .collect();
        format!("unknown status '{raw}' (expected one of: {})", known.join(", "))
    })
}

pub(crate) fn parse_submission_id(raw: &str) -> Result<SubmissionId, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err("submission id must not be blank".to_string());
    }
    Ok(SubmissionId::new(trimmed))
}
