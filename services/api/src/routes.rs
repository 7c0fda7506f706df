use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Extension, Json, Router};
use lumethis::dashboard::DashboardCatalog;
use lumethis::identity::{OrganizationalUnit, UserIdentity};
use lumethis::workflows::generators::{generator_router, CompletionService, Generators};
use lumethis::workflows::training::{training_router, SubmissionRepository};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub(crate) struct RosterEntry {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) role: &'static str,
    pub(crate) title: Option<String>,
    pub(crate) unit: Option<OrganizationalUnit>,
    pub(crate) scope: String,
}

impl From<&UserIdentity> for RosterEntry {
    fn from(user: &UserIdentity) -> Self {
        Self {
            id: user.id.to_string(),
            name: user.name.clone(),
            role: user.role.label(),
            title: user.title.clone(),
            unit: user.unit,
            scope: user.scope_label(),
        }
    }
}

pub(crate) fn with_dashboard_routes<R, C>(
    repository: Arc<R>,
    generators: Arc<Generators<C>>,
    state: &AppState,
) -> Router
where
    R: SubmissionRepository + 'static,
    C: CompletionService + 'static,
{
    training_router(repository, state.roster.clone())
        .merge(generator_router(generators))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/dashboard", get(dashboard_endpoint))
        .route("/api/v1/roster", get(roster_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn dashboard_endpoint() -> Json<DashboardCatalog> {
    Json(DashboardCatalog::standard())
}

pub(crate) async fn roster_endpoint(Extension(state): Extension<AppState>) -> Json<Vec<RosterEntry>> {
    Json(state.roster.users().iter().map(RosterEntry::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use lumethis::config::GenAiConfig;
    use lumethis::identity::Roster;
    use lumethis::workflows::training::{InMemorySubmissionRepository, USER_HEADER};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app(ready: bool) -> Router {
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            roster: Arc::new(Roster::standard()),
        };
        let repository = Arc::new(InMemorySubmissionRepository::seeded());
        let generators =
            crate::infra::build_generators(&GenAiConfig::default()).expect("client builds");
        with_dashboard_routes(repository, generators, &state).layer(Extension(state))
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn readiness_reflects_flag() {
        let response = app(false)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let response = app(true)
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn roster_lists_every_login_identity() {
        let response = app(true)
            .oneshot(Request::get("/api/v1/roster").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        let users = body.as_array().expect("array");
        assert_eq!(users.len(), Roster::standard().users().len());
        assert_eq!(users[0]["id"], "u1");
        assert_eq!(users[0]["role"], "Group Admin");
    }

    #[tokio::test]
    async fn dashboard_serves_catalog() {
        let response = app(true)
            .oneshot(Request::get("/api/v1/dashboard").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let body = json_body(response).await;
        assert_eq!(body["stats"][0]["value"], "1,245");
        assert_eq!(body["navigation"].as_array().map(Vec::len), Some(7));
    }

    #[tokio::test]
    async fn merged_training_routes_scope_by_header() {
        let response = app(true)
            .oneshot(
                Request::get("/api/v1/training/submissions")
                    .header(USER_HEADER, "u3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["submissions"].as_array().map(Vec::len), Some(1));
        assert_eq!(body["can_review"], false);
    }

    #[tokio::test]
    async fn generation_without_key_returns_null_result() {
        let response = app(true)
            .oneshot(
                Request::post("/api/v1/generate/strategy")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        r#"{"topic":"Safety","audience":"Technicians","duration":"1 Week"}"#,
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert!(body["result"].is_null());
    }

    #[tokio::test]
    async fn generation_rejects_blank_required_fields() {
        let response = app(true)
            .oneshot(
                Request::post("/api/v1/generate/skill-gap")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"role":"  ","current_skills":"Excel"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_body(response).await;
        assert_eq!(body["fields"], json!(["role"]));
    }
}
