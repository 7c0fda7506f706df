use std::sync::Arc;
use std::time::Duration;

use lumethis::config::GenAiConfig;
use lumethis::workflows::generators::{
    CompletionRequest, CompletionService, GeminiClient, GenerationFailure, Generators,
    ResponseSchema,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-test";
const GENERATE_PATH: &str = "/models/gemini-test:generateContent";

fn config_for(server: &MockServer, api_key: Option<&str>) -> GenAiConfig {
    GenAiConfig {
        api_key: api_key.map(str::to_string),
        base_url: server.uri(),
        model: MODEL.to_string(),
        timeout: Duration::from_secs(5),
    }
}

fn candidate_body(text: &str) -> serde_json::Value {
    json!({
        "candidates": [{
            "content": { "parts": [{ "text": text }], "role": "model" },
            "finishReason": "STOP"
        }]
    })
}

#[tokio::test]
async fn text_completion_posts_prompt_with_api_key_header() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [{ "text": "Describe the gap" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("Needs coaching.")))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(&config_for(&server, Some("test-key"))).unwrap();
    let text = client
        .complete(CompletionRequest::text(MODEL, "Describe the gap"))
        .await
        .unwrap();
    assert_eq!(text, "Needs coaching.");
}

#[tokio::test]
async fn structured_request_carries_response_schema() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .and(body_partial_json(json!({
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": { "title": { "type": "STRING" } },
                    "required": ["title"]
                }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(r#"{"title":"ok"}"#)))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::new(&config_for(&server, Some("test-key"))).unwrap();
    let schema = ResponseSchema::object(vec![("title", ResponseSchema::String)]);
    let text = client
        .complete(CompletionRequest::structured(MODEL, "Name it", schema))
        .await
        .unwrap();
    assert_eq!(text, r#"{"title":"ok"}"#);
}

#[tokio::test]
async fn concatenates_every_part_of_the_first_candidate() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                { "content": { "parts": [{ "text": "Part one. " }, { "text": "Part two." }] } },
                { "content": { "parts": [{ "text": "ignored" }] } }
            ]
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::new(&config_for(&server, Some("test-key"))).unwrap();
    let text = client
        .complete(CompletionRequest::text(MODEL, "hi"))
        .await
        .unwrap();
    assert_eq!(text, "Part one. Part two.");
}

#[tokio::test]
async fn non_success_status_surfaces_service_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "code": 429, "message": "quota exhausted", "status": "RESOURCE_EXHAUSTED" }
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::new(&config_for(&server, Some("test-key"))).unwrap();
    let err = client
        .complete(CompletionRequest::text(MODEL, "hi"))
        .await
        .unwrap_err();
    match err {
        GenerationFailure::Status { status, message } => {
            assert_eq!(status, 429);
            assert_eq!(message, "quota exhausted");
        }
        other => panic!("expected status failure, got {other:?}"),
    }
}

#[tokio::test]
async fn empty_candidates_are_reported_as_empty_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let client = GeminiClient::new(&config_for(&server, Some("test-key"))).unwrap();
    let err = client
        .complete(CompletionRequest::text(MODEL, "hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationFailure::EmptyResponse));
}

#[tokio::test]
async fn missing_key_never_reaches_the_network() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let client = GeminiClient::new(&config_for(&server, None)).unwrap();
    assert!(!client.is_enabled());
    let err = client
        .complete(CompletionRequest::text(MODEL, "hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationFailure::Disabled));

    let generators = Generators::new(Arc::new(client), MODEL);
    assert!(generators
        .generate_training_strategy("Safety", "Technicians", "1 Week")
        .await
        .is_none());
}

#[tokio::test]
async fn generators_recover_from_server_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&server)
        .await;

    let client = GeminiClient::new(&config_for(&server, Some("test-key"))).unwrap();
    let generators = Generators::new(Arc::new(client), MODEL);

    assert!(generators
        .generate_needs_assessment_survey("LMS Adoption", "HR Directors", "Consolidate vendors")
        .await
        .is_none());
}

#[tokio::test]
async fn generator_parses_plan_returned_by_the_service() {
    let server = MockServer::start().await;
    let plan = json!({
        "title": "Drone Pilot Readiness",
        "overview": "Certification track",
        "modules": [
            { "name": "Airspace Rules", "objectives": ["Read NOTAMs"], "duration": "1 Day", "sfiaLevel": "Level 3" }
        ]
    });

    Mock::given(method("POST"))
        .and(path(GENERATE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate_body(&plan.to_string())))
        .mount(&server)
        .await;

    let client = GeminiClient::new(&config_for(&server, Some("test-key"))).unwrap();
    let generators = Generators::new(Arc::new(client), MODEL);

    let result = generators
        .generate_training_strategy("Drone Operations", "Field Pilots", "1 Week")
        .await
        .expect("plan parsed");
    assert_eq!(result.title, "Drone Pilot Readiness");
    assert_eq!(result.modules[0].sfia_level.as_deref(), Some("Level 3"));
}
