//! Integration tests for the OpenAI Responses backend against a mock server.
//!
//! Covers the request shape (model, input, token budget, bearer key), text
//! extraction from the `output` array, and how provider failures surface
//! through [`NoteAnalyzer`].

#![cfg(feature = "openai")]

use std::sync::Arc;

use grounds_core::{fallback_analysis, Error, GenerationBackend, Sentiment};
use grounds_inference::openai::{OpenAIBackend, OpenAIConfig};
use grounds_inference::NoteAnalyzer;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn backend_for(server: &MockServer) -> OpenAIBackend {
    let config = OpenAIConfig {
        base_url: server.uri(),
        api_key: Some("test-key".to_string()),
        gen_model: "test-gen".to_string(),
        max_output_tokens: 256,
        timeout_seconds: 10,
    };
    OpenAIBackend::new(config).expect("Failed to create backend")
}

fn text_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "resp_123",
        "output": [{
            "type": "message",
            "content": [{ "type": "output_text", "text": text }]
        }],
        "usage": { "input_tokens": 40, "output_tokens": 20, "total_tokens": 60 }
    })
}

#[tokio::test]
async fn test_generate_sends_expected_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .and(header("Authorization", "Bearer test-key"))
        .and(header("Content-Type", "application/json"))
        .and(body_partial_json(serde_json::json!({
            "model": "test-gen",
            "input": "hello",
            "max_output_tokens": 256,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("Hi there")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let backend = backend_for(&mock_server);
    let text = backend.generate("hello").await.unwrap();
    assert_eq!(text, "Hi there");
}

#[tokio::test]
async fn test_generate_without_text_output_is_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "output": [] })),
        )
        .mount(&mock_server)
        .await;

    let err = backend_for(&mock_server).generate("hello").await.unwrap_err();
    assert!(matches!(err, Error::Inference(_)));
    assert!(!err.is_rate_limited());
}

#[tokio::test]
async fn test_429_maps_to_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": {
                "message": "You exceeded your current quota",
                "type": "insufficient_quota",
                "code": "insufficient_quota"
            }
        })))
        .mount(&mock_server)
        .await;

    let err = backend_for(&mock_server).generate("hello").await.unwrap_err();
    assert!(matches!(err, Error::RateLimited(_)));
    assert!(err.to_string().contains("You exceeded your current quota"));
}

#[tokio::test]
async fn test_500_with_plain_body_is_inference_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
        .mount(&mock_server)
        .await;

    let err = backend_for(&mock_server).generate("hello").await.unwrap_err();
    assert!(matches!(err, Error::Inference(_)));
    assert!(err.to_string().contains("upstream exploded"));
}

#[tokio::test]
async fn test_analyzer_uses_model_json_wrapped_in_prose() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response(
            "Sure! ```json\n{\"summary\":\"Calm spot with cold brew.\",\"sentiment\":\"positive\",\"tags\":[\"cold-brew\",\"quiet\"]}\n```",
        )))
        .mount(&mock_server)
        .await;

    let analyzer = NoteAnalyzer::new(Arc::new(backend_for(&mock_server)));
    let analysis = analyzer.analyze("quiet, cold brew").await.unwrap();
    assert_eq!(analysis.summary, "Calm spot with cold brew.");
    assert_eq!(analysis.sentiment, Sentiment::Positive);
    assert_eq!(analysis.tags, vec!["cold-brew", "quiet"]);
}

#[tokio::test]
async fn test_analyzer_falls_back_on_429() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&mock_server)
        .await;

    let note = "Loud but great wifi, perfect for studying";
    let analyzer = NoteAnalyzer::new(Arc::new(backend_for(&mock_server)));
    let analysis = analyzer.analyze(note).await.unwrap();
    assert_eq!(analysis, fallback_analysis(note));
}

#[tokio::test]
async fn test_analyzer_surfaces_server_errors() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/responses"))
        .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
            "error": { "message": "The server is overloaded", "type": "server_error" }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let analyzer = NoteAnalyzer::new(Arc::new(backend_for(&mock_server)));
    let err = analyzer.analyze("anything").await.unwrap_err();
    assert!(err.to_string().contains("The server is overloaded"));
}
