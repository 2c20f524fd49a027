//! Common test utilities for cram-quiz client tests.

use cram_quiz::{Config, ModelClient, Provider};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wiremock::matchers::{body_partial_json, method, path};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create a client for `provider` pointed at the mock server.
pub fn client_for_mock(server: &MockServer, provider: Provider) -> ModelClient {
    let config = Config {
        provider,
        api_key: "test-key".to_string(),
        model: "test-model".to_string(),
    };
    ModelClient::builder(&config).base_url(server.uri()).build()
}

/// An OpenAI chat-completions reply carrying `text`.
pub fn openai_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "choices": [
            {"message": {"role": "assistant", "content": text}}
        ]
    }))
}

/// An Anthropic messages reply carrying `text`.
#[allow(dead_code)]
pub fn anthropic_reply(text: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "content": [
            {"type": "text", "text": text}
        ]
    }))
}

/// Mount a mock for the OpenAI endpoint (expect exactly 1 call).
pub async fn mock_openai(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(body_partial_json(serde_json::json!({
            "model": "test-model"
        })))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}

/// Mount a mock for the Anthropic endpoint (expect exactly 1 call).
#[allow(dead_code)]
pub async fn mock_anthropic(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/messages"))
        .and(body_partial_json(serde_json::json!({
            "model": "test-model"
        })))
        .respond_with(response)
        .expect(1)
        .mount(server)
        .await;
}
