//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses.

use serde_json::{json, Value};
use teloxide::Bot;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use super::test_bot_token;

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self { success: true }
    }
}

/// A request the bot sent to the mock server
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub endpoint: String,
    pub body: Value,
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Bot whose requests go to this server
    pub fn create_bot(&self) -> Bot {
        let api_url = self.server.uri().parse().expect("Mock server uri must be a valid url");
        Bot::new(test_bot_token()).set_api_url(api_url)
    }

    fn endpoint_path(endpoint: &str) -> String {
        format!("/bot{}/{}", test_bot_token(), endpoint)
    }

    /// Setup mock for sendMessage endpoint
    ///
    /// teloxide names request paths after its payload types, e.g. `SendMessage`.
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        let (status, body) = if config.success {
            (200, json!({
                "ok": true,
                "result": {
                    "message_id": 123,
                    "from": {
                        "id": 12345,
                        "is_bot": true,
                        "first_name": "TestBot",
                        "username": "test_bot"
                    },
                    "chat": {
                        "id": -1001234567890_i64,
                        "title": "Test Group",
                        "type": "supergroup"
                    },
                    "date": 1640995200,
                    "text": "Test message"
                }
            }))
        } else {
            (400, json!({
                "ok": false,
                "error_code": 400,
                "description": "Bad Request: message text is empty"
            }))
        };

        Mock::given(method("POST"))
            .and(path(Self::endpoint_path("SendMessage")))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for answerCallbackQuery endpoint
    pub async fn mock_answer_callback_query(&self) {
        Mock::given(method("POST"))
            .and(path(Self::endpoint_path("AnswerCallbackQuery")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "ok": true,
                "result": true
            })))
            .mount(&self.server)
            .await;
    }

    /// Setup all mocks the bot uses
    pub async fn setup_default_mocks(&self) {
        self.mock_send_message(MockResponseConfig::default()).await;
        self.mock_answer_callback_query().await;
    }

    /// All calls received so far, in arrival order
    pub async fn calls(&self) -> Vec<RecordedCall> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .map(|request| RecordedCall {
                endpoint: request
                    .url
                    .path()
                    .rsplit('/')
                    .next()
                    .unwrap_or_default()
                    .to_string(),
                body: serde_json::from_slice(&request.body).unwrap_or(Value::Null),
            })
            .collect()
    }

    /// Calls to a single endpoint
    pub async fn calls_to(&self, endpoint: &str) -> Vec<RecordedCall> {
        self.calls()
            .await
            .into_iter()
            .filter(|call| call.endpoint == endpoint)
            .collect()
    }

    /// Verify the number of calls to an endpoint
    pub async fn verify_telegram_calls(&self, endpoint: &str, expected_calls: usize) {
        let actual = self.calls_to(endpoint).await.len();
        assert_eq!(
            actual, expected_calls,
            "Expected {} calls to {}, got {}",
            expected_calls, endpoint, actual
        );
    }
}
