//! # AI Foundry Completion Client
//!
//! Implements the `CompletionProvider` trait against the AI Foundry HTTP
//! endpoint. One POST per query, fixed timeout, no retry. Every failure class
//! is folded into a `CompletionOutcome`; nothing here errors outward.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

use crate::domain::config::CompletionConfig;
use crate::domain::traits::CompletionProvider;
use crate::domain::types::CompletionOutcome;
use crate::strings::messages;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_TOKENS: u32 = 150;
const TEMPERATURE: f32 = 0.7;

/// HTTP client reused across requests
fn http_client() -> &'static Client {
    use std::sync::OnceLock;
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| Client::builder().build().expect("Failed to create HTTP client"))
}

/// AI Foundry request format
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    query: &'a str,
    max_tokens: u32,
    temperature: f32,
}

pub struct FoundryClient {
    config: CompletionConfig,
    timeout: Duration,
}

impl FoundryClient {
    pub fn new(config: CompletionConfig) -> Self {
        Self {
            config,
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Execute one completion exchange and classify the result.
    pub async fn request(&self, query: &str) -> CompletionOutcome {
        if !self.config.is_configured() {
            tracing::warn!("Completion requested but AI Foundry endpoint/key are not configured");
            return CompletionOutcome::ConfigMissing;
        }

        let request = CompletionRequest {
            query,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        let result = http_client()
            .post(&self.config.endpoint)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(&request)
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                tracing::warn!("AI Foundry request timed out after {:?}", self.timeout);
                return CompletionOutcome::Timeout;
            }
            Err(e) => {
                tracing::error!("AI Foundry request failed: {}", e);
                return CompletionOutcome::NetworkError;
            }
        };

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::error!("AI Foundry rejected the API key (HTTP 401)");
            return CompletionOutcome::AuthFailed;
        }
        if status.is_server_error() {
            tracing::error!("AI Foundry unavailable (HTTP {})", status);
            return CompletionOutcome::ServerError;
        }
        if !status.is_success() {
            tracing::error!("AI Foundry returned HTTP {}", status);
            return CompletionOutcome::NetworkError;
        }

        match response.json::<serde_json::Value>().await {
            Ok(body) => parse_completion(&body),
            Err(e) if e.is_timeout() => {
                tracing::warn!("AI Foundry response body timed out");
                CompletionOutcome::Timeout
            }
            Err(e) => {
                tracing::error!("Failed to parse AI Foundry response: {}", e);
                CompletionOutcome::UnexpectedFormat
            }
        }
    }
}

/// Extract the reply text. Priority: the native `response` field, then the
/// OpenAI-style `choices[0].text` / `choices[0].message.content` fallbacks.
fn parse_completion(body: &serde_json::Value) -> CompletionOutcome {
    if let Some(text) = body.get("response").and_then(|v| v.as_str()) {
        return CompletionOutcome::Success(text.to_string());
    }

    if let Some(choice) = body.get("choices").and_then(|c| c.get(0)) {
        let text = choice
            .get("text")
            .and_then(|v| v.as_str())
            .or_else(|| choice.pointer("/message/content").and_then(|v| v.as_str()))
            .unwrap_or(messages::FOUNDRY_NO_RESPONSE);
        return CompletionOutcome::Success(text.to_string());
    }

    CompletionOutcome::UnexpectedFormat
}

#[async_trait]
impl CompletionProvider for FoundryClient {
    async fn complete(&self, query: &str) -> String {
        let outcome = self.request(query).await;
        tracing::info!(outcome = outcome.label(), "Completion finished");
        outcome.into_message()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: &str, api_key: &str) -> CompletionConfig {
        CompletionConfig {
            endpoint: endpoint.to_string(),
            api_key: api_key.to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_config_short_circuits() {
        let client = FoundryClient::new(config("", ""));
        assert_eq!(client.request("hi").await, CompletionOutcome::ConfigMissing);
        assert_eq!(client.complete("hi").await, messages::FOUNDRY_NOT_CONFIGURED);

        let client = FoundryClient::new(config("https://foundry.example", ""));
        assert_eq!(client.request("hi").await, CompletionOutcome::ConfigMissing);
    }

    #[tokio::test]
    async fn test_response_field_wins() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_header("authorization", "Bearer test-key")
            .match_header("content-type", "application/json")
            .with_status(200)
            .with_body(r#"{"response": "X", "choices": [{"text": "ignored"}]}"#)
            .create_async()
            .await;

        let client = FoundryClient::new(config(&server.url(), "test-key"));
        assert_eq!(client.complete("q").await, "X");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_request_body_shape() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "query": "how are you?",
                "max_tokens": 150,
                "temperature": 0.7,
            })))
            .with_status(200)
            .with_body(r#"{"response": "fine"}"#)
            .create_async()
            .await;

        let client = FoundryClient::new(config(&server.url(), "test-key"));
        assert_eq!(client.complete("how are you?").await, "fine");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_choices_fallbacks() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"choices": [{"text": "from text"}]}"#)
            .create_async()
            .await;
        let client = FoundryClient::new(config(&server.url(), "k"));
        assert_eq!(client.complete("q").await, "from text");

        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"choices": [{"message": {"content": "from message"}}]}"#)
            .create_async()
            .await;
        let client = FoundryClient::new(config(&server.url(), "k"));
        assert_eq!(client.complete("q").await, "from message");

        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"choices": [{}]}"#)
            .create_async()
            .await;
        let client = FoundryClient::new(config(&server.url(), "k"));
        assert_eq!(client.complete("q").await, messages::FOUNDRY_NO_RESPONSE);
    }

    #[tokio::test]
    async fn test_unexpected_format() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"result": "nope"}"#)
            .create_async()
            .await;
        let client = FoundryClient::new(config(&server.url(), "k"));
        assert_eq!(
            client.complete("q").await,
            messages::FOUNDRY_UNEXPECTED_FORMAT
        );
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(401)
            .create_async()
            .await;
        let client = FoundryClient::new(config(&server.url(), "bad-key"));
        assert_eq!(client.request("q").await, CompletionOutcome::AuthFailed);

        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(503)
            .create_async()
            .await;
        let client = FoundryClient::new(config(&server.url(), "k"));
        assert_eq!(client.request("q").await, CompletionOutcome::ServerError);

        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(404)
            .create_async()
            .await;
        let client = FoundryClient::new(config(&server.url(), "k"));
        assert_eq!(client.request("q").await, CompletionOutcome::NetworkError);
    }

    #[tokio::test]
    async fn test_timeout_maps_to_fixed_string() {
        // A listener that accepts connections but never answers.
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let _socket = listener.accept().await;
            tokio::time::sleep(Duration::from_secs(60)).await;
        });

        let client = FoundryClient {
            config: config(&format!("http://{}", addr), "k"),
            timeout: Duration::from_millis(200),
        };
        assert_eq!(client.request("q").await, CompletionOutcome::Timeout);
        assert_eq!(client.complete("q").await, messages::FOUNDRY_TIMEOUT);
    }
}
