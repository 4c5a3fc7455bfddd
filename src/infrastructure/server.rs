//! # HTTP Surface
//!
//! The inbound edge of the bot: `POST /api/messages` receives one Bot
//! Framework activity per request and `GET /health` answers liveness probes.
//! Every activity is acknowledged with 200 once its turn completes; turn
//! failures are logged, never propagated to the transport.

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;

use crate::application::router::MessageRouter;
use crate::domain::config::AppConfig;
use crate::domain::traits::ChatSurface;
use crate::infrastructure::teams::{Activity, TeamsConnector};
use crate::interface::handlers;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub router: Arc<MessageRouter>,
}

/// Build the HTTP router for the bot.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/messages", post(handle_activity))
        .route("/health", get(health_check))
        .with_state(state)
}

async fn handle_activity(
    State(state): State<AppState>,
    Json(activity): Json<Activity>,
) -> StatusCode {
    tracing::debug!(kind = %activity.kind, "Inbound activity");

    let connector =
        match TeamsConnector::from_activity(&activity, state.config.connector.token.clone()) {
            Ok(connector) => connector,
            Err(e) => {
                tracing::warn!("Dropping activity without a reply route: {:#}", e);
                return StatusCode::OK;
            }
        };

    if activity.is_message() {
        let text = activity.text.clone().unwrap_or_default();
        tracing::info!(
            "Received message in {}: {}",
            connector.conversation_id(),
            text
        );
        if let Err(e) = state.router.route(&connector, &text).await {
            tracing::error!("Failed to route message: {:#}", e);
        }
    } else if activity.is_conversation_update() {
        if let Err(e) = handlers::welcome::handle_members_added(&activity, &connector).await {
            tracing::error!("Failed to deliver welcome card: {:#}", e);
        }
    } else {
        tracing::debug!(kind = %activity.kind, "Ignoring activity kind");
    }

    StatusCode::OK
}

/// Health check endpoint.
async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::traits::{CompletionProvider, SpeechSynthesizer};
    use async_trait::async_trait;

    struct StaticCompletion;

    #[async_trait]
    impl CompletionProvider for StaticCompletion {
        async fn complete(&self, _query: &str) -> String {
            "ok".to_string()
        }
    }

    struct NoSpeech;

    #[async_trait]
    impl SpeechSynthesizer for NoSpeech {
        async fn synthesize(&self, _text: &str) -> bool {
            false
        }
    }

    async fn spawn_app() -> String {
        let state = AppState {
            config: AppConfig::default(),
            router: Arc::new(MessageRouter::new(
                Arc::new(StaticCompletion),
                Arc::new(NoSpeech),
            )),
        };
        let app = build_router(state);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let base = spawn_app().await;
        let body: Value = reqwest::get(format!("{}/health", base))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_session_turn_end_to_end() {
        let mut connector = mockito::Server::new_async().await;
        // "start voice" produces exactly one outbound activity: the card.
        let outbound = connector
            .mock("POST", "/v3/conversations/conv-9/activities")
            .with_status(200)
            .expect(1)
            .create_async()
            .await;

        let base = spawn_app().await;
        let activity = json!({
            "type": "message",
            "text": "start voice",
            "serviceUrl": connector.url(),
            "from": {"id": "user"},
            "recipient": {"id": "bot"},
            "conversation": {"id": "conv-9"},
        });
        let response = reqwest::Client::new()
            .post(format!("{}/api/messages", base))
            .json(&activity)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        outbound.assert_async().await;
    }

    #[tokio::test]
    async fn test_member_added_gets_welcome_card() {
        let mut connector = mockito::Server::new_async().await;
        let outbound = connector
            .mock("POST", "/v3/conversations/conv-2/activities")
            .match_body(mockito::Matcher::PartialJson(json!({
                "attachments": [{
                    "contentType": "application/vnd.microsoft.card.adaptive",
                }],
            })))
            .with_status(200)
            .expect(1)
            .create_async()
            .await;

        let base = spawn_app().await;
        let activity = json!({
            "type": "conversationUpdate",
            "serviceUrl": connector.url(),
            "recipient": {"id": "bot"},
            "conversation": {"id": "conv-2"},
            "membersAdded": [{"id": "bot"}, {"id": "user-7"}],
        });
        let response = reqwest::Client::new()
            .post(format!("{}/api/messages", base))
            .json(&activity)
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), reqwest::StatusCode::OK);
        outbound.assert_async().await;
    }
}
