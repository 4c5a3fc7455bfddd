//! # Main Entry Point
//!
//! Initializes the bot:
//! - Domain: Configuration (environment) and Types
//! - Infrastructure: HTTP surface, Teams connector, Foundry, Speech
//! - Application: Message Router
//! - Interface: Intent Handlers and Cards

mod application;
mod domain;
mod infrastructure;
mod interface;
mod strings;

use anyhow::{Context, Result};
use std::fs;
use std::sync::Arc;

use crate::application::router::MessageRouter;
use crate::domain::config::AppConfig;
use crate::domain::traits::{CompletionProvider, SpeechSynthesizer};
use crate::infrastructure::foundry::FoundryClient;
use crate::infrastructure::server::{self, AppState};
use crate::infrastructure::speech::AzureSpeechClient;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load Configuration
    let config = AppConfig::from_env();

    // 2. Logging Setup
    if !std::path::Path::new("data").exists() {
        fs::create_dir("data").context("Failed to create data directory")?;
    }

    // Clear previous session log
    let log_path = std::path::Path::new("data/session.log");
    if log_path.exists() {
        let _ = fs::remove_file(log_path);
    }

    let file_appender = tracing_appender::rolling::never("data", "session.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info,hyper=warn,reqwest=warn"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false);

    let console_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stdout);

    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::info!("Starting AI Foundry Voice Bot...");
    log_config_report(&config);

    // 3. Initialize Infrastructure
    let completion: Arc<dyn CompletionProvider> =
        Arc::new(FoundryClient::new(config.completion.clone()));
    let speech: Arc<dyn SpeechSynthesizer> = Arc::new(AzureSpeechClient::new(config.speech.clone()));

    // 4. Application Wiring
    let router = Arc::new(MessageRouter::new(completion, speech));
    let state = AppState {
        config: config.clone(),
        router,
    };

    // 5. HTTP Surface
    let app = server::build_router(state);
    let addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app)
        .await
        .context("HTTP server terminated")?;

    Ok(())
}

/// One line per expected environment variable, values never logged.
fn log_config_report(config: &AppConfig) {
    let entries = [
        ("BOT_ID", !config.connector.app_id.is_empty()),
        ("BOT_TOKEN", config.connector.token.is_some()),
        ("AI_FOUNDRY_ENDPOINT", !config.completion.endpoint.is_empty()),
        ("AI_FOUNDRY_API_KEY", !config.completion.api_key.is_empty()),
        ("SPEECH_KEY", !config.speech.subscription_key.is_empty()),
        ("SPEECH_REGION", !config.speech.region.is_empty()),
    ];

    tracing::info!("Environment configuration:");
    for (name, set) in entries {
        tracing::info!("- {}: {}", name, if set { "✓ Set" } else { "✗ Not set" });
    }
}
