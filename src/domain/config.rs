//! # Configuration
//!
//! Loads the bot configuration from the process environment, once, at startup.
//! Every value is an opaque string; an empty string means "unconfigured" and the
//! owning client degrades to a fixed user-facing message instead of failing.

const DEFAULT_SPEECH_REGION: &str = "eastus";
const DEFAULT_PORT: u16 = 3978;

/// Main application configuration structure.
/// Constructed once in `main` and handed by value to each client constructor.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub connector: ConnectorConfig,
    pub completion: CompletionConfig,
    pub speech: SpeechConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

/// Bot Framework connector settings. The token is passed through as a bearer
/// header on outbound activities; no token exchange is performed.
#[derive(Debug, Clone, Default)]
pub struct ConnectorConfig {
    pub app_id: String,
    pub token: Option<String>,
}

/// AI Foundry completion endpoint settings.
#[derive(Debug, Clone, Default)]
pub struct CompletionConfig {
    pub endpoint: String,
    pub api_key: String,
}

impl CompletionConfig {
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty() && !self.api_key.is_empty()
    }
}

/// Azure speech service settings.
#[derive(Debug, Clone, Default)]
pub struct SpeechConfig {
    pub subscription_key: String,
    pub region: String,
}

impl SpeechConfig {
    pub fn is_configured(&self) -> bool {
        !self.subscription_key.is_empty() && !self.region.is_empty()
    }
}

impl AppConfig {
    /// Read the full configuration from the environment. Missing variables fall
    /// back to empty strings (or the documented defaults) rather than erroring.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig { port: env_port() },
            connector: ConnectorConfig {
                app_id: env_string("BOT_ID"),
                token: std::env::var("BOT_TOKEN").ok().filter(|t| !t.is_empty()),
            },
            completion: CompletionConfig {
                endpoint: env_string("AI_FOUNDRY_ENDPOINT"),
                api_key: env_string("AI_FOUNDRY_API_KEY"),
            },
            speech: SpeechConfig {
                subscription_key: env_string("SPEECH_KEY"),
                region: std::env::var("SPEECH_REGION")
                    .ok()
                    .filter(|r| !r.is_empty())
                    .unwrap_or_else(|| DEFAULT_SPEECH_REGION.to_string()),
            },
        }
    }
}

fn env_string(name: &str) -> String {
    std::env::var(name).unwrap_or_default()
}

fn env_port() -> u16 {
    match std::env::var("PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            tracing::warn!("Invalid PORT value '{}', using {}", raw, DEFAULT_PORT);
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}
