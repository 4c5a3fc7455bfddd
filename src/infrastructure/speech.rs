//! # Azure Speech Synthesis Client
//!
//! Implements the `SpeechSynthesizer` trait against the Azure Cognitive
//! Services TTS REST API. Synthesis is fire-and-forget: the audio stream is
//! fully received to confirm completion, then discarded. All failure modes
//! resolve to `false`; the caller decides whether that matters.

use async_trait::async_trait;
use reqwest::Client;

use crate::domain::config::SpeechConfig;
use crate::domain::traits::SpeechSynthesizer;

const VOICE_NAME: &str = "en-US-JennyNeural";
const VOICE_LANG: &str = "en-US";
const OUTPUT_FORMAT: &str = "audio-16khz-32kbitrate-mono-mp3";
const USER_AGENT: &str = "foundry-voice";

/// HTTP client reused across requests
fn http_client() -> &'static Client {
    use std::sync::OnceLock;
    static CLIENT: OnceLock<Client> = OnceLock::new();
    CLIENT.get_or_init(|| Client::builder().build().expect("Failed to create HTTP client"))
}

pub struct AzureSpeechClient {
    config: SpeechConfig,
    /// Test hook: overrides the region-derived endpoint when set.
    endpoint: Option<String>,
}

impl AzureSpeechClient {
    pub fn new(config: SpeechConfig) -> Self {
        Self {
            config,
            endpoint: None,
        }
    }

    fn endpoint_url(&self) -> String {
        self.endpoint.clone().unwrap_or_else(|| {
            format!(
                "https://{}.tts.speech.microsoft.com/cognitiveservices/v1",
                self.config.region
            )
        })
    }

    fn ssml(&self, text: &str) -> String {
        format!(
            "<speak version='1.0' xml:lang='{lang}'><voice name='{voice}'>{text}</voice></speak>",
            lang = VOICE_LANG,
            voice = VOICE_NAME,
            text = escape_xml(text),
        )
    }
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[async_trait]
impl SpeechSynthesizer for AzureSpeechClient {
    async fn synthesize(&self, text: &str) -> bool {
        if !self.config.is_configured() {
            tracing::debug!("Speech service not configured - skipping text-to-speech");
            return false;
        }

        let result = http_client()
            .post(self.endpoint_url())
            .header("Ocp-Apim-Subscription-Key", &self.config.subscription_key)
            .header("Content-Type", "application/ssml+xml")
            .header("X-Microsoft-OutputFormat", OUTPUT_FORMAT)
            .header("User-Agent", USER_AGENT)
            .body(self.ssml(text))
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Speech synthesis request failed: {}", e);
                return false;
            }
        };

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!("Speech synthesis failed: HTTP {} {}", status, detail);
            return false;
        }

        // Drain the audio to confirm the synthesis actually completed.
        match response.bytes().await {
            Ok(audio) => {
                tracing::info!(bytes = audio.len(), "Speech synthesis completed");
                true
            }
            Err(e) => {
                tracing::error!("Speech synthesis stream aborted: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: &str, region: &str) -> SpeechConfig {
        SpeechConfig {
            subscription_key: key.to_string(),
            region: region.to_string(),
        }
    }

    #[tokio::test]
    async fn test_missing_config_skips_engine() {
        let client = AzureSpeechClient::new(config("key", ""));
        assert!(!client.synthesize("hello").await);

        let client = AzureSpeechClient::new(config("", "eastus"));
        assert!(!client.synthesize("hello").await);
    }

    #[tokio::test]
    async fn test_successful_synthesis() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .match_header("ocp-apim-subscription-key", "key")
            .match_header("content-type", "application/ssml+xml")
            .match_header("x-microsoft-outputformat", OUTPUT_FORMAT)
            .with_status(200)
            .with_body(vec![0u8; 64])
            .create_async()
            .await;

        let client = AzureSpeechClient {
            config: config("key", "eastus"),
            endpoint: Some(server.url()),
        };
        assert!(client.synthesize("hello there").await);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_service_error_resolves_false() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_status(403)
            .create_async()
            .await;

        let client = AzureSpeechClient {
            config: config("key", "eastus"),
            endpoint: Some(server.url()),
        };
        assert!(!client.synthesize("hello").await);
    }

    #[test]
    fn test_ssml_escapes_markup() {
        let client = AzureSpeechClient::new(config("key", "eastus"));
        let ssml = client.ssml("a < b & c > d");
        assert!(ssml.contains("a &lt; b &amp; c &gt; d"));
        assert!(ssml.contains("en-US-JennyNeural"));
    }

    #[test]
    fn test_endpoint_derived_from_region() {
        let client = AzureSpeechClient::new(config("key", "westeurope"));
        assert_eq!(
            client.endpoint_url(),
            "https://westeurope.tts.speech.microsoft.com/cognitiveservices/v1"
        );
    }
}
