//! # Message Router
//!
//! Classifies each inbound message into an intent and dispatches it to the
//! matching handler (in `interface/handlers`). Classification is a
//! case-insensitive substring match, first hit wins — deliberately loose, the
//! chat surface sends free-form text and users embed commands mid-sentence.
//! Handler failures are absorbed here and answered with a fixed apology; the
//! transport never sees an error.

use anyhow::Result;
use regex::Regex;
use std::sync::Arc;

use crate::domain::traits::{ChatSurface, CompletionProvider, SpeechSynthesizer};
use crate::domain::types::Intent;
use crate::interface::handlers;
use crate::strings::messages;

/// Phrase that routes a message down the voice-interaction path.
pub const VOICE_TRIGGER: &str = "hey ai foundry";
const START_VOICE: &str = "start voice";
const STOP_VOICE: &str = "stop voice";

fn trigger_pattern() -> &'static Regex {
    use std::sync::OnceLock;
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("(?i)hey ai foundry").expect("trigger pattern is valid"))
}

/// Classify a raw message. First match wins; no tokenization.
pub fn classify(text: &str) -> Intent {
    let lowered = text.to_lowercase();
    if lowered.contains(VOICE_TRIGGER) {
        Intent::VoiceQuery
    } else if lowered.contains(START_VOICE) {
        Intent::StartVoice
    } else if lowered.contains(STOP_VOICE) {
        Intent::StopVoice
    } else {
        Intent::Text
    }
}

/// Remove every occurrence of the trigger phrase, whatever its casing, and
/// clean up the whitespace and leading punctuation the removal leaves behind.
pub fn strip_trigger(text: &str) -> String {
    let stripped = trigger_pattern().replace_all(text, "");
    stripped
        .trim()
        .trim_start_matches([',', '.', ':', ';', '!', '?', '-'])
        .trim_start()
        .to_string()
}

pub struct MessageRouter {
    completion: Arc<dyn CompletionProvider>,
    speech: Arc<dyn SpeechSynthesizer>,
}

impl MessageRouter {
    pub fn new(completion: Arc<dyn CompletionProvider>, speech: Arc<dyn SpeechSynthesizer>) -> Self {
        Self { completion, speech }
    }

    /// Run one turn. Always returns `Ok`: whatever goes wrong inside a
    /// handler ends as a logged apology in the conversation, not an error.
    pub async fn route<C>(&self, chat: &C, message: &str) -> Result<()>
    where
        C: ChatSurface,
    {
        let intent = classify(message);
        tracing::info!(
            intent = intent.as_str(),
            conversation = %chat.conversation_id(),
            "Router dispatching message"
        );

        match intent {
            Intent::VoiceQuery => {
                if let Err(e) =
                    handlers::voice::handle_voice_query(&self.completion, &self.speech, chat, message)
                        .await
                {
                    tracing::error!("Error in voice interaction: {:#}", e);
                    let _ = chat.send_text(messages::VOICE_TURN_FAILED).await;
                }
            }
            Intent::StartVoice => {
                if let Err(e) = handlers::session::handle_start_voice(chat).await {
                    tracing::error!("Error starting voice session: {:#}", e);
                    let _ = chat.send_text(messages::SESSION_START_FAILED).await;
                }
            }
            Intent::StopVoice => {
                if let Err(e) = handlers::session::handle_stop_voice(chat).await {
                    tracing::error!("Error stopping voice session: {:#}", e);
                    let _ = chat.send_text(messages::SESSION_STOP_FAILED).await;
                }
            }
            Intent::Text => {
                if let Err(e) =
                    handlers::text::handle_text_query(&self.completion, chat, message).await
                {
                    tracing::error!("Error in text interaction: {:#}", e);
                    let _ = chat.send_text(messages::TEXT_TURN_FAILED).await;
                }
            }
        }

        Ok(())
    }
}
