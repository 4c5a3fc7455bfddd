//! # Domain Traits
//!
//! Abstract interfaces for core system components (Chat, Completion, Speech).
//! Allows for pluggable implementations in the Infrastructure layer.

use async_trait::async_trait;

use crate::domain::types::AdaptiveCard;

/// Abstract interface for the chat surface replies are delivered into
/// (e.g., Teams, the Bot Framework Emulator)
#[async_trait]
pub trait ChatSurface: Send + Sync {
    /// Send a plain-text message into the conversation
    async fn send_text(&self, content: &str) -> Result<(), String>;

    /// Send an Adaptive Card attachment into the conversation
    async fn send_card(&self, card: AdaptiveCard) -> Result<(), String>;

    /// Get the current conversation ID
    fn conversation_id(&self) -> String;
}

/// Abstract interface for the completion backend.
///
/// `complete` never fails: every error class is folded into a fixed
/// user-facing string so callers can render the result unconditionally.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, query: &str) -> String;
}

/// Abstract interface for a text-to-speech engine. Synthesis is
/// fire-and-forget: the audio is not returned, only a success flag.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    async fn synthesize(&self, text: &str) -> bool;
}
