//! # Domain Types
//!
//! Common data structures and enums used across the application logic:
//! message intents, completion outcomes, and the Adaptive Card model.

use serde::Serialize;

use crate::strings::messages;

/// The classified purpose of an inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Message contains the voice trigger phrase
    VoiceQuery,
    /// Request to open a voice session
    StartVoice,
    /// Request to close a voice session
    StopVoice,
    /// Anything else: plain text interaction
    Text,
}

impl Intent {
    pub fn as_str(&self) -> &str {
        match self {
            Intent::VoiceQuery => "voice_query",
            Intent::StartVoice => "start_voice",
            Intent::StopVoice => "stop_voice",
            Intent::Text => "text",
        }
    }
}

/// Discriminated outcome of one completion exchange. Every non-success
/// variant maps to exactly one fixed user-facing string, so rendering
/// downstream is branch-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    Success(String),
    ConfigMissing,
    Timeout,
    AuthFailed,
    ServerError,
    NetworkError,
    UnexpectedFormat,
}

impl CompletionOutcome {
    /// Short class label for operational logs.
    pub fn label(&self) -> &'static str {
        match self {
            CompletionOutcome::Success(_) => "success",
            CompletionOutcome::ConfigMissing => "config_missing",
            CompletionOutcome::Timeout => "timeout",
            CompletionOutcome::AuthFailed => "auth_failed",
            CompletionOutcome::ServerError => "server_error",
            CompletionOutcome::NetworkError => "network_error",
            CompletionOutcome::UnexpectedFormat => "unexpected_format",
        }
    }

    /// Fold the outcome into the text shown to the user.
    pub fn into_message(self) -> String {
        match self {
            CompletionOutcome::Success(text) => text,
            CompletionOutcome::ConfigMissing => messages::FOUNDRY_NOT_CONFIGURED.to_string(),
            CompletionOutcome::Timeout => messages::FOUNDRY_TIMEOUT.to_string(),
            CompletionOutcome::AuthFailed => messages::FOUNDRY_AUTH_FAILED.to_string(),
            CompletionOutcome::ServerError => messages::FOUNDRY_UNAVAILABLE.to_string(),
            CompletionOutcome::NetworkError => messages::FOUNDRY_UNREACHABLE.to_string(),
            CompletionOutcome::UnexpectedFormat => messages::FOUNDRY_UNEXPECTED_FORMAT.to_string(),
        }
    }
}

const CARD_SCHEMA: &str = "http://adaptivecards.io/schemas/adaptive-card.json";
const CARD_VERSION: &str = "1.2";

/// An Adaptive Card payload, serialized as the `content` of a Bot Framework
/// attachment. Only the elements this bot renders are modelled.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdaptiveCard {
    #[serde(rename = "$schema")]
    pub schema: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub version: &'static str,
    pub body: Vec<CardElement>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<CardAction>,
}

impl AdaptiveCard {
    pub fn new(body: Vec<CardElement>) -> Self {
        Self {
            schema: CARD_SCHEMA,
            kind: "AdaptiveCard",
            version: CARD_VERSION,
            body,
            actions: Vec::new(),
        }
    }

    pub fn with_actions(mut self, actions: Vec<CardAction>) -> Self {
        self.actions = actions;
        self
    }
}

/// A single card body element.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum CardElement {
    TextBlock(TextBlock),
    FactSet { facts: Vec<Fact> },
}

/// Text element with the subset of Adaptive Card styling the bot uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlock {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub wrap: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<&'static str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub is_subtle: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fact {
    pub title: String,
    pub value: String,
}

/// A card action button.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum CardAction {
    #[serde(rename = "Action.Submit")]
    Submit {
        title: String,
        data: serde_json::Value,
    },
}
