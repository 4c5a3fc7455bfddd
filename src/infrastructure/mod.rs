//! # Infrastructure Layer
//!
//! Handles interactions with external systems and services.
//! Implements the traits defined in the Domain layer (ChatSurface,
//! CompletionProvider, SpeechSynthesizer) and hosts the HTTP surface.

pub mod foundry;
pub mod server;
pub mod speech;
pub mod teams;
