//! # Messages
//!
//! Constant strings for user-facing messages. Every error class and interim
//! notice the bot can emit lives here; handlers never format ad-hoc errors.

// Interim notices
pub const VOICE_PROCESSING: &str = "🎤 Voice interaction detected! Processing your request...";
pub const TEXT_PROCESSING: &str = "🤖 Processing your request...";

// Voice path
pub const VOICE_GREETING: &str = "👋 Hello! I'm ready to help. What would you like to know?";
pub const VOICE_STOPPED: &str = "🔇 Voice session stopped. You can still interact via text.";

// Text path
pub const EMPTY_PROMPT: &str = "Please provide a message for me to process.";

// Per-path apologies for unhandled failures inside a handler
pub const VOICE_TURN_FAILED: &str =
    "❌ Sorry, I encountered an error processing your voice request.";
pub const TEXT_TURN_FAILED: &str = "❌ Sorry, I encountered an error processing your request.";
pub const SESSION_START_FAILED: &str = "❌ Error starting voice session.";
pub const SESSION_STOP_FAILED: &str = "❌ Error stopping voice session.";

// Completion outcomes
pub const FOUNDRY_NOT_CONFIGURED: &str = "AI Foundry is not configured. Please set AI_FOUNDRY_ENDPOINT and AI_FOUNDRY_API_KEY environment variables.";
pub const FOUNDRY_TIMEOUT: &str = "AI Foundry request timed out. Please try again.";
pub const FOUNDRY_AUTH_FAILED: &str =
    "Authentication failed with AI Foundry. Please check your API key.";
pub const FOUNDRY_UNAVAILABLE: &str =
    "AI Foundry service is currently unavailable. Please try again later.";
pub const FOUNDRY_UNREACHABLE: &str =
    "I'm having trouble connecting to AI Foundry right now. Please try again in a moment.";
pub const FOUNDRY_UNEXPECTED_FORMAT: &str =
    "Received an unexpected response format from AI Foundry.";
pub const FOUNDRY_NO_RESPONSE: &str = "No response received.";
