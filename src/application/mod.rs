//! # Application Layer
//!
//! Contains the core business logic and orchestration of the bot:
//! intent classification and per-turn message routing.

pub mod router;
