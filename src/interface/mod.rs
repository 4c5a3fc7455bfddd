//! # Interface Layer
//!
//! Everything the user sees: card renderers and the per-intent handlers
//! invoked by the Router.

pub mod cards;
pub mod handlers;
