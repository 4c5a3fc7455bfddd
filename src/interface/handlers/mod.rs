//! # Intent Handlers
//!
//! One handler per classified intent, plus the welcome path for membership
//! updates. These are invoked by the Router.

pub mod session;
pub mod text;
pub mod voice;
pub mod welcome;
