//! Integration test utilities for the bot client
//!
//! Provides a scripted gateway and a recording REST API so the client can be
//! exercised end to end without the real platform.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
