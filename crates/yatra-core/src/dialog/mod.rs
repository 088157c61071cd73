//! Dialog engine module.
//!
//! The state machine driving the conversation: one inbound message at a
//! time, one transition per message.
//!
//! # Module Structure
//!
//! - `engine`: The [`DialogEngine`] entry point and global rules
//! - `rail`: Step handlers for the train booking flow
//! - `air`: Step handlers for the flight booking flow
//! - `prompts`: Canonical prompt and error texts
//! - `format`: Reply rendering from structured records

mod air;
mod engine;
mod format;
pub mod prompts;
mod rail;

#[cfg(test)]
mod engine_test;

// Re-export public API
pub use engine::DialogEngine;
