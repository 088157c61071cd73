//! Application layer for the Yatra booking assistant.
//!
//! Wires the dialog engine to a session store and serializes concurrent
//! messages per sender.

pub mod assistant;

pub use assistant::BookingAssistant;
