//! Session domain module.
//!
//! A session holds everything the assistant knows about one conversation:
//! the current dialog step, the booking draft accumulated so far, cached
//! search results for the selection sub-flow, and the passenger records
//! collected one message at a time.
//!
//! # Module Structure
//!
//! - `step`: The closed dialog state enumeration (`Step`)
//! - `model`: Core session domain model (`Session`, `SenderId`, `ResultCache`)
//! - `store`: Storage trait for keyed, concurrency-safe session access

mod model;
mod step;
mod store;

// Re-export public API
pub use model::{CachedResults, ResultCache, SenderId, Session};
pub use step::Step;
pub use store::SessionStore;
