pub mod booking;
pub mod dialog;
pub mod error;
pub mod paginate;
pub mod reference;
pub mod search;
pub mod session;
pub mod validate;

// Re-export common error type
pub use error::YatraError;
