//! Infrastructure implementations for the Yatra booking assistant.
//!
//! Concrete adapters behind the `yatra-core` collaborator traits: session
//! storage, booking persistence, and station/airport reference data.

pub mod memory_booking_repository;
pub mod memory_session_store;
pub mod reference_data;
pub mod toml_booking_repository;

pub use memory_booking_repository::InMemoryBookingRepository;
pub use memory_session_store::InMemorySessionStore;
pub use reference_data::StaticReferenceData;
pub use toml_booking_repository::TomlBookingRepository;
