//! Upstream API clients for the Yatra booking assistant.
//!
//! Implementations of the `yatra-core` search traits against the RapidAPI
//! rail (IRCTC) and flight (Sky Scanner) services.

pub mod config;
pub mod irctc_client;
pub mod skyscanner_client;

pub use config::RapidApiConfig;
pub use irctc_client::IrctcClient;
pub use skyscanner_client::SkyscannerClient;
