//! Booking repository trait.

use super::finalize::{AirBooking, BookingId, RailBooking};
use crate::error::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rail booking as stored, with its generated identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRailBooking {
    /// Identifier generated at save time.
    pub id: BookingId,
    /// When the booking was saved.
    pub booked_at: DateTime<Utc>,
    /// The booking payload.
    pub booking: RailBooking,
}

/// An air booking as stored, with its generated identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredAirBooking {
    /// Identifier generated at save time.
    pub id: BookingId,
    /// When the booking was saved.
    pub booked_at: DateTime<Utc>,
    /// The booking payload.
    pub booking: AirBooking,
}

/// An abstract repository for persisting finalized bookings.
///
/// Saves are transactional: a booking is stored with all of its passengers
/// and contact details or not at all. On failure no partial record is ever
/// visible to a subsequent list call.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    /// Persists a finalized rail booking and returns its generated id.
    async fn save_rail(&self, booking: &RailBooking) -> Result<BookingId>;

    /// Persists a finalized air booking and returns its generated id.
    async fn save_air(&self, booking: &AirBooking) -> Result<BookingId>;

    /// Lists all stored rail bookings.
    async fn list_rail(&self) -> Result<Vec<StoredRailBooking>>;

    /// Lists all stored air bookings.
    async fn list_air(&self) -> Result<Vec<StoredAirBooking>>;
}
