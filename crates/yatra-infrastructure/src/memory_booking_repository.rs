//! In-memory BookingRepository implementation.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use yatra_core::booking::{
    AirBooking, BookingId, BookingRepository, RailBooking, StoredAirBooking, StoredRailBooking,
};
use yatra_core::error::Result;

/// Booking persistence backed by process-local vectors.
///
/// Used by tests and by the CLI chat loop when no data directory is
/// configured. Bookings do not survive a restart.
#[derive(Default)]
pub struct InMemoryBookingRepository {
    rail: RwLock<Vec<StoredRailBooking>>,
    air: RwLock<Vec<StoredAirBooking>>,
}

impl InMemoryBookingRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingRepository for InMemoryBookingRepository {
    async fn save_rail(&self, booking: &RailBooking) -> Result<BookingId> {
        let id = BookingId::generate();
        self.rail.write().await.push(StoredRailBooking {
            id,
            booked_at: Utc::now(),
            booking: booking.clone(),
        });
        Ok(id)
    }

    async fn save_air(&self, booking: &AirBooking) -> Result<BookingId> {
        let id = BookingId::generate();
        self.air.write().await.push(StoredAirBooking {
            id,
            booked_at: Utc::now(),
            booking: booking.clone(),
        });
        Ok(id)
    }

    async fn list_rail(&self) -> Result<Vec<StoredRailBooking>> {
        Ok(self.rail.read().await.clone())
    }

    async fn list_air(&self) -> Result<Vec<StoredAirBooking>> {
        Ok(self.air.read().await.clone())
    }
}
