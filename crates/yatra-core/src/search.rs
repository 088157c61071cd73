//! Search and status collaborator traits.
//!
//! The dialog engine treats these as fallible black boxes: a network
//! failure or a non-success upstream response is reported as an error (or
//! an empty result list), never a panic, and implementations carry their
//! own request timeouts.

use crate::booking::{CabinClass, FlightOption, PassengerCounts, TrainOption};
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Status of one passenger on a PNR.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PnrPassenger {
    /// Passenger number within the PNR.
    pub number: u32,
    /// Current reservation status.
    pub current_status: String,
    /// Assigned coach, if any.
    pub coach: String,
    /// Assigned berth, if any.
    pub berth: String,
    /// Status at booking time.
    pub booking_status: String,
}

/// The details behind one PNR number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PnrStatus {
    /// The PNR number itself.
    pub pnr: String,
    /// Train number.
    pub train_number: String,
    /// Train name.
    pub train_name: String,
    /// Booked class.
    pub class: String,
    /// Date of journey.
    pub date_of_journey: String,
    /// Source station name and code.
    pub source: String,
    /// Destination station name and code.
    pub destination: String,
    /// Boarding station name.
    pub boarding_station: String,
    /// Scheduled departure time.
    pub departure: String,
    /// Scheduled arrival time.
    pub arrival: String,
    /// Journey duration.
    pub duration: String,
    /// Ticket fare.
    pub fare: String,
    /// Booking quota.
    pub quota: String,
    /// Per-passenger statuses.
    pub passengers: Vec<PnrPassenger>,
    /// Space-separated coach layout, front to rear.
    pub coach_position: String,
}

/// Live running status of a train.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveTrainStatus {
    /// Train name.
    pub train_name: String,
    /// Train number.
    pub train_number: String,
    /// The journey's start date.
    pub start_date: String,
    /// Source station name.
    pub source: String,
    /// Destination station name.
    pub destination: String,
    /// Station the train is currently at or near.
    pub current_station: String,
    /// When the status was last updated.
    pub status_as_of: String,
    /// Running delay in minutes.
    pub delay_minutes: i64,
    /// Platform number, when known.
    pub platform: Option<String>,
    /// Distance covered so far in kilometres, when known.
    pub distance_covered_km: Option<u32>,
}

/// Rail search and status collaborator.
#[async_trait]
pub trait RailSearch: Send + Sync {
    /// Searches trains between two station codes on a date.
    ///
    /// An empty vector means the route has no results; upstream failures
    /// surface as [`crate::YatraError::Upstream`].
    async fn search_trains(
        &self,
        from_code: &str,
        to_code: &str,
        date: chrono::NaiveDate,
    ) -> Result<Vec<TrainOption>>;

    /// Looks up the status of a PNR number.
    async fn pnr_status(&self, pnr: &str) -> Result<PnrStatus>;

    /// Fetches the live status of a train.
    ///
    /// `day_offset` counts back from today: 0 = today, 4 = four days ago.
    async fn live_status(&self, train_number: &str, day_offset: u8) -> Result<LiveTrainStatus>;
}

/// One-way flight search collaborator.
#[async_trait]
pub trait FlightSearch: Send + Sync {
    /// Searches one-way flights between two airport codes.
    async fn search_one_way(
        &self,
        from_code: &str,
        to_code: &str,
        date: chrono::NaiveDate,
        counts: &PassengerCounts,
        cabin: CabinClass,
    ) -> Result<Vec<FlightOption>>;
}
