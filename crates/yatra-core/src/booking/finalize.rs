//! Assembly of finalized booking payloads.
//!
//! `finalize_rail` and `finalize_air` turn an accumulated draft plus the
//! collected passenger records into the payload handed to the persistence
//! collaborator. Both fail if a required draft field is absent; given the
//! dialog state table this is unreachable, but the check documents the
//! monotonic-draft invariant.

use super::draft::{BookingDraft, CabinClass, FlightOption, PassengerCounts, RailClass, TripSelection};
use super::passenger::{PassengerRecord, TravelerRecord};
use crate::error::{Result, YatraError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier generated by the persistence collaborator for a saved booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(Uuid);

impl BookingId {
    /// Generates a fresh booking identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A complete, validated rail booking ready for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RailBooking {
    /// Source station code.
    pub origin: String,
    /// Destination station code.
    pub destination: String,
    /// Travel date.
    pub travel_date: NaiveDate,
    /// Train name.
    pub train_name: String,
    /// Train number.
    pub train_number: String,
    /// Scheduled departure, absent for manually entered trains.
    pub departs: Option<String>,
    /// Scheduled arrival, absent for manually entered trains.
    pub arrives: Option<String>,
    /// Journey duration, absent for manually entered trains.
    pub duration: Option<String>,
    /// Selected fare class.
    pub fare_class: RailClass,
    /// Travelers on the booking.
    pub travelers: Vec<TravelerRecord>,
    /// Contact phone number.
    pub phone: String,
}

/// A complete, validated air booking ready for persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirBooking {
    /// Source airport code.
    pub origin: String,
    /// Destination airport code.
    pub destination: String,
    /// Travel date.
    pub travel_date: NaiveDate,
    /// The selected flight.
    pub flight: FlightOption,
    /// Selected cabin class.
    pub cabin: CabinClass,
    /// Passenger composition.
    pub counts: PassengerCounts,
    /// Passengers on the booking, in entry order.
    pub passengers: Vec<PassengerRecord>,
    /// Contact email.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
}

fn require<T: Clone>(field: &'static str, value: &Option<T>) -> Result<T> {
    value
        .clone()
        .ok_or(YatraError::IncompleteDraft { field })
}

/// Assembles a rail booking payload from the draft and collected travelers.
///
/// # Errors
///
/// Returns [`YatraError::IncompleteDraft`] naming the first missing field.
pub fn finalize_rail(draft: &BookingDraft, travelers: &[TravelerRecord]) -> Result<RailBooking> {
    let origin = require("origin", &draft.origin)?;
    let destination = require("destination", &draft.destination)?;
    let travel_date = require("travel_date", &draft.travel_date)?;
    let fare_class = draft
        .rail_class()
        .ok_or(YatraError::IncompleteDraft { field: "fare_class" })?;
    let phone = require("phone", &draft.phone)?;
    if travelers.is_empty() {
        return Err(YatraError::IncompleteDraft { field: "travelers" });
    }

    let (train_name, train_number, departs, arrives, duration) = match &draft.trip {
        Some(TripSelection::Train(t)) => (
            t.name.clone(),
            t.number.clone(),
            Some(t.departs.clone()),
            Some(t.arrives.clone()),
            Some(t.duration.clone()),
        ),
        Some(TripSelection::ManualTrain { name, number }) => {
            (name.clone(), number.clone(), None, None, None)
        }
        _ => return Err(YatraError::IncompleteDraft { field: "trip" }),
    };

    Ok(RailBooking {
        origin,
        destination,
        travel_date,
        train_name,
        train_number,
        departs,
        arrives,
        duration,
        fare_class,
        travelers: travelers.to_vec(),
        phone,
    })
}

/// Assembles an air booking payload from the draft and collected passengers.
///
/// # Errors
///
/// Returns [`YatraError::IncompleteDraft`] naming the first missing field.
pub fn finalize_air(draft: &BookingDraft, passengers: &[PassengerRecord]) -> Result<AirBooking> {
    let origin = require("origin", &draft.origin)?;
    let destination = require("destination", &draft.destination)?;
    let travel_date = require("travel_date", &draft.travel_date)?;
    let cabin = draft
        .cabin_class()
        .ok_or(YatraError::IncompleteDraft { field: "fare_class" })?;
    let counts = require("counts", &draft.counts)?;
    let email = require("email", &draft.email)?;
    let phone = require("phone", &draft.phone)?;

    let flight = match &draft.trip {
        Some(TripSelection::Flight(f)) => f.clone(),
        _ => return Err(YatraError::IncompleteDraft { field: "trip" }),
    };

    if passengers.len() != counts.total() as usize {
        return Err(YatraError::IncompleteDraft { field: "passengers" });
    }

    Ok(AirBooking {
        origin,
        destination,
        travel_date,
        flight,
        cabin,
        counts,
        passengers: passengers.to_vec(),
        email,
        phone,
    })
}
