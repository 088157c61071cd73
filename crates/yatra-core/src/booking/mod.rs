//! Booking domain module.
//!
//! Accumulates a multi-entity booking across dialog turns: the trip
//! selection, the passenger list, and the contact details, then assembles
//! them into a finalized payload for the persistence collaborator.
//!
//! # Module Structure
//!
//! - `draft`: Booking-in-progress data and trip/fare types
//! - `passenger`: Passenger and traveler records, ordinal classification
//! - `finalize`: Assembly of finalized booking payloads
//! - `repository`: Persistence trait for finalized bookings

mod draft;
mod finalize;
mod passenger;
mod repository;

// Re-export public API
pub use draft::{
    BookingDraft, CabinClass, FareClass, FlightOption, PassengerCounts, RailClass, TrainOption,
    TripSelection,
};
pub use finalize::{AirBooking, BookingId, RailBooking, finalize_air, finalize_rail};
pub use passenger::{PassengerCategory, PassengerRecord, TravelerRecord};
pub use repository::{BookingRepository, StoredAirBooking, StoredRailBooking};
