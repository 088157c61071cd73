//! Booking draft and trip selection types.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One train option returned by the rail search collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainOption {
    /// Train name (e.g. "Shatabdi Express").
    pub name: String,
    /// Train number (e.g. "12009").
    pub number: String,
    /// Scheduled departure time at the source station.
    pub departs: String,
    /// Scheduled arrival time at the destination station.
    pub arrives: String,
    /// Journey duration as reported by the search service.
    pub duration: String,
}

/// One flight option returned by the air search collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightOption {
    /// Marketing flight number.
    pub flight_number: String,
    /// Formatted price string as reported by the search service.
    pub price: String,
    /// Scheduled departure (local time).
    pub departure: NaiveDateTime,
    /// Scheduled arrival (local time).
    pub arrival: NaiveDateTime,
    /// Departure city name.
    pub origin_city: String,
    /// Arrival city name.
    pub destination_city: String,
    /// Total duration in minutes.
    pub duration_minutes: u32,
    /// Number of stops; zero means a direct flight.
    pub stops: u32,
    /// Marketing carrier name.
    pub carrier: String,
}

/// The trip committed to a draft.
///
/// Once set, the selection is immutable for the remainder of the draft's
/// life; changing it requires a restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TripSelection {
    /// A train picked from the cached search results.
    Train(TrainOption),
    /// A train the user entered manually when search yielded nothing.
    ManualTrain {
        /// Train name as entered.
        name: String,
        /// Train number as entered.
        number: String,
    },
    /// A flight picked from the cached search results.
    Flight(FlightOption),
}

/// Rail fare classes, selected by menu number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RailClass {
    General,
    Sleeper,
    ThreeAc,
    TwoAc,
    OneAc,
}

impl RailClass {
    /// Resolves a main-menu style numeric choice ("1".."5").
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::General),
            "2" => Some(Self::Sleeper),
            "3" => Some(Self::ThreeAc),
            "4" => Some(Self::TwoAc),
            "5" => Some(Self::OneAc),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Sleeper => "Sleeper",
            Self::ThreeAc => "3AC",
            Self::TwoAc => "2AC",
            Self::OneAc => "1AC",
        }
    }
}

impl fmt::Display for RailClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Air cabin classes, selected by menu number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CabinClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl CabinClass {
    /// Resolves a main-menu style numeric choice ("1".."4").
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::Economy),
            "2" => Some(Self::PremiumEconomy),
            "3" => Some(Self::Business),
            "4" => Some(Self::First),
            _ => None,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Economy => "Economy",
            Self::PremiumEconomy => "Premium Economy",
            Self::Business => "Business",
            Self::First => "First",
        }
    }

    /// The value the flight search API expects for this cabin.
    pub fn api_value(&self) -> &'static str {
        match self {
            Self::Economy => "economy",
            Self::PremiumEconomy => "premium_economy",
            Self::Business => "business",
            Self::First => "first",
        }
    }
}

impl fmt::Display for CabinClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A fare class of either domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FareClass {
    /// A rail class (General, Sleeper, 3AC, 2AC, 1AC).
    Rail(RailClass),
    /// An air cabin (Economy, Premium Economy, Business, First).
    Cabin(CabinClass),
}

impl fmt::Display for FareClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rail(c) => c.fmt(f),
            Self::Cabin(c) => c.fmt(f),
        }
    }
}

/// Passenger composition for an air booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerCounts {
    /// Number of adults.
    pub adults: u32,
    /// Number of children.
    pub children: u32,
    /// Number of infants; never exceeds `adults`.
    pub infants: u32,
}

impl PassengerCounts {
    /// Total passenger count across all categories, saturating at
    /// `u32::MAX` for compositions that were never validated.
    pub fn total(&self) -> u32 {
        self.adults
            .saturating_add(self.children)
            .saturating_add(self.infants)
    }
}

/// Booking-in-progress data for one booking attempt.
///
/// Fields are populated monotonically: a later dialog step never requires a
/// field that an earlier step has not set. Each step owns exactly the
/// fields it fills in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct BookingDraft {
    /// Normalized origin station/airport code.
    pub origin: Option<String>,
    /// Normalized destination station/airport code.
    pub destination: Option<String>,
    /// Travel date.
    pub travel_date: Option<NaiveDate>,
    /// Committed trip selection.
    pub trip: Option<TripSelection>,
    /// Selected fare class.
    pub fare_class: Option<FareClass>,
    /// Passenger composition (air flow only).
    pub counts: Option<PassengerCounts>,
    /// Contact email (air flow only).
    pub email: Option<String>,
    /// Contact phone number.
    pub phone: Option<String>,
}

impl BookingDraft {
    /// Convenience accessor for the rail class, if one was selected.
    pub fn rail_class(&self) -> Option<RailClass> {
        match self.fare_class {
            Some(FareClass::Rail(c)) => Some(c),
            _ => None,
        }
    }

    /// Convenience accessor for the cabin class, if one was selected.
    pub fn cabin_class(&self) -> Option<CabinClass> {
        match self.fare_class {
            Some(FareClass::Cabin(c)) => Some(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_total_saturates_instead_of_wrapping() {
        let counts = PassengerCounts {
            adults: u32::MAX,
            children: 1,
            infants: 0,
        };
        assert_eq!(counts.total(), u32::MAX);
    }
}
