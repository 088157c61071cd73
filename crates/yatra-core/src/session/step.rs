//! Dialog step enumeration.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Enumerated point in the conversation state machine.
///
/// Every session is always at exactly one `Step`; transitions between steps
/// are performed only by the dialog engine. Representing the step as a
/// closed enum (rather than a bare integer) makes illegal states
/// unrepresentable and lets the engine dispatch with an exhaustive `match`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, Default)]
pub enum Step {
    /// First contact; the next message is answered with the greeting menu.
    #[default]
    Entry,
    /// Awaiting a main-menu choice (1 rail, 2 air, 3 PNR, 4 live status).
    MainMenu,

    // Rail booking flow
    /// Awaiting the source station name or code.
    RailSourceStation,
    /// Awaiting the destination station name or code.
    RailDestStation,
    /// Awaiting the travel date.
    RailTravelDate,
    /// Awaiting 'confirm' for the entered route before searching.
    RailConfirmRoute,
    /// Awaiting a selection from the paginated train list.
    RailSelectTrain,
    /// Awaiting manual 'Train Name, Train Number' entry.
    RailManualTrain,
    /// Awaiting a rail fare class choice.
    RailSelectClass,
    /// Awaiting traveler lines ('Name, Age, Gender').
    RailTravelers,
    /// Awaiting the contact phone number; valid input persists the booking.
    RailPhone,

    // Air booking flow
    /// Awaiting the departure airport name or code.
    AirDepartAirport,
    /// Awaiting the destination airport name or code.
    AirDestAirport,
    /// Awaiting the travel date.
    AirTravelDate,
    /// Awaiting a cabin class choice.
    AirSelectClass,
    /// Awaiting the passenger composition ('adults,children,infants').
    AirPassengerCounts,
    /// Awaiting the contact email; valid input triggers the flight search.
    AirEmail,
    /// Awaiting a selection from the paginated flight list.
    AirSelectFlight,
    /// Collecting one passenger record per message until all are entered.
    AirPassengerEntry,
    /// Awaiting the contact phone number; valid input persists the booking.
    AirContactPhone,

    // Utility flows
    /// Awaiting a PNR number to look up.
    PnrLookup,
    /// Awaiting '<train_number> <day 1-5>' for a live status lookup.
    LiveStatus,
}
