//! Reply text rendering.
//!
//! All display text is formatted here from the structured records at output
//! time; nothing is ever parsed back out of a rendered reply.

use super::prompts;
use crate::booking::{AirBooking, BookingId, FlightOption, RailBooking, TrainOption};
use crate::booking::PassengerCategory;
use crate::paginate::{self, FLIGHT_PAGE_SIZE, TRAIN_PAGE_SIZE};
use crate::search::{LiveTrainStatus, PnrStatus};
use chrono::NaiveDate;

fn display_date(date: NaiveDate) -> String {
    date.format("%d-%m-%Y").to_string()
}

/// The route echo shown before the rail search is confirmed.
pub(crate) fn route_summary(origin: &str, destination: &str, date: NaiveDate) -> String {
    format!(
        "Your details:\nSource: {}\nDestination: {}\nDate: {}\n\n{}",
        origin,
        destination,
        display_date(date),
        prompts::CONFIRM_PROMPT
    )
}

fn train_option_block(index: usize, train: &TrainOption) -> String {
    format!(
        "{}. {} ({})\n   Departure: {} | Arrival: {}\n   Duration: {}",
        index + 1,
        train.name,
        train.number,
        train.departs,
        train.arrives,
        train.duration
    )
}

fn flight_option_block(index: usize, flight: &FlightOption) -> String {
    let stops = if flight.stops == 0 {
        "Direct".to_string()
    } else {
        format!("{} stop(s)", flight.stops)
    };
    format!(
        "Option {}\n\
         Flight number: {}\n\
         Price: {}\n\
         Departure: {} ({}) | Arrival: {} ({})\n\
         Duration: {} minutes\n\
         Stops: {}\n\
         Carrier: {}",
        index + 1,
        flight.flight_number,
        flight.price,
        flight.departure.format("%d-%m-%Y at %H:%M"),
        flight.origin_city,
        flight.arrival.format("%d-%m-%Y at %H:%M"),
        flight.destination_city,
        flight.duration_minutes,
        stops,
        flight.carrier
    )
}

/// Renders one page of train options and returns the advanced cursor.
pub(crate) fn train_page_text(trains: &[TrainOption], cursor: usize) -> (String, usize) {
    let page = paginate::page(trains, cursor, TRAIN_PAGE_SIZE);
    let mut sections = vec!["Here are the train options for your search:".to_string()];
    for (offset, train) in page.items.iter().enumerate() {
        sections.push(train_option_block(page.start + offset, train));
    }
    if page.has_more {
        sections
            .push("Type 'more' to see more trains, or select a train number to proceed.".to_string());
    } else {
        sections.push(prompts::RAIL_LIST_END.to_string());
    }
    (sections.join("\n\n"), page.next_cursor)
}

/// Renders one page of flight options and returns the advanced cursor.
pub(crate) fn flight_page_text(flights: &[FlightOption], cursor: usize) -> (String, usize) {
    let page = paginate::page(flights, cursor, FLIGHT_PAGE_SIZE);
    let mut sections = vec!["Here are the flight options for your search:".to_string()];
    for (offset, flight) in page.items.iter().enumerate() {
        sections.push(flight_option_block(page.start + offset, flight));
    }
    if page.has_more {
        sections
            .push("Type 'more' to see more flights, or select a flight number to proceed.".to_string());
    } else {
        sections.push(prompts::AIR_LIST_END.to_string());
    }
    (sections.join("\n\n"), page.next_cursor)
}

/// The echo shown after a train is picked from the list.
pub(crate) fn train_selected(train: &TrainOption) -> String {
    format!(
        "You've selected:\nTrain: {} ({})\nDeparture: {} | Arrival: {}\nDuration: {}\n\n{}",
        train.name,
        train.number,
        train.departs,
        train.arrives,
        train.duration,
        prompts::RAIL_CLASS_MENU
    )
}

/// The echo shown after a manual train entry.
pub(crate) fn manual_train_entered(name: &str, number: &str) -> String {
    format!(
        "Train details entered:\nTrain: {} ({})\n\n{}",
        name,
        number,
        prompts::RAIL_CLASS_MENU
    )
}

/// The echo shown after a fare class is chosen, followed by `next_prompt`.
pub(crate) fn class_selected(label: &str, next_prompt: &str) -> String {
    format!("Class selected: {}.\n\n{}", label, next_prompt)
}

/// The prompt for one passenger's details, by overall ordinal and category.
pub(crate) fn passenger_prompt(ordinal: usize, category: PassengerCategory) -> String {
    format!(
        "Please enter passenger details for {} {}:\n{}",
        category.label(),
        ordinal,
        prompts::PASSENGER_FORMAT
    )
}

/// The confirmation for a persisted rail booking, echoing the draft.
pub(crate) fn rail_confirmation(id: &BookingId, booking: &RailBooking) -> String {
    let mut text = format!(
        "Booking received!\n\nBooking ID: {}\n\nTrain details:\nTrain: {} ({})\n\
         Route: {} to {} on {}\nClass: {}\n",
        id,
        booking.train_name,
        booking.train_number,
        booking.origin,
        booking.destination,
        display_date(booking.travel_date),
        booking.fare_class
    );
    if let (Some(departs), Some(arrives)) = (&booking.departs, &booking.arrives) {
        text.push_str(&format!("Departure: {} | Arrival: {}\n", departs, arrives));
    }
    text.push_str("\nTravelers:\n");
    for (idx, traveler) in booking.travelers.iter().enumerate() {
        text.push_str(&format!(
            "{}. {} ({}, {})\n",
            idx + 1,
            traveler.name,
            traveler.age,
            traveler.gender
        ));
    }
    text.push_str(&format!(
        "\nContact phone: {}\n\nType 'restart' to make a new booking.",
        booking.phone
    ));
    text
}

/// The confirmation for a persisted air booking, echoing the draft and the
/// stored passenger records.
pub(crate) fn air_confirmation(id: &BookingId, booking: &AirBooking) -> String {
    let mut text = format!(
        "Booking received!\n\nBooking ID: {}\n\nFlight details:\n{}\n\nPassenger details:\n",
        id,
        flight_option_block(0, &booking.flight)
    );
    for (idx, passenger) in booking.passengers.iter().enumerate() {
        text.push_str(&format!(
            "Passenger {} - {}\n\
             Name: {} {}\n\
             Date of birth: {}\n\
             Gender: {}\n\
             Nationality: {}\n",
            idx + 1,
            passenger.category,
            passenger.given_names,
            passenger.family_name,
            display_date(passenger.date_of_birth),
            passenger.gender,
            passenger.nationality
        ));
    }
    text.push_str(&format!(
        "\nContact details:\nEmail: {}\nPhone: {}\n\n\
         A confirmation email will be sent shortly.\n\n\
         Type 'restart' to make a new booking.",
        booking.email, booking.phone
    ));
    text
}

/// Renders a PNR status lookup result.
pub(crate) fn pnr_text(status: &PnrStatus) -> String {
    let mut passengers = String::new();
    for passenger in &status.passengers {
        passengers.push_str(&format!(
            "Passenger {}:\n   Status: {}\n   Coach: {}\n   Berth: {}\n   Booking status: {}\n",
            passenger.number,
            passenger.current_status,
            passenger.coach,
            passenger.berth,
            passenger.booking_status
        ));
    }
    let coach_positions: Vec<&str> = status.coach_position.split_whitespace().collect();
    format!(
        "PNR details ({})\n\n\
         Train information\n   Train: {} - {}\n   Class: {}\n   Date of journey: {}\n\n\
         Station details\n   From: {}\n   To: {}\n   Boarding: {}\n\n\
         Timing information\n   Departure: {}\n   Arrival: {}\n   Duration: {}\n\n\
         Fare details\n   Ticket fare: {}\n\n\
         Quota: {}\n\n\
         {}\n\
         Coach position:\n{}",
        status.pnr,
        status.train_number,
        status.train_name,
        status.class,
        status.date_of_journey,
        status.source,
        status.destination,
        status.boarding_station,
        status.departure,
        status.arrival,
        status.duration,
        status.fare,
        status.quota,
        passengers,
        coach_positions.join("-")
    )
}

/// Renders a live train status lookup result.
pub(crate) fn live_status_text(status: &LiveTrainStatus) -> String {
    let mut text = format!(
        "Live train status\n\n\
         {} ({})\nDate: {}\nRoute: {} to {}\n\n\
         Current location: {}\nLast updated: {}\nDelay: {} minutes\n",
        status.train_name,
        status.train_number,
        status.start_date,
        status.source,
        status.destination,
        status.current_station,
        status.status_as_of,
        status.delay_minutes
    );
    if let Some(platform) = &status.platform {
        text.push_str(&format!("Platform: {}\n", platform));
    }
    if let Some(distance) = status.distance_covered_km {
        text.push_str(&format!("Distance covered: {} km\n", distance));
    }
    text.trim_end().to_string()
}
