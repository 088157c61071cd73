//! Step handlers for the flight booking flow.

use super::engine::DialogEngine;
use super::{format, prompts};
use crate::booking::{CabinClass, FareClass, PassengerCategory, PassengerRecord, TripSelection, finalize_air};
use crate::session::{CachedResults, ResultCache, Session, Step};
use crate::validate::{self, CountsError};

pub(crate) async fn handle(engine: &DialogEngine, session: &mut Session, input: &str) -> String {
    match session.step {
        Step::AirDepartAirport => depart_airport(engine, session, input),
        Step::AirDestAirport => dest_airport(engine, session, input),
        Step::AirTravelDate => travel_date(session, input),
        Step::AirSelectClass => select_class(session, input),
        Step::AirPassengerCounts => passenger_counts(session, input),
        Step::AirEmail => email(engine, session, input).await,
        Step::AirSelectFlight => select_flight(engine, session, input),
        Step::AirPassengerEntry => passenger_entry(engine, session, input),
        Step::AirContactPhone => contact_phone(engine, session, input).await,
        // Unreachable: the engine only routes air steps here.
        _ => engine.recover(session),
    }
}

fn depart_airport(engine: &DialogEngine, session: &mut Session, input: &str) -> String {
    match engine.reference.airport_code(input) {
        Some(code) => {
            session.draft.origin = Some(code);
            session.step = Step::AirDestAirport;
            prompts::AIR_DEST_PROMPT.to_string()
        }
        None => prompts::AIRPORT_NOT_FOUND.to_string(),
    }
}

fn dest_airport(engine: &DialogEngine, session: &mut Session, input: &str) -> String {
    match engine.reference.airport_code(input) {
        Some(code) => {
            session.draft.destination = Some(code);
            session.step = Step::AirTravelDate;
            prompts::AIR_DATE_PROMPT.to_string()
        }
        None => prompts::AIRPORT_NOT_FOUND.to_string(),
    }
}

fn travel_date(session: &mut Session, input: &str) -> String {
    let Some(date) = validate::parse_date(input) else {
        return prompts::INVALID_DATE.to_string();
    };
    session.draft.travel_date = Some(date);
    session.step = Step::AirSelectClass;
    prompts::AIR_CLASS_MENU.to_string()
}

fn select_class(session: &mut Session, input: &str) -> String {
    let Some(cabin) = CabinClass::from_menu_choice(input) else {
        return prompts::AIR_CLASS_INVALID.to_string();
    };
    session.draft.fare_class = Some(FareClass::Cabin(cabin));
    session.step = Step::AirPassengerCounts;
    format::class_selected(cabin.label(), prompts::AIR_COUNTS_PROMPT)
}

fn passenger_counts(session: &mut Session, input: &str) -> String {
    match validate::parse_passenger_counts(input) {
        Ok(counts) if counts.total() > 0 => {
            session.draft.counts = Some(counts);
            session.step = Step::AirEmail;
            prompts::AIR_EMAIL_PROMPT.to_string()
        }
        // A composition with nobody on it is a format problem.
        Ok(_) | Err(CountsError::Format) => prompts::COUNTS_FORMAT_INVALID.to_string(),
        Err(CountsError::InfantsExceedAdults) => prompts::COUNTS_CONSTRAINT.to_string(),
        Err(CountsError::TooManyPassengers) => prompts::COUNTS_TOO_MANY.to_string(),
    }
}

async fn email(engine: &DialogEngine, session: &mut Session, input: &str) -> String {
    let Some(address) = validate::parse_email(input) else {
        return prompts::INVALID_EMAIL.to_string();
    };
    session.draft.email = Some(address.to_string());

    let (Some(origin), Some(destination), Some(date), Some(counts), Some(cabin)) = (
        session.draft.origin.clone(),
        session.draft.destination.clone(),
        session.draft.travel_date,
        session.draft.counts,
        session.draft.cabin_class(),
    ) else {
        return engine.recover(session);
    };

    match engine
        .flight_search
        .search_one_way(&origin, &destination, date, &counts, cabin)
        .await
    {
        Ok(flights) if !flights.is_empty() => {
            let (text, next_cursor) = format::flight_page_text(&flights, 0);
            session.results = Some(ResultCache {
                results: CachedResults::Flights(flights),
                cursor: next_cursor,
            });
            session.step = Step::AirSelectFlight;
            format!("{}\n\n{}", text, prompts::AIR_SELECT_HINT)
        }
        // The session stays at this step so a new email retries the search.
        Ok(_) => prompts::AIR_NO_FLIGHTS.to_string(),
        Err(err) => {
            tracing::warn!(error = %err, %origin, %destination, "flight search failed");
            prompts::AIR_NO_FLIGHTS.to_string()
        }
    }
}

fn select_flight(engine: &DialogEngine, session: &mut Session, input: &str) -> String {
    let flights = match session.results.as_ref() {
        Some(ResultCache {
            results: CachedResults::Flights(flights),
            ..
        }) => flights.clone(),
        _ => return engine.recover(session),
    };

    if input.eq_ignore_ascii_case("more") {
        let cursor = session.results.as_ref().map(|c| c.cursor).unwrap_or(0);
        if cursor >= flights.len() {
            return prompts::AIR_LIST_END.to_string();
        }
        let (text, next_cursor) = format::flight_page_text(&flights, cursor);
        if let Some(cache) = session.results.as_mut() {
            cache.cursor = next_cursor;
        }
        return format!("{}\n\n{}", text, prompts::AIR_SELECT_HINT);
    }

    match input.parse::<usize>() {
        Ok(choice) if (1..=flights.len()).contains(&choice) => {
            let counts = match session.draft.counts {
                Some(counts) => counts,
                None => return engine.recover(session),
            };
            session.draft.trip = Some(TripSelection::Flight(flights[choice - 1].clone()));
            session.results = None;
            session.current_passenger = 1;
            session.step = Step::AirPassengerEntry;
            format::passenger_prompt(1, PassengerCategory::classify(1, &counts))
        }
        Ok(_) => prompts::AIR_SELECT_OUT_OF_RANGE.to_string(),
        Err(_) => prompts::AIR_SELECT_INVALID.to_string(),
    }
}

fn passenger_entry(engine: &DialogEngine, session: &mut Session, input: &str) -> String {
    let counts = match session.draft.counts {
        Some(counts) => counts,
        None => return engine.recover(session),
    };
    let Some(parsed) = validate::parse_passenger(input) else {
        return prompts::PASSENGER_INVALID.to_string();
    };

    let ordinal = session.current_passenger;
    session.passengers.push(PassengerRecord {
        given_names: parsed.given_names,
        family_name: parsed.family_name,
        gender: parsed.gender,
        date_of_birth: parsed.date_of_birth,
        nationality: parsed.nationality,
        category: PassengerCategory::classify(ordinal, &counts),
    });

    if ordinal < counts.total() as usize {
        session.current_passenger = ordinal + 1;
        let next = ordinal + 1;
        format::passenger_prompt(next, PassengerCategory::classify(next, &counts))
    } else {
        session.step = Step::AirContactPhone;
        prompts::CONTACT_PHONE_PROMPT.to_string()
    }
}

async fn contact_phone(engine: &DialogEngine, session: &mut Session, input: &str) -> String {
    let Some(number) = validate::parse_phone(input) else {
        return prompts::INVALID_PHONE.to_string();
    };
    session.draft.phone = Some(number.to_string());

    let booking = match finalize_air(&session.draft, &session.passengers) {
        Ok(booking) => booking,
        Err(err) => {
            tracing::error!(error = %err, "air draft failed finalization");
            return engine.recover(session);
        }
    };

    match engine.bookings.save_air(&booking).await {
        Ok(id) => {
            tracing::info!(booking_id = %id, sender = %session.sender, "air booking saved");
            let reply = format::air_confirmation(&id, &booking);
            session.reset();
            reply
        }
        Err(err) => {
            // Session kept as-is so the user can retry without re-entering.
            tracing::warn!(error = %err, "air booking persistence failed");
            prompts::PERSIST_FAILED.to_string()
        }
    }
}
