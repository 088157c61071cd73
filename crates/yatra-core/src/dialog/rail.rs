//! Step handlers for the train booking flow.

use super::engine::DialogEngine;
use super::{format, prompts};
use crate::booking::{FareClass, RailClass, TripSelection, finalize_rail};
use crate::session::{CachedResults, ResultCache, Session, Step};
use crate::validate;

pub(crate) async fn handle(engine: &DialogEngine, session: &mut Session, input: &str) -> String {
    match session.step {
        Step::RailSourceStation => source_station(engine, session, input),
        Step::RailDestStation => dest_station(engine, session, input),
        Step::RailTravelDate => travel_date(engine, session, input),
        Step::RailConfirmRoute => confirm_route(engine, session, input).await,
        Step::RailSelectTrain => select_train(engine, session, input),
        Step::RailManualTrain => manual_train(session, input),
        Step::RailSelectClass => select_class(session, input),
        Step::RailTravelers => travelers(session, input),
        Step::RailPhone => phone(engine, session, input).await,
        // Unreachable: the engine only routes rail steps here.
        _ => engine.recover(session),
    }
}

fn source_station(engine: &DialogEngine, session: &mut Session, input: &str) -> String {
    match engine.reference.station_code(input) {
        Some(code) => {
            session.draft.origin = Some(code);
            session.step = Step::RailDestStation;
            prompts::RAIL_DEST_PROMPT.to_string()
        }
        None => prompts::STATION_NOT_FOUND.to_string(),
    }
}

fn dest_station(engine: &DialogEngine, session: &mut Session, input: &str) -> String {
    match engine.reference.station_code(input) {
        Some(code) => {
            session.draft.destination = Some(code);
            session.step = Step::RailTravelDate;
            prompts::RAIL_DATE_PROMPT.to_string()
        }
        None => prompts::STATION_NOT_FOUND.to_string(),
    }
}

fn travel_date(engine: &DialogEngine, session: &mut Session, input: &str) -> String {
    let Some(date) = validate::parse_date_lenient(input) else {
        return prompts::INVALID_DATE.to_string();
    };
    let (Some(origin), Some(destination)) =
        (session.draft.origin.clone(), session.draft.destination.clone())
    else {
        return engine.recover(session);
    };
    session.draft.travel_date = Some(date);
    session.step = Step::RailConfirmRoute;
    format::route_summary(&origin, &destination, date)
}

async fn confirm_route(engine: &DialogEngine, session: &mut Session, input: &str) -> String {
    if !input.eq_ignore_ascii_case("confirm") {
        return prompts::CONFIRM_PROMPT.to_string();
    }
    let (Some(origin), Some(destination), Some(date)) = (
        session.draft.origin.clone(),
        session.draft.destination.clone(),
        session.draft.travel_date,
    ) else {
        return engine.recover(session);
    };

    match engine.rail_search.search_trains(&origin, &destination, date).await {
        Ok(trains) if !trains.is_empty() => {
            let (text, next_cursor) = format::train_page_text(&trains, 0);
            session.results = Some(ResultCache {
                results: CachedResults::Trains(trains),
                cursor: next_cursor,
            });
            session.step = Step::RailSelectTrain;
            format!("{}\n\n{}", text, prompts::RAIL_SELECT_HINT)
        }
        Ok(_) => {
            session.step = Step::RailManualTrain;
            prompts::RAIL_NO_TRAINS.to_string()
        }
        Err(err) => {
            tracing::warn!(error = %err, %origin, %destination, "train search failed");
            session.step = Step::RailManualTrain;
            prompts::RAIL_NO_TRAINS.to_string()
        }
    }
}

fn select_train(engine: &DialogEngine, session: &mut Session, input: &str) -> String {
    let trains = match session.results.as_ref() {
        Some(ResultCache {
            results: CachedResults::Trains(trains),
            ..
        }) => trains.clone(),
        _ => return engine.recover(session),
    };

    if input.eq_ignore_ascii_case("more") {
        let cursor = session.results.as_ref().map(|c| c.cursor).unwrap_or(0);
        if cursor >= trains.len() {
            return prompts::RAIL_LIST_END.to_string();
        }
        let (text, next_cursor) = format::train_page_text(&trains, cursor);
        if let Some(cache) = session.results.as_mut() {
            cache.cursor = next_cursor;
        }
        return format!("{}\n\n{}", text, prompts::RAIL_SELECT_HINT);
    }

    if input.eq_ignore_ascii_case("other") {
        session.step = Step::RailManualTrain;
        return prompts::RAIL_MANUAL_PROMPT.to_string();
    }

    match input.parse::<usize>() {
        Ok(choice) if (1..=trains.len()).contains(&choice) => {
            let selected = trains[choice - 1].clone();
            session.draft.trip = Some(TripSelection::Train(selected.clone()));
            session.results = None;
            session.step = Step::RailSelectClass;
            format::train_selected(&selected)
        }
        // Out-of-range numbers fall back to manual entry.
        Ok(_) => {
            session.step = Step::RailManualTrain;
            prompts::RAIL_MANUAL_PROMPT.to_string()
        }
        Err(_) => prompts::RAIL_SELECT_INVALID.to_string(),
    }
}

fn manual_train(session: &mut Session, input: &str) -> String {
    let parts: Vec<&str> = input.split(',').map(str::trim).collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return prompts::RAIL_MANUAL_INVALID.to_string();
    }
    let (name, number) = (parts[0].to_string(), parts[1].to_string());
    session.draft.trip = Some(TripSelection::ManualTrain {
        name: name.clone(),
        number: number.clone(),
    });
    session.results = None;
    session.step = Step::RailSelectClass;
    format::manual_train_entered(&name, &number)
}

fn select_class(session: &mut Session, input: &str) -> String {
    let Some(class) = RailClass::from_menu_choice(input) else {
        return prompts::RAIL_CLASS_INVALID.to_string();
    };
    session.draft.fare_class = Some(FareClass::Rail(class));
    session.step = Step::RailTravelers;
    format::class_selected(class.label(), prompts::RAIL_TRAVELERS_PROMPT)
}

fn travelers(session: &mut Session, input: &str) -> String {
    let lines: Vec<&str> = input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        return prompts::RAIL_TRAVELER_INVALID.to_string();
    }
    // All lines parse or none are kept.
    let mut parsed = Vec::with_capacity(lines.len());
    for line in lines {
        match validate::parse_traveler(line) {
            Some(traveler) => parsed.push(traveler),
            None => return prompts::RAIL_TRAVELER_INVALID.to_string(),
        }
    }
    session.travelers = parsed;
    session.step = Step::RailPhone;
    prompts::PHONE_PROMPT.to_string()
}

async fn phone(engine: &DialogEngine, session: &mut Session, input: &str) -> String {
    let Some(number) = validate::parse_phone(input) else {
        return prompts::INVALID_PHONE.to_string();
    };
    session.draft.phone = Some(number.to_string());

    let booking = match finalize_rail(&session.draft, &session.travelers) {
        Ok(booking) => booking,
        Err(err) => {
            tracing::error!(error = %err, "rail draft failed finalization");
            return engine.recover(session);
        }
    };

    match engine.bookings.save_rail(&booking).await {
        Ok(id) => {
            tracing::info!(booking_id = %id, sender = %session.sender, "rail booking saved");
            let reply = format::rail_confirmation(&id, &booking);
            session.reset();
            reply
        }
        Err(err) => {
            // Session kept as-is so the user can retry without re-entering.
            tracing::warn!(error = %err, "rail booking persistence failed");
            prompts::PERSIST_FAILED.to_string()
        }
    }
}
