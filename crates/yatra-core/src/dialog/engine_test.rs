use super::DialogEngine;
use super::prompts;
use crate::booking::{
    AirBooking, BookingId, BookingRepository, CabinClass, FlightOption, PassengerCounts,
    RailBooking, StoredAirBooking, StoredRailBooking, TrainOption, TripSelection,
};
use crate::error::{Result, YatraError};
use crate::reference::ReferenceData;
use crate::search::{FlightSearch, LiveTrainStatus, PnrPassenger, PnrStatus, RailSearch};
use crate::session::{SenderId, Session, Step};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use std::sync::{Arc, Mutex};

struct MockRailSearch {
    trains: Result<Vec<TrainOption>>,
    pnr: Result<PnrStatus>,
    live: Result<LiveTrainStatus>,
    live_calls: Mutex<Vec<(String, u8)>>,
}

impl Default for MockRailSearch {
    fn default() -> Self {
        Self {
            trains: Ok(Vec::new()),
            pnr: Err(YatraError::upstream("irctc", "not configured")),
            live: Err(YatraError::upstream("irctc", "not configured")),
            live_calls: Mutex::new(Vec::new()),
        }
    }
}

fn clone_result<T: Clone>(result: &Result<T>) -> Result<T> {
    match result {
        Ok(value) => Ok(value.clone()),
        Err(err) => Err(YatraError::upstream("mock", err.to_string())),
    }
}

#[async_trait]
impl RailSearch for MockRailSearch {
    async fn search_trains(
        &self,
        _from_code: &str,
        _to_code: &str,
        _date: NaiveDate,
    ) -> Result<Vec<TrainOption>> {
        clone_result(&self.trains)
    }

    async fn pnr_status(&self, _pnr: &str) -> Result<PnrStatus> {
        clone_result(&self.pnr)
    }

    async fn live_status(&self, train_number: &str, day_offset: u8) -> Result<LiveTrainStatus> {
        self.live_calls
            .lock()
            .unwrap()
            .push((train_number.to_string(), day_offset));
        clone_result(&self.live)
    }
}

struct MockFlightSearch {
    flights: Result<Vec<FlightOption>>,
}

impl Default for MockFlightSearch {
    fn default() -> Self {
        Self {
            flights: Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl FlightSearch for MockFlightSearch {
    async fn search_one_way(
        &self,
        _from_code: &str,
        _to_code: &str,
        _date: NaiveDate,
        _counts: &PassengerCounts,
        _cabin: CabinClass,
    ) -> Result<Vec<FlightOption>> {
        clone_result(&self.flights)
    }
}

#[derive(Default)]
struct MockBookingRepository {
    fail_saves: Mutex<bool>,
    rail: Mutex<Vec<StoredRailBooking>>,
    air: Mutex<Vec<StoredAirBooking>>,
}

impl MockBookingRepository {
    fn set_fail_saves(&self, fail: bool) {
        *self.fail_saves.lock().unwrap() = fail;
    }
}

#[async_trait]
impl BookingRepository for MockBookingRepository {
    async fn save_rail(&self, booking: &RailBooking) -> Result<BookingId> {
        if *self.fail_saves.lock().unwrap() {
            return Err(YatraError::persistence("disk full"));
        }
        let id = BookingId::generate();
        self.rail.lock().unwrap().push(StoredRailBooking {
            id,
            booked_at: chrono::Utc::now(),
            booking: booking.clone(),
        });
        Ok(id)
    }

    async fn save_air(&self, booking: &AirBooking) -> Result<BookingId> {
        if *self.fail_saves.lock().unwrap() {
            return Err(YatraError::persistence("disk full"));
        }
        let id = BookingId::generate();
        self.air.lock().unwrap().push(StoredAirBooking {
            id,
            booked_at: chrono::Utc::now(),
            booking: booking.clone(),
        });
        Ok(id)
    }

    async fn list_rail(&self) -> Result<Vec<StoredRailBooking>> {
        Ok(self.rail.lock().unwrap().clone())
    }

    async fn list_air(&self) -> Result<Vec<StoredAirBooking>> {
        Ok(self.air.lock().unwrap().clone())
    }
}

struct MockReferenceData;

impl ReferenceData for MockReferenceData {
    fn station_code(&self, query: &str) -> Option<String> {
        let query = query.to_lowercase();
        if query.contains("delhi") || query.contains("ndls") {
            Some("NDLS".to_string())
        } else if query.contains("vadodara") || query.contains("brc") {
            Some("BRC".to_string())
        } else {
            None
        }
    }

    fn airport_code(&self, query: &str) -> Option<String> {
        let query = query.to_lowercase();
        if query.contains("delhi") || query.contains("del") {
            Some("DEL".to_string())
        } else if query.contains("mumbai") || query.contains("bom") {
            Some("BOM".to_string())
        } else {
            None
        }
    }
}

struct Harness {
    engine: DialogEngine,
    bookings: Arc<MockBookingRepository>,
    rail_search: Arc<MockRailSearch>,
}

impl Harness {
    fn new(rail_search: MockRailSearch, flight_search: MockFlightSearch) -> Self {
        let rail_search = Arc::new(rail_search);
        let bookings = Arc::new(MockBookingRepository::default());
        let engine = DialogEngine::new(
            rail_search.clone(),
            Arc::new(flight_search),
            bookings.clone(),
            Arc::new(MockReferenceData),
        );
        Self {
            engine,
            bookings,
            rail_search,
        }
    }
}

fn session() -> Session {
    Session::new(SenderId::new("+911234567890"))
}

fn train(index: usize) -> TrainOption {
    TrainOption {
        name: format!("Express {}", index),
        number: format!("120{:02}", index),
        departs: "06:00".to_string(),
        arrives: "12:30".to_string(),
        duration: "6h 30m".to_string(),
    }
}

fn flight(index: usize) -> FlightOption {
    FlightOption {
        flight_number: format!("AI8{:02}", index),
        price: "₹5,400".to_string(),
        departure: NaiveDateTime::parse_from_str("2026-09-10T08:30:00", "%Y-%m-%dT%H:%M:%S")
            .unwrap(),
        arrival: NaiveDateTime::parse_from_str("2026-09-10T10:35:00", "%Y-%m-%dT%H:%M:%S").unwrap(),
        origin_city: "New Delhi".to_string(),
        destination_city: "Mumbai".to_string(),
        duration_minutes: 125,
        stops: 0,
        carrier: "Air India".to_string(),
    }
}

fn pnr_status() -> PnrStatus {
    PnrStatus {
        pnr: "8524716890".to_string(),
        train_number: "12009".to_string(),
        train_name: "Shatabdi Express".to_string(),
        class: "CC".to_string(),
        date_of_journey: "10-09-2026".to_string(),
        source: "New Delhi (NDLS)".to_string(),
        destination: "Vadodara (BRC)".to_string(),
        boarding_station: "New Delhi".to_string(),
        departure: "06:00".to_string(),
        arrival: "12:30".to_string(),
        duration: "6h 30m".to_string(),
        fare: "1250".to_string(),
        quota: "GN".to_string(),
        passengers: vec![PnrPassenger {
            number: 1,
            current_status: "CNF".to_string(),
            coach: "C4".to_string(),
            berth: "32".to_string(),
            booking_status: "CNF".to_string(),
        }],
        coach_position: "ENG C1 C2 C3 C4".to_string(),
    }
}

/// Drives a session to the rail travelers step with one selectable train.
async fn rail_session_at_travelers(harness: &Harness) -> Session {
    let mut s = session();
    harness.engine.transition(&mut s, "hi").await;
    harness.engine.transition(&mut s, "1").await;
    harness.engine.transition(&mut s, "New Delhi").await;
    harness.engine.transition(&mut s, "Vadodara").await;
    harness.engine.transition(&mut s, "10-09-2026").await;
    harness.engine.transition(&mut s, "confirm").await;
    harness.engine.transition(&mut s, "1").await;
    harness.engine.transition(&mut s, "2").await;
    assert_eq!(s.step, Step::RailTravelers);
    s
}

/// Drives a session to the air contact phone step with two adults entered.
async fn air_session_at_phone(harness: &Harness) -> Session {
    let mut s = session();
    harness.engine.transition(&mut s, "hi").await;
    harness.engine.transition(&mut s, "2").await;
    harness.engine.transition(&mut s, "New Delhi").await;
    harness.engine.transition(&mut s, "Mumbai").await;
    harness.engine.transition(&mut s, "10-09-2026").await;
    harness.engine.transition(&mut s, "1").await;
    harness.engine.transition(&mut s, "2,0,0").await;
    harness.engine.transition(&mut s, "asha@example.com").await;
    harness.engine.transition(&mut s, "1").await;
    harness
        .engine
        .transition(&mut s, "Asha, Rao, F, 02-01-1995, Indian")
        .await;
    harness
        .engine
        .transition(&mut s, "Ravi, Rao, M, 15-06-1992, Indian")
        .await;
    assert_eq!(s.step, Step::AirContactPhone);
    s
}

#[tokio::test]
async fn first_message_greets_and_opens_the_menu() {
    let harness = Harness::new(MockRailSearch::default(), MockFlightSearch::default());
    let mut s = session();
    let reply = harness.engine.transition(&mut s, "hello").await;
    assert_eq!(reply, prompts::GREETING);
    assert_eq!(s.step, Step::MainMenu);
}

#[tokio::test]
async fn menu_option_two_starts_the_flight_flow() {
    let harness = Harness::new(MockRailSearch::default(), MockFlightSearch::default());
    let mut s = session();
    harness.engine.transition(&mut s, "hi").await;
    let reply = harness.engine.transition(&mut s, "2").await;
    assert_eq!(reply, prompts::AIR_DEPART_PROMPT);
    assert_eq!(s.step, Step::AirDepartAirport);
}

#[tokio::test]
async fn invalid_menu_choice_keeps_the_menu_open() {
    let harness = Harness::new(MockRailSearch::default(), MockFlightSearch::default());
    let mut s = session();
    harness.engine.transition(&mut s, "hi").await;
    let reply = harness.engine.transition(&mut s, "book me a train").await;
    assert_eq!(reply, prompts::MENU_INVALID);
    assert_eq!(s.step, Step::MainMenu);
}

#[tokio::test]
async fn restart_discards_mid_flow_state() {
    let harness = Harness::new(MockRailSearch::default(), MockFlightSearch::default());
    let mut s = session();
    harness.engine.transition(&mut s, "hi").await;
    harness.engine.transition(&mut s, "1").await;
    harness.engine.transition(&mut s, "New Delhi").await;
    assert_eq!(s.draft.origin.as_deref(), Some("NDLS"));

    let reply = harness.engine.transition(&mut s, "ReStArT").await;
    assert_eq!(reply, prompts::RESTARTED);
    assert_eq!(s.step, Step::Entry);
    assert!(s.draft.origin.is_none());
}

#[tokio::test]
async fn impossible_calendar_date_is_rejected_without_advancing() {
    let harness = Harness::new(MockRailSearch::default(), MockFlightSearch::default());
    let mut s = session();
    harness.engine.transition(&mut s, "hi").await;
    harness.engine.transition(&mut s, "1").await;
    harness.engine.transition(&mut s, "New Delhi").await;
    harness.engine.transition(&mut s, "Vadodara").await;
    let draft_before = s.draft.clone();

    let reply = harness.engine.transition(&mut s, "31-02-2025").await;
    assert_eq!(reply, prompts::INVALID_DATE);
    assert_eq!(s.step, Step::RailTravelDate);
    assert_eq!(s.draft, draft_before);
}

#[tokio::test]
async fn unknown_station_is_rejected_without_advancing() {
    let harness = Harness::new(MockRailSearch::default(), MockFlightSearch::default());
    let mut s = session();
    harness.engine.transition(&mut s, "hi").await;
    harness.engine.transition(&mut s, "1").await;
    let reply = harness.engine.transition(&mut s, "Atlantis Central").await;
    assert_eq!(reply, prompts::STATION_NOT_FOUND);
    assert_eq!(s.step, Step::RailSourceStation);
    assert!(s.draft.origin.is_none());
}

#[tokio::test]
async fn train_pages_advance_five_at_a_time_until_the_end() {
    let rail = MockRailSearch {
        trains: Ok((1..=12).map(train).collect()),
        ..Default::default()
    };
    let harness = Harness::new(rail, MockFlightSearch::default());
    let mut s = session();
    harness.engine.transition(&mut s, "hi").await;
    harness.engine.transition(&mut s, "1").await;
    harness.engine.transition(&mut s, "New Delhi").await;
    harness.engine.transition(&mut s, "Vadodara").await;
    harness.engine.transition(&mut s, "10-09-2026").await;

    let page1 = harness.engine.transition(&mut s, "confirm").await;
    assert!(page1.contains("1. Express 1"));
    assert!(page1.contains("5. Express 5"));
    assert!(!page1.contains("6. Express 6"));
    assert!(page1.contains("Type 'more'"));

    let page2 = harness.engine.transition(&mut s, "more").await;
    assert!(page2.contains("6. Express 6"));
    assert!(page2.contains("10. Express 10"));

    let page3 = harness.engine.transition(&mut s, "more").await;
    assert!(page3.contains("11. Express 11"));
    assert!(page3.contains("12. Express 12"));
    assert!(page3.contains(prompts::RAIL_LIST_END));

    // Cursor is exhausted; a further 'more' only repeats the end marker.
    let done = harness.engine.transition(&mut s, "more").await;
    assert_eq!(done, prompts::RAIL_LIST_END);

    // Earlier options stay selectable after paging.
    let selected = harness.engine.transition(&mut s, "2").await;
    assert!(selected.contains("Express 2"));
    assert_eq!(s.step, Step::RailSelectClass);
}

#[tokio::test]
async fn out_of_range_train_choice_falls_back_to_manual_entry() {
    let rail = MockRailSearch {
        trains: Ok(vec![train(1), train(2)]),
        ..Default::default()
    };
    let harness = Harness::new(rail, MockFlightSearch::default());
    let mut s = session();
    harness.engine.transition(&mut s, "hi").await;
    harness.engine.transition(&mut s, "1").await;
    harness.engine.transition(&mut s, "New Delhi").await;
    harness.engine.transition(&mut s, "Vadodara").await;
    harness.engine.transition(&mut s, "10-09-2026").await;
    harness.engine.transition(&mut s, "confirm").await;

    let reply = harness.engine.transition(&mut s, "9").await;
    assert_eq!(reply, prompts::RAIL_MANUAL_PROMPT);
    assert_eq!(s.step, Step::RailManualTrain);
}

#[tokio::test]
async fn empty_search_routes_to_manual_train_entry() {
    let harness = Harness::new(MockRailSearch::default(), MockFlightSearch::default());
    let mut s = session();
    harness.engine.transition(&mut s, "hi").await;
    harness.engine.transition(&mut s, "1").await;
    harness.engine.transition(&mut s, "New Delhi").await;
    harness.engine.transition(&mut s, "Vadodara").await;
    harness.engine.transition(&mut s, "10-09-2026").await;

    let reply = harness.engine.transition(&mut s, "confirm").await;
    assert_eq!(reply, prompts::RAIL_NO_TRAINS);
    assert_eq!(s.step, Step::RailManualTrain);

    let reply = harness
        .engine
        .transition(&mut s, "Shatabdi Express, 12009")
        .await;
    assert!(reply.contains("Shatabdi Express (12009)"));
    assert_eq!(s.step, Step::RailSelectClass);
    assert!(matches!(
        s.draft.trip,
        Some(TripSelection::ManualTrain { .. })
    ));
}

#[tokio::test]
async fn rail_booking_completes_and_is_persisted() {
    let rail = MockRailSearch {
        trains: Ok(vec![train(1)]),
        ..Default::default()
    };
    let harness = Harness::new(rail, MockFlightSearch::default());
    let mut s = rail_session_at_travelers(&harness).await;

    harness
        .engine
        .transition(&mut s, "Asha Rao, 31, F\nRavi Rao, 34, M")
        .await;
    assert_eq!(s.step, Step::RailPhone);

    let reply = harness.engine.transition(&mut s, "+911234567890").await;
    assert!(reply.contains("Booking received!"));
    assert!(reply.contains("Asha Rao (31, F)"));
    assert_eq!(s.step, Step::Entry);

    let stored = harness.bookings.list_rail().await.unwrap();
    assert_eq!(stored.len(), 1);
    let booking = &stored[0].booking;
    assert_eq!(booking.origin, "NDLS");
    assert_eq!(booking.train_number, "12001");
    assert_eq!(booking.travelers.len(), 2);
    assert_eq!(booking.phone, "+911234567890");
    assert!(reply.contains(&stored[0].id.to_string()));
}

#[tokio::test]
async fn malformed_traveler_line_discards_the_whole_batch() {
    let rail = MockRailSearch {
        trains: Ok(vec![train(1)]),
        ..Default::default()
    };
    let harness = Harness::new(rail, MockFlightSearch::default());
    let mut s = rail_session_at_travelers(&harness).await;

    let reply = harness
        .engine
        .transition(&mut s, "Asha Rao, 31, F\nRavi Rao, thirty")
        .await;
    assert_eq!(reply, prompts::RAIL_TRAVELER_INVALID);
    assert_eq!(s.step, Step::RailTravelers);
    assert!(s.travelers.is_empty());
}

#[tokio::test]
async fn infant_count_above_adults_is_rejected() {
    let harness = Harness::new(MockRailSearch::default(), MockFlightSearch::default());
    let mut s = session();
    harness.engine.transition(&mut s, "hi").await;
    harness.engine.transition(&mut s, "2").await;
    harness.engine.transition(&mut s, "New Delhi").await;
    harness.engine.transition(&mut s, "Mumbai").await;
    harness.engine.transition(&mut s, "10-09-2026").await;
    harness.engine.transition(&mut s, "1").await;

    let reply = harness.engine.transition(&mut s, "2,1,3").await;
    assert_eq!(reply, prompts::COUNTS_CONSTRAINT);
    assert_eq!(s.step, Step::AirPassengerCounts);

    let reply = harness.engine.transition(&mut s, "2,one,1").await;
    assert_eq!(reply, prompts::COUNTS_FORMAT_INVALID);

    let reply = harness.engine.transition(&mut s, "0,0,0").await;
    assert_eq!(reply, prompts::COUNTS_FORMAT_INVALID);

    harness.engine.transition(&mut s, "2,1,1").await;
    assert_eq!(s.step, Step::AirEmail);
}

#[tokio::test]
async fn oversized_passenger_counts_are_rejected_without_panicking() {
    let harness = Harness::new(MockRailSearch::default(), MockFlightSearch::default());
    let mut s = session();
    harness.engine.transition(&mut s, "hi").await;
    harness.engine.transition(&mut s, "2").await;
    harness.engine.transition(&mut s, "New Delhi").await;
    harness.engine.transition(&mut s, "Mumbai").await;
    harness.engine.transition(&mut s, "10-09-2026").await;
    harness.engine.transition(&mut s, "1").await;

    // u32::MAX adults: the sum must not overflow on the way to rejection.
    let reply = harness.engine.transition(&mut s, "4294967295,1,0").await;
    assert_eq!(reply, prompts::COUNTS_TOO_MANY);
    assert_eq!(s.step, Step::AirPassengerCounts);
    assert!(s.draft.counts.is_none());

    let reply = harness.engine.transition(&mut s, "9,1,0").await;
    assert_eq!(reply, prompts::COUNTS_TOO_MANY);

    harness.engine.transition(&mut s, "8,1,0").await;
    assert_eq!(s.step, Step::AirEmail);
}

#[tokio::test]
async fn air_booking_classifies_passengers_by_entry_order() {
    let flights = MockFlightSearch {
        flights: Ok(vec![flight(1), flight(2)]),
    };
    let harness = Harness::new(MockRailSearch::default(), flights);
    let mut s = session();
    harness.engine.transition(&mut s, "hi").await;
    harness.engine.transition(&mut s, "2").await;
    harness.engine.transition(&mut s, "New Delhi").await;
    harness.engine.transition(&mut s, "Mumbai").await;
    harness.engine.transition(&mut s, "10-09-2026").await;
    harness.engine.transition(&mut s, "1").await;
    harness.engine.transition(&mut s, "2,1,1").await;
    let reply = harness.engine.transition(&mut s, "asha@example.com").await;
    assert!(reply.contains("Option 1"));
    assert!(reply.contains("AI801"));

    let p1 = harness.engine.transition(&mut s, "1").await;
    assert!(p1.contains("Adult 1"));
    let p2 = harness
        .engine
        .transition(&mut s, "Asha, Rao, F, 02-01-1995, Indian")
        .await;
    assert!(p2.contains("Adult 2"));
    let p3 = harness
        .engine
        .transition(&mut s, "Ravi, Rao, M, 15-06-1992, Indian")
        .await;
    assert!(p3.contains("Child 3"));
    let p4 = harness
        .engine
        .transition(&mut s, "Meera, Rao, F, 20-03-2018, Indian")
        .await;
    assert!(p4.contains("Infant 4"));
    harness
        .engine
        .transition(&mut s, "Arnav, Rao, M, 05-11-2025, Indian")
        .await;
    assert_eq!(s.step, Step::AirContactPhone);

    let reply = harness.engine.transition(&mut s, "+911234567890").await;
    assert!(reply.contains("Booking received!"));
    // The date of birth is echoed from the stored record, not the raw text.
    assert!(reply.contains("Date of birth: 02-01-1995"));
    assert_eq!(s.step, Step::Entry);

    let stored = harness.bookings.list_air().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].booking.passengers.len(), 4);
    assert_eq!(stored[0].booking.email, "asha@example.com");
}

#[tokio::test]
async fn empty_flight_search_keeps_the_email_step_for_a_retry() {
    let harness = Harness::new(MockRailSearch::default(), MockFlightSearch::default());
    let mut s = session();
    harness.engine.transition(&mut s, "hi").await;
    harness.engine.transition(&mut s, "2").await;
    harness.engine.transition(&mut s, "New Delhi").await;
    harness.engine.transition(&mut s, "Mumbai").await;
    harness.engine.transition(&mut s, "10-09-2026").await;
    harness.engine.transition(&mut s, "1").await;
    harness.engine.transition(&mut s, "1,0,0").await;

    let reply = harness.engine.transition(&mut s, "asha@example.com").await;
    assert_eq!(reply, prompts::AIR_NO_FLIGHTS);
    assert_eq!(s.step, Step::AirEmail);
}

#[tokio::test]
async fn out_of_range_flight_choice_stays_on_selection() {
    let flights = MockFlightSearch {
        flights: Ok(vec![flight(1)]),
    };
    let harness = Harness::new(MockRailSearch::default(), flights);
    let mut s = session();
    harness.engine.transition(&mut s, "hi").await;
    harness.engine.transition(&mut s, "2").await;
    harness.engine.transition(&mut s, "New Delhi").await;
    harness.engine.transition(&mut s, "Mumbai").await;
    harness.engine.transition(&mut s, "10-09-2026").await;
    harness.engine.transition(&mut s, "1").await;
    harness.engine.transition(&mut s, "1,0,0").await;
    harness.engine.transition(&mut s, "asha@example.com").await;

    let reply = harness.engine.transition(&mut s, "7").await;
    assert_eq!(reply, prompts::AIR_SELECT_OUT_OF_RANGE);
    assert_eq!(s.step, Step::AirSelectFlight);

    let reply = harness.engine.transition(&mut s, "first one").await;
    assert_eq!(reply, prompts::AIR_SELECT_INVALID);
    assert_eq!(s.step, Step::AirSelectFlight);
}

#[tokio::test]
async fn failed_save_keeps_the_session_so_the_phone_can_be_resent() {
    let flights = MockFlightSearch {
        flights: Ok(vec![flight(1)]),
    };
    let harness = Harness::new(MockRailSearch::default(), flights);
    harness.bookings.set_fail_saves(true);
    let mut s = air_session_at_phone(&harness).await;

    let reply = harness.engine.transition(&mut s, "+911234567890").await;
    assert_eq!(reply, prompts::PERSIST_FAILED);
    assert_eq!(s.step, Step::AirContactPhone);

    harness.bookings.set_fail_saves(false);
    let reply = harness.engine.transition(&mut s, "+911234567890").await;
    assert!(reply.contains("Booking received!"));
    assert_eq!(harness.bookings.list_air().await.unwrap().len(), 1);
}

#[tokio::test]
async fn selection_step_without_cached_results_resets_the_session() {
    let harness = Harness::new(MockRailSearch::default(), MockFlightSearch::default());
    let mut s = session();
    s.step = Step::AirSelectFlight;

    let reply = harness.engine.transition(&mut s, "1").await;
    assert_eq!(reply, prompts::SESSION_RESET);
    assert_eq!(s.step, Step::Entry);
}

#[tokio::test]
async fn pnr_lookup_renders_the_status_and_returns_to_entry() {
    let rail = MockRailSearch {
        pnr: Ok(pnr_status()),
        ..Default::default()
    };
    let harness = Harness::new(rail, MockFlightSearch::default());
    let mut s = session();
    harness.engine.transition(&mut s, "hi").await;
    harness.engine.transition(&mut s, "3").await;

    let reply = harness.engine.transition(&mut s, "8524716890").await;
    assert!(reply.contains("PNR details (8524716890)"));
    assert!(reply.contains("Shatabdi Express"));
    assert!(reply.contains("ENG-C1-C2-C3-C4"));
    assert_eq!(s.step, Step::Entry);
}

#[tokio::test]
async fn failed_pnr_lookup_reports_and_returns_to_entry() {
    let harness = Harness::new(MockRailSearch::default(), MockFlightSearch::default());
    let mut s = session();
    harness.engine.transition(&mut s, "hi").await;
    harness.engine.transition(&mut s, "3").await;

    let reply = harness.engine.transition(&mut s, "8524716890").await;
    assert_eq!(reply, prompts::PNR_FAILED);
    assert_eq!(s.step, Step::Entry);
}

#[tokio::test]
async fn live_status_day_one_maps_to_offset_zero() {
    let rail = MockRailSearch {
        live: Ok(LiveTrainStatus {
            train_name: "Shatabdi Express".to_string(),
            train_number: "12009".to_string(),
            start_date: "10-09-2026".to_string(),
            source: "New Delhi".to_string(),
            destination: "Vadodara".to_string(),
            current_station: "Mathura Jn".to_string(),
            status_as_of: "5 min ago".to_string(),
            delay_minutes: 12,
            platform: Some("2".to_string()),
            distance_covered_km: Some(141),
        }),
        ..Default::default()
    };
    let harness = Harness::new(rail, MockFlightSearch::default());
    let mut s = session();
    harness.engine.transition(&mut s, "hi").await;
    harness.engine.transition(&mut s, "4").await;

    let reply = harness.engine.transition(&mut s, "12009 1").await;
    assert!(reply.contains("Current location: Mathura Jn"));
    assert!(reply.contains("Delay: 12 minutes"));
    assert_eq!(s.step, Step::Entry);

    let calls = harness.rail_search.live_calls.lock().unwrap();
    assert_eq!(*calls, vec![("12009".to_string(), 0u8)]);
}

#[tokio::test]
async fn live_status_rejects_bad_input_without_calling_upstream() {
    let harness = Harness::new(MockRailSearch::default(), MockFlightSearch::default());
    let mut s = session();
    harness.engine.transition(&mut s, "hi").await;
    harness.engine.transition(&mut s, "4").await;

    let reply = harness.engine.transition(&mut s, "12009").await;
    assert_eq!(reply, prompts::LIVE_FORMAT_INVALID);
    assert_eq!(s.step, Step::LiveStatus);

    let reply = harness.engine.transition(&mut s, "12009 6").await;
    assert_eq!(reply, prompts::LIVE_DAY_INVALID);
    assert_eq!(s.step, Step::LiveStatus);

    assert!(harness.rail_search.live_calls.lock().unwrap().is_empty());
}
