//! The dialog engine.
//!
//! `DialogEngine::transition` is the single entry point of the state
//! machine: given a session and one inbound message it consults the
//! validators, the paginator and the booking assembler, mutates the session,
//! and produces the outbound reply. External collaborators (search,
//! persistence, reference data) are fallible black boxes behind traits.

use super::{air, format, prompts, rail};
use crate::booking::BookingRepository;
use crate::reference::ReferenceData;
use crate::search::{FlightSearch, RailSearch};
use crate::session::{Session, Step};
use std::sync::Arc;

/// The conversational state machine.
///
/// One engine instance serves all senders; per-sender state lives entirely
/// in the [`Session`] passed to [`transition`](Self::transition).
pub struct DialogEngine {
    pub(crate) rail_search: Arc<dyn RailSearch>,
    pub(crate) flight_search: Arc<dyn FlightSearch>,
    pub(crate) bookings: Arc<dyn BookingRepository>,
    pub(crate) reference: Arc<dyn ReferenceData>,
}

impl DialogEngine {
    /// Creates an engine over the four external collaborators.
    pub fn new(
        rail_search: Arc<dyn RailSearch>,
        flight_search: Arc<dyn FlightSearch>,
        bookings: Arc<dyn BookingRepository>,
        reference: Arc<dyn ReferenceData>,
    ) -> Self {
        Self {
            rail_search,
            flight_search,
            bookings,
            reference,
        }
    }

    /// Executes one dialog transition.
    ///
    /// Invalid input never mutates the session beyond its activity
    /// timestamp; valid input updates exactly the fields owned by the
    /// current step and advances it. Every recognized failure maps to a
    /// reply and a deterministic next step; no error escapes this call.
    pub async fn transition(&self, session: &mut Session, text: &str) -> String {
        let input = text.trim();

        // 'restart' wins over any step-specific parsing.
        if input.eq_ignore_ascii_case("restart") {
            tracing::debug!(sender = %session.sender, "session restarted by user");
            session.reset();
            session.touch();
            return prompts::RESTARTED.to_string();
        }

        let reply = match session.step {
            Step::Entry => {
                session.step = Step::MainMenu;
                prompts::GREETING.to_string()
            }
            Step::MainMenu => self.main_menu(session, input),
            Step::RailSourceStation
            | Step::RailDestStation
            | Step::RailTravelDate
            | Step::RailConfirmRoute
            | Step::RailSelectTrain
            | Step::RailManualTrain
            | Step::RailSelectClass
            | Step::RailTravelers
            | Step::RailPhone => rail::handle(self, session, input).await,
            Step::AirDepartAirport
            | Step::AirDestAirport
            | Step::AirTravelDate
            | Step::AirSelectClass
            | Step::AirPassengerCounts
            | Step::AirEmail
            | Step::AirSelectFlight
            | Step::AirPassengerEntry
            | Step::AirContactPhone => air::handle(self, session, input).await,
            Step::PnrLookup => self.pnr_lookup(session, input).await,
            Step::LiveStatus => self.live_status(session, input).await,
        };
        session.touch();
        reply
    }

    fn main_menu(&self, session: &mut Session, input: &str) -> String {
        match input {
            "1" => {
                session.step = Step::RailSourceStation;
                prompts::RAIL_SOURCE_PROMPT.to_string()
            }
            "2" => {
                session.step = Step::AirDepartAirport;
                prompts::AIR_DEPART_PROMPT.to_string()
            }
            "3" => {
                session.step = Step::PnrLookup;
                prompts::PNR_PROMPT.to_string()
            }
            "4" => {
                session.step = Step::LiveStatus;
                prompts::LIVE_PROMPT.to_string()
            }
            _ => prompts::MENU_INVALID.to_string(),
        }
    }

    /// Recovers from a session whose stored state is inconsistent with its
    /// step (e.g. a selection step with no cached results). The corruption
    /// is confined to this session: it is reinitialized at Entry.
    pub(crate) fn recover(&self, session: &mut Session) -> String {
        tracing::warn!(
            sender = %session.sender,
            step = %session.step,
            "inconsistent session state, reinitializing"
        );
        session.reset();
        prompts::SESSION_RESET.to_string()
    }

    async fn pnr_lookup(&self, session: &mut Session, input: &str) -> String {
        if input.is_empty() {
            return prompts::PNR_PROMPT.to_string();
        }
        let reply = match self.rail_search.pnr_status(input).await {
            Ok(status) => format::pnr_text(&status),
            Err(err) => {
                tracing::warn!(error = %err, pnr = input, "PNR lookup failed");
                prompts::PNR_FAILED.to_string()
            }
        };
        session.step = Step::Entry;
        reply
    }

    async fn live_status(&self, session: &mut Session, input: &str) -> String {
        let parts: Vec<&str> = input.split_whitespace().collect();
        if parts.len() != 2 {
            return prompts::LIVE_FORMAT_INVALID.to_string();
        }
        let day: u8 = match parts[1].parse() {
            Ok(day @ 1..=5) => day,
            _ => return prompts::LIVE_DAY_INVALID.to_string(),
        };
        // Day 1 means today, so the API offset is day - 1.
        let reply = match self.rail_search.live_status(parts[0], day - 1).await {
            Ok(status) => format::live_status_text(&status),
            Err(err) => {
                tracing::warn!(error = %err, train = parts[0], "live status lookup failed");
                prompts::LIVE_FAILED.to_string()
            }
        };
        session.step = Step::Entry;
        reply
    }
}
