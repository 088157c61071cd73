//! Session domain model.

use super::step::Step;
use crate::booking::{BookingDraft, FlightOption, PassengerRecord, TrainOption, TravelerRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of the chat sender a session belongs to.
///
/// The transport hands us an opaque string (e.g. a WhatsApp number); it is
/// trimmed once on construction and compared verbatim afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SenderId(String);

impl SenderId {
    /// Creates a sender identity from the raw transport value.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into().trim().to_string())
    }

    /// Returns the identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SenderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The search results cached for a selection sub-flow.
///
/// The structured records themselves are retained so that a numeric
/// selection commits the record by index; display text is formatted at
/// output time and never parsed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CachedResults {
    /// Train options from a rail search.
    Trains(Vec<TrainOption>),
    /// Flight options from an air search.
    Flights(Vec<FlightOption>),
}

/// A cached, order-preserving result list plus the pagination cursor.
///
/// Owned by the session for the lifetime of the selection sub-flow only;
/// it is dropped once a selection is committed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultCache {
    /// The cached search results.
    pub results: CachedResults,
    /// Index of the first not-yet-shown result. Only ever moves forward.
    pub cursor: usize,
}

impl ResultCache {
    /// Caches train search results with the cursor at the start.
    pub fn trains(options: Vec<TrainOption>) -> Self {
        Self {
            results: CachedResults::Trains(options),
            cursor: 0,
        }
    }

    /// Caches flight search results with the cursor at the start.
    pub fn flights(options: Vec<FlightOption>) -> Self {
        Self {
            results: CachedResults::Flights(options),
            cursor: 0,
        }
    }

    /// Number of cached results.
    pub fn len(&self) -> usize {
        match &self.results {
            CachedResults::Trains(t) => t.len(),
            CachedResults::Flights(f) => f.len(),
        }
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Per-sender conversational state.
///
/// One session exists per conversation identity. It is created on first
/// contact (or explicit restart), mutated exclusively by the dialog engine
/// during a single transition, and reset on successful booking completion,
/// restart, or store-level idle expiry.
///
/// Invariants:
/// - `step` is always a member of [`Step`].
/// - `current_passenger` never exceeds the draft's total passenger count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The conversation identity this session belongs to.
    pub sender: SenderId,
    /// Current dialog step.
    pub step: Step,
    /// Booking-in-progress data, populated monotonically across steps.
    pub draft: BookingDraft,
    /// Cached search results while a selection sub-flow is active.
    pub results: Option<ResultCache>,
    /// Rail travelers collected so far.
    pub travelers: Vec<TravelerRecord>,
    /// Air passengers collected so far.
    pub passengers: Vec<PassengerRecord>,
    /// 1-based ordinal of the passenger currently being collected.
    pub current_passenger: usize,
    /// When the session was created.
    pub created_at: DateTime<Utc>,
    /// When the session was last mutated.
    pub updated_at: DateTime<Utc>,
}

impl Session {
    /// Creates a fresh session at [`Step::Entry`] for a sender.
    pub fn new(sender: SenderId) -> Self {
        let now = Utc::now();
        Self {
            sender,
            step: Step::Entry,
            draft: BookingDraft::default(),
            results: None,
            travelers: Vec::new(),
            passengers: Vec::new(),
            current_passenger: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Discards all accumulated state, returning the session to
    /// [`Step::Entry`] with an empty draft. The sender identity and
    /// creation time are kept.
    pub fn reset(&mut self) {
        self.step = Step::Entry;
        self.draft = BookingDraft::default();
        self.results = None;
        self.travelers.clear();
        self.passengers.clear();
        self.current_passenger = 0;
        self.updated_at = Utc::now();
    }

    /// Total passenger count from the draft composition, or zero when the
    /// composition has not been entered yet.
    pub fn total_passengers(&self) -> usize {
        self.draft
            .counts
            .as_ref()
            .map(|c| c.total() as usize)
            .unwrap_or(0)
    }

    /// Marks the session as mutated now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_at_entry_with_empty_draft() {
        let session = Session::new(SenderId::new(" +911234567890 "));
        assert_eq!(session.sender.as_str(), "+911234567890");
        assert_eq!(session.step, Step::Entry);
        assert_eq!(session.draft, BookingDraft::default());
        assert!(session.passengers.is_empty());
    }

    #[test]
    fn reset_discards_draft_and_results() {
        let mut session = Session::new(SenderId::new("abc"));
        session.step = Step::RailSelectTrain;
        session.draft.origin = Some("NDLS".to_string());
        session.results = Some(ResultCache::trains(Vec::new()));
        session.reset();
        assert_eq!(session.step, Step::Entry);
        assert!(session.draft.origin.is_none());
        assert!(session.results.is_none());
    }
}
