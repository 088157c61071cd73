use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use yatra_core::booking::{
    BookingRepository, CabinClass, FlightOption, PassengerCounts, TrainOption,
};
use yatra_core::dialog::DialogEngine;
use yatra_core::error::YatraError;
use yatra_core::search::{FlightSearch, LiveTrainStatus, PnrStatus, RailSearch};
use yatra_core::session::SenderId;
use yatra_application::BookingAssistant;
use yatra_infrastructure::{
    InMemoryBookingRepository, InMemorySessionStore, StaticReferenceData, TomlBookingRepository,
};
use yatra_interaction::{IrctcClient, RapidApiConfig, SkyscannerClient};

/// Search collaborator used when no RAPIDAPI_KEY is configured: train
/// searches come back empty (the dialog falls through to manual entry) and
/// status lookups report the service as unavailable.
struct OfflineSearch;

#[async_trait]
impl RailSearch for OfflineSearch {
    async fn search_trains(
        &self,
        _from_code: &str,
        _to_code: &str,
        _date: NaiveDate,
    ) -> yatra_core::error::Result<Vec<TrainOption>> {
        Ok(Vec::new())
    }

    async fn pnr_status(&self, _pnr: &str) -> yatra_core::error::Result<PnrStatus> {
        Err(YatraError::upstream("offline", "RAPIDAPI_KEY not configured"))
    }

    async fn live_status(
        &self,
        _train_number: &str,
        _day_offset: u8,
    ) -> yatra_core::error::Result<LiveTrainStatus> {
        Err(YatraError::upstream("offline", "RAPIDAPI_KEY not configured"))
    }
}

#[async_trait]
impl FlightSearch for OfflineSearch {
    async fn search_one_way(
        &self,
        _from_code: &str,
        _to_code: &str,
        _date: NaiveDate,
        _counts: &PassengerCounts,
        _cabin: CabinClass,
    ) -> yatra_core::error::Result<Vec<FlightOption>> {
        Ok(Vec::new())
    }
}

fn search_collaborators() -> Result<(Arc<dyn RailSearch>, Arc<dyn FlightSearch>)> {
    match RapidApiConfig::try_from_env() {
        Ok(config) => {
            tracing::info!("using live RapidAPI search services");
            Ok((
                Arc::new(IrctcClient::new(config.clone())?),
                Arc::new(SkyscannerClient::new(config)?),
            ))
        }
        Err(_) => {
            tracing::warn!("RAPIDAPI_KEY not set; running with offline search");
            Ok((Arc::new(OfflineSearch), Arc::new(OfflineSearch)))
        }
    }
}

pub async fn run(
    data_dir: Option<PathBuf>,
    reference: Option<PathBuf>,
    sender: String,
) -> Result<()> {
    let (rail_search, flight_search) = search_collaborators()?;

    let bookings: Arc<dyn BookingRepository> = match data_dir {
        Some(dir) => Arc::new(TomlBookingRepository::new(dir).await?),
        None => Arc::new(InMemoryBookingRepository::new()),
    };
    let reference_data = Arc::new(StaticReferenceData::load_or_builtin(reference.as_deref()));

    let engine = DialogEngine::new(rail_search, flight_search, bookings, reference_data);
    let assistant = BookingAssistant::new(Arc::new(InMemorySessionStore::new()), engine);
    let sender = SenderId::new(sender);

    println!("Yatra booking assistant. Type a message, or 'exit' to leave.");
    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("exit") || text.eq_ignore_ascii_case("quit") {
            break;
        }

        let reply = assistant.handle_message(&sender, text).await?;
        println!("{reply}\n");
    }

    Ok(())
}
