//! IRCTC RapidAPI client - rail search, PNR status and live train status.

use crate::config::RapidApiConfig;
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use yatra_core::booking::TrainOption;
use yatra_core::error::{Result, YatraError};
use yatra_core::search::{LiveTrainStatus, PnrPassenger, PnrStatus, RailSearch};

const HOST: &str = "irctc1.p.rapidapi.com";
const BASE_URL: &str = "https://irctc1.p.rapidapi.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const RESULTS_PER_PAGE: u32 = 50;

/// Rail search and status client against the IRCTC RapidAPI service.
#[derive(Clone)]
pub struct IrctcClient {
    client: Client,
    config: RapidApiConfig,
}

impl IrctcClient {
    /// Creates a client with the provided configuration.
    pub fn new(config: RapidApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| YatraError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client, config })
    }

    /// Creates a client from the `RAPIDAPI_KEY` environment variable.
    pub fn try_from_env() -> Result<Self> {
        Self::new(RapidApiConfig::try_from_env()?)
    }

    async fn get_json<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let url = format!("{BASE_URL}{path}");
        let response = self
            .client
            .get(&url)
            .query(query)
            .header("x-rapidapi-key", self.config.api_key())
            .header("x-rapidapi-host", HOST)
            .send()
            .await
            .map_err(|e| YatraError::upstream(HOST, format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(YatraError::upstream(
                HOST,
                format!("HTTP {} from {}", response.status(), path),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| YatraError::upstream(HOST, format!("unparseable response: {e}")))
    }
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    status: bool,
    data: Option<T>,
}

impl<T> Envelope<T> {
    fn into_data(self, operation: &str) -> Result<T> {
        if !self.status {
            return Err(YatraError::upstream(
                HOST,
                format!("{operation} reported failure"),
            ));
        }
        self.data
            .ok_or_else(|| YatraError::upstream(HOST, format!("{operation} returned no data")))
    }
}

#[derive(Debug, Deserialize)]
struct TrainDto {
    #[serde(default)]
    train_name: String,
    #[serde(default)]
    train_number: String,
    #[serde(default)]
    from_std: String,
    #[serde(default)]
    to_std: String,
    #[serde(default)]
    duration: String,
}

impl From<TrainDto> for TrainOption {
    fn from(dto: TrainDto) -> Self {
        TrainOption {
            name: dto.train_name,
            number: dto.train_number,
            departs: dto.from_std,
            arrives: dto.to_std,
            duration: dto.duration,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PnrPassengerDto {
    #[serde(default)]
    number: u32,
    #[serde(default)]
    current_status: String,
    #[serde(default)]
    coach: String,
    #[serde(default)]
    berth: String,
    #[serde(default)]
    booking_status: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct PnrDto {
    #[serde(default)]
    pnr: String,
    #[serde(default)]
    train_no: String,
    #[serde(default)]
    train_name: String,
    #[serde(default)]
    class: String,
    #[serde(default)]
    doj: String,
    #[serde(default)]
    source_name: String,
    #[serde(default, rename = "From")]
    from_code: String,
    #[serde(default)]
    reservation_upto_name: String,
    #[serde(default, rename = "To")]
    to_code: String,
    #[serde(default)]
    boarding_station_name: String,
    #[serde(default)]
    departure_time: String,
    #[serde(default)]
    arrival_time: String,
    #[serde(default)]
    duration: String,
    #[serde(default)]
    ticket_fare: serde_json::Value,
    #[serde(default)]
    quota: String,
    #[serde(default)]
    passenger_status: Vec<PnrPassengerDto>,
    #[serde(default)]
    coach_position: String,
}

impl From<PnrDto> for PnrStatus {
    fn from(dto: PnrDto) -> Self {
        PnrStatus {
            pnr: dto.pnr,
            train_number: dto.train_no,
            train_name: dto.train_name,
            class: dto.class,
            date_of_journey: dto.doj,
            source: format!("{} ({})", dto.source_name, dto.from_code),
            destination: format!("{} ({})", dto.reservation_upto_name, dto.to_code),
            boarding_station: dto.boarding_station_name,
            departure: dto.departure_time,
            arrival: dto.arrival_time,
            duration: dto.duration,
            fare: scalar_to_string(&dto.ticket_fare).unwrap_or_default(),
            quota: dto.quota,
            passengers: dto
                .passenger_status
                .into_iter()
                .map(|p| PnrPassenger {
                    number: p.number,
                    current_status: p.current_status,
                    coach: p.coach,
                    berth: p.berth,
                    booking_status: p.booking_status,
                })
                .collect(),
            coach_position: dto.coach_position,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LiveStatusDto {
    #[serde(default)]
    train_name: String,
    #[serde(default)]
    train_number: String,
    #[serde(default)]
    train_start_date: String,
    #[serde(default)]
    source_stn_name: String,
    #[serde(default)]
    dest_stn_name: String,
    #[serde(default)]
    current_station_name: String,
    #[serde(default)]
    status_as_of: String,
    #[serde(default)]
    delay: serde_json::Value,
    #[serde(default)]
    platform_number: serde_json::Value,
    #[serde(default)]
    distance_covered: serde_json::Value,
}

// The service is loose about scalar types: numbers sometimes arrive as
// strings and vice versa.
fn scalar_to_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn scalar_to_i64(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl From<LiveStatusDto> for LiveTrainStatus {
    fn from(dto: LiveStatusDto) -> Self {
        LiveTrainStatus {
            train_name: dto.train_name,
            train_number: dto.train_number,
            start_date: dto.train_start_date,
            source: dto.source_stn_name,
            destination: dto.dest_stn_name,
            current_station: dto.current_station_name,
            status_as_of: dto.status_as_of,
            delay_minutes: scalar_to_i64(&dto.delay).unwrap_or(0),
            platform: scalar_to_string(&dto.platform_number),
            distance_covered_km: scalar_to_i64(&dto.distance_covered).map(|d| d.max(0) as u32),
        }
    }
}

#[async_trait]
impl RailSearch for IrctcClient {
    async fn search_trains(
        &self,
        from_code: &str,
        to_code: &str,
        date: NaiveDate,
    ) -> Result<Vec<TrainOption>> {
        let envelope: Envelope<Vec<TrainDto>> = self
            .get_json(
                "/api/v3/trainBetweenStations",
                &[
                    ("fromStationCode", from_code.to_string()),
                    ("toStationCode", to_code.to_string()),
                    ("dateOfJourney", date.format("%Y-%m-%d").to_string()),
                    ("resultsPerPage", RESULTS_PER_PAGE.to_string()),
                ],
            )
            .await?;
        // A route with no trains is an empty list, not an error.
        let trains = envelope.data.unwrap_or_default();
        tracing::debug!(from_code, to_code, count = trains.len(), "train search completed");
        Ok(trains.into_iter().map(TrainOption::from).collect())
    }

    async fn pnr_status(&self, pnr: &str) -> Result<PnrStatus> {
        let envelope: Envelope<PnrDto> = self
            .get_json(
                "/api/v3/getPNRStatus",
                &[("pnrNumber", pnr.to_string())],
            )
            .await?;
        Ok(envelope.into_data("PNR lookup")?.into())
    }

    async fn live_status(&self, train_number: &str, day_offset: u8) -> Result<LiveTrainStatus> {
        let envelope: Envelope<LiveStatusDto> = self
            .get_json(
                "/api/v1/liveTrainStatus",
                &[
                    ("trainNo", train_number.to_string()),
                    ("startDay", day_offset.to_string()),
                ],
            )
            .await?;
        Ok(envelope.into_data("live status lookup")?.into())
    }
}
