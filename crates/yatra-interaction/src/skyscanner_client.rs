//! Sky Scanner RapidAPI client - one-way flight search.

use crate::config::RapidApiConfig;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use yatra_core::booking::{CabinClass, FlightOption, PassengerCounts};
use yatra_core::error::{Result, YatraError};
use yatra_core::search::FlightSearch;

const HOST: &str = "sky-scanner3.p.rapidapi.com";
const BASE_URL: &str = "https://sky-scanner3.p.rapidapi.com";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MARKET: &str = "IN";
const CURRENCY: &str = "INR";
const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// One-way flight search client against the Sky Scanner RapidAPI service.
#[derive(Clone)]
pub struct SkyscannerClient {
    client: Client,
    config: RapidApiConfig,
}

impl SkyscannerClient {
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
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    data: Option<SearchData>,
}

#[derive(Debug, Deserialize)]
struct SearchData {
    #[serde(default)]
    itineraries: Vec<ItineraryDto>,
}

#[derive(Debug, Deserialize)]
struct ItineraryDto {
    #[serde(default)]
    price: PriceDto,
    #[serde(default)]
    legs: Vec<LegDto>,
}

#[derive(Debug, Default, Deserialize)]
struct PriceDto {
    #[serde(default)]
    formatted: String,
}

#[derive(Debug, Deserialize)]
struct LegDto {
    #[serde(default)]
    origin: PlaceDto,
    #[serde(default)]
    destination: PlaceDto,
    departure: Option<String>,
    arrival: Option<String>,
    #[serde(default, rename = "durationInMinutes")]
    duration_in_minutes: u32,
    #[serde(default, rename = "stopCount")]
    stop_count: u32,
    #[serde(default)]
    segments: Vec<SegmentDto>,
    #[serde(default)]
    carriers: CarriersDto,
}

#[derive(Debug, Default, Deserialize)]
struct PlaceDto {
    #[serde(default)]
    city: String,
}

#[derive(Debug, Deserialize)]
struct SegmentDto {
    #[serde(default, rename = "flightNumber")]
    flight_number: String,
}

#[derive(Debug, Default, Deserialize)]
struct CarriersDto {
    #[serde(default)]
    marketing: Vec<CarrierDto>,
}

#[derive(Debug, Deserialize)]
struct CarrierDto {
    #[serde(default)]
    name: String,
}

/// Flattens itineraries into one option per itinerary, taking the first
/// (and for a one-way search, only) leg. Itineraries with missing or
/// unparseable timing are skipped.
fn flatten_itineraries(itineraries: Vec<ItineraryDto>) -> Vec<FlightOption> {
    let mut options = Vec::with_capacity(itineraries.len());
    for itinerary in itineraries {
        let price = itinerary.price.formatted;
        let Some(leg) = itinerary.legs.into_iter().next() else {
            continue;
        };
        let (Some(departure), Some(arrival)) = (
            leg.departure
                .as_deref()
                .and_then(|t| NaiveDateTime::parse_from_str(t, DATETIME_FORMAT).ok()),
            leg.arrival
                .as_deref()
                .and_then(|t| NaiveDateTime::parse_from_str(t, DATETIME_FORMAT).ok()),
        ) else {
            tracing::debug!("skipping itinerary with unparseable leg times");
            continue;
        };
        let flight_number = match leg.segments.first() {
            Some(segment) => segment.flight_number.clone(),
            None => continue,
        };
        let carrier = leg
            .carriers
            .marketing
            .first()
            .map(|c| c.name.clone())
            .unwrap_or_else(|| "Unknown".to_string());
        options.push(FlightOption {
            flight_number,
            price,
            departure,
            arrival,
            origin_city: leg.origin.city,
            destination_city: leg.destination.city,
            duration_minutes: leg.duration_in_minutes,
            stops: leg.stop_count,
            carrier,
        });
    }
    options
}

#[async_trait]
impl FlightSearch for SkyscannerClient {
    async fn search_one_way(
        &self,
        from_code: &str,
        to_code: &str,
        date: NaiveDate,
        counts: &PassengerCounts,
        cabin: CabinClass,
    ) -> Result<Vec<FlightOption>> {
        let url = format!("{BASE_URL}/flights/search-one-way");
        let response = self
            .client
            .get(&url)
            .query(&[
                ("fromEntityId", from_code.to_string()),
                ("toEntityId", to_code.to_string()),
                ("departDate", date.format("%Y-%m-%d").to_string()),
                ("market", MARKET.to_string()),
                ("currency", CURRENCY.to_string()),
                ("adults", counts.adults.to_string()),
                ("children", counts.children.to_string()),
                ("infants", counts.infants.to_string()),
                ("cabinClass", cabin.api_value().to_string()),
            ])
            .header("x-rapidapi-key", self.config.api_key())
            .header("x-rapidapi-host", HOST)
            .send()
            .await
            .map_err(|e| YatraError::upstream(HOST, format!("request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(YatraError::upstream(
                HOST,
                format!("HTTP {} from flight search", response.status()),
            ));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| YatraError::upstream(HOST, format!("unparseable response: {e}")))?;

        let itineraries = parsed.data.map(|d| d.itineraries).unwrap_or_default();
        let options = flatten_itineraries(itineraries);
        tracing::debug!(from_code, to_code, count = options.len(), "flight search completed");
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_response() -> &'static str {
        r#"{
            "data": {
                "itineraries": [
                    {
                        "price": {"formatted": "₹5,400"},
                        "legs": [{
                            "origin": {"city": "New Delhi"},
                            "destination": {"city": "Mumbai"},
                            "departure": "2026-09-10T08:30:00",
                            "arrival": "2026-09-10T10:35:00",
                            "durationInMinutes": 125,
                            "stopCount": 0,
                            "segments": [{"flightNumber": "805"}],
                            "carriers": {"marketing": [{"name": "Air India"}]}
                        }]
                    },
                    {
                        "price": {"formatted": "₹6,100"},
                        "legs": [{
                            "origin": {"city": "New Delhi"},
                            "destination": {"city": "Mumbai"},
                            "departure": "not-a-time",
                            "arrival": "2026-09-10T12:00:00",
                            "durationInMinutes": 130,
                            "stopCount": 1,
                            "segments": [{"flightNumber": "211"}],
                            "carriers": {"marketing": []}
                        }]
                    }
                ]
            }
        }"#
    }

    #[test]
    fn itineraries_flatten_to_flight_options() {
        let parsed: SearchResponse = serde_json::from_str(sample_response()).unwrap();
        let options = flatten_itineraries(parsed.data.unwrap().itineraries);
        // The second itinerary has an unparseable departure and is skipped.
        assert_eq!(options.len(), 1);
        let option = &options[0];
        assert_eq!(option.flight_number, "805");
        assert_eq!(option.price, "₹5,400");
        assert_eq!(option.origin_city, "New Delhi");
        assert_eq!(option.duration_minutes, 125);
        assert_eq!(option.stops, 0);
        assert_eq!(option.carrier, "Air India");
    }

    #[test]
    fn missing_data_yields_no_options() {
        let parsed: SearchResponse = serde_json::from_str(r#"{"data": null}"#).unwrap();
        let itineraries = parsed.data.map(|d| d.itineraries).unwrap_or_default();
        assert!(flatten_itineraries(itineraries).is_empty());
    }
}
