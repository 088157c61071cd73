//! TOML-based BookingRepository implementation.

use anyhow::{Context, Result as AnyResult};
use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::fs;
use yatra_core::booking::{
    AirBooking, BookingId, BookingRepository, RailBooking, StoredAirBooking, StoredRailBooking,
};
use yatra_core::error::{Result, YatraError};

/// Booking persistence as individual TOML files.
///
/// Directory structure:
/// ```text
/// base_dir/
/// ├── rail/
/// │   ├── <booking-id>.toml
/// │   └── ...
/// └── air/
///     ├── <booking-id>.toml
///     └── ...
/// ```
///
/// Each booking is written to a temporary file and renamed into place, so a
/// failed save never leaves a partial record visible to a list call.
pub struct TomlBookingRepository {
    base_dir: PathBuf,
}

impl TomlBookingRepository {
    /// Creates a repository rooted at `base_dir`, creating the directory
    /// structure if it doesn't exist.
    pub async fn new(base_dir: impl AsRef<Path>) -> AnyResult<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(base_dir.join("rail"))
            .await
            .context("Failed to create rail bookings directory")?;
        fs::create_dir_all(base_dir.join("air"))
            .await
            .context("Failed to create air bookings directory")?;
        Ok(Self { base_dir })
    }

    /// Creates a repository at the default location (`~/.yatra/bookings`).
    pub async fn default_location() -> AnyResult<Self> {
        let home_dir = dirs::home_dir().context("Failed to get home directory")?;
        Self::new(home_dir.join(".yatra").join("bookings")).await
    }

    fn booking_file_path(&self, kind: &str, id: &BookingId) -> PathBuf {
        self.base_dir.join(kind).join(format!("{}.toml", id))
    }

    async fn write_atomically(&self, path: &Path, content: &str) -> Result<()> {
        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, content)
            .await
            .map_err(|e| YatraError::persistence(format!("write {}: {}", tmp_path.display(), e)))?;
        fs::rename(&tmp_path, path)
            .await
            .map_err(|e| YatraError::persistence(format!("rename {}: {}", path.display(), e)))?;
        Ok(())
    }

    async fn read_all<T>(&self, kind: &str) -> Result<Vec<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let dir = self.base_dir.join(kind);
        let mut entries = fs::read_dir(&dir)
            .await
            .map_err(|e| YatraError::persistence(format!("read {}: {}", dir.display(), e)))?;

        let mut bookings = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| YatraError::persistence(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("toml") {
                continue;
            }
            let content = fs::read_to_string(&path)
                .await
                .map_err(|e| YatraError::persistence(format!("read {}: {}", path.display(), e)))?;
            match toml::from_str(&content) {
                Ok(booking) => bookings.push(booking),
                // An unreadable file is skipped, not fatal for the listing.
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "skipping unparseable booking file");
                }
            }
        }
        Ok(bookings)
    }
}

#[async_trait]
impl BookingRepository for TomlBookingRepository {
    async fn save_rail(&self, booking: &RailBooking) -> Result<BookingId> {
        let id = BookingId::generate();
        let stored = StoredRailBooking {
            id,
            booked_at: Utc::now(),
            booking: booking.clone(),
        };
        let content = toml::to_string_pretty(&stored)?;
        self.write_atomically(&self.booking_file_path("rail", &id), &content)
            .await?;
        tracing::info!(booking_id = %id, "rail booking written");
        Ok(id)
    }

    async fn save_air(&self, booking: &AirBooking) -> Result<BookingId> {
        let id = BookingId::generate();
        let stored = StoredAirBooking {
            id,
            booked_at: Utc::now(),
            booking: booking.clone(),
        };
        let content = toml::to_string_pretty(&stored)?;
        self.write_atomically(&self.booking_file_path("air", &id), &content)
            .await?;
        tracing::info!(booking_id = %id, "air booking written");
        Ok(id)
    }

    async fn list_rail(&self) -> Result<Vec<StoredRailBooking>> {
        let mut bookings: Vec<StoredRailBooking> = self.read_all("rail").await?;
        bookings.sort_by_key(|b| b.booked_at);
        Ok(bookings)
    }

    async fn list_air(&self) -> Result<Vec<StoredAirBooking>> {
        let mut bookings: Vec<StoredAirBooking> = self.read_all("air").await?;
        bookings.sort_by_key(|b| b.booked_at);
        Ok(bookings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use yatra_core::booking::{RailClass, TravelerRecord};

    fn rail_booking() -> RailBooking {
        RailBooking {
            origin: "NDLS".to_string(),
            destination: "BRC".to_string(),
            travel_date: NaiveDate::from_ymd_opt(2026, 9, 10).unwrap(),
            train_name: "Shatabdi Express".to_string(),
            train_number: "12009".to_string(),
            departs: Some("06:00".to_string()),
            arrives: Some("12:30".to_string()),
            duration: Some("6h 30m".to_string()),
            fare_class: RailClass::Sleeper,
            travelers: vec![TravelerRecord {
                name: "Asha Rao".to_string(),
                age: 31,
                gender: "F".to_string(),
            }],
            phone: "+911234567890".to_string(),
        }
    }

    #[tokio::test]
    async fn save_then_list_round_trips_a_rail_booking() {
        let dir = tempfile::tempdir().unwrap();
        let repo = TomlBookingRepository::new(dir.path()).await.unwrap();

        let id = repo.save_rail(&rail_booking()).await.unwrap();
        let stored = repo.list_rail().await.unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].id, id);
        assert_eq!(stored[0].booking, rail_booking());
    }

    #[tokio::test]
    async fn listings_skip_unparseable_files() {
        let dir = tempfile::tempdir().unwrap();
        let repo = TomlBookingRepository::new(dir.path()).await.unwrap();
        repo.save_rail(&rail_booking()).await.unwrap();
        fs::write(dir.path().join("rail").join("junk.toml"), "not = [valid")
            .await
            .unwrap();

        let stored = repo.list_rail().await.unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[tokio::test]
    async fn listings_are_ordered_by_save_time() {
        let dir = tempfile::tempdir().unwrap();
        let repo = TomlBookingRepository::new(dir.path()).await.unwrap();
        let first = repo.save_rail(&rail_booking()).await.unwrap();
        let second = repo.save_rail(&rail_booking()).await.unwrap();

        let stored = repo.list_rail().await.unwrap();
        assert_eq!(stored[0].id, first);
        assert_eq!(stored[1].id, second);
    }
}
