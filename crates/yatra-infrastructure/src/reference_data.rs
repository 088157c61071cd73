//! Static station and airport reference data.

use anyhow::{Context, Result as AnyResult};
use serde::Deserialize;
use std::path::Path;
use yatra_core::reference::ReferenceData;

/// One name-to-code entry.
#[derive(Debug, Clone, Deserialize)]
pub struct CodeEntry {
    /// Station or airport code (e.g. "NDLS", "DEL").
    pub code: String,
    /// Human name the code is known by (e.g. "New Delhi").
    pub name: String,
}

/// In-memory reference tables loaded once at startup.
///
/// Lookups are case-insensitive: a query matches an entry when it equals
/// the code, or when the query and the entry name contain each other. When
/// no table is available the lookups degrade to "always no match"; the
/// dialog surfaces that as an ordinary lookup miss.
pub struct StaticReferenceData {
    stations: Vec<CodeEntry>,
    airports: Vec<CodeEntry>,
}

#[derive(Debug, Deserialize)]
struct ReferenceFile {
    #[serde(default)]
    stations: Vec<CodeEntry>,
    #[serde(default)]
    airports: Vec<CodeEntry>,
}

fn lookup(entries: &[CodeEntry], query: &str) -> Option<String> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return None;
    }
    for entry in entries {
        if entry.code.to_lowercase() == query {
            return Some(entry.code.clone());
        }
    }
    for entry in entries {
        let name = entry.name.to_lowercase();
        if name.contains(&query) || query.contains(&name) {
            return Some(entry.code.clone());
        }
    }
    None
}

impl StaticReferenceData {
    /// Creates reference data from explicit tables.
    pub fn new(stations: Vec<CodeEntry>, airports: Vec<CodeEntry>) -> Self {
        Self { stations, airports }
    }

    /// Creates reference data with an empty table; every lookup misses.
    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// The built-in tables covering major Indian stations and airports.
    pub fn builtin() -> Self {
        let stations = [
            ("NDLS", "New Delhi"),
            ("BCT", "Mumbai Central"),
            ("MAS", "Chennai Central"),
            ("HWH", "Howrah"),
            ("SBC", "Bengaluru"),
            ("BRC", "Vadodara"),
            ("ADI", "Ahmedabad"),
            ("JP", "Jaipur"),
            ("LKO", "Lucknow"),
            ("PUNE", "Pune"),
            ("BPL", "Bhopal"),
            ("CNB", "Kanpur"),
            ("PNBE", "Patna"),
            ("SC", "Secunderabad"),
            ("TVC", "Thiruvananthapuram"),
        ];
        let airports = [
            ("DEL", "New Delhi"),
            ("BOM", "Mumbai"),
            ("MAA", "Chennai"),
            ("CCU", "Kolkata"),
            ("BLR", "Bengaluru"),
            ("HYD", "Hyderabad"),
            ("AMD", "Ahmedabad"),
            ("GOI", "Goa"),
            ("PNQ", "Pune"),
            ("JAI", "Jaipur"),
            ("LKO", "Lucknow"),
            ("COK", "Kochi"),
            ("IXC", "Chandigarh"),
            ("PAT", "Patna"),
            ("TRV", "Thiruvananthapuram"),
        ];
        let to_entries = |table: &[(&str, &str)]| {
            table
                .iter()
                .map(|(code, name)| CodeEntry {
                    code: (*code).to_string(),
                    name: (*name).to_string(),
                })
                .collect()
        };
        Self::new(to_entries(&stations), to_entries(&airports))
    }

    /// Loads reference tables from a TOML file with `[[stations]]` and
    /// `[[airports]]` entries.
    pub fn from_toml_file(path: impl AsRef<Path>) -> AnyResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read reference data file {}", path.display()))?;
        let file: ReferenceFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse reference data file {}", path.display()))?;
        Ok(Self::new(file.stations, file.airports))
    }

    /// Loads the given file, falling back to the built-in tables when the
    /// file is absent or unreadable.
    pub fn load_or_builtin(path: Option<&Path>) -> Self {
        match path {
            Some(path) => match Self::from_toml_file(path) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!(error = %e, "falling back to built-in reference data");
                    Self::builtin()
                }
            },
            None => Self::builtin(),
        }
    }
}

impl ReferenceData for StaticReferenceData {
    fn station_code(&self, query: &str) -> Option<String> {
        lookup(&self.stations, query)
    }

    fn airport_code(&self, query: &str) -> Option<String> {
        lookup(&self.airports, query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_matches_are_case_insensitive() {
        let data = StaticReferenceData::builtin();
        assert_eq!(data.station_code("ndls"), Some("NDLS".to_string()));
        assert_eq!(data.airport_code("BOM"), Some("BOM".to_string()));
    }

    #[test]
    fn names_match_in_either_direction() {
        let data = StaticReferenceData::builtin();
        assert_eq!(data.station_code("new delhi"), Some("NDLS".to_string()));
        assert_eq!(data.station_code("Delhi"), Some("NDLS".to_string()));
        assert_eq!(
            data.airport_code("mumbai airport please"),
            Some("BOM".to_string())
        );
    }

    #[test]
    fn unknown_queries_miss() {
        let data = StaticReferenceData::builtin();
        assert_eq!(data.station_code("Atlantis"), None);
        assert_eq!(data.airport_code(""), None);
    }

    #[test]
    fn empty_tables_always_miss() {
        let data = StaticReferenceData::empty();
        assert_eq!(data.station_code("New Delhi"), None);
    }

    #[test]
    fn toml_file_overrides_the_builtin_tables() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reference.toml");
        std::fs::write(
            &path,
            "[[stations]]\ncode = \"XYZ\"\nname = \"Example Town\"\n",
        )
        .unwrap();

        let data = StaticReferenceData::from_toml_file(&path).unwrap();
        assert_eq!(data.station_code("example town"), Some("XYZ".to_string()));
        assert_eq!(data.airport_code("Mumbai"), None);
    }
}
