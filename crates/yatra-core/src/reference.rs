//! Reference-data collaborator trait.

/// Name-to-code lookup tables for stations and airports.
///
/// The tables are loaded once at process start. Matching is
/// case-insensitive substring matching of the user's free text against the
/// known names (and codes). When the reference data is absent, lookups
/// degrade to "always no match"; the dialog engine surfaces that as an
/// ordinary lookup-miss error to the user.
pub trait ReferenceData: Send + Sync {
    /// Resolves free text to a station code, if any name or code matches.
    fn station_code(&self, query: &str) -> Option<String>;

    /// Resolves free text to an airport code, if any name or code matches.
    fn airport_code(&self, query: &str) -> Option<String>;
}
