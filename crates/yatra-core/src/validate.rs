//! Stateless input validators.
//!
//! One function per input class. All of them take the raw (already trimmed)
//! message text and either produce a normalized value or nothing, so the
//! dialog engine can retry the same step without mutating the session.

use crate::booking::{PassengerCounts, TravelerRecord};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[1-9]\d{1,14}$").expect("phone regex is valid"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").expect("email regex is valid")
});

/// Parses a travel date in the fixed `DD-MM-YYYY` format.
///
/// Impossible calendar dates (e.g. `31-02-2025`) are rejected.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%d-%m-%Y").ok()
}

/// Parses a travel date accepting `DD-MM-YYYY` or `DD-MM-YY`.
///
/// Two-digit years map into 2000-2099. Used by the rail flow only.
pub fn parse_date_lenient(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if let Some(date) = parse_date(text) {
        return Some(date);
    }
    let date = NaiveDate::parse_from_str(text, "%d-%m-%y").ok()?;
    if date.year() < 2000 {
        date.with_year(date.year() + 100)
    } else {
        Some(date)
    }
}

/// Validates an E.164-style phone number (`+` optional, 2-15 digits, no
/// leading zero).
pub fn parse_phone(text: &str) -> Option<&str> {
    let text = text.trim();
    PHONE_RE.is_match(text).then_some(text)
}

/// Validates a `local@domain.tld` email address.
pub fn parse_email(text: &str) -> Option<&str> {
    let text = text.trim();
    EMAIL_RE.is_match(text).then_some(text)
}

/// Upper bound on the total passenger count for one booking.
pub const MAX_PASSENGERS: u32 = 9;

/// Why a passenger composition was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountsError {
    /// Not three comma-separated non-negative integers.
    Format,
    /// More infants than adults; each adult carries at most one infant.
    InfantsExceedAdults,
    /// Total exceeds [`MAX_PASSENGERS`].
    TooManyPassengers,
}

/// Parses a passenger composition: three non-negative comma-separated
/// integers `adults,children,infants` with `infants <= adults` and at most
/// [`MAX_PASSENGERS`] in total.
pub fn parse_passenger_counts(text: &str) -> Result<PassengerCounts, CountsError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(CountsError::Format);
    }
    let numbers: Vec<u32> = parts
        .iter()
        .map(|p| p.parse::<u32>())
        .collect::<Result<_, _>>()
        .map_err(|_| CountsError::Format)?;
    let counts = PassengerCounts {
        adults: numbers[0],
        children: numbers[1],
        infants: numbers[2],
    };
    if counts.infants > counts.adults {
        return Err(CountsError::InfantsExceedAdults);
    }
    // Widened sum: the individual fields are unbounded user input.
    let total = counts.adults as u64 + counts.children as u64 + counts.infants as u64;
    if total > MAX_PASSENGERS as u64 {
        return Err(CountsError::TooManyPassengers);
    }
    Ok(counts)
}

/// Parses one rail traveler line: `Name, Age, Gender`.
///
/// Exactly three fields, each trimmed; age numeric; gender normalized to a
/// single uppercase letter.
pub fn parse_traveler(line: &str) -> Option<TravelerRecord> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return None;
    }
    let name = parts[0];
    if name.is_empty() {
        return None;
    }
    let age: u8 = parts[1].parse().ok()?;
    let gender = normalize_gender(parts[2])?;
    Some(TravelerRecord {
        name: name.to_string(),
        age,
        gender,
    })
}

/// The parsed fields of one air passenger record, before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassengerInput {
    pub given_names: String,
    pub family_name: String,
    pub gender: String,
    pub date_of_birth: NaiveDate,
    pub nationality: String,
}

/// Parses one air passenger record:
/// `Given names, Last name, Gender (M/F), Date of birth (DD-MM-YYYY), Nationality`.
pub fn parse_passenger(text: &str) -> Option<PassengerInput> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 5 {
        return None;
    }
    if parts[0].is_empty() || parts[1].is_empty() || parts[4].is_empty() {
        return None;
    }
    let gender = normalize_gender(parts[2])?;
    let date_of_birth = parse_date(parts[3])?;
    Some(PassengerInput {
        given_names: parts[0].to_string(),
        family_name: parts[1].to_string(),
        gender,
        date_of_birth,
        nationality: parts[4].to_string(),
    })
}

fn normalize_gender(field: &str) -> Option<String> {
    let mut chars = field.chars();
    let letter = chars.next()?;
    if chars.next().is_some() || !letter.is_ascii_alphabetic() {
        return None;
    }
    Some(letter.to_ascii_uppercase().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_date() {
        assert_eq!(
            parse_date("10-09-2026"),
            NaiveDate::from_ymd_opt(2026, 9, 10)
        );
    }

    #[test]
    fn rejects_impossible_calendar_date() {
        assert_eq!(parse_date("31-02-2025"), None);
    }

    #[test]
    fn rejects_other_date_formats() {
        assert_eq!(parse_date("2026-09-10"), None);
        assert_eq!(parse_date("10/09/2026"), None);
        assert_eq!(parse_date("tomorrow"), None);
    }

    #[test]
    fn lenient_date_accepts_two_digit_year() {
        assert_eq!(
            parse_date_lenient("10-09-26"),
            NaiveDate::from_ymd_opt(2026, 9, 10)
        );
        assert_eq!(
            parse_date_lenient("10-09-2026"),
            NaiveDate::from_ymd_opt(2026, 9, 10)
        );
    }

    #[test]
    fn phone_accepts_e164() {
        assert!(parse_phone("+911234567890").is_some());
        assert!(parse_phone("911234567890").is_some());
    }

    #[test]
    fn phone_rejects_malformed_numbers() {
        assert!(parse_phone("0123456").is_none());
        assert!(parse_phone("+91 1234567890").is_none());
        assert!(parse_phone("phone").is_none());
        assert!(parse_phone("+1").is_none());
    }

    #[test]
    fn email_accepts_standard_addresses() {
        assert!(parse_email("asha.rao+trips@example.co.in").is_some());
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        assert!(parse_email("asha.rao").is_none());
        assert!(parse_email("asha@localhost").is_none());
        assert!(parse_email("@example.com").is_none());
    }

    #[test]
    fn counts_require_three_integers() {
        assert_eq!(parse_passenger_counts("2,1"), Err(CountsError::Format));
        assert_eq!(parse_passenger_counts("2,one,1"), Err(CountsError::Format));
        assert_eq!(parse_passenger_counts("2,-1,1"), Err(CountsError::Format));
    }

    #[test]
    fn counts_reject_oversized_totals() {
        assert_eq!(
            parse_passenger_counts("4294967295,1,0"),
            Err(CountsError::TooManyPassengers)
        );
        assert_eq!(
            parse_passenger_counts("5,4,1"),
            Err(CountsError::TooManyPassengers)
        );
        assert!(parse_passenger_counts("5,3,1").is_ok());
    }

    #[test]
    fn counts_enforce_infant_constraint() {
        assert_eq!(
            parse_passenger_counts("2,1,3"),
            Err(CountsError::InfantsExceedAdults)
        );
        assert_eq!(
            parse_passenger_counts("2, 1, 1"),
            Ok(PassengerCounts {
                adults: 2,
                children: 1,
                infants: 1,
            })
        );
    }

    #[test]
    fn traveler_line_parses_and_normalizes_gender() {
        let t = parse_traveler("Asha Rao, 31, f").unwrap();
        assert_eq!(t.name, "Asha Rao");
        assert_eq!(t.age, 31);
        assert_eq!(t.gender, "F");
    }

    #[test]
    fn traveler_line_rejects_wrong_field_count() {
        assert!(parse_traveler("Asha Rao, 31").is_none());
        assert!(parse_traveler("Asha Rao, thirty, F").is_none());
    }

    #[test]
    fn passenger_record_parses_all_five_fields() {
        let p = parse_passenger("Asha, Rao, f, 02-01-1995, Indian").unwrap();
        assert_eq!(p.given_names, "Asha");
        assert_eq!(p.family_name, "Rao");
        assert_eq!(p.gender, "F");
        assert_eq!(p.date_of_birth, NaiveDate::from_ymd_opt(1995, 1, 2).unwrap());
        assert_eq!(p.nationality, "Indian");
    }

    #[test]
    fn passenger_record_rejects_bad_dob() {
        assert!(parse_passenger("Asha, Rao, F, 31-02-1995, Indian").is_none());
    }
}
