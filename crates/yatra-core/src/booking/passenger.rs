//! Passenger and traveler records.

use super::draft::PassengerCounts;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Adult/child/infant classification derived from entry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PassengerCategory {
    Adult,
    Child,
    Infant,
}

impl PassengerCategory {
    /// Classifies a passenger by its 1-based ordinal position against the
    /// draft's composition: ordinals `1..=adults` are adults, the next
    /// `children` ordinals are children, the remainder are infants.
    pub fn classify(ordinal: usize, counts: &PassengerCounts) -> Self {
        if ordinal <= counts.adults as usize {
            Self::Adult
        } else if ordinal <= (counts.adults + counts.children) as usize {
            Self::Child
        } else {
            Self::Infant
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Adult => "Adult",
            Self::Child => "Child",
            Self::Infant => "Infant",
        }
    }
}

impl fmt::Display for PassengerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One air passenger, collected as a comma-separated record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerRecord {
    /// Given names.
    pub given_names: String,
    /// Family name.
    pub family_name: String,
    /// Gender as a single uppercase letter.
    pub gender: String,
    /// Date of birth.
    pub date_of_birth: NaiveDate,
    /// Nationality as entered.
    pub nationality: String,
    /// Category derived from the passenger's ordinal entry position.
    pub category: PassengerCategory,
}

/// One rail traveler ('Name, Age, Gender').
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelerRecord {
    /// Full name.
    pub name: String,
    /// Age in years.
    pub age: u8,
    /// Gender as a single uppercase letter.
    pub gender: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_follows_ordinal_position() {
        let counts = PassengerCounts {
            adults: 2,
            children: 1,
            infants: 1,
        };
        assert_eq!(
            PassengerCategory::classify(1, &counts),
            PassengerCategory::Adult
        );
        assert_eq!(
            PassengerCategory::classify(2, &counts),
            PassengerCategory::Adult
        );
        assert_eq!(
            PassengerCategory::classify(3, &counts),
            PassengerCategory::Child
        );
        assert_eq!(
            PassengerCategory::classify(4, &counts),
            PassengerCategory::Infant
        );
    }

    #[test]
    fn classification_with_no_children_skips_to_infant() {
        let counts = PassengerCounts {
            adults: 1,
            children: 0,
            infants: 1,
        };
        assert_eq!(
            PassengerCategory::classify(2, &counts),
            PassengerCategory::Infant
        );
    }
}
