//! Type-safe identifier for person records.
//!
//! Ids are plain positive integers handed out by the store in creation
//! order. The newtype keeps them from being mixed up with ages or
//! positions inside the collection.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Unique identifier for a person record.
///
/// Serializes as a bare JSON number (`{"id": 3}`), never as an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PersonId(pub u64);

impl PersonId {
    /// The first id a fresh store assigns.
    pub const FIRST: Self = Self(1);

    /// Return the inner integer value.
    pub const fn into_inner(self) -> u64 {
        self.0
    }

    /// Return the id that follows this one, or `None` on overflow.
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }
}

impl core::fmt::Display for PersonId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl core::str::FromStr for PersonId {
    type Err = core::num::ParseIntError;

    /// Parse a decimal id. Negative numbers, whitespace and trailing
    /// garbage are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

impl From<u64> for PersonId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<PersonId> for u64 {
    fn from(id: PersonId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_serializes_as_bare_number() {
        let json = serde_json::to_string(&PersonId(7)).ok();
        assert_eq!(json.as_deref(), Some("7"));
    }

    #[test]
    fn id_display_matches_integer() {
        assert_eq!(PersonId(42).to_string(), "42");
    }

    #[test]
    fn parse_is_strict() {
        assert_eq!("12".parse::<PersonId>().ok(), Some(PersonId(12)));
        assert!("abc".parse::<PersonId>().is_err());
        assert!("1abc".parse::<PersonId>().is_err());
        assert!("-1".parse::<PersonId>().is_err());
        assert!(" 1".parse::<PersonId>().is_err());
        assert!("".parse::<PersonId>().is_err());
    }

    #[test]
    fn checked_next_stops_at_max() {
        assert_eq!(PersonId::FIRST.checked_next(), Some(PersonId(2)));
        assert_eq!(PersonId(u64::MAX).checked_next(), None);
    }
}
