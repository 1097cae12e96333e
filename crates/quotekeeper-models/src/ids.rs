//! Type-safe quote identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Identifier of a quote record.
///
/// Identifiers are positive integers handed out sequentially by the
/// allocator, starting at 1. They serialize transparently as the integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuoteId(u64);

impl QuoteId {
    /// Wraps an already-assigned identifier value.
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the inner integer value.
    pub fn value(&self) -> u64 {
        self.0
    }

    /// Returns the identifier that follows this one.
    pub fn succ(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for QuoteId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl FromStr for QuoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(format!("{}", QuoteId::new(42)), "42");
    }

    #[test]
    fn test_id_succ() {
        assert_eq!(QuoteId::new(3).succ(), QuoteId::new(4));
    }

    #[test]
    fn test_id_parse() {
        let id: QuoteId = "7".parse().unwrap();
        assert_eq!(id, QuoteId::new(7));
    }

    #[test]
    fn test_id_parse_trims_whitespace() {
        let id: QuoteId = " 12 ".parse().unwrap();
        assert_eq!(id.value(), 12);
    }

    #[test]
    fn test_id_parse_rejects_non_numeric() {
        assert!("abc".parse::<QuoteId>().is_err());
        assert!("".parse::<QuoteId>().is_err());
        assert!("-1".parse::<QuoteId>().is_err());
    }

    #[test]
    fn test_id_serialization_transparent() {
        let id = QuoteId::new(5);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "5");

        let parsed: QuoteId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
