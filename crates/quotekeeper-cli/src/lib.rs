//! Quotekeeper CLI library.
//!
//! This crate provides the command-line interface and interactive REPL
//! for Quotekeeper.

pub mod cli;
pub mod commands;
pub mod error;
pub mod repl;

use quotekeeper_models::QuoteId;

use crate::error::{CliError, Result};

/// Parses a user-supplied target id.
///
/// Blank or non-numeric input is the invalid-number error; storage is
/// never touched for such input.
pub fn parse_target_id(input: &str) -> Result<QuoteId> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CliError::InvalidNumber("(blank)".to_string()));
    }
    trimmed
        .parse::<QuoteId>()
        .map_err(|_| CliError::InvalidNumber(trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_target_id_numeric() {
        assert_eq!(parse_target_id("3").unwrap(), QuoteId::new(3));
        assert_eq!(parse_target_id("  12  ").unwrap(), QuoteId::new(12));
    }

    #[test]
    fn test_parse_target_id_blank() {
        let result = parse_target_id("   ");
        assert!(matches!(result, Err(CliError::InvalidNumber(_))));
    }

    #[test]
    fn test_parse_target_id_non_numeric() {
        let result = parse_target_id("abc");
        match result {
            Err(CliError::InvalidNumber(s)) => assert_eq!(s, "abc"),
            other => panic!("expected InvalidNumber, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_parse_target_id_negative() {
        assert!(matches!(
            parse_target_id("-1"),
            Err(CliError::InvalidNumber(_))
        ));
    }
}
