//! Core data models for Quotekeeper.
//!
//! This crate provides the record types shared by the store and the CLI:
//! the [`Quote`] record and its [`QuoteId`] identifier.

pub mod ids;
pub mod quote;

pub use ids::QuoteId;
pub use quote::Quote;
