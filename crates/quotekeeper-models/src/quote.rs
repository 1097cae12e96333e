//! Quote record type.

use serde::{Deserialize, Serialize};

use crate::ids::QuoteId;

/// A persisted quote record.
///
/// The identifier is assigned by the allocator at insert time and never
/// changes afterwards; only `author` and `content` are mutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Unique, sequentially assigned identifier.
    pub id: QuoteId,

    /// Author of the quote.
    pub author: String,

    /// Text of the quote.
    pub content: String,
}

impl Quote {
    /// Creates a new quote with an already-allocated identifier.
    pub fn new(id: QuoteId, author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            author: author.into(),
            content: content.into(),
        }
    }

    /// Replaces the author and content. The identifier is untouched.
    pub fn update(&mut self, author: impl Into<String>, content: impl Into<String>) {
        self.author = author.into();
        self.content = content.into();
    }

    /// Returns the one-line display form: `"{id} / {author} / {content}"`.
    pub fn info(&self) -> String {
        format!("{} / {} / {}", self.id, self.author, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_creation() {
        let quote = Quote::new(QuoteId::new(1), "Seneca", "Luck is preparation meeting opportunity.");

        assert_eq!(quote.id, QuoteId::new(1));
        assert_eq!(quote.author, "Seneca");
        assert_eq!(quote.content, "Luck is preparation meeting opportunity.");
    }

    #[test]
    fn test_quote_update_keeps_id() {
        let mut quote = Quote::new(QuoteId::new(2), "old author", "old content");

        quote.update("new author", "new content");

        assert_eq!(quote.id, QuoteId::new(2));
        assert_eq!(quote.author, "new author");
        assert_eq!(quote.content, "new content");
    }

    #[test]
    fn test_quote_info_line() {
        let quote = Quote::new(QuoteId::new(1), "author", "content");
        assert_eq!(quote.info(), "1 / author / content");
    }

    #[test]
    fn test_quote_serialization_roundtrip() {
        let quote = Quote::new(QuoteId::new(3), "Epictetus", "It's not what happens to you.");

        let json = serde_json::to_string(&quote).unwrap();
        let parsed: Quote = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, quote);
    }

    #[test]
    fn test_quote_json_shape() {
        let quote = Quote::new(QuoteId::new(1), "a", "c");
        let value = serde_json::to_value(&quote).unwrap();

        assert_eq!(value, serde_json::json!({"id": 1, "author": "a", "content": "c"}));
    }
}
