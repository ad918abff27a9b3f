//! Keyword response table.
//!
//! Built-in responses are hardcoded and always come first. Custom responses
//! from the config file are appended after them in file order. Lookup walks
//! the table in that order and the first keyword found in the input wins.

use thiserror::Error;

use crate::config::CustomResponse;

/// A built-in keyword response (hardcoded, not modifiable by users).
#[derive(Debug, Clone)]
pub struct BuiltinResponse {
    /// Lowercase trigger keyword.
    pub keyword: &'static str,
    /// Reply text.
    pub response: &'static str,
}

/// All built-in responses, in match order.
pub const BUILTIN_RESPONSES: &[BuiltinResponse] = &[
    BuiltinResponse {
        keyword: "fastapi",
        response: "FastAPI is great for building APIs quickly!",
    },
    BuiltinResponse {
        keyword: "react",
        response: "React is perfect for interactive UIs!",
    },
    BuiltinResponse {
        keyword: "test",
        response: "Always write tests for better code quality!",
    },
];

/// Reply used when no keyword matches.
pub const DEFAULT_RESPONSE: &str = "I can help with Python, JavaScript, testing, and more!";

/// Where a table entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntrySource {
    Builtin,
    Custom,
}

/// One keyword entry in a [`ResponseTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseEntry {
    keyword: String,
    response: String,
    source: EntrySource,
}

impl ResponseEntry {
    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub const fn source(&self) -> EntrySource {
        self.source
    }
}

/// Errors raised while building a table from custom entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResponseTableError {
    #[error("Response keyword cannot be empty")]
    EmptyKeyword,

    #[error("Response for keyword '{0}' cannot be empty")]
    EmptyResponse(String),

    #[error("Keyword '{0}' is built in and cannot be redefined")]
    BuiltinConflict(String),

    #[error("Keyword '{0}' is defined more than once")]
    Duplicate(String),
}

/// Ordered keyword-to-response lookup plus a default reply.
///
/// Immutable once built; share it between sessions behind an `Arc`.
#[derive(Debug, Clone)]
pub struct ResponseTable {
    entries: Vec<ResponseEntry>,
    default_response: String,
}

impl Default for ResponseTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ResponseTable {
    /// Builds a table holding only the built-in responses.
    pub fn builtin() -> Self {
        let entries = BUILTIN_RESPONSES
            .iter()
            .map(|b| ResponseEntry {
                keyword: b.keyword.to_string(),
                response: b.response.to_string(),
                source: EntrySource::Builtin,
            })
            .collect();

        Self {
            entries,
            default_response: DEFAULT_RESPONSE.to_string(),
        }
    }

    /// Builds a table from the built-ins followed by `custom` in order.
    ///
    /// `default_response` replaces [`DEFAULT_RESPONSE`] when it is non-blank.
    pub fn with_custom(
        custom: &[CustomResponse],
        default_response: Option<&str>,
    ) -> Result<Self, ResponseTableError> {
        let mut table = Self::builtin();

        for entry in custom {
            let keyword = normalize_keyword(&entry.keyword);
            validate_keyword(&keyword, &table.entries)?;

            let response = entry.response.trim();
            if response.is_empty() {
                return Err(ResponseTableError::EmptyResponse(keyword));
            }

            table.entries.push(ResponseEntry {
                keyword,
                response: response.to_string(),
                source: EntrySource::Custom,
            });
        }

        if let Some(default) = default_response.map(str::trim).filter(|d| !d.is_empty()) {
            table.default_response = default.to_string();
        }

        Ok(table)
    }

    /// Picks the reply for `text`.
    ///
    /// The input is lowercased and entries are scanned in table order; the
    /// first keyword contained in the input wins. Falls back to the default.
    pub fn select(&self, text: &str) -> &str {
        self.find_match(text)
            .map_or(self.default_response.as_str(), ResponseEntry::response)
    }

    /// Returns the first entry whose keyword occurs in `text`, if any.
    pub fn find_match(&self, text: &str) -> Option<&ResponseEntry> {
        let lowered = text.to_lowercase();
        self.entries
            .iter()
            .find(|entry| lowered.contains(entry.keyword.as_str()))
    }

    pub fn get(&self, keyword: &str) -> Option<&ResponseEntry> {
        let keyword = normalize_keyword(keyword);
        self.entries.iter().find(|e| e.keyword == keyword)
    }

    pub fn entries(&self) -> &[ResponseEntry] {
        &self.entries
    }

    pub fn default_response(&self) -> &str {
        &self.default_response
    }
}

/// Trims and lowercases a keyword.
pub fn normalize_keyword(keyword: &str) -> String {
    keyword.trim().to_lowercase()
}

/// Returns true if the keyword belongs to a built-in response.
pub fn is_builtin(keyword: &str) -> bool {
    let keyword = normalize_keyword(keyword);
    BUILTIN_RESPONSES.iter().any(|b| b.keyword == keyword)
}

/// Validates a new custom keyword against the built-ins and `existing`.
pub fn validate_custom_keyword(
    keyword: &str,
    existing: &[CustomResponse],
) -> Result<String, ResponseTableError> {
    let keyword = normalize_keyword(keyword);
    if keyword.is_empty() {
        return Err(ResponseTableError::EmptyKeyword);
    }
    if is_builtin(&keyword) {
        return Err(ResponseTableError::BuiltinConflict(keyword));
    }
    if existing
        .iter()
        .any(|c| normalize_keyword(&c.keyword) == keyword)
    {
        return Err(ResponseTableError::Duplicate(keyword));
    }
    Ok(keyword)
}

fn validate_keyword(keyword: &str, entries: &[ResponseEntry]) -> Result<(), ResponseTableError> {
    if keyword.is_empty() {
        return Err(ResponseTableError::EmptyKeyword);
    }

    match entries.iter().find(|e| e.keyword == keyword) {
        Some(e) if e.source == EntrySource::Builtin => {
            Err(ResponseTableError::BuiltinConflict(keyword.to_string()))
        }
        Some(_) => Err(ResponseTableError::Duplicate(keyword.to_string())),
        None => Ok(()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn custom(keyword: &str, response: &str) -> CustomResponse {
        CustomResponse {
            keyword: keyword.to_string(),
            response: response.to_string(),
        }
    }

    #[test]
    fn test_builtin_order() {
        let table = ResponseTable::builtin();
        let keywords: Vec<_> = table.entries().iter().map(ResponseEntry::keyword).collect();
        assert_eq!(keywords, vec!["fastapi", "react", "test"]);
        assert_eq!(table.default_response(), DEFAULT_RESPONSE);
    }

    #[test]
    fn test_select_matches_case_insensitively() {
        let table = ResponseTable::builtin();
        assert_eq!(
            table.select("I love FastAPI"),
            "FastAPI is great for building APIs quickly!"
        );
        assert_eq!(
            table.select("FASTAPI"),
            "FastAPI is great for building APIs quickly!"
        );
    }

    #[test]
    fn test_select_falls_back_to_default() {
        let table = ResponseTable::builtin();
        assert_eq!(table.select("what about Go?"), DEFAULT_RESPONSE);
        assert_eq!(table.select(""), DEFAULT_RESPONSE);
    }

    #[test]
    fn test_select_first_declared_keyword_wins() {
        let table = ResponseTable::builtin();
        assert_eq!(
            table.select("react and test both"),
            "React is perfect for interactive UIs!"
        );
        // Position in the input does not matter, only table order.
        assert_eq!(
            table.select("test my react app"),
            "React is perfect for interactive UIs!"
        );
    }

    #[test]
    fn test_select_matches_substrings() {
        let table = ResponseTable::builtin();
        assert_eq!(
            table.select("how do I write unit testing code?"),
            "Always write tests for better code quality!"
        );
    }

    #[test]
    fn test_custom_entries_follow_builtins() {
        let table = ResponseTable::with_custom(
            &[custom("Rust", "Rust makes systems code safe!")],
            None,
        )
        .unwrap();

        assert_eq!(table.entries().len(), 4);
        let last = &table.entries()[3];
        assert_eq!(last.keyword(), "rust");
        assert_eq!(last.source(), EntrySource::Custom);

        assert_eq!(table.select("RUST please"), "Rust makes systems code safe!");
        // Built-ins still win over custom entries.
        assert_eq!(
            table.select("testing rust"),
            "Always write tests for better code quality!"
        );
    }

    #[test]
    fn test_custom_default_response() {
        let table = ResponseTable::with_custom(&[], Some("Ask me anything.")).unwrap();
        assert_eq!(table.select("hello"), "Ask me anything.");

        let table = ResponseTable::with_custom(&[], Some("   ")).unwrap();
        assert_eq!(table.select("hello"), DEFAULT_RESPONSE);
    }

    #[test]
    fn test_custom_builtin_conflict() {
        let err = ResponseTable::with_custom(&[custom(" React ", "nope")], None).unwrap_err();
        assert_eq!(err, ResponseTableError::BuiltinConflict("react".to_string()));
    }

    #[test]
    fn test_custom_duplicate() {
        let err = ResponseTable::with_custom(
            &[custom("go", "Go is simple."), custom("GO", "Go again.")],
            None,
        )
        .unwrap_err();
        assert_eq!(err, ResponseTableError::Duplicate("go".to_string()));
    }

    #[test]
    fn test_custom_empty_keyword_and_response() {
        let err = ResponseTable::with_custom(&[custom("  ", "x")], None).unwrap_err();
        assert_eq!(err, ResponseTableError::EmptyKeyword);

        let err = ResponseTable::with_custom(&[custom("go", " ")], None).unwrap_err();
        assert_eq!(err, ResponseTableError::EmptyResponse("go".to_string()));
    }

    #[test]
    fn test_get_normalizes_keyword() {
        let table = ResponseTable::builtin();
        assert!(table.get(" FastAPI ").is_some());
        assert!(table.get("django").is_none());
    }

    #[test]
    fn test_validate_custom_keyword() {
        let existing = vec![custom("go", "Go is simple.")];
        assert_eq!(validate_custom_keyword(" Rust ", &existing).unwrap(), "rust");
        assert!(matches!(
            validate_custom_keyword("test", &existing),
            Err(ResponseTableError::BuiltinConflict(_))
        ));
        assert!(matches!(
            validate_custom_keyword("Go", &existing),
            Err(ResponseTableError::Duplicate(_))
        ));
        assert!(matches!(
            validate_custom_keyword("", &existing),
            Err(ResponseTableError::EmptyKeyword)
        ));
    }

    #[test]
    fn test_error_messages() {
        assert!(
            ResponseTableError::BuiltinConflict("react".to_string())
                .to_string()
                .contains("built in")
        );
        assert!(
            ResponseTableError::Duplicate("go".to_string())
                .to_string()
                .contains("more than once")
        );
    }
}
