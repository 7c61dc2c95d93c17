//! Error types for laxon parsing and serialization.

use thiserror::Error;

/// Errors that can occur while parsing laxon text or bridging values
/// through serde.
#[derive(Error, Debug)]
pub enum Error {
    /// The input text does not conform to the laxon grammar: unbalanced
    /// delimiters, a missing separator, a malformed literal, or numeric
    /// text that fails to parse as a float. Carries a snippet of the
    /// offending text.
    #[error("invalid syntax: {text}")]
    InvalidSyntax { text: String },

    /// A value handed to the serde bridge is outside the supported kind
    /// set — most commonly a map key that is not a string, or a
    /// non-finite number bound for strict JSON.
    #[error("unsupported value: {0}")]
    InvalidValue(String),

    /// Input nesting exceeded [`MAX_NESTING_DEPTH`](crate::MAX_NESTING_DEPTH).
    /// Raised instead of exhausting the call stack on hostile input.
    #[error("nesting exceeds {limit} levels")]
    TooDeep { limit: usize },
}

impl Error {
    /// Build an [`Error::InvalidSyntax`] carrying at most the first 60
    /// characters of the offending text.
    pub(crate) fn syntax(text: &str) -> Self {
        const LIMIT: usize = 60;
        let text = match text.char_indices().nth(LIMIT) {
            Some((cut, _)) => format!("{}…", &text[..cut]),
            None => text.to_string(),
        };
        Error::InvalidSyntax { text }
    }
}

/// Convenience alias used throughout laxon-core.
pub type Result<T> = std::result::Result<T, Error>;
