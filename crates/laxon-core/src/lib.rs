//! # laxon-core
//!
//! Encoder and decoder for **laxon**, a lenient JSON dialect.
//!
//! Laxon relaxes strict JSON where hand-written and legacy documents
//! commonly deviate from it: strings may be single- *or* double-quoted,
//! `undefined` is accepted alongside `null`, and `NaN`, `Infinity` and
//! `-Infinity` are first-class numbers. Serialized output always uses
//! single-quoted strings and makes no promise about object member order.
//!
//! ## Quick start
//!
//! ```rust
//! use laxon_core::{parse, stringify};
//!
//! let value = parse("{'name': \"Alice\", 'scores': [95, 87]}").unwrap();
//! let scores = value.as_object().unwrap()["scores"].as_array().unwrap();
//! assert_eq!(scores.len(), 2);
//!
//! // Canonical form: single quotes, comma-space separators.
//! assert_eq!(stringify(&parse("[ 1,2 ]").unwrap()), "[1, 2]");
//! ```
//!
//! ## Modules
//!
//! - [`parser`] — laxon text → [`Value`]
//! - [`serializer`] — [`Value`] → laxon text
//! - [`scan`] — delimiter matching (the parser's skip primitive)
//! - [`interop`] — serde bridge: typed data and strict JSON in and out
//! - [`value`] — the closed [`Value`] union
//! - [`error`] — error types
//!
//! Parsing and serialization are pure functions over immutable inputs:
//! no shared state, no I/O, safe to call concurrently without
//! coordination.

pub mod error;
pub mod interop;
pub mod parser;
pub mod scan;
pub mod serializer;
pub mod value;

pub use error::{Error, Result};
pub use interop::{from_text, to_text, to_value};
pub use parser::parse;
pub use scan::matching_delimiter_position;
pub use serializer::stringify;
pub use value::Value;

/// Nesting ceiling for the parser and the delimiter matcher. Documents
/// nested deeper than this fail with [`Error::TooDeep`] instead of
/// exhausting the call stack.
pub const MAX_NESTING_DEPTH: usize = 128;
