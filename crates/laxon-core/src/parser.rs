//! Parser — converts laxon text into a [`Value`] tree.
//!
//! Dispatch is by the first character of the trimmed input; each shape has
//! its own sub-parser. Composite sub-parsers scan their body left to
//! right: nested strings, arrays and objects are skipped in one jump via
//! [`matching_delimiter_position`], everything else is scanned
//! character-by-character up to the next separator, and the substring
//! found is parsed recursively.
//!
//! # Key design decisions
//!
//! - **Byte cursors**: all structural characters are ASCII, so scanning
//!   works on bytes and every slice boundary falls between characters.
//! - **Substring slicing**: each composite element is re-parsed from its
//!   own trimmed slice. This re-scans text the delimiter matcher already
//!   visited, which is fine for the document sizes laxon targets.
//! - **Depth ceiling**: recursion depth is capped at
//!   [`MAX_NESTING_DEPTH`](crate::MAX_NESTING_DEPTH) so hostile input
//!   fails with [`Error::TooDeep`] instead of exhausting the stack.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::scan::matching_delimiter_position;
use crate::value::Value;
use crate::MAX_NESTING_DEPTH;

/// Parse laxon text into a [`Value`].
///
/// Surrounding whitespace is ignored. The dialect is lenient where strict
/// JSON is not: strings may be single- or double-quoted, `undefined` is
/// accepted alongside `null`, and `NaN`, `Infinity` and `-Infinity` are
/// valid numbers.
///
/// # Examples
///
/// ```rust
/// use laxon_core::{parse, Value};
///
/// let value = parse("[1, {\"a\": 'two'}]").unwrap();
/// let items = value.as_array().unwrap();
/// assert_eq!(items[0], Value::Number(1.0));
/// ```
///
/// # Errors
///
/// [`Error::InvalidSyntax`] for malformed text, [`Error::TooDeep`] when
/// nesting exceeds the ceiling.
pub fn parse(text: &str) -> Result<Value> {
    parse_at_depth(text, 0)
}

fn parse_at_depth(text: &str, depth: usize) -> Result<Value> {
    if depth > MAX_NESTING_DEPTH {
        return Err(Error::TooDeep {
            limit: MAX_NESTING_DEPTH,
        });
    }
    let text = text.trim();

    match text.as_bytes().first().copied() {
        Some(b'n' | b'u') => parse_void(text),
        Some(b't' | b'f') => parse_boolean(text),
        Some(b'+' | b'-' | b'0'..=b'9' | b'.' | b'E' | b'N' | b'I') => parse_number(text),
        Some(b'"' | b'\'') => parse_string(text).map(Value::String),
        Some(b'[') => parse_array(text, depth),
        Some(b'{') => parse_object(text, depth),
        _ => Err(Error::syntax(text)),
    }
}

/// The literals `null` and `undefined` both produce [`Value::Void`].
fn parse_void(text: &str) -> Result<Value> {
    if text != "null" && text != "undefined" {
        return Err(Error::syntax(text));
    }
    Ok(Value::Void)
}

fn parse_boolean(text: &str) -> Result<Value> {
    match text {
        "true" => Ok(Value::Bool(true)),
        "false" => Ok(Value::Bool(false)),
        _ => Err(Error::syntax(text)),
    }
}

/// Numbers delegate to the platform float parser, which covers signed
/// decimals, exponent forms, `NaN` and `±Infinity`.
fn parse_number(text: &str) -> Result<Value> {
    text.parse::<f64>()
        .map(Value::Number)
        .map_err(|_| Error::syntax(text))
}

/// Unwraps a quoted string literal and reverses the four escape
/// sequences. The wrapper must be a matching pair of the same quote
/// character, either `"..."` or `'...'`.
fn parse_string(text: &str) -> Result<String> {
    let bytes = text.as_bytes();
    let wrapped = |quote: u8| bytes.len() >= 2 && bytes[0] == quote && bytes[bytes.len() - 1] == quote;
    if !wrapped(b'"') && !wrapped(b'\'') {
        return Err(Error::syntax(text));
    }

    let body = &text[1..text.len() - 1];
    Ok(body
        .replace("\\'", "'")
        .replace("\\\"", "\"")
        .replace("\\t", "\t")
        .replace("\\n", "\n"))
}

fn parse_array(text: &str, depth: usize) -> Result<Value> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'[' || bytes[bytes.len() - 1] != b']' {
        return Err(Error::syntax(text));
    }

    let mut items = Vec::new();
    let mut index = 1;
    while index < bytes.len() {
        index = skip_whitespace(bytes, index);
        if bytes[index] == b']' {
            break;
        }

        let start = index;
        index = match bytes[index] {
            b'{' | b'[' | b'"' | b'\'' => matching_delimiter_position(text, start)? + 1,
            _ => scan_to_separator(bytes, index, b']'),
        };

        let item = parse_at_depth(text[start..index].trim(), depth + 1)?;
        items.push(item);

        index = skip_whitespace(bytes, index);
        if index < bytes.len() && bytes[index] != b',' && bytes[index] != b']' {
            return Err(Error::syntax(text));
        }
        index += 1;
    }

    Ok(Value::Array(items))
}

fn parse_object(text: &str, depth: usize) -> Result<Value> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'{' || bytes[bytes.len() - 1] != b'}' {
        return Err(Error::syntax(text));
    }

    let mut members = HashMap::new();
    let mut index = 1;
    while index < bytes.len() {
        index = skip_whitespace(bytes, index);
        if bytes[index] == b'}' {
            break;
        }
        if bytes[index] != b'"' && bytes[index] != b'\'' {
            return Err(Error::syntax(text));
        }

        let start = index;
        index = matching_delimiter_position(text, start)? + 1;
        let key = parse_string(&text[start..index])?;

        index = skip_whitespace(bytes, index);
        if bytes[index] != b':' {
            return Err(Error::syntax(text));
        }
        index = skip_whitespace(bytes, index + 1);

        let start = index;
        index = match bytes[index] {
            b'{' | b'[' | b'"' | b'\'' => matching_delimiter_position(text, start)? + 1,
            _ => scan_to_separator(bytes, index, b'}'),
        };

        let value = parse_at_depth(text[start..index].trim(), depth + 1)?;
        // Duplicate keys are not an error; the last write wins.
        members.insert(key, value);

        index = skip_whitespace(bytes, index);
        if index < bytes.len() && bytes[index] != b',' && bytes[index] != b'}' {
            return Err(Error::syntax(text));
        }
        index += 1;
    }

    Ok(Value::Object(members))
}

fn skip_whitespace(bytes: &[u8], mut index: usize) -> usize {
    while index < bytes.len() && bytes[index].is_ascii_whitespace() {
        index += 1;
    }
    index
}

/// Advance to the next `,` or closing delimiter, whichever comes first.
fn scan_to_separator(bytes: &[u8], mut index: usize, closer: u8) -> usize {
    while index < bytes.len() && bytes[index] != b',' && bytes[index] != closer {
        index += 1;
    }
    index
}
