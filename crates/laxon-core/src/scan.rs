//! Delimiter matching — locating the closing quote, brace or bracket that
//! balances a given opening one, skipping nested structures.
//!
//! The array and object sub-parsers depend on the exact skip semantics
//! here, so the routine is part of the public contract rather than a
//! private helper.
//!
//! All four delimiters are ASCII, so the scan works on bytes: UTF-8
//! continuation bytes can never be mistaken for a delimiter, and every
//! returned index lies on a character boundary.

use crate::error::{Error, Result};
use crate::MAX_NESTING_DEPTH;

/// Returns the index of the closing delimiter matching the opening
/// delimiter (`"`, `'`, `{` or `[`) at `start`.
///
/// For quotes, the match is the next occurrence of the same quote whose
/// immediately preceding byte is not a backslash. This is a one-token
/// look-back: a literal escaped backslash directly before a quote is not
/// recognized (see the note on [`stringify`](crate::stringify)).
///
/// For braces and brackets, the scan recurses into every nested string,
/// array or object opener and resumes after its match, so inner
/// delimiters are never miscounted.
///
/// Fails with [`Error::InvalidSyntax`] if `start` is out of bounds, names
/// no opening delimiter, or no match exists before the end of the text.
///
/// # Examples
///
/// ```rust
/// use laxon_core::matching_delimiter_position;
///
/// let text = "[1, {'a': [2, 3]}, 4]";
/// assert_eq!(matching_delimiter_position(text, 0).unwrap(), 20);
/// assert_eq!(matching_delimiter_position(text, 4).unwrap(), 16);
/// ```
pub fn matching_delimiter_position(text: &str, start: usize) -> Result<usize> {
    match_at_depth(text, start, 0)
}

fn match_at_depth(text: &str, start: usize, depth: usize) -> Result<usize> {
    if depth > MAX_NESTING_DEPTH {
        return Err(Error::TooDeep {
            limit: MAX_NESTING_DEPTH,
        });
    }
    let bytes = text.as_bytes();
    if start >= bytes.len() {
        return Err(Error::syntax(text));
    }

    match bytes[start] {
        quote @ (b'"' | b'\'') => {
            let mut index = start + 1;
            while index < bytes.len() {
                if bytes[index] == quote && bytes[index - 1] != b'\\' {
                    return Ok(index);
                }
                index += 1;
            }
        }
        opener @ (b'{' | b'[') => {
            let closer = if opener == b'{' { b'}' } else { b']' };
            let mut index = start + 1;
            while index < bytes.len() {
                let byte = bytes[index];
                if byte == closer {
                    return Ok(index);
                }
                if matches!(byte, b'{' | b'[' | b'"' | b'\'') {
                    index = match_at_depth(text, index, depth + 1)?;
                }
                index += 1;
            }
        }
        _ => {}
    }

    Err(Error::syntax(text))
}
