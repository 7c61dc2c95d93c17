//! Serializer — converts a [`Value`] tree into laxon text.
//!
//! Serialization is total over the value union: every well-formed
//! [`Value`] has a textual form, so [`stringify`] returns a plain
//! `String`. Ill-shaped data (a non-string map key, say) cannot be
//! constructed in the first place; the dynamic entry points in
//! [`interop`](crate::interop) reject it at the boundary instead.

use crate::value::Value;

/// Serialize a [`Value`] to laxon text.
///
/// Strings are always emitted single-quoted, whichever quote style the
/// source text used, with the body escaped by the fixed-order
/// replacement `'` → `\'`, `"` → `\"`, TAB → `\t`, LF → `\n`. The
/// backslash itself is never escaped, and the parser reverses exactly
/// these four sequences: a literal backslash directly followed by one of
/// the four sensitive characters will not survive a round trip. That
/// asymmetry is part of the format.
///
/// Numbers render through `Display`, except that infinities are written
/// as `Infinity` / `-Infinity` so that every serialized number re-parses.
///
/// Object members are emitted in the map's iteration order, which is
/// unspecified; arrays preserve element order.
///
/// # Examples
///
/// ```rust
/// use laxon_core::{parse, stringify, Value};
///
/// let value = parse("{'greeting': \"hi\\tthere\"}").unwrap();
/// assert_eq!(stringify(&value), "{'greeting': 'hi\\tthere'}");
/// assert_eq!(stringify(&Value::Void), "null");
/// ```
pub fn stringify(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Void => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => write_number(*n, out),
        Value::String(s) => write_string(s, out),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(item, out);
            }
            out.push(']');
        }
        Value::Object(members) => {
            out.push('{');
            for (i, (key, member)) in members.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_string(key, out);
                out.push_str(": ");
                write_value(member, out);
            }
            out.push('}');
        }
    }
}

/// `Display` output for every number whose `Display` output re-parses;
/// `inf`/`-inf` would not (the dispatch table has no `i`), so infinities
/// get the spelled-out form.
fn write_number(n: f64, out: &mut String) {
    if n.is_infinite() {
        out.push_str(if n > 0.0 { "Infinity" } else { "-Infinity" });
    } else {
        out.push_str(&n.to_string());
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push('\'');
    let escaped = s
        .replace('\'', "\\'")
        .replace('"', "\\\"")
        .replace('\t', "\\t")
        .replace('\n', "\\n");
    out.push_str(&escaped);
    out.push('\'');
}
