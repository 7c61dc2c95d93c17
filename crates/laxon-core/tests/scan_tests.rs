use laxon_core::{matching_delimiter_position, Error};

fn assert_syntax_error(text: &str, start: usize) {
    match matching_delimiter_position(text, start) {
        Err(Error::InvalidSyntax { .. }) => {}
        other => panic!("matching in {text:?} at {start} should fail, got {other:?}"),
    }
}

// ============================================================================
// Quote delimiters
// ============================================================================

#[test]
fn matches_single_and_double_quotes() {
    assert_eq!(matching_delimiter_position("'abc'", 0).unwrap(), 4);
    assert_eq!(matching_delimiter_position("\"abc\"", 0).unwrap(), 4);
}

#[test]
fn escaped_quote_does_not_terminate() {
    assert_eq!(matching_delimiter_position(r"'a\'b'", 0).unwrap(), 5);
    assert_eq!(
        matching_delimiter_position(r#""say \"hi\"""#, 0).unwrap(),
        11
    );
}

#[test]
fn the_other_quote_style_does_not_terminate() {
    assert_eq!(matching_delimiter_position("'a\"b'", 0).unwrap(), 4);
    assert_eq!(matching_delimiter_position("\"it's\"", 0).unwrap(), 5);
}

#[test]
fn unterminated_quote_fails() {
    assert_syntax_error("'abc", 0);
    assert_syntax_error(r"'abc\'", 0);
}

// ============================================================================
// Brace and bracket delimiters
// ============================================================================

#[test]
fn matches_flat_pairs() {
    assert_eq!(matching_delimiter_position("[]", 0).unwrap(), 1);
    assert_eq!(matching_delimiter_position("{}", 0).unwrap(), 1);
}

#[test]
fn matches_nested_brackets() {
    let text = "[[1, 2], [3]]";
    assert_eq!(matching_delimiter_position(text, 0).unwrap(), 12);
    assert_eq!(matching_delimiter_position(text, 1).unwrap(), 6);
    assert_eq!(matching_delimiter_position(text, 9).unwrap(), 11);
}

#[test]
fn matches_mixed_nesting() {
    let text = "[1, {'a': [2, 3]}, 4]";
    assert_eq!(matching_delimiter_position(text, 0).unwrap(), 20);
    assert_eq!(matching_delimiter_position(text, 4).unwrap(), 16);
    assert_eq!(matching_delimiter_position(text, 10).unwrap(), 15);
}

#[test]
fn closers_inside_strings_are_skipped() {
    assert_eq!(matching_delimiter_position("['a]b']", 0).unwrap(), 6);
    assert_eq!(matching_delimiter_position("{'}': 1}", 0).unwrap(), 7);
}

#[test]
fn partner_must_be_the_logical_one() {
    // A bracket is not closed by a brace, so the scan recurses into the
    // nested object and finds the real close after it.
    assert_eq!(matching_delimiter_position("[{}]", 0).unwrap(), 3);
}

#[test]
fn unterminated_array_fails() {
    assert_syntax_error("[1, 2", 0);
}

#[test]
fn unterminated_nested_structure_fails() {
    assert_syntax_error("[1, {'a': 2", 0);
}

// ============================================================================
// Contract violations
// ============================================================================

#[test]
fn out_of_bounds_start_fails() {
    assert_syntax_error("[]", 2);
    assert_syntax_error("", 0);
}

#[test]
fn non_delimiter_start_fails() {
    assert_syntax_error("abc", 0);
    assert_syntax_error("[1]", 1);
}

#[test]
fn multibyte_content_is_scanned_intact() {
    let text = "['héllo', 'wörld']";
    let close = matching_delimiter_position(text, 0).unwrap();
    assert_eq!(close, text.len() - 1);
    assert_eq!(&text[close..], "]");
}

#[test]
fn pathological_nesting_fails_instead_of_overflowing() {
    let deep = "[".repeat(5000);
    match matching_delimiter_position(&deep, 0) {
        Err(Error::TooDeep { .. }) => {}
        other => panic!("expected a depth error, got {other:?}"),
    }
}
