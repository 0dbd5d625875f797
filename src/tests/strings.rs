use super::*;

#[test]
fn value_string_cut_mid_payload() {
    assert_eq!(completed("{\"name\": \"Al"), "{\"name\": \"Al\"}");
}

#[test]
fn array_element_string() {
    assert_eq!(completed("[\"ab"), "[\"ab\"]");
    assert_eq!(completed("[\"ab\",\"cd"), "[\"ab\",\"cd\"]");
}

#[test]
fn escaped_quote_does_not_close_the_string() {
    let out = completed("{\"k\":\"a\\\"b");
    assert_eq!(out, "{\"k\":\"a\\\"b\"}");
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["k"], "a\"b");
}

#[test]
fn prefix_ending_mid_escape_still_completes() {
    let out = completed("{\"a\":\"x\\");
    // The pending escape is finished as an escaped backslash.
    assert_eq!(out, "{\"a\":\"x\\\\\"}");
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["a"], "x\\");
}

#[test]
fn escaped_backslash_then_close() {
    let out = completed("{\"a\":\"x\\\\\"");
    assert_eq!(out, "{\"a\":\"x\\\\\"}");
}

#[test]
fn escape_split_across_chunks() {
    let mut c = Completer::new();
    c.append("{\"a\":\"x\\").unwrap();
    c.append("\"y").unwrap();
    assert_eq!(c.complete(), "{\"a\":\"x\\\"y\"}");
}

#[test]
fn multibyte_payload_passes_through() {
    let out = completed("{\"emoji\":\"héllo ✨");
    assert_eq!(out, "{\"emoji\":\"héllo ✨\"}");
    assert_valid_json(&out);
}

#[test]
fn long_payload_with_structural_lookalikes() {
    // Brackets, braces, colons and commas inside a string are payload.
    let out = completed("{\"k\":\"[1,2] {x:y}, done");
    assert_eq!(out, "{\"k\":\"[1,2] {x:y}, done\"}");
    assert_valid_json(&out);
}

#[test]
fn quote_at_top_level_is_an_error() {
    let mut c = Completer::new();
    let err = c.append("\"abc").unwrap_err();
    assert_eq!(err.kind, CompleteErrorKind::InvalidQuoteContext);
    assert_eq!(err.position, 0);
}

#[test]
fn quote_in_place_of_colon_is_an_error() {
    let mut c = Completer::new();
    let err = c.append("{\"a\" \"").unwrap_err();
    assert_eq!(err.kind, CompleteErrorKind::InvalidQuoteContext);
    assert_eq!(err.position, 5);
}

#[test]
fn quote_inside_literal_is_an_error() {
    let mut c = Completer::new();
    assert!(c.append("{\"a\":tr\"").is_err());
}
