use flightpath_core::{decode_edges, decode_edges_str, Edge, FlightPathError};
use serde_json::json;

#[test]
fn decodes_pairs_in_order() {
    let edges = decode_edges(&json!([["AAA", "BBB"], ["BBB", "CCC"]])).unwrap();
    assert_eq!(
        edges,
        vec![Edge::new("AAA", "BBB"), Edge::new("BBB", "CCC")]
    );
}

#[test]
fn empty_array_decodes_to_no_edges() {
    let edges = decode_edges(&json!([])).unwrap();
    assert!(edges.is_empty());
}

#[test]
fn object_is_invalid_input() {
    let err = decode_edges(&json!({"not": "an array"})).unwrap_err();
    assert_eq!(err, FlightPathError::InvalidInput);
    assert_eq!(err.to_string(), "Invalid input. Expected an array of arrays.");
}

#[test]
fn non_array_element_is_invalid_input() {
    let err = decode_edges(&json!([["AAA", "BBB"], "CCC"])).unwrap_err();
    assert_eq!(err, FlightPathError::InvalidInput);
}

#[test]
fn shape_error_wins_over_bad_pair() {
    // index 0 is a bad pair, index 1 is not an array at all
    let err = decode_edges(&json!([["AAA"], 42])).unwrap_err();
    assert_eq!(err, FlightPathError::InvalidInput);
}

#[test]
fn short_pair_names_its_index() {
    let err = decode_edges(&json!([["AAA", "BBB"], ["CCC"]])).unwrap_err();
    match err {
        FlightPathError::InvalidFlight { index, reason } => {
            assert_eq!(index, 1);
            assert!(reason.contains("1 element"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn long_pair_is_rejected() {
    let err = decode_edges(&json!([["AAA", "BBB", "CCC"]])).unwrap_err();
    assert!(matches!(err, FlightPathError::InvalidFlight { index: 0, .. }));
}

#[test]
fn non_string_codes_are_rejected() {
    let err = decode_edges(&json!([["AAA", 7]])).unwrap_err();
    assert!(matches!(err, FlightPathError::InvalidFlight { index: 0, .. }));
}

#[test]
fn codes_are_opaque() {
    let edges = decode_edges(&json!([["lhr", "Heathrow T5"], ["", "x"]])).unwrap();
    assert_eq!(edges[0], Edge::new("lhr", "Heathrow T5"));
    assert_eq!(edges[1], Edge::new("", "x"));
}

#[test]
fn unparsable_body_is_malformed() {
    let err = decode_edges_str("[[\"AAA\",").unwrap_err();
    assert!(matches!(err, FlightPathError::MalformedBody(_)));
}

#[test]
fn str_decoding_goes_through_shape_check() {
    let err = decode_edges_str("\"AAA\"").unwrap_err();
    assert_eq!(err, FlightPathError::InvalidInput);
}

#[test]
fn blank_body_is_invalid_input() {
    assert_eq!(decode_edges_str("").unwrap_err(), FlightPathError::InvalidInput);
    assert_eq!(decode_edges_str(" \n").unwrap_err(), FlightPathError::InvalidInput);
}
