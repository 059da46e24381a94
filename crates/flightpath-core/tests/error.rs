use flightpath_core::{FlightPathError, FlightPathResponse, Resolution, ResolvedPath};

#[test]
fn every_variant_has_a_message() {
    let errors = vec![
        FlightPathError::InvalidInput,
        FlightPathError::InvalidFlight {
            index: 3,
            reason: "test".into(),
        },
        FlightPathError::MalformedBody("test".into()),
        FlightPathError::EmptyInput,
        FlightPathError::Config("test".into()),
    ];
    for err in &errors {
        assert!(!err.to_string().is_empty());
    }
}

#[test]
fn only_config_errors_are_server_side() {
    assert!(FlightPathError::EmptyInput.is_client_error());
    assert!(FlightPathError::InvalidInput.is_client_error());
    assert!(!FlightPathError::Config("boom".into()).is_client_error());
}

#[test]
fn invalid_flight_message_names_index() {
    let err = FlightPathError::InvalidFlight {
        index: 2,
        reason: "codes must be strings".into(),
    };
    assert_eq!(
        err.to_string(),
        "Invalid flight at index 2: codes must be strings"
    );
}

#[test]
fn resolved_path_endpoints() {
    let path = ResolvedPath::new("SFO", "EWR", Resolution::Chain);
    assert_eq!(path.endpoints(), ["SFO", "EWR"]);
    assert_eq!(path.resolution.to_string(), "chain");
    assert_eq!(
        path.into_endpoints(),
        ["SFO".to_string(), "EWR".to_string()]
    );
}

#[test]
fn response_uses_flight_path_key() {
    let response = FlightPathResponse::from(ResolvedPath::new("AAA", "CCC", Resolution::Walk));
    let json = serde_json::to_value(&response).unwrap();
    assert_eq!(json, serde_json::json!({"Flight Path": ["AAA", "CCC"]}));
}
