use serde_json::Value;

use crate::{Edge, FlightPathError};

/// Decode an untyped JSON payload into an ordered list of edges.
///
/// The payload must be an array whose elements are all arrays; anything else
/// is [`FlightPathError::InvalidInput`]. Each element must then hold exactly
/// two strings, otherwise [`FlightPathError::InvalidFlight`] names the
/// offending index. An empty array decodes to an empty list; rejecting it is
/// the resolver's job.
pub fn decode_edges(payload: &Value) -> Result<Vec<Edge>, FlightPathError> {
    let items = payload.as_array().ok_or(FlightPathError::InvalidInput)?;

    // Shape check first so a non-array anywhere wins over a bad pair earlier on.
    if !items.iter().all(Value::is_array) {
        return Err(FlightPathError::InvalidInput);
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| decode_pair(index, item))
        .collect()
}

/// Parse a JSON document and decode it with [`decode_edges`].
///
/// A blank document carries no array at all and is
/// [`FlightPathError::InvalidInput`]; text that is not JSON is
/// [`FlightPathError::MalformedBody`].
pub fn decode_edges_str(body: &str) -> Result<Vec<Edge>, FlightPathError> {
    if body.trim().is_empty() {
        return Err(FlightPathError::InvalidInput);
    }
    let payload: Value = serde_json::from_str(body)
        .map_err(|e| FlightPathError::MalformedBody(e.to_string()))?;
    decode_edges(&payload)
}

fn decode_pair(index: usize, item: &Value) -> Result<Edge, FlightPathError> {
    let invalid = |reason: String| FlightPathError::InvalidFlight { index, reason };

    let pair = item
        .as_array()
        .ok_or_else(|| invalid("expected an array".to_string()))?;

    let [from, to] = pair.as_slice() else {
        return Err(invalid(format!(
            "expected a [from, to] pair, got {} element(s)",
            pair.len()
        )));
    };

    match (from.as_str(), to.as_str()) {
        (Some(from), Some(to)) => Ok(Edge::new(from, to)),
        _ => Err(invalid("codes must be strings".to_string())),
    }
}
