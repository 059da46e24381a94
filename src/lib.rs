pub mod logging;
pub mod server;

use flightpath_core::{decode_edges_str, FlightPathError, ResolvedPath};
use flightpath_graph::resolve_path;

/// Decode a JSON request body and resolve the flight path it describes.
pub fn calculate(body: &str) -> Result<ResolvedPath, FlightPathError> {
    let edges = decode_edges_str(body)?;
    resolve_path(&edges)
}
