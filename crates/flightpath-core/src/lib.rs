mod decode;
mod error;
mod path;

pub use decode::{decode_edges, decode_edges_str};
pub use error::FlightPathError;
pub use path::{Edge, FlightPathResponse, Resolution, ResolvedPath};
