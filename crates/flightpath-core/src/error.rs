use thiserror::Error;

/// Errors shared by every flightpath crate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FlightPathError {
    /// The payload is not an array, or one of its elements is not an array.
    #[error("Invalid input. Expected an array of arrays.")]
    InvalidInput,
    /// An element is an array but not a `[from, to]` pair of strings.
    #[error("Invalid flight at index {index}: {reason}")]
    InvalidFlight { index: usize, reason: String },
    #[error("Malformed request body: {0}")]
    MalformedBody(String),
    /// Zero hops: there is no endpoint to report.
    #[error("No flights provided.")]
    EmptyInput,
    #[error("Config error: {0}")]
    Config(String),
}

impl FlightPathError {
    /// True for errors caused by the caller's payload rather than the service.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, FlightPathError::Config(_))
    }
}
