use serde::{Deserialize, Serialize};

/// A single direct hop between two location codes.
///
/// Codes are opaque and case-sensitive; nothing assumes their length or
/// alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// How a [`ResolvedPath`] was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// A code with no incoming hop and a code with no outgoing hop were both found.
    Chain,
    /// At least one endpoint was missing and the cycle walk picked it.
    Walk,
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Chain => f.write_str("chain"),
            Resolution::Walk => f.write_str("walk"),
        }
    }
}

/// The (start, end) pair reported for a set of hops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedPath {
    pub start: String,
    pub end: String,
    pub resolution: Resolution,
}

impl ResolvedPath {
    pub fn new(start: impl Into<String>, end: impl Into<String>, resolution: Resolution) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            resolution,
        }
    }

    /// The endpoints as a `[start, end]` array, the shape used on the wire.
    pub fn endpoints(&self) -> [&str; 2] {
        [self.start.as_str(), self.end.as_str()]
    }

    pub fn into_endpoints(self) -> [String; 2] {
        [self.start, self.end]
    }
}

/// Success body of a resolution: `{"Flight Path": [start, end]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightPathResponse {
    #[serde(rename = "Flight Path")]
    pub flight_path: [String; 2],
}

impl From<ResolvedPath> for FlightPathResponse {
    fn from(path: ResolvedPath) -> Self {
        Self {
            flight_path: path.into_endpoints(),
        }
    }
}
