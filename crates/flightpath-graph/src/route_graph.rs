use std::collections::{HashMap, HashSet};

use flightpath_core::{Edge, FlightPathError, Resolution, ResolvedPath};

use crate::ordered::InsertionSet;

/// Directed hops between codes, built fresh for one resolution.
///
/// Each origin keeps exactly one outgoing hop: when the same `from` appears
/// more than once, the later edge in input order replaces the earlier one.
/// Origins and destinations remember the order in which each code was first
/// seen, and every "pick the first" choice below uses that order.
#[derive(Debug, Default, Clone)]
pub struct RouteGraph {
    next: HashMap<String, String>,
    origins: InsertionSet,
    destinations: InsertionSet,
}

impl RouteGraph {
    pub fn from_edges<'a>(edges: impl IntoIterator<Item = &'a Edge>) -> Self {
        let mut graph = Self::default();
        for edge in edges {
            graph.add_edge(edge);
        }
        graph
    }

    /// Add a hop, replacing any previous hop out of `edge.from`.
    pub fn add_edge(&mut self, edge: &Edge) {
        self.origins.insert(&edge.from);
        self.destinations.insert(&edge.to);
        self.next.insert(edge.from.clone(), edge.to.clone());
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_empty()
    }

    /// Number of distinct origins, i.e. of stored hops.
    pub fn len(&self) -> usize {
        self.origins.len()
    }

    /// The single hop out of `code`, if it has one.
    pub fn next_hop(&self, code: &str) -> Option<&str> {
        self.next.get(code).map(String::as_str)
    }

    /// Origins that are never a destination, in first-seen order.
    pub fn start_candidates(&self) -> impl Iterator<Item = &str> {
        self.origins
            .iter()
            .filter(|code| !self.destinations.contains(code))
    }

    /// Destinations that are never an origin, in first-seen order.
    pub fn end_candidates(&self) -> impl Iterator<Item = &str> {
        self.destinations
            .iter()
            .filter(|code| !self.origins.contains(code))
    }

    /// Resolve the (start, end) pair of the hops.
    ///
    /// The start is the first start candidate and the end the first end
    /// candidate. When either is missing the graph contains a loop and the
    /// pair comes from [`walk_end`](Self::walk_end) instead: the walk starts
    /// at the start candidate if one was found, otherwise at the first origin
    /// ever seen. A pure cycle given as `A->B, B->C, C->A` therefore resolves
    /// to `(A, C)`.
    ///
    /// Starting from a found start candidate differs from the Express service
    /// this replaces, which always walked from the first origin: for
    /// `B->C, C->B, A->B` it answered `(B, C)` where this answers `(A, C)`.
    ///
    /// An end equal to the start is moved one hop forward. A start whose only
    /// hop is to itself, as in a lone `A->A`, still yields `(A, A)`.
    ///
    /// Fails with [`FlightPathError::EmptyInput`] when there are no hops.
    pub fn resolve(&self) -> Result<ResolvedPath, FlightPathError> {
        let first_origin = self.origins.first().ok_or(FlightPathError::EmptyInput)?;

        let (start, end, resolution) =
            match (self.start_candidates().next(), self.end_candidates().next()) {
                (Some(start), Some(end)) => (start, end, Resolution::Chain),
                (start, end) => {
                    let start = start.unwrap_or(first_origin);
                    (start, self.walk_end(start, end), Resolution::Walk)
                }
            };

        Ok(ResolvedPath::new(
            start,
            self.distinct_end(start, end),
            resolution,
        ))
    }

    /// Follow hops from `start` until the walk can go no further.
    ///
    /// - the next hop closes the loop on `start`: the current code is the end,
    ///   replacing `known_end`;
    /// - the current code has no hop, or the next hop revisits a code other
    ///   than `start`: `known_end` if there is one, otherwise the current code.
    ///
    /// Every code is visited at most once, so the walk is bounded by the
    /// number of hops.
    pub fn walk_end<'a>(&'a self, start: &'a str, known_end: Option<&'a str>) -> &'a str {
        let mut visited = HashSet::new();
        let mut current = start;

        loop {
            visited.insert(current);
            match self.next_hop(current) {
                Some(next) if next == start => return current,
                Some(next) if !visited.contains(next) => current = next,
                _ => return known_end.unwrap_or(current),
            }
        }
    }

    /// Replace an end equal to `start` with the hop out of `start`.
    fn distinct_end<'a>(&'a self, start: &'a str, end: &'a str) -> &'a str {
        if start != end {
            return end;
        }
        self.next_hop(start).unwrap_or(end)
    }
}

/// Build a [`RouteGraph`] from `edges` and resolve it.
pub fn resolve_path(edges: &[Edge]) -> Result<ResolvedPath, FlightPathError> {
    RouteGraph::from_edges(edges).resolve()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distinct_end_moves_one_hop() {
        let graph = RouteGraph::from_edges(&[Edge::new("AAA", "BBB"), Edge::new("BBB", "AAA")]);
        assert_eq!(graph.distinct_end("AAA", "AAA"), "BBB");
        assert_eq!(graph.distinct_end("AAA", "CCC"), "CCC");
    }

    #[test]
    fn distinct_end_without_hop_keeps_end() {
        let graph = RouteGraph::from_edges(&[Edge::new("AAA", "BBB")]);
        assert_eq!(graph.distinct_end("BBB", "BBB"), "BBB");
    }
}
