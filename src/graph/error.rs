use thiserror::Error;

use crate::graph::location::Location;

/// Failures surfaced by graph construction and lookups.
///
/// An unreachable destination is not an error; `shortest_path` reports it
/// as `Ok(None)`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("unknown location code `{0}`")]
    UnknownLocation(String),
    #[error("edge {0}-{1} references a location outside the node set")]
    DanglingEdge(Location, Location),
    #[error("location {0} is not in the graph")]
    NodeNotFound(Location),
    #[error("no successor recorded for {0}")]
    NoSuccessor(Location),
    #[error("edge list branches at {0}; a path is a simple chain")]
    BranchingPath(Location),
}
