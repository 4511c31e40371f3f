use std::collections::{HashMap, HashSet};

use crate::graph::edge::Edge;
use crate::graph::error::GraphError;
use crate::graph::location::Location;
use crate::graph::node::Node;

/// A map as a weighted, undirected graph over a fixed set of locations.
///
/// The adjacency index is the symmetric closure of the edge set and is
/// built once; nothing mutates a graph after construction, so shared
/// references are safe to read from any number of threads.
pub struct Graph {
    nodes: HashSet<Node>,
    edges: HashSet<Edge>,
    adjacency: HashMap<Location, HashSet<(Node, u32)>>,
}

impl Graph {
    /// Every edge endpoint must be in the node set. Duplicate unordered
    /// pairs collapse under set semantics; which weight survives when two
    /// edges differ only in weight is unspecified.
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, GraphError> {
        let nodes: HashSet<Node> = nodes.into_iter().collect();
        let edges: HashSet<Edge> = edges.into_iter().collect();

        let mut adjacency: HashMap<Location, HashSet<(Node, u32)>> = nodes
            .iter()
            .map(|n| (n.location(), HashSet::new()))
            .collect();

        for edge in &edges {
            let (a, b) = edge.endpoints();
            if !nodes.contains(&a) || !nodes.contains(&b) {
                return Err(GraphError::DanglingEdge(a.location(), b.location()));
            }
            adjacency
                .entry(a.location())
                .or_default()
                .insert((b, edge.weight()));
            adjacency
                .entry(b.location())
                .or_default()
                .insert((a, edge.weight()));
        }

        Ok(Self {
            nodes,
            edges,
            adjacency,
        })
    }

    pub fn nodes(&self) -> &HashSet<Node> {
        &self.nodes
    }

    pub fn edges(&self) -> &HashSet<Edge> {
        &self.edges
    }

    pub fn node(&self, location: Location) -> Option<&Node> {
        self.nodes.iter().find(|n| n.location() == location)
    }

    /// The (neighbor, weight) pairs one hop away from `location`.
    pub fn neighbors(&self, location: Location) -> Result<&HashSet<(Node, u32)>, GraphError> {
        self.adjacency
            .get(&location)
            .ok_or(GraphError::NodeNotFound(location))
    }

    /// Linear scan for the edge joining `a` and `b` in either order.
    /// Absence is a normal outcome, not an error.
    pub fn find_edge(&self, a: Location, b: Location) -> Option<&Edge> {
        self.edges.iter().find(|e| e.connects(a, b))
    }
}
