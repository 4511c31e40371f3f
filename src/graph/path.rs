use std::collections::HashMap;

use crate::graph::edge::Edge;
use crate::graph::error::GraphError;
use crate::graph::location::Location;
use crate::graph::node::Node;

/// A successor chain rooted at a start node.
///
/// Each location maps to at most one next node, so a path is a simple
/// chain, never a tree. Walking is lazy and side-effect free; a walk is
/// finite only while the chain is acyclic, which holds for anything the
/// pathfinder produces except the deliberate self-loop for equal
/// endpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    start: Node,
    data: HashMap<Location, Node>,
}

impl Path {
    /// Records each edge's first endpoint -> second endpoint. An edge list
    /// that branches (two different successors for one location) is
    /// rejected rather than silently dropping a branch.
    pub fn from_edges(
        start: Node,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, GraphError> {
        let mut data = HashMap::new();
        for edge in edges {
            let (from, to) = edge.endpoints();
            if let Some(previous) = data.insert(from.location(), to) {
                if previous != to {
                    return Err(GraphError::BranchingPath(from.location()));
                }
            }
        }
        Ok(Self { start, data })
    }

    pub fn start(&self) -> Node {
        self.start
    }

    pub fn step(&self, current: Node) -> Result<Node, GraphError> {
        self.data
            .get(&current.location())
            .copied()
            .ok_or(GraphError::NoSuccessor(current.location()))
    }

    /// Successors after `from` (the start node when `None`), ending at the
    /// first node with no successor. Restartable; every call yields a
    /// fresh iterator.
    pub fn walk(&self, from: Option<Node>) -> Walk<'_> {
        Walk {
            path: self,
            current: from.unwrap_or(self.start),
        }
    }
}

pub struct Walk<'a> {
    path: &'a Path,
    current: Node,
}

impl Iterator for Walk<'_> {
    type Item = Node;

    fn next(&mut self) -> Option<Node> {
        let next = *self.path.data.get(&self.current.location())?;
        self.current = next;
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::location::GeoLocation;

    fn node(location: Location) -> Node {
        Node::new(location, GeoLocation::new(0.0, 0.0))
    }

    fn chain() -> (Node, Node, Node, Node, Path) {
        let am = node(Location::AM);
        let ba = node(Location::BA);
        let ce = node(Location::CE);
        let df = node(Location::DF);
        let path = Path::from_edges(
            am,
            [
                Edge::new(am, ba, None),
                Edge::new(ba, ce, None),
                Edge::new(ce, df, None),
            ],
        )
        .unwrap();
        (am, ba, ce, df, path)
    }

    #[test]
    fn test_step_follows_successors() {
        let (am, ba, ce, df, path) = chain();
        assert_eq!(Ok(ba), path.step(am));
        assert_eq!(Ok(ce), path.step(ba));
        assert_eq!(Ok(df), path.step(ce));
    }

    #[test]
    fn test_step_without_successor() {
        let (_, _, _, df, path) = chain();
        assert_eq!(Err(GraphError::NoSuccessor(Location::DF)), path.step(df));
    }

    #[test]
    fn test_walk_from_start() {
        let (_, ba, ce, df, path) = chain();
        assert_eq!(vec![ba, ce, df], path.walk(None).collect::<Vec<_>>());
    }

    #[test]
    fn test_walk_from_midpoint() {
        let (_, ba, ce, df, path) = chain();
        assert_eq!(vec![ce, df], path.walk(Some(ba)).collect::<Vec<_>>());
        assert_eq!(vec![df], path.walk(Some(ce)).collect::<Vec<_>>());
    }

    #[test]
    fn test_walk_is_restartable() {
        let (_, _, _, _, path) = chain();
        assert_eq!(
            path.walk(None).collect::<Vec<_>>(),
            path.walk(None).collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_branching_edge_list_is_rejected() {
        let am = node(Location::AM);
        let ba = node(Location::BA);
        let ce = node(Location::CE);
        let result = Path::from_edges(am, [Edge::new(am, ba, None), Edge::new(am, ce, None)]);
        assert_eq!(
            Err(GraphError::BranchingPath(Location::AM)),
            result.map(|_| ())
        );
    }

    #[test]
    fn test_duplicate_edges_are_tolerated() {
        let am = node(Location::AM);
        let ba = node(Location::BA);
        let path =
            Path::from_edges(am, [Edge::new(am, ba, None), Edge::new(am, ba, None)]).unwrap();
        assert_eq!(vec![ba], path.walk(None).collect::<Vec<_>>());
    }
}
