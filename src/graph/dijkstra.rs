use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::edge::Edge;
use crate::graph::error::GraphError;
use crate::graph::graph::Graph;
use crate::graph::location::Location;
use crate::graph::node::Node;
use crate::graph::path::Path;

/// A frontier entry: a location discovered at some tentative cost.
#[derive(Clone, Copy, PartialEq, Eq)]
struct Visit {
    cost: u32,
    location: Location,
}

// Reversed so the binary heap pops the cheapest visit first; the location
// makes the ordering total, which fixes a lexicographic tie-break.
impl Ord for Visit {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.location.cmp(&self.location))
    }
}

impl PartialOrd for Visit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Minimum-total-weight path between two nodes.
///
/// Returns `Ok(None)` when no route connects them. Equal endpoints yield
/// the degenerate self-loop path; callers stepping it arrive immediately,
/// but walking it never terminates.
///
/// The search stops as soon as the destination is popped from the
/// frontier, which is sound because weights are non-negative by type.
pub fn shortest_path(
    start: Node,
    destination: Node,
    graph: &Graph,
) -> Result<Option<Path>, GraphError> {
    graph.neighbors(start.location())?;
    graph.neighbors(destination.location())?;

    if start == destination {
        let hop = Edge::new(start, start, None);
        return Ok(Some(Path::from_edges(start, [hop])?));
    }

    let mut dist: HashMap<Location, u32> = HashMap::from([(start.location(), 0)]);
    let mut predecessor: HashMap<Location, Node> = HashMap::new();
    let mut frontier = BinaryHeap::from([Visit {
        cost: 0,
        location: start.location(),
    }]);

    while let Some(Visit { cost, location }) = frontier.pop() {
        if location == destination.location() {
            break;
        }
        if dist.get(&location).is_some_and(|d| *d < cost) {
            // stale entry, already settled cheaper
            continue;
        }
        let here = graph
            .node(location)
            .copied()
            .ok_or(GraphError::NodeNotFound(location))?;
        for &(neighbor, weight) in graph.neighbors(location)? {
            let candidate = cost + weight;
            let improved = dist
                .get(&neighbor.location())
                .is_none_or(|d| candidate < *d);
            if improved {
                dist.insert(neighbor.location(), candidate);
                predecessor.insert(neighbor.location(), here);
                frontier.push(Visit {
                    cost: candidate,
                    location: neighbor.location(),
                });
            }
        }
    }

    if !predecessor.contains_key(&destination.location()) {
        return Ok(None);
    }

    // Rebuild destination -> start, re-orienting each hop from the edge
    // set; the edge must exist because adjacency derives from it.
    let mut hops = Vec::new();
    let mut current = destination;
    while current != start {
        let previous = predecessor
            .get(&current.location())
            .copied()
            .ok_or(GraphError::NoSuccessor(current.location()))?;
        let edge = graph
            .find_edge(previous.location(), current.location())
            .ok_or(GraphError::DanglingEdge(
                previous.location(),
                current.location(),
            ))?;
        hops.push(Edge::new(previous, current, Some(edge.weight())));
        current = previous;
    }

    Ok(Some(Path::from_edges(start, hops)?))
}
