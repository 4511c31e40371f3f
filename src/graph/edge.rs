use std::hash::{Hash, Hasher};

use crate::graph::location::Location;
use crate::graph::node::Node;

/// An undirected, weighted connection between two nodes.
///
/// Equality and hashing ignore endpoint order: `Edge(a, b, w)` and
/// `Edge(b, a, w)` are the same edge in a set. The order the endpoints were
/// given in is still kept, so path building can read a direction off it.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    a: Node,
    b: Node,
    /// weight >= 1
    weight: u32,
}

impl Edge {
    /// An absent weight means the default hop cost of 1; an explicit 0 is
    /// treated the same way.
    pub fn new(a: Node, b: Node, weight: Option<u32>) -> Self {
        let weight = weight.filter(|w| *w > 0).unwrap_or(1);
        Self { a, b, weight }
    }

    pub fn endpoints(&self) -> (Node, Node) {
        (self.a, self.b)
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn connects(&self, x: Location, y: Location) -> bool {
        (self.a.location() == x && self.b.location() == y)
            || (self.a.location() == y && self.b.location() == x)
    }

    fn unordered(&self) -> (Location, Location) {
        let (x, y) = (self.a.location(), self.b.location());
        if x <= y { (x, y) } else { (y, x) }
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.unordered() == other.unordered() && self.weight == other.weight
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.unordered().hash(state);
        self.weight.hash(state);
    }
}
