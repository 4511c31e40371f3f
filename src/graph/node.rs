use std::hash::{Hash, Hasher};

use crate::graph::location::{GeoLocation, Location};

/// A stop on the map.
///
/// Identity is the location code alone; the coordinates are payload and
/// take no part in equality or hashing.
#[derive(Clone, Copy, Debug)]
pub struct Node {
    location: Location,
    coordinates: GeoLocation,
}

impl Node {
    pub fn new(location: Location, coordinates: GeoLocation) -> Self {
        Self {
            location,
            coordinates,
        }
    }

    pub fn location(self) -> Location {
        self.location
    }

    pub fn coordinates(self) -> GeoLocation {
        self.coordinates
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.location == other.location
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.location.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_ignores_coordinates() {
        let a = Node::new(Location::AP, GeoLocation::new(0.0, 0.0));
        let b = Node::new(Location::AP, GeoLocation::new(1.0, 1.0));
        let c = Node::new(Location::BA, GeoLocation::new(0.0, 0.0));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
