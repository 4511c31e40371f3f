use crate::graph::error::GraphError;
use crate::graph::node::Node;
use crate::graph::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Model {
    Car,
    Bus,
    Truck,
}

impl Model {
    pub const ALL: [Model; 3] = [Model::Car, Model::Bus, Model::Truck];

    pub fn icon(self) -> &'static str {
        match self {
            Model::Car => "🚗",
            Model::Bus => "🚌",
            Model::Truck => "🚚",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Model::Car => "car",
            Model::Bus => "bus",
            Model::Truck => "truck",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VehicleStatus {
    EnRoute,
    Idle,
    Stranded,
}

struct Route {
    destination: Node,
    path: Path,
}

/// A vehicle on the map, holding at most one active route and stepping
/// it one successor per simulation turn.
pub struct Vehicle {
    id: usize,
    model: Model,
    position: Node,
    route: Option<Route>,
    status: VehicleStatus,
    odometer: u32,
    deliveries: usize,
}

impl Vehicle {
    pub fn new(id: usize, model: Model, position: Node) -> Self {
        Self {
            id,
            model,
            position,
            route: None,
            status: VehicleStatus::Idle,
            odometer: 0,
            deliveries: 0,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn model(&self) -> Model {
        self.model
    }

    pub fn position(&self) -> Node {
        self.position
    }

    pub fn status(&self) -> VehicleStatus {
        self.status
    }

    pub fn odometer(&self) -> u32 {
        self.odometer
    }

    pub fn deliveries(&self) -> usize {
        self.deliveries
    }

    pub fn destination(&self) -> Option<Node> {
        self.route.as_ref().map(|r| r.destination)
    }

    pub fn next_hop(&self) -> Option<Node> {
        self.route
            .as_ref()
            .and_then(|r| r.path.step(self.position).ok())
    }

    pub fn assign(&mut self, destination: Node, path: Path) {
        self.route = Some(Route { destination, path });
        self.status = VehicleStatus::EnRoute;
    }

    pub fn strand(&mut self) {
        self.route = None;
        self.status = VehicleStatus::Stranded;
    }

    /// The next node on the active route.
    pub fn step_route(&self) -> Result<Node, GraphError> {
        match &self.route {
            Some(route) => route.path.step(self.position),
            None => Err(GraphError::NoSuccessor(self.position.location())),
        }
    }

    pub fn move_to(&mut self, next: Node, hop_weight: u32) {
        self.position = next;
        self.odometer += hop_weight;
    }

    pub fn complete_delivery(&mut self) {
        self.deliveries += 1;
        self.route = None;
        self.status = VehicleStatus::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::edge::Edge;
    use crate::graph::location::{GeoLocation, Location};

    fn node(location: Location) -> Node {
        Node::new(location, GeoLocation::new(0.0, 0.0))
    }

    #[test]
    fn test_icon_mapping_is_total() {
        assert_eq!("🚗", Model::Car.icon());
        assert_eq!("🚌", Model::Bus.icon());
        assert_eq!("🚚", Model::Truck.icon());
    }

    #[test]
    fn test_assign_and_complete_round_trip() {
        let sp = node(Location::SP);
        let rj = node(Location::RJ);
        let path = Path::from_edges(sp, [Edge::new(sp, rj, Some(4))]).unwrap();

        let mut vehicle = Vehicle::new(0, Model::Truck, sp);
        assert_eq!(VehicleStatus::Idle, vehicle.status());

        vehicle.assign(rj, path);
        assert_eq!(VehicleStatus::EnRoute, vehicle.status());
        assert_eq!(Some(rj), vehicle.next_hop());

        vehicle.move_to(rj, 4);
        vehicle.complete_delivery();
        assert_eq!(VehicleStatus::Idle, vehicle.status());
        assert_eq!(4, vehicle.odometer());
        assert_eq!(1, vehicle.deliveries());
        assert_eq!(None, vehicle.destination());
    }
}
