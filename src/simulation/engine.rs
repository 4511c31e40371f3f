use crate::graph::dijkstra::shortest_path;
use crate::graph::error::GraphError;
use crate::graph::graph::Graph;
use crate::scenario::scenario::Scenario;
use crate::vehicle::vehicle::{Vehicle, VehicleStatus};

/// Drives the fleet over the graph one turn at a time.
///
/// Each turn, idle vehicles ask the scenario for a destination and plan a
/// route; en-route vehicles advance one successor-step. A destination the
/// graph cannot reach strands the vehicle; everything else propagates.
pub struct SimulationEngine {
    graph: Graph,
    vehicles: Vec<Vehicle>,
    scenario: Box<dyn Scenario>,
    turn: usize,
}

impl SimulationEngine {
    pub fn new(graph: Graph, vehicles: Vec<Vehicle>, scenario: Box<dyn Scenario>) -> Self {
        Self {
            graph,
            vehicles,
            scenario,
            turn: 0,
        }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn turn(&self) -> usize {
        self.turn
    }

    pub fn scenario_name(&self) -> &str {
        self.scenario.name()
    }

    pub fn step(&mut self) -> Result<(), GraphError> {
        for vehicle in &mut self.vehicles {
            match vehicle.status() {
                VehicleStatus::Stranded => {}
                VehicleStatus::Idle => {
                    let Some(code) = self.scenario.next_destination(vehicle) else {
                        continue;
                    };
                    let destination = self
                        .graph
                        .node(code)
                        .copied()
                        .ok_or(GraphError::NodeNotFound(code))?;
                    match shortest_path(vehicle.position(), destination, &self.graph)? {
                        Some(path) => vehicle.assign(destination, path),
                        None => vehicle.strand(),
                    }
                }
                VehicleStatus::EnRoute => {
                    let next = vehicle.step_route()?;
                    // a self-loop hop is not a real road segment
                    let hop_weight = self
                        .graph
                        .find_edge(vehicle.position().location(), next.location())
                        .map_or(0, |e| e.weight());
                    vehicle.move_to(next, hop_weight);
                    if vehicle.destination() == Some(next) {
                        vehicle.complete_delivery();
                    }
                }
            }
        }
        self.turn += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::edge::Edge;
    use crate::graph::location::{GeoLocation, Location};
    use crate::graph::node::Node;
    use crate::vehicle::vehicle::Model;

    fn node(location: Location) -> Node {
        Node::new(location, GeoLocation::new(0.0, 0.0))
    }

    struct TestScenario {
        destinations: Vec<Option<Location>>,
    }

    impl TestScenario {
        fn new(destinations: Vec<Option<Location>>) -> Self {
            Self { destinations }
        }
    }

    impl Scenario for TestScenario {
        fn name(&self) -> &str {
            "test"
        }

        fn next_destination(&mut self, vehicle: &Vehicle) -> Option<Location> {
            self.destinations
                .get(vehicle.id())
                .copied()
                .flatten()
        }
    }

    fn line_graph() -> Graph {
        let ac = node(Location::AC);
        let ba = node(Location::BA);
        let ce = node(Location::CE);
        let df = node(Location::DF);
        Graph::new(
            vec![ac, ba, ce, df],
            vec![
                Edge::new(ac, ba, Some(2)),
                Edge::new(ba, ce, Some(3)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_one_hop_per_turn() {
        let graph = line_graph();
        let fleet = vec![Vehicle::new(0, Model::Truck, node(Location::AC))];
        let scenario = TestScenario::new(vec![Some(Location::CE)]);
        let mut engine = SimulationEngine::new(graph, fleet, Box::new(scenario));

        engine.step().unwrap();
        assert_eq!(Location::AC, engine.vehicles()[0].position().location());
        assert_eq!(VehicleStatus::EnRoute, engine.vehicles()[0].status());

        engine.step().unwrap();
        assert_eq!(Location::BA, engine.vehicles()[0].position().location());
        assert_eq!(2, engine.vehicles()[0].odometer());

        engine.step().unwrap();
        let truck = &engine.vehicles()[0];
        assert_eq!(Location::CE, truck.position().location());
        assert_eq!(5, truck.odometer());
        assert_eq!(1, truck.deliveries());
        assert_eq!(3, engine.turn());
    }

    #[test]
    fn test_arrival_triggers_replanning() {
        let graph = line_graph();
        let fleet = vec![Vehicle::new(0, Model::Car, node(Location::AC))];
        let scenario = TestScenario::new(vec![Some(Location::BA)]);
        let mut engine = SimulationEngine::new(graph, fleet, Box::new(scenario));

        engine.step().unwrap();
        engine.step().unwrap();
        assert_eq!(1, engine.vehicles()[0].deliveries());

        // the scenario keeps answering BA; a fresh route is assigned
        engine.step().unwrap();
        assert_eq!(VehicleStatus::EnRoute, engine.vehicles()[0].status());
        assert_eq!(
            Some(Location::BA),
            engine.vehicles()[0].destination().map(|n| n.location())
        );
    }

    #[test]
    fn test_unreachable_destination_strands() {
        let graph = line_graph();
        let fleet = vec![Vehicle::new(0, Model::Bus, node(Location::AC))];
        let scenario = TestScenario::new(vec![Some(Location::DF)]);
        let mut engine = SimulationEngine::new(graph, fleet, Box::new(scenario));

        engine.step().unwrap();
        assert_eq!(VehicleStatus::Stranded, engine.vehicles()[0].status());

        // stranded vehicles stay put
        engine.step().unwrap();
        assert_eq!(VehicleStatus::Stranded, engine.vehicles()[0].status());
        assert_eq!(Location::AC, engine.vehicles()[0].position().location());
    }

    #[test]
    fn test_parked_vehicle_stays_idle() {
        let graph = line_graph();
        let fleet = vec![Vehicle::new(0, Model::Car, node(Location::BA))];
        let scenario = TestScenario::new(vec![None]);
        let mut engine = SimulationEngine::new(graph, fleet, Box::new(scenario));

        engine.step().unwrap();
        assert_eq!(VehicleStatus::Idle, engine.vehicles()[0].status());
        assert_eq!(Location::BA, engine.vehicles()[0].position().location());
    }
}
