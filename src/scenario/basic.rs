use std::collections::VecDeque;

use crate::graph::error::GraphError;
use crate::graph::graph::Graph;
use crate::graph::location::Location;
use crate::scenario::brazil::{brazil_graph, capital};
use crate::scenario::scenario::Scenario;
use crate::vehicle::vehicle::{Model, Vehicle};

/// A fixed delivery run: three vehicles, each with a set itinerary.
pub struct BasicScenario {
    itineraries: Vec<VecDeque<Location>>,
}

impl BasicScenario {
    pub fn build() -> Result<(Graph, Vec<Vehicle>, Box<dyn Scenario>), GraphError> {
        let graph = brazil_graph()?;

        let fleet = vec![
            Vehicle::new(0, Model::Truck, capital(&graph, Location::SP)?),
            Vehicle::new(1, Model::Bus, capital(&graph, Location::RJ)?),
            Vehicle::new(2, Model::Car, capital(&graph, Location::DF)?),
        ];

        let itineraries = vec![
            VecDeque::from([Location::MG, Location::BA, Location::PE, Location::CE]),
            VecDeque::from([Location::SP, Location::PR, Location::SC, Location::RS]),
            VecDeque::from([Location::GO, Location::TO, Location::PA]),
        ];

        Ok((graph, fleet, Box::new(BasicScenario { itineraries })))
    }
}

impl Scenario for BasicScenario {
    fn name(&self) -> &str {
        "basic"
    }

    fn next_destination(&mut self, vehicle: &Vehicle) -> Option<Location> {
        self.itineraries.get_mut(vehicle.id())?.pop_front()
    }
}
