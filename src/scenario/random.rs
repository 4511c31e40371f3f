use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::graph::error::GraphError;
use crate::graph::graph::Graph;
use crate::graph::location::Location;
use crate::scenario::brazil::{brazil_graph, capital};
use crate::scenario::scenario::Scenario;
use crate::vehicle::vehicle::{Model, Vehicle};

/// An endless dispatch run: a seeded rng scatters the fleet and keeps
/// handing out fresh destinations.
pub struct RandomScenario {
    rng: StdRng,
}

impl RandomScenario {
    const FLEET_SIZE: usize = 6;

    pub fn build(seed: u64) -> Result<(Graph, Vec<Vehicle>, Box<dyn Scenario>), GraphError> {
        let graph = brazil_graph()?;
        let mut rng = StdRng::seed_from_u64(seed);

        let fleet = (0..Self::FLEET_SIZE)
            .map(|id| {
                let model = Model::ALL[id % Model::ALL.len()];
                let start = Location::ALL[rng.gen_range(0..Location::ALL.len())];
                Ok(Vehicle::new(id, model, capital(&graph, start)?))
            })
            .collect::<Result<Vec<Vehicle>, GraphError>>()?;

        Ok((graph, fleet, Box::new(RandomScenario { rng })))
    }
}

impl Scenario for RandomScenario {
    fn name(&self) -> &str {
        "random"
    }

    fn next_destination(&mut self, vehicle: &Vehicle) -> Option<Location> {
        loop {
            let pick = Location::ALL[self.rng.gen_range(0..Location::ALL.len())];
            if pick != vehicle.position().location() {
                return Some(pick);
            }
        }
    }
}
