use crate::vehicle::vehicle::{Model, Vehicle, VehicleStatus};

/// Per-model aggregation of the fleet for display.
pub struct FleetSummary {
    model: Model,
    count: usize,
    en_route: usize,
    stranded: usize,
    deliveries: usize,
    odometer: u32,
}

impl FleetSummary {
    pub fn model(&self) -> Model {
        self.model
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn en_route(&self) -> usize {
        self.en_route
    }

    pub fn stranded(&self) -> usize {
        self.stranded
    }

    pub fn deliveries(&self) -> usize {
        self.deliveries
    }

    pub fn odometer(&self) -> u32 {
        self.odometer
    }
}

pub fn summarize_fleet(vehicles: &[Vehicle]) -> Vec<FleetSummary> {
    Model::ALL
        .iter()
        .map(|&model| {
            let of_model = vehicles.iter().filter(|v| v.model() == model);
            let mut summary = FleetSummary {
                model,
                count: 0,
                en_route: 0,
                stranded: 0,
                deliveries: 0,
                odometer: 0,
            };
            for vehicle in of_model {
                summary.count += 1;
                match vehicle.status() {
                    VehicleStatus::EnRoute => summary.en_route += 1,
                    VehicleStatus::Stranded => summary.stranded += 1,
                    VehicleStatus::Idle => {}
                }
                summary.deliveries += vehicle.deliveries();
                summary.odometer += vehicle.odometer();
            }
            summary
        })
        .filter(|s| s.count > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::location::{GeoLocation, Location};
    use crate::graph::node::Node;

    fn node(location: Location) -> Node {
        Node::new(location, GeoLocation::new(0.0, 0.0))
    }

    #[test]
    fn test_summary_groups_by_model() {
        let mut truck = Vehicle::new(0, Model::Truck, node(Location::SP));
        truck.move_to(node(Location::MG), 6);
        truck.complete_delivery();
        let bus = Vehicle::new(1, Model::Bus, node(Location::RJ));
        let other_truck = Vehicle::new(2, Model::Truck, node(Location::DF));

        let summaries = summarize_fleet(&[truck, bus, other_truck]);
        assert_eq!(2, summaries.len());

        let trucks = summaries
            .iter()
            .find(|s| s.model() == Model::Truck)
            .unwrap();
        assert_eq!(2, trucks.count());
        assert_eq!(1, trucks.deliveries());
        assert_eq!(6, trucks.odometer());

        let buses = summaries.iter().find(|s| s.model() == Model::Bus).unwrap();
        assert_eq!(1, buses.count());
        assert_eq!(0, buses.deliveries());
    }

    #[test]
    fn test_absent_models_are_omitted() {
        let car = Vehicle::new(0, Model::Car, node(Location::DF));
        let summaries = summarize_fleet(&[car]);
        assert_eq!(1, summaries.len());
        assert_eq!(Model::Car, summaries[0].model());
    }
}
