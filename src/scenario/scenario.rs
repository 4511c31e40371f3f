use crate::graph::location::Location;
use crate::vehicle::vehicle::Vehicle;

/// Hands out delivery destinations as vehicles become available.
pub trait Scenario {
    fn name(&self) -> &str;

    /// The next destination for an idle vehicle, or `None` to park it.
    fn next_destination(&mut self, vehicle: &Vehicle) -> Option<Location>;
}
