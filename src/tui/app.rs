use crate::simulation::engine::SimulationEngine;

pub struct App {
    pub engine: SimulationEngine,
}

impl App {
    pub fn new(engine: SimulationEngine) -> Self {
        Self { engine }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        ratatui::restore();
    }
}
