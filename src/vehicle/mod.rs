pub mod fleet;
pub mod vehicle;
