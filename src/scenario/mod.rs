pub mod basic;
pub mod brazil;
pub mod random;
pub mod scenario;
