pub mod dijkstra;
pub mod edge;
pub mod error;
pub mod graph;
pub mod location;
pub mod node;
pub mod path;
