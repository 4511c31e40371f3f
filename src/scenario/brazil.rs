use std::collections::HashMap;

use crate::graph::edge::Edge;
use crate::graph::error::GraphError;
use crate::graph::graph::Graph;
use crate::graph::location::{GeoLocation, Location};
use crate::graph::node::Node;

/// State capitals, latitude/longitude.
const CAPITALS: [(Location, f64, f64); 27] = [
    (Location::AC, -9.97, -67.81),
    (Location::AL, -9.67, -35.74),
    (Location::AM, -3.12, -60.02),
    (Location::AP, 0.03, -51.07),
    (Location::BA, -12.97, -38.50),
    (Location::CE, -3.72, -38.54),
    (Location::DF, -15.79, -47.88),
    (Location::ES, -20.32, -40.34),
    (Location::GO, -16.68, -49.26),
    (Location::MA, -2.53, -44.30),
    (Location::MG, -19.92, -43.94),
    (Location::MS, -20.44, -54.65),
    (Location::MT, -15.60, -56.10),
    (Location::PA, -1.46, -48.50),
    (Location::PB, -7.12, -34.86),
    (Location::PE, -8.05, -34.88),
    (Location::PI, -5.09, -42.80),
    (Location::PR, -25.43, -49.27),
    (Location::RJ, -22.91, -43.17),
    (Location::RN, -5.79, -35.21),
    (Location::RO, -8.76, -63.90),
    (Location::RR, 2.82, -60.67),
    (Location::RS, -30.03, -51.23),
    (Location::SC, -27.59, -48.55),
    (Location::SE, -10.91, -37.07),
    (Location::SP, -23.55, -46.63),
    (Location::TO, -10.24, -48.36),
];

/// Interstate connections, weighted in rough hundreds of kilometres
/// between the capitals.
const ROADS: [(Location, Location, u32); 50] = [
    (Location::AC, Location::AM, 14),
    (Location::AC, Location::RO, 5),
    (Location::AL, Location::PE, 3),
    (Location::AL, Location::SE, 3),
    (Location::AL, Location::BA, 6),
    (Location::AM, Location::RO, 9),
    (Location::AM, Location::RR, 8),
    (Location::AM, Location::PA, 13),
    (Location::AM, Location::MT, 14),
    (Location::AP, Location::PA, 3),
    (Location::BA, Location::SE, 3),
    (Location::BA, Location::PE, 7),
    (Location::BA, Location::PI, 9),
    (Location::BA, Location::TO, 11),
    (Location::BA, Location::GO, 14),
    (Location::BA, Location::MG, 12),
    (Location::BA, Location::ES, 9),
    (Location::CE, Location::PI, 6),
    (Location::CE, Location::RN, 5),
    (Location::CE, Location::PB, 6),
    (Location::CE, Location::PE, 7),
    (Location::DF, Location::GO, 2),
    (Location::DF, Location::MG, 7),
    (Location::ES, Location::MG, 5),
    (Location::ES, Location::RJ, 5),
    (Location::GO, Location::MG, 8),
    (Location::GO, Location::MS, 9),
    (Location::GO, Location::MT, 9),
    (Location::GO, Location::TO, 8),
    (Location::MA, Location::PA, 5),
    (Location::MA, Location::PI, 4),
    (Location::MA, Location::TO, 9),
    (Location::MG, Location::SP, 6),
    (Location::MG, Location::RJ, 4),
    (Location::MG, Location::MS, 11),
    (Location::MS, Location::MT, 7),
    (Location::MS, Location::SP, 9),
    (Location::MS, Location::PR, 10),
    (Location::MT, Location::RO, 12),
    (Location::MT, Location::PA, 16),
    (Location::MT, Location::TO, 9),
    (Location::PA, Location::RR, 15),
    (Location::PA, Location::TO, 10),
    (Location::PB, Location::RN, 2),
    (Location::PB, Location::PE, 1),
    (Location::PE, Location::PI, 11),
    (Location::PI, Location::TO, 9),
    (Location::PR, Location::SP, 4),
    (Location::PR, Location::SC, 3),
    (Location::RS, Location::SC, 4),
];

/// The static road map every scenario runs on.
pub fn brazil_graph() -> Result<Graph, GraphError> {
    let nodes: Vec<Node> = CAPITALS
        .iter()
        .map(|&(location, latitude, longitude)| {
            Node::new(location, GeoLocation::new(latitude, longitude))
        })
        .collect();

    let by_code: HashMap<Location, Node> =
        nodes.iter().map(|n| (n.location(), *n)).collect();

    let edges = ROADS
        .iter()
        .map(|&(a, b, weight)| {
            let a = by_code.get(&a).copied().ok_or(GraphError::NodeNotFound(a))?;
            let b = by_code.get(&b).copied().ok_or(GraphError::NodeNotFound(b))?;
            Ok(Edge::new(a, b, Some(weight)))
        })
        .collect::<Result<Vec<Edge>, GraphError>>()?;

    Graph::new(nodes, edges)
}

pub fn capital(graph: &Graph, location: Location) -> Result<Node, GraphError> {
    graph
        .node(location)
        .copied()
        .ok_or(GraphError::NodeNotFound(location))
}
