use std::collections::HashMap;
use std::sync::Arc;

use crate::network::{AirportId, AirportNetwork};

/// Edge within the routing graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: AirportId,
    pub distance_km: f64,
}

/// Graph structure used by pathfinding.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Arc<HashMap<AirportId, Vec<Edge>>>,
}

impl Graph {
    /// Return the neighbours for a given airport identifier.
    pub fn neighbours(&self, airport: AirportId) -> &[Edge] {
        self.adjacency
            .get(&airport)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Build the routing graph from a network's adjacency table.
///
/// Each directed entry keeps the distance configured for that direction.
pub fn build_graph(network: &AirportNetwork) -> Graph {
    let mut adjacency: HashMap<AirportId, Vec<Edge>> = HashMap::new();
    for &id in network.airports.keys() {
        let edges = network
            .legs_from(id)
            .iter()
            .map(|&(target, distance_km)| Edge {
                target,
                distance_km,
            })
            .collect();
        adjacency.insert(id, edges);
    }

    Graph {
        adjacency: Arc::new(adjacency),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::NetworkSpec;

    #[test]
    fn unknown_airport_has_no_neighbours() {
        let graph = Graph::default();
        assert!(graph.neighbours(42).is_empty());
    }

    #[test]
    fn sample_graph_mirrors_network_adjacency() {
        let network = AirportNetwork::from_spec(&NetworkSpec::sample()).expect("sample builds");
        let graph = build_graph(&network);

        let del = network.airport_id_by_code("DEL").unwrap();
        let bom = network.airport_id_by_code("BOM").unwrap();
        let edge = graph
            .neighbours(del)
            .iter()
            .find(|edge| edge.target == bom)
            .expect("DEL-BOM leg exists");
        assert_eq!(edge.distance_km, 1400.0);
    }
}
