use crate::network::{StationId, TransitNetwork};
use std::collections::{HashMap, HashSet};

#[derive(Debug, Default)]
pub struct SearchState {
    pub parents: HashMap<StationId, StationId>,
    pub visited: HashSet<StationId>,
}

impl SearchState {
    pub fn new() -> Self {
        Default::default()
    }

    /// Marks `station_id` visited, returning false if it already was.
    pub fn visit(&mut self, station_id: StationId) -> bool {
        self.visited.insert(station_id)
    }

    pub fn is_visited(&self, station_id: StationId) -> bool {
        self.visited.contains(&station_id)
    }

    pub fn set_parent(&mut self, station_id: StationId, parent: StationId) {
        self.parents.insert(station_id, parent);
    }

    /// Walks parent pointers back from `destination` and returns the route
    /// start-first. Empty unless the walk ends at `start`.
    pub fn reconstruct_path(
        &self,
        network: &TransitNetwork,
        start: StationId,
        destination: StationId,
    ) -> Vec<String> {
        let mut ids = vec![destination];
        let mut current = destination;

        while current != start {
            match self.parents.get(&current) {
                Some(&parent) => {
                    ids.push(parent);
                    current = parent;
                }
                None => return Vec::new(),
            }
        }

        ids.iter()
            .rev()
            .map(|&id| network.name_of(id).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_network() -> TransitNetwork {
        let mut network = TransitNetwork::new();
        network.add_connection("A", "B", 1, "Red");
        network.add_connection("B", "C", 1, "Red");
        network
    }

    #[test]
    fn reconstructs_start_first() {
        let network = line_network();
        let a = network.station_id("A").unwrap();
        let b = network.station_id("B").unwrap();
        let c = network.station_id("C").unwrap();

        let mut state = SearchState::new();
        state.set_parent(b, a);
        state.set_parent(c, b);

        assert_eq!(state.reconstruct_path(&network, a, c), ["A", "B", "C"]);
    }

    #[test]
    fn start_equal_to_destination_is_single_station() {
        let network = line_network();
        let a = network.station_id("A").unwrap();

        let state = SearchState::new();
        assert_eq!(state.reconstruct_path(&network, a, a), ["A"]);
    }

    #[test]
    fn broken_parent_chain_yields_empty_path() {
        let network = line_network();
        let a = network.station_id("A").unwrap();
        let c = network.station_id("C").unwrap();

        let state = SearchState::new();
        assert!(state.reconstruct_path(&network, a, c).is_empty());
    }

    #[test]
    fn visit_reports_first_visit_only() {
        let mut state = SearchState::new();
        let id = StationId::new(0);

        assert!(state.visit(id));
        assert!(!state.visit(id));
        assert!(state.is_visited(id));
    }
}
