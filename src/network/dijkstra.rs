use crate::network::{Journey, StationId, TransitNetwork, search_state::SearchState};
use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap},
};

impl TransitNetwork {
    /// Route from `start` to `destination` with the lowest total travel time,
    /// or an empty route if there is none. The total is logged.
    pub fn fastest_route(&self, start: &str, destination: &str) -> Vec<String> {
        match self.fastest_journey(start, destination) {
            Some(journey) => {
                tracing::info!(
                    start,
                    destination,
                    total_time = journey.total_time,
                    "fastest time"
                );
                journey.stations
            }
            None => {
                tracing::info!(start, destination, "fastest time: unreachable");
                Vec::new()
            }
        }
    }

    #[tracing::instrument(skip(self))]
    pub fn fastest_journey(&self, start: &str, destination: &str) -> Option<Journey> {
        let start_id = self.station_id(start)?;
        let destination_id = self.station_id(destination)?;

        let (distances, state) = self.shortest_paths(start_id);
        let Some(&total_time) = distances.get(&destination_id) else {
            tracing::debug!(settled = state.visited.len(), "destination unreachable");
            return None;
        };

        let stations = state.reconstruct_path(self, start_id, destination_id);
        tracing::debug!(stops = stations.len(), total_time, "fastest journey");
        Some(Journey {
            stations,
            total_time,
        })
    }

    /// Single-source Dijkstra over the whole component containing `start`.
    ///
    /// Stations are pushed again on every improvement rather than having their
    /// key decreased; `state.visited` holds the settled set so that stale heap
    /// entries are dropped on pop. Absent entries in the distance map are
    /// unreachable.
    fn shortest_paths(&self, start: StationId) -> (HashMap<StationId, u64>, SearchState) {
        let mut distances: HashMap<StationId, u64> = HashMap::new();
        let mut state = SearchState::new();
        let mut heap = BinaryHeap::new();

        distances.insert(start, 0);
        heap.push(Reverse((0u64, start)));

        while let Some(Reverse((distance, current))) = heap.pop() {
            if !state.visit(current) {
                continue;
            }

            for c in self.get_connections(current) {
                let candidate = distance.saturating_add(u64::from(c.travel_time));
                let improves = distances
                    .get(&c.to_station_id)
                    .map(|&known| candidate < known)
                    .unwrap_or(true);

                if improves {
                    distances.insert(c.to_station_id, candidate);
                    state.set_parent(c.to_station_id, current);
                    heap.push(Reverse((candidate, c.to_station_id)));
                }
            }
        }

        (distances, state)
    }
}
