use crate::network::{StationId, TransitNetwork, search_state::SearchState};
use std::collections::VecDeque;

impl TransitNetwork {
    /// Whether `destination` can be reached from `start` by any sequence of connections.
    #[tracing::instrument(skip(self))]
    pub fn can_travel(&self, start: &str, destination: &str) -> bool {
        let (Some(start_id), Some(destination_id)) =
            (self.station_id(start), self.station_id(destination))
        else {
            tracing::debug!("unknown station");
            return false;
        };

        let state = self.breadth_first(start_id, destination_id, false);
        let reachable = state.is_visited(destination_id);
        tracing::debug!(reachable, explored = state.visited.len(), "connectivity check");
        reachable
    }

    /// Route from `start` to `destination` through the fewest stations, or an
    /// empty route if there is none. Ties go to the earliest-added connections.
    #[tracing::instrument(skip(self))]
    pub fn fewest_stops(&self, start: &str, destination: &str) -> Vec<String> {
        let (Some(start_id), Some(destination_id)) =
            (self.station_id(start), self.station_id(destination))
        else {
            tracing::debug!("unknown station");
            return Vec::new();
        };

        let state = self.breadth_first(start_id, destination_id, true);
        if !state.is_visited(destination_id) {
            tracing::debug!("destination unreachable");
            return Vec::new();
        }

        let path = state.reconstruct_path(self, start_id, destination_id);
        tracing::debug!(stops = path.len(), "fewest stops route");
        path
    }

    /// Expands outward from `start` until `destination` is dequeued or the
    /// frontier is exhausted.
    fn breadth_first(
        &self,
        start: StationId,
        destination: StationId,
        record_parents: bool,
    ) -> SearchState {
        let mut state = SearchState::new();
        let mut queue = VecDeque::new();

        state.visit(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            if current == destination {
                break;
            }

            for c in self.get_connections(current) {
                if state.visit(c.to_station_id) {
                    if record_parents {
                        state.set_parent(c.to_station_id, current);
                    }
                    queue.push_back(c.to_station_id);
                }
            }
        }

        state
    }
}
