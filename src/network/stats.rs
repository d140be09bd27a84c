use crate::network::TransitNetwork;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStats {
    pub total_stations: usize,
    pub total_connections: usize,
    pub most_connected_station: Option<String>,
    pub lines: usize,
}

impl TransitNetwork {
    pub fn total_stations(&self) -> usize {
        self.stations().count()
    }

    /// Number of undirected connections; each is stored once per direction.
    pub fn total_connections(&self) -> usize {
        let directed: usize = self.stations().map(|s| self.degree(s.id)).sum();
        directed / 2
    }

    /// Station with the most connections, earliest-added on ties. Stations
    /// without any connection never qualify.
    pub fn most_connected_station(&self) -> Option<&str> {
        let mut best = None;
        let mut max = 0;

        for station in self.stations() {
            let degree = self.degree(station.id);
            if degree > max {
                max = degree;
                best = Some(station.name.as_str());
            }
        }

        best
    }

    pub fn stats(&self) -> NetworkStats {
        NetworkStats {
            total_stations: self.total_stations(),
            total_connections: self.total_connections(),
            most_connected_station: self.most_connected_station().map(str::to_string),
            lines: self.lines().len(),
        }
    }
}
