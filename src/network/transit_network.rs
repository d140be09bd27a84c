use crate::network::{StationId, adapters::NetworkAdapter};
use std::collections::HashMap;

#[derive(Clone, Debug)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

impl Station {
    pub fn new(id: StationId, name: String) -> Self {
        Self { id, name }
    }
}

/// One direction of an undirected link between two stations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
    pub to_station_id: StationId,
    pub travel_time: u32,
    pub line: String,
}

#[derive(Clone, Debug, Default)]
pub struct TransitNetwork {
    stations: Vec<Station>,
    station_ids: HashMap<String, StationId>,
    connections: Vec<Vec<Connection>>,
}

impl TransitNetwork {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn from_adapter<A: NetworkAdapter>(adapter: &A) -> Result<Self, A::Error> {
        let stations = adapter.stations()?;
        let connections = adapter.connections()?;

        let mut network = Self::new();
        for name in &stations {
            network.add_station(name);
        }
        for c in &connections {
            network.add_connection(&c.from, &c.to, c.time, &c.line);
        }

        tracing::debug!(
            stations = network.total_stations(),
            connections = network.total_connections(),
            "built transit network"
        );

        Ok(network)
    }

    /// Returns the id of `name`, registering it with no connections if unseen.
    pub fn add_station(&mut self, name: &str) -> StationId {
        if let Some(&id) = self.station_ids.get(name) {
            return id;
        }

        let id = StationId::new(self.stations.len());
        self.stations.push(Station::new(id, name.to_string()));
        self.station_ids.insert(name.to_string(), id);
        self.connections.push(Vec::new());
        id
    }

    pub fn add_connection(&mut self, from: &str, to: &str, time: u32, line: &str) {
        let from_id = self.add_station(from);
        let to_id = self.add_station(to);

        self.connections[from_id.index()].push(Connection {
            to_station_id: to_id,
            travel_time: time,
            line: line.to_string(),
        });
        self.connections[to_id.index()].push(Connection {
            to_station_id: from_id,
            travel_time: time,
            line: line.to_string(),
        });
    }

    pub fn contains_station(&self, name: &str) -> bool {
        self.station_ids.contains_key(name)
    }

    pub fn station_id(&self, name: &str) -> Option<StationId> {
        self.station_ids.get(name).copied()
    }

    /// `None` for ids that did not come from this network.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.index())
    }

    pub fn station_name(&self, id: StationId) -> Option<&str> {
        self.station(id).map(|s| s.name.as_str())
    }

    /// Name of an id handed out by this network.
    pub(crate) fn name_of(&self, id: StationId) -> &str {
        &self.stations[id.index()].name
    }

    /// Stations in the order they were first referenced.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    pub(crate) fn get_connections(&self, id: StationId) -> impl Iterator<Item = &Connection> {
        self.connections[id.index()].iter()
    }

    /// Outgoing connections of the named station, in insertion order.
    pub fn connections_from(&self, name: &str) -> impl Iterator<Item = &Connection> {
        self.station_id(name)
            .into_iter()
            .flat_map(move |id| self.connections[id.index()].iter())
    }

    pub(crate) fn degree(&self, id: StationId) -> usize {
        self.connections[id.index()].len()
    }

    /// First connection from `from` to `to` in list order.
    pub(crate) fn first_connection(&self, from: StationId, to: StationId) -> Option<&Connection> {
        self.get_connections(from).find(|c| c.to_station_id == to)
    }

    /// Fastest connection from `from` to `to`, earliest in list order on ties.
    pub(crate) fn fastest_connection(
        &self,
        from: StationId,
        to: StationId,
    ) -> Option<&Connection> {
        self.get_connections(from)
            .filter(|c| c.to_station_id == to)
            .min_by_key(|c| c.travel_time)
    }
}
