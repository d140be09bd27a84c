use chrono::TimeDelta;
use serde::Serialize;

pub use crate::network::{stats::NetworkStats, transit_network::TransitNetwork};
pub mod adapters;
mod bfs;
mod dijkstra;
mod search_state;
mod stats;
pub mod transit_network;
mod transfers;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct StationId(usize);

impl StationId {
    pub(crate) fn new(idx: usize) -> Self {
        Self(idx)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// A route between two stations together with its total travel time in minutes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Journey {
    pub stations: Vec<String>,
    pub total_time: u64,
}

/// A single ride between two adjacent stations of a [`Journey`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub line: &'a str,
    pub travel_time: u32,
}

impl Journey {
    pub fn duration(&self) -> TimeDelta {
        i64::try_from(self.total_time)
            .ok()
            .and_then(TimeDelta::try_minutes)
            .unwrap_or(TimeDelta::MAX)
    }
}
