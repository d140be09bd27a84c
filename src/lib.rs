pub mod logging;
pub mod network;

pub use network::{
    Journey, Leg, NetworkStats, StationId, TransitNetwork,
    adapters::{ConnectionSpec, NetworkAdapter, json::JsonAdapter},
};
