pub mod json;

/// An undirected connection as described by a network source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectionSpec {
    pub from: String,
    pub to: String,
    pub time: u32,
    pub line: String,
}

pub trait NetworkAdapter {
    type Error;

    /// Stations that must exist even if nothing connects to them, in order.
    fn stations(&self) -> Result<Vec<String>, Self::Error>;

    /// Connections in the order they should be added to the network.
    fn connections(&self) -> Result<Vec<ConnectionSpec>, Self::Error>;
}
