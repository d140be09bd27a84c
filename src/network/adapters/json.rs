use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::{fs::File, io::BufReader, path::Path, str::FromStr};

use crate::network::adapters::{ConnectionSpec, NetworkAdapter};

const SAMPLE_NETWORK: &str = include_str!("../../../data/sample_network.json");

#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
struct ConnectionRecord {
    from: String,
    to: String,
    // signed so that negative times reach validation instead of failing to parse
    time: i64,
    line: String,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(deny_unknown_fields)]
struct NetworkDocument {
    #[serde(default)]
    stations: Vec<String>,
    connections: Vec<ConnectionRecord>,
}

/// Reads a network from a JSON document of the form
/// `{"stations": [..], "connections": [{"from", "to", "time", "line"}]}`.
pub struct JsonAdapter {
    document: NetworkDocument,
}

impl FromStr for JsonAdapter {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let document = serde_json::from_str(s).context("invalid network description")?;
        Ok(Self { document })
    }
}

impl JsonAdapter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("opening {path:?}"))?;
        let document = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("invalid network description in {path:?}"))?;
        Ok(Self { document })
    }

    /// The network bundled with the binary for demonstrations.
    pub fn sample() -> Result<Self> {
        SAMPLE_NETWORK.parse()
    }
}

fn check_name(kind: &str, name: &str) -> Result<String> {
    if name.trim().is_empty() {
        bail!("{kind} name must not be empty");
    }
    Ok(name.to_string())
}

impl NetworkAdapter for JsonAdapter {
    type Error = anyhow::Error;

    fn stations(&self) -> Result<Vec<String>> {
        self.document
            .stations
            .iter()
            .map(|s| check_name("station", s))
            .collect()
    }

    fn connections(&self) -> Result<Vec<ConnectionSpec>> {
        self.document
            .connections
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let describe = || format!("connection #{i} ({} - {})", c.from, c.to);

                if c.time < 0 {
                    bail!("{}: travel time must not be negative, got {}", describe(), c.time);
                }
                let time = u32::try_from(c.time).with_context(|| {
                    format!("{}: travel time {} is too large", describe(), c.time)
                })?;

                Ok(ConnectionSpec {
                    from: check_name("station", &c.from).with_context(describe)?,
                    to: check_name("station", &c.to).with_context(describe)?,
                    time,
                    line: check_name("line", &c.line).with_context(describe)?,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::TransitNetwork;
    use std::io::Write;

    #[test]
    fn builds_network_from_document() {
        let adapter = JsonAdapter::from_str(
            r#"{
                "stations": ["Spare"],
                "connections": [
                    { "from": "A", "to": "B", "time": 2, "line": "Red" },
                    { "from": "B", "to": "C", "time": 3, "line": "Red" }
                ]
            }"#,
        )
        .unwrap();
        let network = TransitNetwork::from_adapter(&adapter).unwrap();

        assert_eq!(network.total_stations(), 4);
        assert_eq!(network.total_connections(), 2);
        assert_eq!(network.stations().next().unwrap().name, "Spare");
        assert_eq!(network.fastest_route("A", "C"), ["A", "B", "C"]);
    }

    #[test]
    fn stations_list_is_optional() {
        let adapter = JsonAdapter::from_str(
            r#"{"connections": [{"from": "A", "to": "B", "time": 1, "line": "X"}]}"#,
        )
        .unwrap();
        assert!(adapter.stations().unwrap().is_empty());
        assert_eq!(adapter.connections().unwrap().len(), 1);
    }

    #[test]
    fn rejects_negative_time() {
        let adapter = JsonAdapter::from_str(
            r#"{"connections": [{"from": "A", "to": "B", "time": -4, "line": "Red"}]}"#,
        )
        .unwrap();

        let err = adapter.connections().unwrap_err().to_string();
        assert!(err.contains("must not be negative"), "{err}");
        assert!(err.contains("A - B"), "{err}");
    }

    #[test]
    fn rejects_oversized_time() {
        let adapter = JsonAdapter::from_str(
            r#"{"connections": [{"from": "A", "to": "B", "time": 5000000000, "line": "Red"}]}"#,
        )
        .unwrap();
        assert!(adapter.connections().is_err());
    }

    #[test]
    fn rejects_blank_names() {
        let adapter = JsonAdapter::from_str(
            r#"{"connections": [{"from": "  ", "to": "B", "time": 1, "line": "Red"}]}"#,
        )
        .unwrap();
        assert!(adapter.connections().is_err());

        let adapter = JsonAdapter::from_str(
            r#"{"connections": [{"from": "A", "to": "B", "time": 1, "line": ""}]}"#,
        )
        .unwrap();
        assert!(adapter.connections().is_err());

        let adapter = JsonAdapter::from_str(r#"{"stations": [""], "connections": []}"#).unwrap();
        assert!(TransitNetwork::from_adapter(&adapter).is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(JsonAdapter::from_str("{").is_err());
        assert!(JsonAdapter::from_str(r#"{"stations": []}"#).is_err());
        assert!(JsonAdapter::from_str(r#"{"connections": [], "extra": 1}"#).is_err());
    }

    #[test]
    fn rejects_unknown_connection_fields() {
        let typo = JsonAdapter::from_str(
            r#"{"connections": [{"from": "A", "to": "B", "time": 1, "line": "Red", "tme": 2}]}"#,
        );
        assert!(typo.is_err());

        let missing = JsonAdapter::from_str(
            r#"{"connections": [{"from": "A", "to": "B", "tme": 1, "line": "Red"}]}"#,
        );
        assert!(missing.is_err());
    }

    #[test]
    fn reads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"connections": [{{"from": "A", "to": "B", "time": 7, "line": "Red"}}]}}"#
        )
        .unwrap();

        let adapter = JsonAdapter::from_path(file.path()).unwrap();
        let network = TransitNetwork::from_adapter(&adapter).unwrap();
        assert_eq!(network.fastest_journey("A", "B").unwrap().total_time, 7);
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = JsonAdapter::from_path("/definitely/not/here.json").err().unwrap();
        assert!(err.to_string().contains("opening"));
    }

    #[test]
    fn sample_network_loads() {
        let adapter = JsonAdapter::sample().unwrap();
        let network = TransitNetwork::from_adapter(&adapter).unwrap();

        assert_eq!(network.total_stations(), 11);
        assert_eq!(network.total_connections(), 11);
        assert_eq!(network.most_connected_station(), Some("Civic Center"));
    }
}
