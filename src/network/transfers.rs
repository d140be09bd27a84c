use crate::network::{Leg, StationId, TransitNetwork};
use itertools::Itertools;

impl TransitNetwork {
    /// Number of line changes along `path`.
    ///
    /// Each hop rides the first connection listed between its two stations.
    /// Hops that are not direct connections are skipped.
    pub fn count_transfers<S: AsRef<str>>(&self, path: &[S]) -> usize {
        if path.len() < 2 {
            return 0;
        }

        let mut transfers = 0;
        let mut current_line: Option<&str> = None;

        for (from, to) in self.resolve(path).tuple_windows() {
            let (Some(from), Some(to)) = (from, to) else {
                continue;
            };
            let Some(connection) = self.first_connection(from, to) else {
                continue;
            };

            match current_line {
                Some(line) if line != connection.line => {
                    transfers += 1;
                    current_line = Some(&connection.line);
                }
                Some(_) => {}
                None => current_line = Some(&connection.line),
            }
        }

        transfers
    }

    /// Total travel time along `path` using the fastest connection for each hop,
    /// or `None` if some hop is not a direct connection.
    pub fn path_travel_time<S: AsRef<str>>(&self, path: &[S]) -> Option<u64> {
        self.resolve(path)
            .collect::<Option<Vec<_>>>()?
            .into_iter()
            .tuple_windows()
            .try_fold(0u64, |total, (from, to)| {
                let connection = self.fastest_connection(from, to)?;
                Some(total + u64::from(connection.travel_time))
            })
    }

    /// The rides making up `path`, one per directly connected hop.
    pub fn legs<S: AsRef<str>>(&self, path: &[S]) -> Vec<Leg<'_>> {
        self.resolve(path)
            .tuple_windows()
            .filter_map(move |(from, to)| {
                let (from, to) = (from?, to?);
                let connection = self.fastest_connection(from, to)?;
                Some(Leg {
                    from: self.name_of(from),
                    to: self.name_of(to),
                    line: &connection.line,
                    travel_time: connection.travel_time,
                })
            })
            .collect()
    }

    /// Distinct line labels, sorted.
    pub fn lines(&self) -> Vec<&str> {
        self.stations()
            .flat_map(move |s| self.get_connections(s.id))
            .map(|c| c.line.as_str())
            .sorted_unstable()
            .dedup()
            .collect()
    }

    fn resolve<'a, S: AsRef<str>>(
        &'a self,
        path: &'a [S],
    ) -> impl Iterator<Item = Option<StationId>> + 'a {
        path.iter().map(move |name| self.station_id(name.as_ref()))
    }
}
