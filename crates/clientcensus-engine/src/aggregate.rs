use clientcensus_types::VersionKey;
use std::collections::{BTreeMap, HashMap};

/// Number of sessions seen for one operating system
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OsCount {
    pub os: String,
    pub count: u64,
}

/// Collects `(version, os)` sightings during a scan.
///
/// Sightings are kept as unit entries until [`Aggregator::finish`] sums
/// them, so the final counts never depend on row order.
#[derive(Debug, Default)]
pub struct Aggregator {
    pending: HashMap<VersionKey, Vec<OsCount>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, version: VersionKey, os: impl Into<String>) {
        self.pending.entry(version).or_default().push(OsCount {
            os: os.into(),
            count: 1,
        });
    }

    /// Number of sightings recorded so far
    pub fn sightings(&self) -> usize {
        self.pending.values().map(Vec::len).sum()
    }

    /// Merge sightings into one entry per (version, os)
    pub fn finish(self) -> AggregateCounts {
        let versions = self
            .pending
            .into_iter()
            .map(|(version, sightings)| (version, consolidate(sightings)))
            .collect();

        AggregateCounts { versions }
    }
}

fn consolidate(sightings: Vec<OsCount>) -> Vec<OsCount> {
    let mut per_os: BTreeMap<String, u64> = BTreeMap::new();
    for sighting in sightings {
        *per_os.entry(sighting.os).or_insert(0) += sighting.count;
    }

    per_os
        .into_iter()
        .map(|(os, count)| OsCount { os, count })
        .collect()
}

/// Consolidated per-version, per-OS counts for one client class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateCounts {
    versions: BTreeMap<VersionKey, Vec<OsCount>>,
}

impl AggregateCounts {
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Number of distinct versions
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn get(&self, version: &VersionKey) -> Option<&[OsCount]> {
        self.versions.get(version).map(Vec::as_slice)
    }

    /// Count for a single (version, os) pair, zero if never seen
    pub fn count(&self, version: &str, os: &str) -> u64 {
        self.get(&VersionKey::from(version))
            .and_then(|entries| entries.iter().find(|entry| entry.os == os))
            .map(|entry| entry.count)
            .unwrap_or(0)
    }

    /// Sum over every OS for one version
    pub fn version_total(&self, version: &VersionKey) -> u64 {
        self.get(version)
            .map(|entries| entries.iter().map(|entry| entry.count).sum())
            .unwrap_or(0)
    }

    /// Sum over every version and OS
    pub fn total(&self) -> u64 {
        self.versions
            .values()
            .flat_map(|entries| entries.iter().map(|entry| entry.count))
            .sum()
    }

    /// Versions in sorted order with their per-OS entries
    pub fn iter(&self) -> impl Iterator<Item = (&VersionKey, &[OsCount])> {
        self.versions
            .iter()
            .map(|(version, entries)| (version, entries.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_version_and_os_are_summed() {
        let mut agg = Aggregator::new();
        agg.record("5.5.0".into(), "Windows");
        agg.record("5.5.0".into(), "Windows");
        agg.record("5.5.0".into(), "Mac OS");
        assert_eq!(agg.sightings(), 3);

        let counts = agg.finish();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.count("5.5.0", "Windows"), 2);
        assert_eq!(counts.count("5.5.0", "Mac OS"), 1);
        assert_eq!(counts.get(&"5.5.0".into()).unwrap().len(), 2);
    }

    #[test]
    fn test_totals() {
        let mut agg = Aggregator::new();
        agg.record("5.5.0".into(), "Windows");
        agg.record("5.6.0".into(), "Windows");
        agg.record("5.6.0".into(), "Linux");

        let counts = agg.finish();
        assert_eq!(counts.version_total(&"5.6.0".into()), 2);
        assert_eq!(counts.version_total(&"9.9.9".into()), 0);
        assert_eq!(counts.total(), 3);
    }

    #[test]
    fn test_empty_aggregator() {
        let counts = Aggregator::new().finish();
        assert!(counts.is_empty());
        assert_eq!(counts.total(), 0);
        assert_eq!(counts.count("5.5.0", "Windows"), 0);
    }

    #[test]
    fn test_iteration_is_sorted() {
        let mut agg = Aggregator::new();
        agg.record("5.6.0".into(), "Windows");
        agg.record("5.5.0".into(), "Windows");
        agg.record("5.5.0".into(), "Linux");

        let counts = agg.finish();
        let rows: Vec<(String, String)> = counts
            .iter()
            .flat_map(|(version, entries)| {
                entries
                    .iter()
                    .map(move |entry| (version.to_string(), entry.os.clone()))
            })
            .collect();

        assert_eq!(
            rows,
            vec![
                ("5.5.0".to_string(), "Linux".to_string()),
                ("5.5.0".to_string(), "Windows".to_string()),
                ("5.6.0".to_string(), "Windows".to_string()),
            ]
        );
    }
}
