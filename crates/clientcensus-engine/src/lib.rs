// Engine module - classification and tally logic
// Sits between raw store rows (types) and CLI presentation

pub mod aggregate;
pub mod census;
pub mod classify;
pub mod decode;
pub mod error;
pub mod extract;
pub mod lookup;

pub use aggregate::{AggregateCounts, Aggregator, OsCount};
pub use census::Census;
pub use classify::classify;
pub use decode::decode_properties;
pub use error::{Error, Result};
pub use extract::{desktop_version, mobile_version};
pub use lookup::{LookupOutcome, is_older_or_equal};

use clientcensus_types::{ClientVersion, SessionRow, UserDirectory};

// Façade API - stable public interface for the CLI layer

/// Count active desktop and mobile clients by version and OS
pub fn tally<I>(rows: I) -> Census
where
    I: IntoIterator<Item = SessionRow>,
{
    census::tally(rows)
}

/// Collect owners of desktop sessions at or below `threshold`
pub fn lookup<I, D>(rows: I, threshold: &ClientVersion, users: &mut D) -> Result<LookupOutcome>
where
    I: IntoIterator<Item = SessionRow>,
    D: UserDirectory,
{
    lookup::find_outdated(rows, threshold, users)
}
