use clientcensus_types::{ClientClass, ClientVersion, LookupRecord, SessionRow, UserDirectory};
use tracing::{debug, warn};

use crate::classify::classify;
use crate::decode::decode_properties;
use crate::extract::desktop_version;
use crate::{Error, Result};

/// Compare two `major.minor.patch` strings.
///
/// Fails with a format error if either side is not three integers.
pub fn is_older_or_equal(version: &str, lookup_version: &str) -> clientcensus_types::Result<bool> {
    let version: ClientVersion = version.parse()?;
    let lookup_version: ClientVersion = lookup_version.parse()?;
    Ok(version.is_older_or_equal(&lookup_version))
}

/// Desktop sessions at or below the threshold, joined with their owners
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupOutcome {
    pub records: Vec<LookupRecord>,
    /// Sessions that passed the version filter
    pub matched_sessions: usize,
    /// Rows whose property blob could not be decoded
    pub skipped: usize,
}

pub(crate) fn find_outdated<I, D>(
    rows: I,
    threshold: &ClientVersion,
    users: &mut D,
) -> Result<LookupOutcome>
where
    I: IntoIterator<Item = SessionRow>,
    D: UserDirectory,
{
    let mut outcome = LookupOutcome::default();

    for row in rows {
        let props = match decode_properties(&row) {
            Ok(props) => props,
            Err(e) => {
                warn!("{}", e);
                outcome.skipped += 1;
                continue;
            }
        };

        match classify(&props) {
            ClientClass::Mobile => {
                debug!("Mobile device. Skipping for lookup.");
                continue;
            }
            ClientClass::Unclassified => continue,
            ClientClass::Desktop => {}
        }

        let Some(version) = desktop_version(&props.browser) else {
            continue;
        };
        if version.is_placeholder() {
            debug!("Troubleshooting: {}", row.props);
            continue;
        }

        let include = match version.parse() {
            Ok(parsed) => parsed.is_older_or_equal(threshold),
            Err(e) => {
                // fail open: an unparseable version is still reported
                warn!("Unable to parse version string: {}", Error::from(e));
                true
            }
        };
        if !include {
            continue;
        }

        let Some(user_id) = row.user_id.as_deref() else {
            warn!(
                "Session for desktop version {} has no owning user; skipping",
                version
            );
            continue;
        };

        outcome.matched_sessions += 1;
        let owners = users
            .find_users(user_id)
            .map_err(|e| Error::Users(Box::new(e)))?;

        for user in owners {
            outcome.records.push(LookupRecord {
                version: version.clone(),
                os: props.os.clone(),
                user,
            });
        }
    }

    debug!(
        matched = outcome.matched_sessions,
        records = outcome.records.len(),
        skipped = outcome.skipped,
        "lookup complete"
    );

    Ok(outcome)
}
