use clientcensus_types::{ClientClass, SessionRow};
use tracing::{debug, warn};

use crate::aggregate::{AggregateCounts, Aggregator};
use crate::classify::classify;
use crate::decode::decode_properties;
use crate::extract::{desktop_version, mobile_version};

/// Result of a tally run over every active session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Census {
    pub desktop: AggregateCounts,
    pub mobile: AggregateCounts,
    /// Rows whose property blob could not be decoded
    pub skipped: usize,
}

impl Census {
    pub fn is_empty(&self) -> bool {
        self.desktop.is_empty() && self.mobile.is_empty()
    }

    pub fn total(&self) -> u64 {
        self.desktop.total() + self.mobile.total()
    }
}

pub(crate) fn tally<I>(rows: I) -> Census
where
    I: IntoIterator<Item = SessionRow>,
{
    let mut desktop = Aggregator::new();
    let mut mobile = Aggregator::new();
    let mut skipped = 0;

    for row in rows {
        let props = match decode_properties(&row) {
            Ok(props) => props,
            Err(e) => {
                warn!("{}", e);
                skipped += 1;
                continue;
            }
        };

        match classify(&props) {
            ClientClass::Mobile => {
                let Some(version) = mobile_version(&props.browser) else {
                    continue;
                };
                // Still counted, unlike the desktop placeholder
                if version.is_placeholder() {
                    warn!(
                        "Unrecognised entry - Device ID: {}, JSON Session: {}",
                        props.device_id, row.props
                    );
                }
                mobile.record(version, props.os);
            }
            ClientClass::Desktop => {
                let Some(version) = desktop_version(&props.browser) else {
                    continue;
                };
                if version.is_placeholder() {
                    debug!("Troubleshooting: {}", row.props);
                    continue;
                }
                desktop.record(version, props.os);
            }
            ClientClass::Unclassified => {}
        }
    }

    debug!(
        desktop = desktop.sightings(),
        mobile = mobile.sightings(),
        skipped,
        "scan complete"
    );

    Census {
        desktop: desktop.finish(),
        mobile: mobile.finish(),
        skipped,
    }
}
