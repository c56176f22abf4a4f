use clientcensus_types::{SessionProperties, SessionRow};

use crate::Result;

/// Decode a row's property blob.
///
/// The blob's own `deviceid` is unreliable, so the row column wins.
pub fn decode_properties(row: &SessionRow) -> Result<SessionProperties> {
    let mut props: SessionProperties = serde_json::from_str(&row.props)?;
    props.device_id = row.device_id.clone();
    Ok(props)
}
