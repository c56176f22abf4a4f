//! Sample session rows.
//!
//! Browser strings follow what real clients send:
//! - Desktop: `Mattermost Desktop App/<version>`
//! - Mobile: `<app>/<version>+<build>`

use clientcensus_types::SessionRow;
use serde_json::json;

pub const DESKTOP_BROWSER: &str = "Mattermost Desktop App";
pub const MOBILE_BROWSER: &str = "Mattermost Mobile";

/// Expiry used for rows that never expire
pub const NEVER_EXPIRES: i64 = 0;

/// Desktop session for `version` on `os`
pub fn desktop_row(version: &str, os: &str) -> SessionRow {
    let props = json!({
        "browser": format!("{}/{}", DESKTOP_BROWSER, version),
        "os": os,
        "isMobile": "false",
    });
    SessionRow::new(props.to_string(), "", NEVER_EXPIRES)
}

/// Mobile session flagged through `isMobile`, with a `+build` suffix
pub fn mobile_row(version: &str, build: &str, os: &str) -> SessionRow {
    let props = json!({
        "browser": format!("{}/{}+{}", MOBILE_BROWSER, version, build),
        "os": os,
        "isMobile": "true",
    });
    SessionRow::new(props.to_string(), "", NEVER_EXPIRES)
}

/// Mobile session identified only by its device id
pub fn device_row(version: &str, os: &str, device_id: &str) -> SessionRow {
    let props = json!({
        "browser": format!("{}/{}", MOBILE_BROWSER, version),
        "os": os,
    });
    SessionRow::new(props.to_string(), device_id, NEVER_EXPIRES)
}

/// Plain web browser session, counted by neither class
pub fn web_row(os: &str) -> SessionRow {
    let props = json!({
        "browser": "Chrome/120.0.6099.109",
        "os": os,
        "isMobile": "false",
    });
    SessionRow::new(props.to_string(), "", NEVER_EXPIRES)
}

/// Row whose property blob is not valid JSON
pub fn malformed_row() -> SessionRow {
    SessionRow::new(r#"{"browser": "Mattermost Desktop App/5.5.0""#, "", NEVER_EXPIRES)
}

/// Row with an arbitrary JSON blob
pub fn raw_row(props: serde_json::Value, device_id: &str) -> SessionRow {
    SessionRow::new(props.to_string(), device_id, NEVER_EXPIRES)
}
