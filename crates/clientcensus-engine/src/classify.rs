use clientcensus_types::{ClientClass, SessionProperties};

/// Marker carried in the browser field by desktop clients
pub const DESKTOP_MARKER: &str = "Desktop App";

const MOBILE_OPERATING_SYSTEMS: [&str; 2] = ["Android", "iOS"];

/// Decide which kind of client a session came from.
///
/// Mobile signals are checked first: mobile clients can carry browser
/// strings that look like the desktop marker.
pub fn classify(props: &SessionProperties) -> ClientClass {
    if is_mobile(props) {
        ClientClass::Mobile
    } else if is_desktop(props) {
        ClientClass::Desktop
    } else {
        ClientClass::Unclassified
    }
}

fn is_mobile(props: &SessionProperties) -> bool {
    props.is_mobile
        || !props.device_id.is_empty()
        || MOBILE_OPERATING_SYSTEMS.contains(&props.os.as_str())
}

fn is_desktop(props: &SessionProperties) -> bool {
    props.browser.contains(DESKTOP_MARKER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(browser: &str, os: &str, is_mobile: bool, device_id: &str) -> SessionProperties {
        SessionProperties {
            browser: browser.to_string(),
            os: os.to_string(),
            is_mobile,
            device_id: device_id.to_string(),
        }
    }

    #[test]
    fn test_desktop_marker() {
        let p = props("Mattermost Desktop App/5.5.0", "Windows", false, "");
        assert_eq!(classify(&p), ClientClass::Desktop);
    }

    #[test]
    fn test_each_mobile_signal_alone() {
        assert_eq!(classify(&props("x/1", "Mac OS", true, "")), ClientClass::Mobile);
        assert_eq!(classify(&props("x/1", "Linux", false, "dev")), ClientClass::Mobile);
        assert_eq!(classify(&props("x/1", "Android", false, "")), ClientClass::Mobile);
        assert_eq!(classify(&props("x/1", "iOS", false, "")), ClientClass::Mobile);
    }

    #[test]
    fn test_mobile_wins_over_desktop_marker() {
        let p = props("Mattermost Desktop App/5.5.0", "Windows", false, "device-1");
        assert_eq!(classify(&p), ClientClass::Mobile);

        let p = props("Mattermost Desktop App/5.5.0", "Android", false, "");
        assert_eq!(classify(&p), ClientClass::Mobile);
    }

    #[test]
    fn test_plain_browser_is_unclassified() {
        let p = props("Chrome/120.0.0", "Linux", false, "");
        assert_eq!(classify(&p), ClientClass::Unclassified);
        assert_eq!(classify(&SessionProperties::default()), ClientClass::Unclassified);
    }

    #[test]
    fn test_os_match_is_case_sensitive() {
        let p = props("Chrome/120.0.0", "android", false, "");
        assert_eq!(classify(&p), ClientClass::Unclassified);
    }
}
