use clientcensus_types::VersionKey;

const SEGMENT_SEPARATOR: char = '/';
const BUILD_SEPARATOR: char = '+';

/// Version of a desktop client: `<name>/<version>` with exactly one `/`
pub fn desktop_version(browser: &str) -> Option<VersionKey> {
    let parts: Vec<&str> = browser.split(SEGMENT_SEPARATOR).collect();
    match parts.as_slice() {
        [_, version] => Some(VersionKey::from(*version)),
        _ => None,
    }
}

/// Version of a mobile client: whatever follows the last `/`, minus any
/// `+build` suffix
pub fn mobile_version(browser: &str) -> Option<VersionKey> {
    let (_, raw) = browser.rsplit_once(SEGMENT_SEPARATOR)?;
    let version = raw.split(BUILD_SEPARATOR).next().unwrap_or(raw);
    Some(VersionKey::from(version))
}
