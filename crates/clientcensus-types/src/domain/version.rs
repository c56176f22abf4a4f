use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Version label as extracted from a client identifier.
///
/// Opaque for tallying purposes: `"5.5.3"`, `"0.0"` and `"beta"` are all
/// valid keys. Use [`ClientVersion`] when an ordering is needed.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionKey(String);

impl VersionKey {
    /// Placeholder version reported by clients that could not identify themselves
    pub const PLACEHOLDER: &'static str = "0.0";

    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == Self::PLACEHOLDER
    }

    /// Parse into a strict three-part version
    pub fn parse(&self) -> crate::Result<ClientVersion> {
        self.0.parse()
    }
}

impl fmt::Display for VersionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for VersionKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for VersionKey {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for VersionKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Strict `major.minor.patch` version.
///
/// Field order matters: the derived ordering compares major, then minor,
/// then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientVersion {
    pub major: i64,
    pub minor: i64,
    pub patch: i64,
}

impl ClientVersion {
    pub fn new(major: i64, minor: i64, patch: i64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Whether `self` is the same release as `other` or an earlier one
    pub fn is_older_or_equal(&self, other: &ClientVersion) -> bool {
        self <= other
    }
}

impl FromStr for ClientVersion {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(Error::VersionFormat(s.to_string()));
        };

        let component = |part: &str| -> Result<i64, Error> {
            part.parse::<i64>()
                .map_err(|_| Error::VersionFormat(s.to_string()))
        };

        Ok(Self {
            major: component(*major)?,
            minor: component(*minor)?,
            patch: component(*patch)?,
        })
    }
}

impl fmt::Display for ClientVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
