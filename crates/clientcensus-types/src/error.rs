use std::fmt;

/// Result type for clientcensus-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Version string is not exactly `major.minor.patch` with integer parts
    VersionFormat(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::VersionFormat(version) => {
                write!(f, "invalid version format: '{}'", version)
            }
        }
    }
}

impl std::error::Error for Error {}
