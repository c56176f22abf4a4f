use std::fmt;

/// Result type for clientcensus-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// Session property blob is not valid JSON (recoverable per row)
    Decode(serde_json::Error),

    /// Version string could not be parsed
    Version(clientcensus_types::Error),

    /// User directory lookup failed
    Users(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(err) => write!(f, "Error unmarshalling JSON: {}", err),
            Error::Version(err) => write!(f, "Version error: {}", err),
            Error::Users(err) => write!(f, "User lookup failed: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode(err) => Some(err),
            Error::Version(err) => Some(err),
            Error::Users(err) => Some(err.as_ref()),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(err)
    }
}

impl From<clientcensus_types::Error> for Error {
    fn from(err: clientcensus_types::Error) -> Self {
        Error::Version(err)
    }
}
