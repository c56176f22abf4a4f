mod class;
mod session;
mod user;
mod version;

pub use class::ClientClass;
pub use session::{SessionProperties, SessionRow};
pub use user::{LookupRecord, UserDirectory, UserRecord};
pub use version::{ClientVersion, VersionKey};
