// Read-only access to the Mattermost session store
// Only active sessions are read; nothing is ever written back

mod config;
mod db;
mod dialect;
mod error;

// Public API
pub use config::{Config, DbConfig};
pub use db::{Database, now_millis};
pub use dialect::DbKind;
pub use error::{Error, Result};
