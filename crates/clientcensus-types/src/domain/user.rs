use crate::VersionKey;

/// Account details joined onto a matching session in lookup mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecord {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

/// One output row of a lookup: a matching session joined with its owner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupRecord {
    pub version: VersionKey,
    pub os: String,
    pub user: UserRecord,
}

impl LookupRecord {
    /// Field order of the export table
    pub const HEADER: [&'static str; 6] =
        ["Version", "OS", "Username", "Email", "First Name", "Last Name"];

    pub fn fields(&self) -> [&str; 6] {
        [
            self.version.as_str(),
            &self.os,
            &self.user.username,
            &self.user.email,
            &self.user.first_name,
            &self.user.last_name,
        ]
    }
}

/// Resolves session owners to account details.
///
/// Implemented by the SQL store; tests use an in-memory map.
pub trait UserDirectory {
    type Error: std::error::Error + Send + Sync + 'static;

    /// All account rows for `user_id` (normally zero or one)
    fn find_users(&mut self, user_id: &str) -> std::result::Result<Vec<UserRecord>, Self::Error>;
}
