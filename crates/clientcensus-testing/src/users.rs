use clientcensus_types::{UserDirectory, UserRecord};
use std::collections::HashMap;
use std::fmt;

/// In-memory user directory keyed by user id.
///
/// Records every id it was asked for, so tests can assert which sessions
/// reached the join.
#[derive(Debug, Default)]
pub struct InMemoryUsers {
    users: HashMap<String, Vec<UserRecord>>,
    fail_on: Option<String>,
    pub requested: Vec<String>,
}

impl InMemoryUsers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user_id: &str, username: &str) -> Self {
        self.users
            .entry(user_id.to_string())
            .or_default()
            .push(UserRecord {
                username: username.to_string(),
                email: format!("{}@example.com", username),
                first_name: format!("{}-first", username),
                last_name: format!("{}-last", username),
            });
        self
    }

    /// Make lookups for `user_id` fail
    pub fn failing_on(mut self, user_id: &str) -> Self {
        self.fail_on = Some(user_id.to_string());
        self
    }
}

#[derive(Debug)]
pub struct LookupFailed(pub String);

impl fmt::Display for LookupFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lookup failed for user {}", self.0)
    }
}

impl std::error::Error for LookupFailed {}

impl UserDirectory for InMemoryUsers {
    type Error = LookupFailed;

    fn find_users(&mut self, user_id: &str) -> Result<Vec<UserRecord>, Self::Error> {
        self.requested.push(user_id.to_string());

        if self.fail_on.as_deref() == Some(user_id) {
            return Err(LookupFailed(user_id.to_string()));
        }

        Ok(self.users.get(user_id).cloned().unwrap_or_default())
    }
}
