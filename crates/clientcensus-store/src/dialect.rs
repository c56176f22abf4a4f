use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Supported database engines.
///
/// Chosen once from the config file; each variant owns its query text
/// since table names, column casing and placeholders differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum DbKind {
    Postgres,
    MySql,
}

// Mattermost keeps props as jsonb/JSON; both are read back as text.
// Expiry of 0 means the session never expires.

const POSTGRES_SESSIONS: &str = r#"
    SELECT props::text, COALESCE(deviceid, ''), expiresat
    FROM sessions
    WHERE props::text <> '{}' AND (expiresat > $1 OR expiresat = 0)
"#;

const POSTGRES_SESSIONS_WITH_OWNER: &str = r#"
    SELECT userid, props::text, COALESCE(deviceid, ''), expiresat
    FROM sessions
    WHERE props::text <> '{}' AND (expiresat > $1 OR expiresat = 0)
"#;

const POSTGRES_USER: &str = r#"
    SELECT username, email, COALESCE(firstname, ''), COALESCE(lastname, '')
    FROM users
    WHERE id = $1
"#;

const MYSQL_SESSIONS: &str = r#"
    SELECT CAST(Props AS CHAR), COALESCE(DeviceId, ''), ExpiresAt
    FROM Sessions
    WHERE JSON_LENGTH(Props) > 0 AND (ExpiresAt > ? OR ExpiresAt = 0)
"#;

const MYSQL_SESSIONS_WITH_OWNER: &str = r#"
    SELECT UserId, CAST(Props AS CHAR), COALESCE(DeviceId, ''), ExpiresAt
    FROM Sessions
    WHERE JSON_LENGTH(Props) > 0 AND (ExpiresAt > ? OR ExpiresAt = 0)
"#;

const MYSQL_USER: &str = r#"
    SELECT Username, Email, COALESCE(FirstName, ''), COALESCE(LastName, '')
    FROM Users
    WHERE Id = ?
"#;

impl DbKind {
    /// Name used in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            DbKind::Postgres => "postgresql",
            DbKind::MySql => "mysql",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            DbKind::Postgres => 5432,
            DbKind::MySql => 3306,
        }
    }

    /// Active sessions with a non-empty props blob; binds the cutoff in epoch ms.
    ///
    /// With `with_owner` the owning user id is selected as the first column.
    pub fn sessions_query(&self, with_owner: bool) -> &'static str {
        match (self, with_owner) {
            (DbKind::Postgres, false) => POSTGRES_SESSIONS,
            (DbKind::Postgres, true) => POSTGRES_SESSIONS_WITH_OWNER,
            (DbKind::MySql, false) => MYSQL_SESSIONS,
            (DbKind::MySql, true) => MYSQL_SESSIONS_WITH_OWNER,
        }
    }

    /// Account details for one user id; binds the id
    pub fn user_query(&self) -> &'static str {
        match self {
            DbKind::Postgres => POSTGRES_USER,
            DbKind::MySql => MYSQL_USER,
        }
    }
}

impl fmt::Display for DbKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DbKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "postgresql" => Ok(DbKind::Postgres),
            "mysql" => Ok(DbKind::MySql),
            other => Err(Error::Config(format!("Unsupported DB type: {}", other))),
        }
    }
}

impl TryFrom<String> for DbKind {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse().map_err(|e: Error| match e {
            Error::Config(msg) => msg,
            other => other.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_kinds() {
        assert_eq!("postgresql".parse::<DbKind>().unwrap(), DbKind::Postgres);
        assert_eq!("mysql".parse::<DbKind>().unwrap(), DbKind::MySql);
    }

    #[test]
    fn test_parse_rejects_everything_else() {
        for name in ["sqlite", "postgres", "MySQL", ""] {
            let err = name.parse::<DbKind>().unwrap_err();
            assert!(
                err.to_string().contains("Unsupported DB type"),
                "unexpected error for {:?}: {}",
                name,
                err
            );
        }
    }

    #[test]
    fn test_display_matches_config_name() {
        assert_eq!(DbKind::Postgres.to_string(), "postgresql");
        assert_eq!(DbKind::MySql.to_string(), "mysql");
    }

    #[test]
    fn test_placeholders_match_dialect() {
        for with_owner in [false, true] {
            assert!(DbKind::Postgres.sessions_query(with_owner).contains("$1"));
            assert!(!DbKind::MySql.sessions_query(with_owner).contains("$1"));
            assert!(DbKind::MySql.sessions_query(with_owner).contains('?'));
        }
        assert!(DbKind::Postgres.user_query().contains("id = $1"));
        assert!(DbKind::MySql.user_query().contains("Id = ?"));
    }

    #[test]
    fn test_owner_column_only_when_requested() {
        assert!(!DbKind::Postgres.sessions_query(false).contains("userid"));
        assert!(DbKind::Postgres.sessions_query(true).contains("SELECT userid,"));
        assert!(!DbKind::MySql.sessions_query(false).contains("UserId"));
        assert!(DbKind::MySql.sessions_query(true).contains("SELECT UserId,"));
    }

    #[test]
    fn test_active_session_filter() {
        for kind in [DbKind::Postgres, DbKind::MySql] {
            let sql = kind.sessions_query(false).to_lowercase();
            assert!(sql.contains("expiresat = 0"));
            assert!(sql.contains("expiresat >"));
        }
    }
}
