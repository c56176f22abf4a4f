use serde::{Deserialize, Deserializer};

/// Raw session row as returned by the session store.
///
/// The store has already filtered to active sessions (expiry of zero or in
/// the future) with a non-empty `props` object. `user_id` is only populated
/// by the lookup query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRow {
    /// JSON-encoded property blob
    pub props: String,
    pub device_id: String,
    /// Expiry in epoch milliseconds; `0` never expires
    pub expires_at: i64,
    pub user_id: Option<String>,
}

impl SessionRow {
    pub fn new(props: impl Into<String>, device_id: impl Into<String>, expires_at: i64) -> Self {
        Self {
            props: props.into(),
            device_id: device_id.into(),
            expires_at,
            user_id: None,
        }
    }

    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

/// Client metadata decoded from a session's property blob
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SessionProperties {
    /// Free-text client identifier, e.g. `Mattermost Desktop App/5.5.0`
    #[serde(default, deserialize_with = "nullable_string")]
    pub browser: String,

    #[serde(default, deserialize_with = "nullable_string")]
    pub os: String,

    /// Stored as the string `"true"`/`"false"`; anything else reads as false
    #[serde(default, rename = "isMobile", deserialize_with = "mobile_flag")]
    pub is_mobile: bool,

    /// Taken from the session row, never from the blob
    #[serde(skip)]
    pub device_id: String,
}

fn nullable_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn mobile_flag<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Text(String),
    }

    Ok(match Option::<Flag>::deserialize(deserializer)? {
        Some(Flag::Bool(flag)) => flag,
        Some(Flag::Text(text)) => text == "true",
        None => false,
    })
}
