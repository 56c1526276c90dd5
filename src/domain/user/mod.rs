// User resource: the stored record and the write payload

use serde::{Deserialize, Deserializer, Serialize};

/// A stored user row
///
/// Serializes as `{"id": 1, "name": "...", "email": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// Request body for create and update
///
/// Only the JSON shape is checked. Absent or `null` fields decode as empty
/// strings, unknown fields (including `id`) are ignored, and column widths are
/// left to the database.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserPayload {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl UserPayload {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }

    /// Builds the stored record for a given id
    pub fn into_user(self, id: i32) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
        }
    }
}
