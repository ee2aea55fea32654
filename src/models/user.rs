use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User row stored in the `users` table.
///
/// `id` is assigned by the store on creation and never changes afterwards.
/// It is always serialized, as `null` for a user that has not been persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default, sqlx::FromRow, ToSchema)]
pub struct User {
    /// Store-assigned identifier
    #[serde(default)]
    #[schema(example = 1)]
    pub id: Option<i64>,
    /// Login name; not enforced unique
    #[schema(example = "alice")]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "alice@example.com")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Alice")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(example = "Liddell")]
    pub last_name: Option<String>,
}

impl User {
    #[cfg(test)]
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..Self::default()
        }
    }

    /// Returns this user carrying `id`, replacing whatever identifier it had.
    pub fn with_id(self, id: i64) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }
}
