//! User domain entity and related types.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity.
///
/// The identifier is assigned by the store on first save and is
/// immutable afterwards. A value of `None` marks a record that has
/// not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,
    pub name: String,
    pub username: String,
    pub email: String,
    /// Stored verbatim as provided at registration.
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    /// Create an unpersisted user (identifier unset)
    pub fn new(name: String, username: String, email: String, password: String) -> Self {
        Self {
            id: None,
            name,
            username,
            email,
            password,
        }
    }

    /// Check whether the record has been persisted
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// User response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 1)]
    pub id: i64,
    /// User display name
    #[schema(example = "Maria Silva")]
    pub name: String,
    /// User handle
    #[schema(example = "maria.silva")]
    pub username: String,
    /// User email address
    #[schema(example = "maria@example.com")]
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            // Store-assigned identifier is always present on persisted records
            id: user.id.unwrap_or_default(),
            name: user.name,
            username: user.username,
            email: user.email,
        }
    }
}
