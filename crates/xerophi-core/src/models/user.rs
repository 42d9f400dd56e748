//! User domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Record identifier assigned on creation.
    pub id: Uuid,
    /// Sequential identifier: the size of the user table at insert time.
    pub user_id: u64,
    pub token: String,
    /// Argon2id PHC string; never the plaintext password.
    pub hash: String,
    pub user_name: String,
    pub service: String,
    pub created_at: DateTime<Utc>,
    /// `None` while the record is active.
    pub deleted_at: Option<DateTime<Utc>>,
}

impl User {
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Overlay the fields present in `changes` onto this record.
    ///
    /// The token is always rewritten; `id`, `user_id` and the
    /// timestamps are never touched.
    pub fn apply_update(&mut self, changes: UpdateUser) {
        self.token = changes.token;
        if let Some(user_name) = changes.user_name {
            self.user_name = user_name;
        }
        if let Some(hash) = changes.hash {
            self.hash = hash;
        }
        if let Some(service) = changes.service {
            self.service = service;
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Sequential identifier to assign (the pre-insert record count).
    pub user_id: u64,
    pub user_name: String,
    pub token: String,
    /// Raw password (will be hashed with Argon2id before storage).
    pub password: String,
    pub service: String,
}

/// Partial update keyed by token. `None` = no change.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UpdateUser {
    pub token: String,
    pub user_name: Option<String>,
    /// Already-hashed password.
    pub hash: Option<String>,
    pub service: Option<String>,
}
