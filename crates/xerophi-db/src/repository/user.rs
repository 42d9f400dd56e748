//! SurrealDB implementation of [`UserRepository`].
//!
//! Records live in the `user` table keyed by a UUID string. Passwords
//! are hashed with Argon2id (see [`xerophi_auth::password`]) before they
//! reach the database.

use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;
use xerophi_core::error::XerophiResult;
use xerophi_core::models::user::{CreateUser, User};
use xerophi_core::repository::UserRepository;

use crate::error::DbError;

const ENTITY: &str = "user";

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct UserRow {
    user_id: u64,
    token: String,
    hash: String,
    user_name: String,
    service: String,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct UserRowWithId {
    record_id: String,
    user_id: u64,
    token: String,
    hash: String,
    user_name: String,
    service: String,
    created_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl UserRow {
    fn into_user(self, id: Uuid) -> User {
        User {
            id,
            user_id: self.user_id,
            token: self.token,
            hash: self.hash,
            user_name: self.user_name,
            service: self.service,
            created_at: self.created_at,
            deleted_at: self.deleted_at,
        }
    }
}

impl UserRowWithId {
    fn try_into_user(self) -> Result<User, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Query(format!("invalid UUID: {e}")))?;
        Ok(User {
            id,
            user_id: self.user_id,
            token: self.token,
            hash: self.hash,
            user_name: self.user_name,
            service: self.service,
            created_at: self.created_at,
            deleted_at: self.deleted_at,
        })
    }
}

/// Row struct for count queries.
#[derive(Debug, SurrealValue)]
struct CountRow {
    total: u64,
}

fn not_found(id: impl Into<String>) -> DbError {
    DbError::NotFound {
        entity: ENTITY.into(),
        id: id.into(),
    }
}

/// Map a statement error, recognising unique-index violations.
fn statement_error(message: String) -> DbError {
    if message.contains("already contains") {
        DbError::AlreadyExists {
            entity: ENTITY.into(),
        }
    } else {
        DbError::Query(message)
    }
}

/// SurrealDB implementation of the User repository.
#[derive(Clone)]
pub struct SurrealUserRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealUserRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> UserRepository for SurrealUserRepository<C> {
    async fn create(&self, input: CreateUser) -> XerophiResult<User> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let hash = xerophi_auth::hash_password(&input.password)?;

        let result = self
            .db
            .query(
                "CREATE type::record('user', $id) SET \
                 user_id = $user_id, \
                 token = $user_token, \
                 hash = $hash, \
                 user_name = $user_name, \
                 service = $service, \
                 created_at = $created_at, \
                 deleted_at = NONE",
            )
            .bind(("id", id_str.clone()))
            .bind(("user_id", input.user_id))
            .bind(("user_token", input.token))
            .bind(("hash", hash))
            .bind(("user_name", input.user_name))
            .bind(("service", input.service))
            .bind(("created_at", Utc::now()))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| statement_error(e.to_string()))?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| not_found(id_str))?;

        Ok(row.into_user(id))
    }

    async fn get_by_id(&self, id: Uuid) -> XerophiResult<User> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query("SELECT * FROM type::record('user', $id)")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| not_found(id_str))?;

        Ok(row.into_user(id))
    }

    async fn get_by_token(&self, token: &str) -> XerophiResult<User> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM user \
                 WHERE token = $user_token LIMIT 1",
            )
            .bind(("user_token", token.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRowWithId> = result.take(0).map_err(DbError::from)?;
        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| not_found(format!("token={token}")))?;

        Ok(row.try_into_user()?)
    }

    async fn count(&self) -> XerophiResult<u64> {
        let mut result = self
            .db
            .query("SELECT count() AS total FROM user GROUP ALL")
            .await
            .map_err(DbError::from)?;

        let rows: Vec<CountRow> = result.take(0).map_err(DbError::from)?;
        Ok(rows.first().map(|r| r.total).unwrap_or(0))
    }

    async fn update_by_id(&self, user: &User) -> XerophiResult<User> {
        let id_str = user.id.to_string();

        let result = self
            .db
            .query(
                "UPDATE type::record('user', $id) SET \
                 token = $user_token, \
                 hash = $hash, \
                 user_name = $user_name, \
                 service = $service",
            )
            .bind(("id", id_str.clone()))
            .bind(("user_token", user.token.clone()))
            .bind(("hash", user.hash.clone()))
            .bind(("user_name", user.user_name.clone()))
            .bind(("service", user.service.clone()))
            .await
            .map_err(DbError::from)?;

        let mut result = result.check().map_err(|e| statement_error(e.to_string()))?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| not_found(id_str))?;

        Ok(row.into_user(user.id))
    }

    async fn disable_by_id(&self, id: Uuid) -> XerophiResult<User> {
        let id_str = id.to_string();

        let result = self
            .db
            .query("UPDATE type::record('user', $id) SET deleted_at = time::now()")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| not_found(id_str))?;

        Ok(row.into_user(id))
    }

    async fn delete_by_id(&self, id: Uuid) -> XerophiResult<()> {
        let id_str = id.to_string();

        let result = self
            .db
            .query("DELETE type::record('user', $id) RETURN BEFORE")
            .bind(("id", id_str.clone()))
            .await
            .map_err(DbError::from)?;

        let mut result = result
            .check()
            .map_err(|e| DbError::Query(e.to_string()))?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        if rows.is_empty() {
            return Err(not_found(id_str).into());
        }

        Ok(())
    }
}
