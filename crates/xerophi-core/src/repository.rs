//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async and are awaited one at a time
//! by the admin console.

use uuid::Uuid;

use crate::error::XerophiResult;
use crate::models::user::{CreateUser, User};

pub trait UserRepository: Send + Sync {
    /// Persist a new user record. The password is hashed before storage.
    fn create(&self, input: CreateUser) -> impl Future<Output = XerophiResult<User>> + Send;
    fn get_by_id(&self, id: Uuid) -> impl Future<Output = XerophiResult<User>> + Send;
    /// Fetch the single record carrying `token`, active or soft-deleted.
    fn get_by_token(&self, token: &str) -> impl Future<Output = XerophiResult<User>> + Send;
    /// Total number of records in the user table, soft-deleted included.
    fn count(&self) -> impl Future<Output = XerophiResult<u64>> + Send;
    /// Write the mutable fields of `user` (token, hash, name, service)
    /// back to the record identified by `user.id`.
    fn update_by_id(&self, user: &User) -> impl Future<Output = XerophiResult<User>> + Send;
    /// Soft delete: stamp `deleted_at` and keep the record.
    fn disable_by_id(&self, id: Uuid) -> impl Future<Output = XerophiResult<User>> + Send;
    /// Hard delete: erase the record.
    fn delete_by_id(&self, id: Uuid) -> impl Future<Output = XerophiResult<()>> + Send;
}
