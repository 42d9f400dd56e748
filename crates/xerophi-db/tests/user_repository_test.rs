//! Integration tests for User repository using in-memory SurrealDB.

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};
use xerophi_auth::verify_password;
use xerophi_core::error::XerophiError;
use xerophi_core::models::user::CreateUser;
use xerophi_core::repository::UserRepository;
use xerophi_db::repository::SurrealUserRepository;

/// Helper: spin up in-memory DB and run migrations.
async fn setup() -> SurrealUserRepository<Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    xerophi_db::run_migrations(&db).await.unwrap();
    SurrealUserRepository::new(db)
}

fn new_user(user_id: u64, name: &str, token: &str) -> CreateUser {
    CreateUser {
        user_id,
        user_name: name.into(),
        token: token.into(),
        password: "pw".into(),
        service: "svc".into(),
    }
}

#[tokio::test]
async fn create_and_get_user() {
    let repo = setup().await;

    let user = repo.create(new_user(0, "bob", "tkn1")).await.unwrap();

    assert_eq!(user.user_id, 0);
    assert_eq!(user.user_name, "bob");
    assert_eq!(user.token, "tkn1");
    assert_eq!(user.service, "svc");
    assert!(user.deleted_at.is_none());

    // Password should be hashed, not stored in plaintext.
    assert_ne!(user.hash, "pw");
    assert!(verify_password("pw", &user.hash).unwrap());

    let fetched = repo.get_by_id(user.id).await.unwrap();
    assert_eq!(fetched, user);
}

#[tokio::test]
async fn count_tracks_inserts() {
    let repo = setup().await;
    assert_eq!(repo.count().await.unwrap(), 0);

    repo.create(new_user(0, "a", "t-a")).await.unwrap();
    repo.create(new_user(1, "b", "t-b")).await.unwrap();

    assert_eq!(repo.count().await.unwrap(), 2);
}

#[tokio::test]
async fn get_user_by_token() {
    let repo = setup().await;
    let user = repo.create(new_user(0, "dave", "tok-dave")).await.unwrap();

    let fetched = repo.get_by_token("tok-dave").await.unwrap();
    assert_eq!(fetched.id, user.id);
    assert_eq!(fetched.user_name, "dave");
}

#[tokio::test]
async fn missing_token_is_not_found() {
    let repo = setup().await;
    let err = repo.get_by_token("nope").await.unwrap_err();
    assert!(matches!(err, XerophiError::NotFound { .. }));
}

#[tokio::test]
async fn duplicate_token_is_rejected() {
    let repo = setup().await;
    repo.create(new_user(0, "a", "same")).await.unwrap();

    let err = repo.create(new_user(1, "b", "same")).await.unwrap_err();
    assert!(matches!(err, XerophiError::AlreadyExists { .. }));
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn token_lookup_follows_updates() {
    let repo = setup().await;
    let mut user = repo.create(new_user(0, "fay", "tok-fay")).await.unwrap();

    user.token = "tok-fay-2".into();
    repo.update_by_id(&user).await.unwrap();

    let fetched = repo.get_by_token("tok-fay-2").await.unwrap();
    assert_eq!(fetched.id, user.id);
    assert!(matches!(
        repo.get_by_token("tok-fay").await.unwrap_err(),
        XerophiError::NotFound { .. }
    ));
}

#[tokio::test]
async fn update_by_id_rewrites_mutable_fields() {
    let repo = setup().await;
    let mut user = repo.create(new_user(0, "erin", "tok-erin")).await.unwrap();
    let created_at = user.created_at;

    user.user_name = "erin2".into();
    user.service = "other".into();
    let updated = repo.update_by_id(&user).await.unwrap();

    assert_eq!(updated.user_name, "erin2");
    assert_eq!(updated.service, "other");
    assert_eq!(updated.token, "tok-erin");
    assert_eq!(updated.user_id, 0);
    assert_eq!(updated.created_at, created_at);

    let fetched = repo.get_by_id(user.id).await.unwrap();
    assert_eq!(fetched.user_name, "erin2");
}

#[tokio::test]
async fn update_of_missing_record_is_not_found() {
    let repo = setup().await;
    let mut user = repo.create(new_user(0, "x", "tok-x")).await.unwrap();
    user.id = uuid::Uuid::new_v4();

    let err = repo.update_by_id(&user).await.unwrap_err();
    assert!(matches!(err, XerophiError::NotFound { .. }));
}

#[tokio::test]
async fn disable_sets_deleted_at_and_keeps_record() {
    let repo = setup().await;
    let user = repo.create(new_user(0, "frank", "tok-frank")).await.unwrap();

    let disabled = repo.disable_by_id(user.id).await.unwrap();
    assert!(disabled.deleted_at.is_some());

    let fetched = repo.get_by_id(user.id).await.unwrap();
    assert!(fetched.is_deleted());
    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn delete_erases_record() {
    let repo = setup().await;
    let user = repo.create(new_user(0, "gina", "tok-gina")).await.unwrap();

    repo.delete_by_id(user.id).await.unwrap();

    let err = repo.get_by_id(user.id).await.unwrap_err();
    assert!(matches!(err, XerophiError::NotFound { .. }));
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn delete_of_missing_record_is_not_found() {
    let repo = setup().await;
    let err = repo.delete_by_id(uuid::Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, XerophiError::NotFound { .. }));
}
