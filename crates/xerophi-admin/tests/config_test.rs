//! Tests for the JSON configuration loader.

use std::io::Write;

use tempfile::NamedTempFile;
use xerophi_admin::config::{ConfigError, load_config};

const FULL: &str = r#"{
    "surreal": {
        "connection": {
            "url": "db.internal:8000",
            "namespace": "xerophi",
            "username": "admin",
            "password": "hunter2"
        },
        "db": "users"
    },
    "redis": {
        "connection": { "host": "cache.internal", "port": 6380, "password": "s3cret" },
        "db": 2
    },
    "sentry": { "dsn": "https://key@sentry.example/1", "enabled": true },
    "server": { "port": 8080 }
}"#;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn loads_complete_file() {
    let file = write_config(FULL);
    let config = load_config(file.path()).unwrap();

    assert_eq!(config.surreal.db, "users");
    assert_eq!(config.redis.db, 2);
    assert!(config.sentry.enabled);
    assert_eq!(config.server.port, 8080);

    let db = config.db_config();
    assert_eq!(db.url, "db.internal:8000");
    assert_eq!(db.namespace, "xerophi");
    assert_eq!(db.database, "users");
    assert_eq!(db.username, "admin");
    assert_eq!(db.password, "hunter2");

    let cache = config.cache_config();
    assert_eq!(cache.host, "cache.internal");
    assert_eq!(cache.port, 6380);
    assert_eq!(cache.password.as_deref(), Some("s3cret"));
    assert_eq!(cache.db, 2);
}

#[test]
fn redis_password_is_optional() {
    let contents = FULL.replace(r#", "password": "s3cret""#, "");
    let file = write_config(&contents);
    let config = load_config(file.path()).unwrap();
    assert!(config.cache_config().password.is_none());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_config(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}

#[test]
fn invalid_json_is_a_parse_error() {
    let file = write_config("{ \"surreal\": ");
    let err = load_config(file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn missing_top_level_key_is_rejected() {
    let mut value: serde_json::Value = serde_json::from_str(FULL).unwrap();
    for key in ["surreal", "redis", "sentry", "server"] {
        let mut partial = value.clone();
        partial.as_object_mut().unwrap().remove(key);
        let file = write_config(&partial.to_string());

        let err = load_config(file.path()).unwrap_err();
        assert!(
            matches!(err, ConfigError::Parse { .. }),
            "config without `{key}` should not load"
        );
    }

    // Nested keys are required too.
    value["surreal"]["connection"]
        .as_object_mut()
        .unwrap()
        .remove("url");
    let file = write_config(&value.to_string());
    assert!(load_config(file.path()).is_err());
}
