//! Schema definitions and migration runner for SurrealDB.
//!
//! Tables use SCHEMAFULL mode. Record identifiers are UUID strings
//! used as the SurrealDB record key (`user:<uuid>`).

use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use tracing::info;

use crate::error::DbError;

// -----------------------------------------------------------------------
// Migration tracking
// -----------------------------------------------------------------------

const MIGRATION_TABLE_DDL: &str = "\
DEFINE TABLE IF NOT EXISTS _migration SCHEMAFULL;
DEFINE FIELD IF NOT EXISTS version ON TABLE _migration TYPE int;
DEFINE FIELD IF NOT EXISTS name ON TABLE _migration TYPE string;
DEFINE FIELD IF NOT EXISTS applied_at ON TABLE _migration TYPE datetime \
    DEFAULT time::now();
DEFINE INDEX IF NOT EXISTS idx_migration_version ON TABLE _migration \
    COLUMNS version UNIQUE;
";

#[derive(Debug, SurrealValue)]
struct MigrationRecord {
    version: u32,
}

struct Migration {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

static MIGRATIONS: &[Migration] = &[Migration {
    version: 1,
    name: "user_table",
    sql: SCHEMA_V1,
}];

// -----------------------------------------------------------------------
// Schema v1: user records
// -----------------------------------------------------------------------

const SCHEMA_V1: &str = "\
DEFINE TABLE user SCHEMAFULL;
DEFINE FIELD user_id ON TABLE user TYPE int;
DEFINE FIELD token ON TABLE user TYPE string;
DEFINE FIELD hash ON TABLE user TYPE string;
DEFINE FIELD user_name ON TABLE user TYPE string;
DEFINE FIELD service ON TABLE user TYPE string;
DEFINE FIELD created_at ON TABLE user TYPE datetime \
    DEFAULT time::now() READONLY;
DEFINE FIELD deleted_at ON TABLE user TYPE option<datetime>;
DEFINE INDEX idx_user_token ON TABLE user COLUMNS token UNIQUE;
";

// -----------------------------------------------------------------------
// Public API
// -----------------------------------------------------------------------

/// Bring the schema up to date and return how many migrations ran.
///
/// The `_migration` table records every applied version; versions at or
/// below the highest recorded one are skipped.
pub async fn run_migrations<C: Connection>(db: &Surreal<C>) -> Result<usize, DbError> {
    db.query(MIGRATION_TABLE_DDL)
        .await?
        .check()
        .map_err(|e| DbError::Migration(e.to_string()))?;

    let current = applied_version(db).await?;
    let mut applied = 0;
    for migration in pending(current) {
        apply(db, migration).await?;
        applied += 1;
    }

    if applied == 0 {
        info!(version = current, "Schema up to date");
    }
    Ok(applied)
}

async fn applied_version<C: Connection>(db: &Surreal<C>) -> Result<u32, DbError> {
    let mut result = db
        .query("SELECT version FROM _migration ORDER BY version DESC LIMIT 1")
        .await?;
    let records: Vec<MigrationRecord> = result.take(0)?;
    Ok(records.first().map_or(0, |m| m.version))
}

fn pending(current: u32) -> impl Iterator<Item = &'static Migration> {
    MIGRATIONS.iter().filter(move |m| m.version > current)
}

async fn apply<C: Connection>(db: &Surreal<C>, migration: &Migration) -> Result<(), DbError> {
    let Migration { version, name, sql } = *migration;
    info!(version, name, "Applying migration");

    db.query(sql)
        .await?
        .check()
        .map_err(|e| DbError::Migration(format!("v{version} '{name}': {e}")))?;

    db.query("CREATE _migration SET version = $version, name = $name")
        .bind(("version", version))
        .bind(("name", name))
        .await?
        .check()
        .map_err(|e| DbError::Migration(format!("recording v{version}: {e}")))?;

    Ok(())
}

/// Returns the raw schema DDL for version 1.
pub fn schema_v1() -> &'static str {
    SCHEMA_V1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_v1_defines_unique_token_index() {
        assert!(SCHEMA_V1.contains("DEFINE TABLE user"));
        assert!(SCHEMA_V1.contains("COLUMNS token UNIQUE"));
    }

    #[test]
    fn pending_skips_applied_versions() {
        assert_eq!(pending(0).count(), MIGRATIONS.len());
        let latest = MIGRATIONS.last().map_or(0, |m| m.version);
        assert_eq!(pending(latest).count(), 0);
    }

    #[test]
    fn migrations_are_ordered() {
        for window in MIGRATIONS.windows(2) {
            assert!(
                window[0].version < window[1].version,
                "Migrations must be in ascending version order"
            );
        }
    }
}
