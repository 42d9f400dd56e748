//! Startup and shutdown around the menu loop.

use std::path::Path;

use tracing::{debug, error, info};
use xerophi_db::repository::SurrealUserRepository;
use xerophi_db::{CacheManager, DbManager};

use crate::config::load_config;
use crate::console::TerminalConsole;
use crate::context::AdminContext;
use crate::error::AdminError;
use crate::menu::run_menu;

/// Load configuration, open both stores, run the menu, then close the
/// stores in order.
///
/// Configuration and connection failures are returned before the menu
/// starts. Failures while closing are logged only.
pub async fn run(config_path: &Path) -> Result<(), AdminError> {
    let config = load_config(config_path)?;
    info!(path = %config_path.display(), "Configuration loaded");

    if config.sentry.enabled {
        info!(dsn = %config.sentry.dsn, "Error reporting enabled");
    }
    debug!(port = config.server.port, "Server port configured");

    let db = DbManager::connect(&config.db_config()).await?;
    let applied = xerophi_db::run_migrations(db.client()).await?;
    debug!(applied, "Migrations checked");

    let cache = CacheManager::connect(&config.cache_config()).await?;

    let ctx = AdminContext::new(SurrealUserRepository::new(db.client().clone()));
    let mut console = TerminalConsole::new();
    let outcome = run_menu(&ctx, &mut console).await;
    drop(ctx);

    shutdown(db, cache).await;
    outcome
}

async fn shutdown(db: DbManager, cache: CacheManager) {
    info!("Closing SurrealDB connection...");
    match db.close().await {
        Ok(()) => info!("SurrealDB connection closed"),
        Err(err) => error!(error = %err, "Failed to close SurrealDB connection"),
    }

    info!("Closing Redis connection...");
    match cache.close().await {
        Ok(()) => info!("Redis connection closed"),
        Err(err) => error!(error = %err, "Failed to close Redis connection"),
    }
}
