use crate::{DbError, Result as DbErrorResult};

use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use error_location::ErrorLocation;
use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Open a pool over an existing SQLite file.
///
/// The `dependents` schema is owned by another system, so a missing file is
/// an error rather than an empty database.
pub async fn connect(path: &Path, max_connections: u32) -> DbErrorResult<SqlitePool> {
    if !path.exists() {
        return Err(DbError::Initialization {
            message: format!("database file {} does not exist", path.display()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(false)
        .read_only(true)
        .busy_timeout(Duration::from_secs(5));

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
        .map_err(|e| DbError::Initialization {
            message: format!("failed to open {}: {}", path.display(), e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    info!(
        "Database pool ready: {} (max {} connections)",
        path.display(),
        max_connections
    );

    Ok(pool)
}
