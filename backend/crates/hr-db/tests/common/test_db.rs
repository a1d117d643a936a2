use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Schema the HR system owns; mirrored here only so tests have rows to read
pub const DEPENDENTS_SCHEMA: &str = r#"
    CREATE TABLE dependents (
        id            INTEGER PRIMARY KEY,
        employee_id   INTEGER NOT NULL,
        full_name     TEXT    NOT NULL,
        relationship  TEXT    NOT NULL,
        birth_date    TEXT,
        coverage_pct  REAL,
        photo         BLOB
    )
"#;

/// Creates an in-memory SQLite pool without any tables
pub async fn create_bare_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool")
}

/// Creates an in-memory SQLite pool with the dependents table
pub async fn create_test_pool() -> SqlitePool {
    let pool = create_bare_pool().await;

    sqlx::query(DEPENDENTS_SCHEMA)
        .execute(&pool)
        .await
        .expect("Failed to create dependents table");

    pool
}
