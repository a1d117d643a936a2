#![allow(dead_code)]

//! Test infrastructure for hr-server API tests

use hr_auth::JwtValidator;
use hr_core::{DependentRecord, EmployeeId};
use hr_db::{DbError, DependentRepository, DependentStore};
use hr_server::{AppState, DEPENDENTS_PATH, build_router};

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Method, Request, Response},
};
use http_body_util::BodyExt;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes-long";

/// Create a test pool with in-memory SQLite and the dependents table
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(SqliteConnectOptions::new().filename(":memory:"))
        .await
        .expect("Failed to create test database");

    sqlx::query(
        r#"
          CREATE TABLE dependents (
              id           INTEGER PRIMARY KEY,
              employee_id  INTEGER NOT NULL,
              full_name    TEXT    NOT NULL,
              relationship TEXT    NOT NULL,
              birth_date   TEXT
          )
          "#,
    )
    .execute(&pool)
    .await
    .expect("Failed to create dependents table");

    pool
}

/// Insert a dependent row
pub async fn create_test_dependent(
    pool: &SqlitePool,
    id: i64,
    employee_id: i64,
    full_name: &str,
    relationship: &str,
) {
    sqlx::query(
        "INSERT INTO dependents (id, employee_id, full_name, relationship, birth_date) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(id)
    .bind(employee_id)
    .bind(full_name)
    .bind(relationship)
    .bind("2012-06-30")
    .execute(pool)
    .await
    .expect("Failed to create test dependent");
}

/// Store that fails every lookup and counts calls
#[derive(Default)]
pub struct FailingStore {
    pub calls: std::sync::atomic::AtomicUsize,
}

#[async_trait]
impl DependentStore for FailingStore {
    async fn find_by_employee(
        &self,
        _employee_id: &EmployeeId,
    ) -> hr_db::Result<Vec<DependentRecord>> {
        self.calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        Err(DbError::from(sqlx::Error::PoolTimedOut))
    }
}

pub fn create_app_state(store: Arc<dyn DependentStore>) -> AppState {
    AppState::new(JwtValidator::with_hs256(TEST_SECRET.as_bytes(), 0), store)
}

/// Router over an in-memory SQLite store
pub async fn create_test_app() -> (Router, SqlitePool) {
    let pool = create_test_pool().await;
    let state = create_app_state(Arc::new(DependentRepository::new(pool.clone())));
    (build_router(state), pool)
}

/// Mint an HS256 token over arbitrary JSON claims
pub fn create_token(claims: &serde_json::Value, secret: &str) -> String {
    encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to encode test token")
}

pub fn one_hour_from_now() -> i64 {
    chrono::Utc::now().timestamp() + 3600
}

pub fn dependents_request(method: Method, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(DEPENDENTS_PATH);
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    builder.body(Body::empty()).unwrap()
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
