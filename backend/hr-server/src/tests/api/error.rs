use crate::ApiError;

use hr_auth::AuthError;
use hr_db::DbError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn render(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_missing_header_returns_401_token_missing() {
    let error = ApiError::from(AuthError::MissingHeader {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Authorization token missing");
    assert!(json.get("dependents").is_none());
}

#[tokio::test]
async fn test_invalid_scheme_shares_token_missing_message() {
    let error = ApiError::from(AuthError::InvalidScheme {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Authorization token missing");
}

#[tokio::test]
async fn test_expired_token_returns_401_invalid_or_expired() {
    let error = ApiError::from(AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_future_issue_time_returns_401_invalid_or_expired() {
    let error = ApiError::from(AuthError::IssuedInFuture {
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Invalid or expired token");
}

#[tokio::test]
async fn test_missing_claim_returns_401_missing_employee_id() {
    let error = ApiError::from(AuthError::MissingClaim {
        claim: "employee_id",
        message: "claim not present".to_string(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["message"], "Token missing employee_id");
}

#[tokio::test]
async fn test_database_error_returns_500_without_detail() {
    let error = ApiError::from(DbError::from(sqlx::Error::PoolTimedOut));

    let (status, json) = render(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["success"], false);
    assert_eq!(json["message"], "Database error.");
    assert_eq!(json.as_object().unwrap().len(), 2);
}
