//! Axum extractor for bearer-token authentication

use crate::{ApiError, AppState};

use hr_auth::{authorization_value, extract_bearer_token};
use hr_core::EmployeeId;

use std::future::Future;

use axum::{extract::FromRequestParts, http::request::Parts};

/// The employee a verified bearer token speaks for.
///
/// Resolution order: this request's Authorization header, the
/// `Bearer <token>` match, HS256 verification and finally the `employee_id`
/// claim. Each step rejects with its own 401 category.
pub struct AuthenticatedEmployee(pub EmployeeId);

impl FromRequestParts<AppState> for AuthenticatedEmployee {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let credential = authorization_value(&parts.headers)?;
            let token = extract_bearer_token(credential)?;

            let claims = state.jwt_validator.validate(token)?;
            let employee_id = claims.employee_id()?;

            log::debug!("Authenticated employee {}", employee_id);

            Ok(AuthenticatedEmployee(employee_id))
        }
    }
}
