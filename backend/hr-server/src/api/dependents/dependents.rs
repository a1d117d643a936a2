//! Dependents REST API handler

use crate::{ApiResult, AppState, AuthenticatedEmployee, ResponseEnvelope};

use axum::{Json, extract::State};
use log::debug;

/// GET|POST /api/v1/dependents
///
/// Authentication happens in the extractor, so the store is only reached
/// with a verified employee id.
pub async fn list_dependents(
    State(state): State<AppState>,
    AuthenticatedEmployee(employee_id): AuthenticatedEmployee,
) -> ApiResult<Json<ResponseEnvelope>> {
    let dependents = state.store.find_by_employee(&employee_id).await?;

    debug!(
        "Returning {} dependents for employee {}",
        dependents.len(),
        employee_id
    );

    Ok(Json(ResponseEnvelope::dependents(dependents)))
}
