use crate::{AuthError, Result as AuthErrorResult};

use hr_core::EmployeeId;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JWT claims read by the dependents endpoint.
///
/// Any other claim in the payload is ignored. Time claims stay raw JSON so
/// integer and fractional timestamps both decode; `exp` and `nbf` are
/// enforced by the decoder, `iat` by [`crate::JwtValidator`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Claims {
    /// Employee the caller acts as; integer or string depending on issuer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<Value>,
}

impl Claims {
    /// Claims carrying only an employee identifier
    pub fn for_employee(employee_id: impl Into<Value>) -> Self {
        Self {
            employee_id: Some(employee_id.into()),
            ..Self::default()
        }
    }

    /// Resolve the `employee_id` claim, failing when absent or unusable
    #[track_caller]
    pub fn employee_id(&self) -> AuthErrorResult<EmployeeId> {
        let value = self
            .employee_id
            .as_ref()
            .ok_or_else(|| AuthError::MissingClaim {
                claim: "employee_id",
                message: "claim not present".to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        EmployeeId::from_claim_value(value).ok_or_else(|| AuthError::MissingClaim {
            claim: "employee_id",
            message: format!("claim is not an integer or string: {value}"),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// `iat` as whole seconds; non-numeric values read as absent
    pub fn issued_at(&self) -> Option<f64> {
        self.iat.as_ref().and_then(Value::as_f64).map(f64::floor)
    }
}
