use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Employee identifier carried in the `employee_id` claim.
///
/// Issuers disagree on whether the identifier is numeric or textual, so both
/// shapes are accepted and bound to the query as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum EmployeeId {
    Integer(i64),
    Text(String),
}

impl EmployeeId {
    /// Interpret a raw claim value. `null`, floats, booleans and containers
    /// are not identifiers.
    pub fn from_claim_value(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => n.as_i64().map(Self::Integer),
            Value::String(s) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for EmployeeId {
    fn from(id: i64) -> Self {
        Self::Integer(id)
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}
