use hr_core::DependentRecord;

use serde::Serialize;

/// JSON body of every dependents response
#[derive(Debug, Clone, Serialize)]
pub struct ResponseEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dependents: Option<Vec<DependentRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ResponseEnvelope {
    pub fn dependents(dependents: Vec<DependentRecord>) -> Self {
        Self {
            success: true,
            dependents: Some(dependents),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            dependents: None,
            message: Some(message.into()),
        }
    }
}
