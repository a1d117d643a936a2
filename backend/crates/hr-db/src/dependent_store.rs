use crate::Result as DbErrorResult;

use hr_core::{DependentRecord, EmployeeId};

use async_trait::async_trait;

/// Read-only access to dependents keyed by employee.
///
/// Handlers receive the store as `Arc<dyn DependentStore>` so tests can swap
/// in fakes without a database.
#[async_trait]
pub trait DependentStore: Send + Sync {
    /// All rows whose `employee_id` equals `employee_id`, every column
    /// included. An unknown employee yields an empty list.
    async fn find_by_employee(
        &self,
        employee_id: &EmployeeId,
    ) -> DbErrorResult<Vec<DependentRecord>>;
}
