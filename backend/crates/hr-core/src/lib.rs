pub mod models;

pub use models::dependent_record::DependentRecord;
pub use models::employee_id::EmployeeId;
