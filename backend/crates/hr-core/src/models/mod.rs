pub mod dependent_record;
pub mod employee_id;
