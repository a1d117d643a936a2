pub mod authenticated_employee;
