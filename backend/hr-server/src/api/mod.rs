pub mod dependents;
pub mod error;
pub mod extractors;
