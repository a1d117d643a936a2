pub mod dependents;
pub mod response_envelope;
