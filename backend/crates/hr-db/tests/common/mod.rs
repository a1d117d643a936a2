#![allow(dead_code)]

pub mod fixtures;
pub mod test_db;

pub use fixtures::{NewDependent, insert_dependent};
pub use test_db::{create_bare_pool, create_test_pool};
