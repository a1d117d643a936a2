pub mod connection;
pub mod dependent_store;
pub mod error;
pub mod repositories;

pub use connection::pool::connect;
pub use dependent_store::DependentStore;
pub use error::{DbError, Result};
pub use repositories::dependent_repository::DependentRepository;
