pub mod dependent_repository;
