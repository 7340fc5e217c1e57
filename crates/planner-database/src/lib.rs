//! # planner-database
//!
//! Persistence for Planner records. Each record type is accessed through a
//! repository trait with two providers: PostgreSQL (sqlx) and an in-memory
//! store (dashmap). [`DataStore`] selects the provider from configuration.

pub mod memory;
pub mod postgres;
pub mod repositories;
pub mod store;

pub use store::DataStore;
