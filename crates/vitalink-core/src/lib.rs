//! vitalink-core
//!
//! Persisted domain records and object key conventions.
//! No AWS SDK dependency. This is the shared vocabulary of the Vitalink system.

pub mod error;
pub mod models;
pub mod object_keys;
