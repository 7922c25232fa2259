//! vitalink-storage
//!
//! Record persistence. An [`store::ObjectStore`] holds JSON documents by key;
//! S3 is the production backend, an in-memory map backs tests and local runs.

pub mod client;
pub mod error;
pub mod objects;
pub mod records;
pub mod store;
