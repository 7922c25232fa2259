//! vitalink-audit
//!
//! Application-level audit events for stored health records.

pub mod events;
