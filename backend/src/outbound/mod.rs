//! Outbound adapters implementing domain ports for storage.
//!
//! Only the in-memory store exists; durability is out of scope. Adapters are
//! thin translators between domain types and their backing structures and
//! contain no business logic.

pub mod memory;
