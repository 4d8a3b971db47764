//! Outbound adapters implementing domain ports.
//!
//! Adapters translate between domain types and their storage representation
//! and contain no business rules. The directory currently ships a single
//! in-memory store under [`memory`].

pub mod memory;
