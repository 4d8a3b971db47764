//! Inbound adapters translating external requests into directory use-cases
//! while keeping framework details at the edge.

pub mod http;
