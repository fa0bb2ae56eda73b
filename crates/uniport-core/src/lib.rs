//! Cross-service plumbing shared by the uniport services: tracing setup,
//! request-id propagation, health endpoints, and serde helpers for the
//! wire format.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
