//! Test utilities for Uniport services.
//!
//! Provides session-token minting so tests can act as signed-in users without
//! a running identity provider. Import in `#[cfg(test)]` blocks and test
//! harnesses only — never in production code.

pub mod session;
