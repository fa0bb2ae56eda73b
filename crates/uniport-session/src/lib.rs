//! Session types shared across Uniport services.
//!
//! Provides session-token validation, the session cookie builder, and the
//! `SessionToken` extractor.

pub mod cookie;
pub mod identity;
pub mod token;
