//! Bibo Test Harness - Closed-set validation
//!
//! This crate provides:
//! - Generic registry and round-trip audits for any `ClosedSet`
//! - A workspace-wide audit over every enumeration
//! - Cross-crate property tests

pub mod audit;
pub mod workspace;

pub use audit::*;
pub use workspace::*;
