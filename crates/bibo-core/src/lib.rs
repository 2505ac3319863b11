//! Bibo Core - Shared contract for closed-set enumerations
//!
//! This crate defines what every enumeration in the workspace agrees on:
//! - The closed-set registry (declaration-ordered members, wire values)
//! - The `{name, value}` interchange record
//! - ASCII case projections of wire values
//! - Parse errors

pub mod case;
pub mod classifier;
pub mod error;

pub use case::*;
pub use classifier::*;
pub use error::*;
