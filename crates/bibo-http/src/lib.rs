//! Bibo HTTP - Protocol-level enumerations
//!
//! This crate classifies the closed vocabularies of HTTP:
//! - Request methods and their RFC 9110 properties
//! - Status codes, reason phrases and status classes
//! - Redirect codes
//! - Media types (from header lines, extensions and paths)
//! - Cookie `SameSite` attribute values

pub mod category;
pub mod content_type;
pub mod method;
pub mod redirect;
pub mod same_site;
pub mod status;

pub use category::*;
pub use content_type::*;
pub use method::*;
pub use redirect::*;
pub use same_site::*;
pub use status::*;
