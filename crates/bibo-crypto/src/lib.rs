//! Bibo Crypto - Algorithm identifiers
//!
//! Provides the closed sets used to select cryptographic primitives:
//! - SHA-2 hash algorithms, dispatching digest/HMAC/HKDF to RustCrypto
//! - Symmetric cipher identifiers
//! - Crypto payload version tags

pub mod cipher;
pub mod hash;
pub mod version;

pub use cipher::*;
pub use hash::*;
pub use version::*;
