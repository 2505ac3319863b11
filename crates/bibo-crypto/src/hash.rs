//! SHA-2 hash algorithm selection
//!
//! Lookup by name is optional-style: an unknown name yields `None`, never an
//! error, so callers can chain a default.

use std::fmt;

use hkdf::Hkdf;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha384, Sha512};

use bibo_core::{CaseProjection, ClosedSet, EnumError, EnumResult};

/// SHA-2 family member
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum HashAlgorithm {
    /// SHA-256, 32-byte output
    #[default]
    Sha256,
    /// SHA-384, 48-byte output
    Sha384,
    /// SHA-512, 64-byte output
    Sha512,
}

impl HashAlgorithm {
    /// Look up an algorithm by name, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "sha256" => Some(HashAlgorithm::Sha256),
            "sha384" => Some(HashAlgorithm::Sha384),
            "sha512" => Some(HashAlgorithm::Sha512),
            _ => None,
        }
    }

    /// Whether `value` names a supported algorithm
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_some()
    }

    /// Digest size in bytes
    pub fn length(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Longest HKDF output for this algorithm (RFC 5869: 255 blocks)
    #[inline]
    pub fn max_hkdf_length(self) -> usize {
        255 * self.length()
    }

    /// Raw digest of `data`
    pub fn digest(self, data: &[u8]) -> Vec<u8> {
        tracing::trace!(algorithm = self.wire(), len = data.len(), "digest");
        match self {
            HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
            HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
            HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        }
    }

    /// Lowercase hex digest of `data`
    pub fn digest_hex(self, data: &[u8]) -> String {
        hex::encode(self.digest(data))
    }

    /// Raw HMAC tag of `data` under `key`
    pub fn hmac(self, data: &[u8], key: &[u8]) -> Vec<u8> {
        tracing::trace!(algorithm = self.wire(), len = data.len(), "hmac");
        match self {
            HashAlgorithm::Sha256 => {
                let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(key)
                    .expect("HMAC accepts keys of any length");
                mac.update(data);
                mac.finalize().into_bytes().to_vec()
            }
            HashAlgorithm::Sha384 => {
                let mut mac = <Hmac<Sha384> as Mac>::new_from_slice(key)
                    .expect("HMAC accepts keys of any length");
                mac.update(data);
                mac.finalize().into_bytes().to_vec()
            }
            HashAlgorithm::Sha512 => {
                let mut mac = <Hmac<Sha512> as Mac>::new_from_slice(key)
                    .expect("HMAC accepts keys of any length");
                mac.update(data);
                mac.finalize().into_bytes().to_vec()
            }
        }
    }

    /// Lowercase hex HMAC tag of `data` under `key`
    pub fn hmac_hex(self, data: &[u8], key: &[u8]) -> String {
        hex::encode(self.hmac(data, key))
    }

    /// Check a raw HMAC tag in constant time
    pub fn verify_hmac(self, data: &[u8], key: &[u8], tag: &[u8]) -> bool {
        match self {
            HashAlgorithm::Sha256 => {
                let mut mac = <Hmac<Sha256> as Mac>::new_from_slice(key)
                    .expect("HMAC accepts keys of any length");
                mac.update(data);
                mac.verify_slice(tag).is_ok()
            }
            HashAlgorithm::Sha384 => {
                let mut mac = <Hmac<Sha384> as Mac>::new_from_slice(key)
                    .expect("HMAC accepts keys of any length");
                mac.update(data);
                mac.verify_slice(tag).is_ok()
            }
            HashAlgorithm::Sha512 => {
                let mut mac = <Hmac<Sha512> as Mac>::new_from_slice(key)
                    .expect("HMAC accepts keys of any length");
                mac.update(data);
                mac.verify_slice(tag).is_ok()
            }
        }
    }

    /// HKDF extract-and-expand into `len` bytes
    pub fn hkdf(
        self,
        ikm: &[u8],
        salt: Option<&[u8]>,
        info: &[u8],
        len: usize,
    ) -> EnumResult<Vec<u8>> {
        let max = self.max_hkdf_length();
        if len > max {
            return Err(EnumError::InvalidKeyLength { requested: len, max });
        }

        let mut okm = vec![0u8; len];
        let expanded = match self {
            HashAlgorithm::Sha256 => Hkdf::<Sha256>::new(salt, ikm).expand(info, &mut okm),
            HashAlgorithm::Sha384 => Hkdf::<Sha384>::new(salt, ikm).expand(info, &mut okm),
            HashAlgorithm::Sha512 => Hkdf::<Sha512>::new(salt, ikm).expand(info, &mut okm),
        };
        expanded.map_err(|_| EnumError::InvalidKeyLength { requested: len, max })?;
        Ok(okm)
    }
}

impl ClosedSet for HashAlgorithm {
    type Wire = &'static str;

    const ALL: &'static [Self] = &[
        HashAlgorithm::Sha256,
        HashAlgorithm::Sha384,
        HashAlgorithm::Sha512,
    ];

    fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "SHA256",
            HashAlgorithm::Sha384 => "SHA384",
            HashAlgorithm::Sha512 => "SHA512",
        }
    }

    fn wire(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }
}

impl CaseProjection for HashAlgorithm {}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}
