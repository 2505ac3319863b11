//! Symmetric cipher identifiers
//!
//! Names follow the OpenSSL spelling. This module only identifies a cipher;
//! selecting an implementation is left to the caller.

use std::fmt;
use std::str::FromStr;

use bibo_core::{CaseProjection, ClosedSet, EnumError, EnumResult};

/// Symmetric cipher and mode
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CipherAlgo {
    Aes128Cbc,
    Aes192Cbc,
    Aes256Cbc,
    Aes128Gcm,
    Aes192Gcm,
    Aes256Gcm,
    /// RFC 8439 AEAD
    ChaCha20Poly1305,
    /// SM4 (GB/T 32907) in GCM mode
    Sm4Gcm,
    Sm4Ccm,
    Sm4Ctr,
    Sm4Cbc,
}

impl CipherAlgo {
    /// Parse an OpenSSL cipher name, case-insensitively
    pub fn parse(value: &str) -> EnumResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "aes-128-cbc" => Ok(CipherAlgo::Aes128Cbc),
            "aes-192-cbc" => Ok(CipherAlgo::Aes192Cbc),
            "aes-256-cbc" => Ok(CipherAlgo::Aes256Cbc),
            "aes-128-gcm" => Ok(CipherAlgo::Aes128Gcm),
            "aes-192-gcm" => Ok(CipherAlgo::Aes192Gcm),
            "aes-256-gcm" => Ok(CipherAlgo::Aes256Gcm),
            "chacha20-poly1305" => Ok(CipherAlgo::ChaCha20Poly1305),
            "sm4-gcm" => Ok(CipherAlgo::Sm4Gcm),
            "sm4-ccm" => Ok(CipherAlgo::Sm4Ccm),
            "sm4-ctr" => Ok(CipherAlgo::Sm4Ctr),
            "sm4-cbc" => Ok(CipherAlgo::Sm4Cbc),
            _ => Err(EnumError::InvalidCipherAlgo(value.to_string())),
        }
    }

    /// Whether `value` names a cataloged cipher
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    /// Authenticated encryption mode (carries its own integrity tag)
    pub fn is_aead(self) -> bool {
        matches!(
            self,
            CipherAlgo::Aes128Gcm
                | CipherAlgo::Aes192Gcm
                | CipherAlgo::Aes256Gcm
                | CipherAlgo::ChaCha20Poly1305
                | CipherAlgo::Sm4Gcm
                | CipherAlgo::Sm4Ccm
        )
    }
}

impl ClosedSet for CipherAlgo {
    type Wire = &'static str;

    const ALL: &'static [Self] = &[
        CipherAlgo::Aes128Cbc,
        CipherAlgo::Aes192Cbc,
        CipherAlgo::Aes256Cbc,
        CipherAlgo::Aes128Gcm,
        CipherAlgo::Aes192Gcm,
        CipherAlgo::Aes256Gcm,
        CipherAlgo::ChaCha20Poly1305,
        CipherAlgo::Sm4Gcm,
        CipherAlgo::Sm4Ccm,
        CipherAlgo::Sm4Ctr,
        CipherAlgo::Sm4Cbc,
    ];

    fn name(self) -> &'static str {
        match self {
            CipherAlgo::Aes128Cbc => "AES_128_CBC",
            CipherAlgo::Aes192Cbc => "AES_192_CBC",
            CipherAlgo::Aes256Cbc => "AES_256_CBC",
            CipherAlgo::Aes128Gcm => "AES_128_GCM",
            CipherAlgo::Aes192Gcm => "AES_192_GCM",
            CipherAlgo::Aes256Gcm => "AES_256_GCM",
            CipherAlgo::ChaCha20Poly1305 => "CHACHA20_POLY1305",
            CipherAlgo::Sm4Gcm => "SM4_GCM",
            CipherAlgo::Sm4Ccm => "SM4_CCM",
            CipherAlgo::Sm4Ctr => "SM4_CTR",
            CipherAlgo::Sm4Cbc => "SM4_CBC",
        }
    }

    fn wire(self) -> &'static str {
        match self {
            CipherAlgo::Aes128Cbc => "aes-128-cbc",
            CipherAlgo::Aes192Cbc => "aes-192-cbc",
            CipherAlgo::Aes256Cbc => "aes-256-cbc",
            CipherAlgo::Aes128Gcm => "aes-128-gcm",
            CipherAlgo::Aes192Gcm => "aes-192-gcm",
            CipherAlgo::Aes256Gcm => "aes-256-gcm",
            CipherAlgo::ChaCha20Poly1305 => "chacha20-poly1305",
            CipherAlgo::Sm4Gcm => "sm4-gcm",
            CipherAlgo::Sm4Ccm => "sm4-ccm",
            CipherAlgo::Sm4Ctr => "sm4-ctr",
            CipherAlgo::Sm4Cbc => "sm4-cbc",
        }
    }
}

impl CaseProjection for CipherAlgo {}

impl FromStr for CipherAlgo {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CipherAlgo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}
