//! Crypto payload version tag

use std::fmt;
use std::str::FromStr;

use bibo_core::{ClosedSet, EnumError, EnumResult};

/// Version of the envelope format produced by the crypto layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CryptoVersion {
    /// First envelope format
    #[default]
    V1,
}

impl CryptoVersion {
    pub const CURRENT: CryptoVersion = CryptoVersion::V1;

    /// Parse a version tag such as `v1`, case-insensitively
    pub fn parse(value: &str) -> EnumResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "v1" => Ok(CryptoVersion::V1),
            _ => Err(EnumError::InvalidCryptoVersion(value.to_string())),
        }
    }

    /// Whether `value` is a known version tag
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }
}

impl ClosedSet for CryptoVersion {
    type Wire = &'static str;

    const ALL: &'static [Self] = &[CryptoVersion::V1];

    fn name(self) -> &'static str {
        match self {
            CryptoVersion::V1 => "V1",
        }
    }

    fn wire(self) -> &'static str {
        match self {
            CryptoVersion::V1 => "v1",
        }
    }
}

impl FromStr for CryptoVersion {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for CryptoVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}
