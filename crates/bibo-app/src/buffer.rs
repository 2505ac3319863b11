//! Response output buffer sizes

use std::fmt;
use std::str::FromStr;

use bibo_core::{ClosedSet, EnumError, EnumResult};

/// Output buffer size in bytes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u32)]
pub enum ResponseBufferSize {
    /// 8 KiB
    #[default]
    Default = 8192,
    /// 4 KiB
    Small = 4096,
    /// 16 KiB
    Large = 16384,
    /// 32 KiB
    ExtraLarge = 32768,
    /// 64 KiB
    Custom = 65536,
}

impl ResponseBufferSize {
    /// Size in bytes
    #[inline]
    pub fn to_bytes(self) -> u32 {
        self as u32
    }

    /// Member with exactly `bytes` bytes
    pub fn from_bytes(bytes: u32) -> Option<Self> {
        Self::from_wire(bytes)
    }

    /// Parse a decimal byte count such as `"16384"`
    pub fn parse(value: &str) -> EnumResult<Self> {
        value
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(Self::from_bytes)
            .ok_or_else(|| EnumError::InvalidResponseBufferSize(value.to_string()))
    }

    /// Whether `value` is one of the listed sizes
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }
}

impl ClosedSet for ResponseBufferSize {
    type Wire = u32;

    const ALL: &'static [Self] = &[
        ResponseBufferSize::Default,
        ResponseBufferSize::Small,
        ResponseBufferSize::Large,
        ResponseBufferSize::ExtraLarge,
        ResponseBufferSize::Custom,
    ];

    fn name(self) -> &'static str {
        match self {
            ResponseBufferSize::Default => "DEFAULT",
            ResponseBufferSize::Small => "SMALL",
            ResponseBufferSize::Large => "LARGE",
            ResponseBufferSize::ExtraLarge => "EXTRA_LARGE",
            ResponseBufferSize::Custom => "CUSTOM",
        }
    }

    #[inline]
    fn wire(self) -> u32 {
        self.to_bytes()
    }
}

impl FromStr for ResponseBufferSize {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ResponseBufferSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(ResponseBufferSize::Default.to_bytes(), 8192);
        assert_eq!(ResponseBufferSize::Custom.to_bytes(), 65536);
        assert_eq!(ResponseBufferSize::Large.to_string(), "16384");
    }

    #[test]
    fn test_from_bytes() {
        assert_eq!(
            ResponseBufferSize::from_bytes(4096),
            Some(ResponseBufferSize::Small)
        );
        assert_eq!(ResponseBufferSize::from_bytes(1000), None);
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            ResponseBufferSize::parse(" 32768 ").unwrap(),
            ResponseBufferSize::ExtraLarge
        );
        let err = ResponseBufferSize::parse("big").unwrap_err();
        assert_eq!(err.to_string(), "Invalid response buffer size: big");
        assert!(!ResponseBufferSize::is_valid("1024"));
        assert_eq!(
            "4096".parse::<ResponseBufferSize>().unwrap(),
            ResponseBufferSize::Small
        );
    }
}
