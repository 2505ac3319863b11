//! Cookie `SameSite` attribute

use std::fmt;
use std::str::FromStr;

use bibo_core::{CaseProjection, ClosedSet, EnumError, EnumResult};

/// When a browser attaches a cookie to cross-site requests
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SameSite {
    /// Sent on top-level navigations, withheld on cross-site subrequests
    #[default]
    Lax,
    /// Never sent cross-site
    Strict,
    /// Always sent; browsers require `Secure` alongside it
    None,
}

impl SameSite {
    /// Parse an attribute value, case-insensitively
    pub fn parse(value: &str) -> EnumResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "lax" => Ok(SameSite::Lax),
            "strict" => Ok(SameSite::Strict),
            "none" => Ok(SameSite::None),
            _ => Err(EnumError::InvalidSameSite(value.to_string())),
        }
    }

    /// Whether `value` is `Lax`, `Strict` or `None` in any case
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }
}

impl ClosedSet for SameSite {
    type Wire = &'static str;

    const ALL: &'static [Self] = &[SameSite::Lax, SameSite::Strict, SameSite::None];

    #[inline]
    fn name(self) -> &'static str {
        self.wire()
    }

    fn wire(self) -> &'static str {
        match self {
            SameSite::Lax => "Lax",
            SameSite::Strict => "Strict",
            SameSite::None => "None",
        }
    }
}

impl CaseProjection for SameSite {}

impl FromStr for SameSite {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}
