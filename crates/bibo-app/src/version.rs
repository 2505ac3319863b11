//! Application and API version tags

use std::fmt;
use std::str::FromStr;

use bibo_core::{ClosedSet, EnumError, EnumResult};

/// Released application version
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AppVersion {
    /// 1.0.0
    #[default]
    V1_0_0,
}

impl AppVersion {
    pub const CURRENT: AppVersion = AppVersion::V1_0_0;

    /// Parse a version string; one leading `v` or `V` is accepted
    pub fn parse(value: &str) -> EnumResult<Self> {
        let bare = value.strip_prefix(['v', 'V']).unwrap_or(value);
        match bare {
            "1.0.0" => Ok(AppVersion::V1_0_0),
            _ => Err(EnumError::InvalidAppVersion(value.to_string())),
        }
    }

    /// Whether `value` parses as a released version
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    /// Version string with `prefix` prepended, e.g. `v1.0.0`
    pub fn with_prefix(self, prefix: &str) -> String {
        format!("{prefix}{}", self.wire())
    }
}

impl ClosedSet for AppVersion {
    type Wire = &'static str;

    const ALL: &'static [Self] = &[AppVersion::V1_0_0];

    fn name(self) -> &'static str {
        match self {
            AppVersion::V1_0_0 => "V1_0_0",
        }
    }

    fn wire(self) -> &'static str {
        match self {
            AppVersion::V1_0_0 => "1.0.0",
        }
    }
}

impl FromStr for AppVersion {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for AppVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}

/// Public API version, used as a path segment (`/v1/...`)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// First public API
    #[default]
    V1,
}

impl ApiVersion {
    pub const CURRENT: ApiVersion = ApiVersion::V1;

    /// Parse a version tag such as `v1`, case-insensitively
    pub fn parse(value: &str) -> EnumResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "v1" => Ok(ApiVersion::V1),
            _ => Err(EnumError::InvalidApiVersion(value.to_string())),
        }
    }

    /// Whether `value` is a known API version
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    /// Route prefix for this version
    pub fn path_prefix(self) -> String {
        format!("/{}", self.wire())
    }
}

impl ClosedSet for ApiVersion {
    type Wire = &'static str;

    const ALL: &'static [Self] = &[ApiVersion::V1];

    fn name(self) -> &'static str {
        match self {
            ApiVersion::V1 => "V1",
        }
    }

    fn wire(self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
        }
    }
}

impl FromStr for ApiVersion {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_version_prefix() {
        assert_eq!(AppVersion::V1_0_0.with_prefix("v"), "v1.0.0");
        assert_eq!(AppVersion::CURRENT.with_prefix(""), "1.0.0");
    }

    #[test]
    fn test_app_version_parse() {
        assert_eq!(AppVersion::parse("1.0.0").unwrap(), AppVersion::V1_0_0);
        assert_eq!(AppVersion::parse("v1.0.0").unwrap(), AppVersion::V1_0_0);
        let err = AppVersion::parse("2.0.0").unwrap_err();
        assert_eq!(err.to_string(), "Invalid app version: 2.0.0");
    }

    #[test]
    fn test_app_version_takes_one_prefix_only() {
        assert_eq!(AppVersion::parse("V1.0.0").unwrap(), AppVersion::V1_0_0);
        assert!(AppVersion::parse("vv1.0.0").is_err());
        let err = AppVersion::parse("vvvV1.0.0").unwrap_err();
        assert_eq!(err.to_string(), "Invalid app version: vvvV1.0.0");
        assert!(!AppVersion::is_valid("v"));
    }

    #[test]
    fn test_api_version() {
        assert_eq!(ApiVersion::parse("V1").unwrap(), ApiVersion::V1);
        assert_eq!(ApiVersion::CURRENT.path_prefix(), "/v1");
        assert!(!ApiVersion::is_valid("v2"));
    }
}
