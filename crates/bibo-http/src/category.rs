//! HTTP status classes
//!
//! The five classes partition the status code space by leading digit:
//! - 1xx Informational
//! - 2xx Success
//! - 3xx Redirection
//! - 4xx Client Error
//! - 5xx Server Error

use std::fmt;
use std::str::FromStr;

use bibo_core::{CaseProjection, ClosedSet, EnumError, EnumResult};

/// Class of an HTTP status code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StatusCodeCategory {
    /// 1xx: request received, processing continues
    Informational,
    /// 2xx
    Success,
    /// 3xx
    Redirection,
    /// 4xx: the request is at fault
    ClientError,
    /// 5xx: the server failed a valid request
    ServerError,
}

impl StatusCodeCategory {
    /// Parse a class name, case-insensitively
    pub fn parse(value: &str) -> EnumResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "informational" => Ok(StatusCodeCategory::Informational),
            "success" => Ok(StatusCodeCategory::Success),
            "redirection" => Ok(StatusCodeCategory::Redirection),
            "client error" => Ok(StatusCodeCategory::ClientError),
            "server error" => Ok(StatusCodeCategory::ServerError),
            _ => Err(EnumError::InvalidStatusCodeCategory(value.to_string())),
        }
    }

    /// Whether `value` names a status class
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    /// Class of a raw status code.
    ///
    /// Bands are half-open (`[400, 500)` is Client Error). Codes outside
    /// `[100, 600)` belong to no class.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            100..=199 => Some(StatusCodeCategory::Informational),
            200..=299 => Some(StatusCodeCategory::Success),
            300..=399 => Some(StatusCodeCategory::Redirection),
            400..=499 => Some(StatusCodeCategory::ClientError),
            500..=599 => Some(StatusCodeCategory::ServerError),
            _ => None,
        }
    }

    /// Half-open code range covered by this class
    pub fn code_range(self) -> std::ops::Range<u16> {
        match self {
            StatusCodeCategory::Informational => 100..200,
            StatusCodeCategory::Success => 200..300,
            StatusCodeCategory::Redirection => 300..400,
            StatusCodeCategory::ClientError => 400..500,
            StatusCodeCategory::ServerError => 500..600,
        }
    }

    /// Human readable class name
    #[inline]
    pub fn readable_name(self) -> &'static str {
        self.wire()
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(
            self,
            StatusCodeCategory::ClientError | StatusCodeCategory::ServerError
        )
    }
}

impl ClosedSet for StatusCodeCategory {
    type Wire = &'static str;

    const ALL: &'static [Self] = &[
        StatusCodeCategory::Informational,
        StatusCodeCategory::Success,
        StatusCodeCategory::Redirection,
        StatusCodeCategory::ClientError,
        StatusCodeCategory::ServerError,
    ];

    fn name(self) -> &'static str {
        match self {
            StatusCodeCategory::Informational => "INFORMATIONAL",
            StatusCodeCategory::Success => "SUCCESS",
            StatusCodeCategory::Redirection => "REDIRECTION",
            StatusCodeCategory::ClientError => "CLIENT_ERROR",
            StatusCodeCategory::ServerError => "SERVER_ERROR",
        }
    }

    fn wire(self) -> &'static str {
        match self {
            StatusCodeCategory::Informational => "Informational",
            StatusCodeCategory::Success => "Success",
            StatusCodeCategory::Redirection => "Redirection",
            StatusCodeCategory::ClientError => "Client Error",
            StatusCodeCategory::ServerError => "Server Error",
        }
    }
}

impl CaseProjection for StatusCodeCategory {}

impl FromStr for StatusCodeCategory {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for StatusCodeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}
