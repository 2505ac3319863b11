//! Deployment environment

use std::fmt;
use std::str::FromStr;

use bibo_core::{CaseProjection, ClosedSet, EnumError, EnumResult};

/// Where the application is deployed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// Local development
    Development,
    #[default]
    Production,
    /// Automated test runs
    Testing,
    /// Pre-production mirror
    Staging,
}

impl Environment {
    /// Parse an environment name, case-insensitively
    pub fn parse(value: &str) -> EnumResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "development" => Ok(Environment::Development),
            "production" => Ok(Environment::Production),
            "testing" => Ok(Environment::Testing),
            "staging" => Ok(Environment::Staging),
            _ => Err(EnumError::InvalidEnvironment(value.to_string())),
        }
    }

    /// Whether `value` names an environment
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    #[inline]
    pub fn is_development(self) -> bool {
        self == Environment::Development
    }

    #[inline]
    pub fn is_production(self) -> bool {
        self == Environment::Production
    }

    #[inline]
    pub fn is_testing(self) -> bool {
        self == Environment::Testing
    }

    #[inline]
    pub fn is_staging(self) -> bool {
        self == Environment::Staging
    }
}

impl ClosedSet for Environment {
    type Wire = &'static str;

    const ALL: &'static [Self] = &[
        Environment::Development,
        Environment::Production,
        Environment::Testing,
        Environment::Staging,
    ];

    fn name(self) -> &'static str {
        match self {
            Environment::Development => "DEVELOPMENT",
            Environment::Production => "PRODUCTION",
            Environment::Testing => "TESTING",
            Environment::Staging => "STAGING",
        }
    }

    fn wire(self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Testing => "testing",
            Environment::Staging => "staging",
        }
    }
}

impl CaseProjection for Environment {}

impl FromStr for Environment {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}
