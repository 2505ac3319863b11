//! Syslog-style log levels (RFC 5424 severities plus `none`)

use std::fmt;
use std::str::FromStr;

use tracing::Level;

use bibo_core::{CaseProjection, ClosedSet, EnumError, EnumResult};

/// Log severity, most severe first
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum LogLevel {
    /// System is unusable
    Emergency,
    /// Action must be taken immediately
    Alert,
    /// Critical conditions
    Critical,
    /// Error conditions
    Error,
    /// Warning conditions
    Warning,
    /// Normal but significant
    Notice,
    #[default]
    Info,
    /// Debug-level messages
    Debug,
    /// Logging disabled
    None,
}

impl LogLevel {
    /// Parse a level name, case-insensitively
    pub fn parse(value: &str) -> EnumResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "emergency" => Ok(LogLevel::Emergency),
            "alert" => Ok(LogLevel::Alert),
            "critical" => Ok(LogLevel::Critical),
            "error" => Ok(LogLevel::Error),
            "warning" => Ok(LogLevel::Warning),
            "notice" => Ok(LogLevel::Notice),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "none" => Ok(LogLevel::None),
            _ => Err(EnumError::InvalidLogLevel(value.to_string())),
        }
    }

    /// Whether `value` names a level
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    /// Closest `tracing` level; `None` disables logging.
    ///
    /// The three syslog levels above `error` collapse into `ERROR`, and
    /// `notice` into `INFO`.
    pub fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Emergency | LogLevel::Alert | LogLevel::Critical | LogLevel::Error => {
                Some(Level::ERROR)
            }
            LogLevel::Warning => Some(Level::WARN),
            LogLevel::Notice | LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::None => Option::None,
        }
    }

    #[inline]
    pub fn is_emergency(self) -> bool {
        self == LogLevel::Emergency
    }

    #[inline]
    pub fn is_alert(self) -> bool {
        self == LogLevel::Alert
    }

    #[inline]
    pub fn is_critical(self) -> bool {
        self == LogLevel::Critical
    }

    #[inline]
    pub fn is_error(self) -> bool {
        self == LogLevel::Error
    }

    #[inline]
    pub fn is_warning(self) -> bool {
        self == LogLevel::Warning
    }

    #[inline]
    pub fn is_notice(self) -> bool {
        self == LogLevel::Notice
    }

    #[inline]
    pub fn is_info(self) -> bool {
        self == LogLevel::Info
    }

    #[inline]
    pub fn is_debug(self) -> bool {
        self == LogLevel::Debug
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self == LogLevel::None
    }
}

impl ClosedSet for LogLevel {
    type Wire = &'static str;

    const ALL: &'static [Self] = &[
        LogLevel::Emergency,
        LogLevel::Alert,
        LogLevel::Critical,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Notice,
        LogLevel::Info,
        LogLevel::Debug,
        LogLevel::None,
    ];

    fn name(self) -> &'static str {
        match self {
            LogLevel::Emergency => "Emergency",
            LogLevel::Alert => "Alert",
            LogLevel::Critical => "Critical",
            LogLevel::Error => "Error",
            LogLevel::Warning => "Warning",
            LogLevel::Notice => "Notice",
            LogLevel::Info => "Info",
            LogLevel::Debug => "Debug",
            LogLevel::None => "None",
        }
    }

    fn wire(self) -> &'static str {
        match self {
            LogLevel::Emergency => "emergency",
            LogLevel::Alert => "alert",
            LogLevel::Critical => "critical",
            LogLevel::Error => "error",
            LogLevel::Warning => "warning",
            LogLevel::Notice => "notice",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::None => "none",
        }
    }
}

impl CaseProjection for LogLevel {}

impl FromStr for LogLevel {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}
