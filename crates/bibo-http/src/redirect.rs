//! Redirect status codes

use std::fmt;

use bibo_core::{ClosedSet, EnumError, EnumResult};

/// 3xx code used to redirect a client
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum RedirectType {
    /// 302 Found
    Temporary = 302,
    /// 301 Moved Permanently
    Permanent = 301,
    /// 303, follow up with `GET`
    SeeOther = 303,
    /// 304, cached copy is still fresh
    NotModified = 304,
    /// 305, deprecated
    UseProxy = 305,
    /// 306, reserved and no longer used
    SwitchProxy = 306,
    /// 307, method and body preserved
    TemporaryRedirect = 307,
    /// 308, method and body preserved
    PermanentRedirect = 308,
    /// 300, several targets available
    MultipleChoices = 300,
}

impl RedirectType {
    /// Look up a redirect by status code
    pub fn from_int(value: u16) -> EnumResult<Self> {
        match value {
            301 => Ok(RedirectType::Permanent),
            302 => Ok(RedirectType::Temporary),
            303 => Ok(RedirectType::SeeOther),
            304 => Ok(RedirectType::NotModified),
            305 => Ok(RedirectType::UseProxy),
            306 => Ok(RedirectType::SwitchProxy),
            307 => Ok(RedirectType::TemporaryRedirect),
            308 => Ok(RedirectType::PermanentRedirect),
            300 => Ok(RedirectType::MultipleChoices),
            _ => Err(EnumError::InvalidRedirectType(value)),
        }
    }

    /// Whether `value` is a redirect code this type knows
    pub fn is_valid(value: u16) -> bool {
        Self::from_int(value).is_ok()
    }

    /// Status code sent on the wire
    #[inline]
    pub fn to_int(self) -> u16 {
        self as u16
    }

    /// Human readable description
    pub fn description(self) -> &'static str {
        match self {
            RedirectType::Temporary => "Temporary Redirect",
            RedirectType::Permanent => "Permanent Redirect",
            RedirectType::SeeOther => "See Other",
            RedirectType::NotModified => "Not Modified",
            RedirectType::UseProxy => "Use Proxy",
            RedirectType::SwitchProxy => "Switch Proxy",
            RedirectType::TemporaryRedirect => "Temporary Redirect",
            RedirectType::PermanentRedirect => "Permanent Redirect",
            RedirectType::MultipleChoices => "Multiple Choices",
        }
    }

    /// Clients and caches may remember the new location
    pub fn is_permanent(self) -> bool {
        matches!(
            self,
            RedirectType::Permanent | RedirectType::PermanentRedirect
        )
    }

    /// The follow-up request must reuse the original method and body
    pub fn preserves_method(self) -> bool {
        matches!(
            self,
            RedirectType::TemporaryRedirect | RedirectType::PermanentRedirect
        )
    }
}

impl ClosedSet for RedirectType {
    type Wire = u16;

    const ALL: &'static [Self] = &[
        RedirectType::Temporary,
        RedirectType::Permanent,
        RedirectType::SeeOther,
        RedirectType::NotModified,
        RedirectType::UseProxy,
        RedirectType::SwitchProxy,
        RedirectType::TemporaryRedirect,
        RedirectType::PermanentRedirect,
        RedirectType::MultipleChoices,
    ];

    fn name(self) -> &'static str {
        match self {
            RedirectType::Temporary => "TEMPORARY",
            RedirectType::Permanent => "PERMANENT",
            RedirectType::SeeOther => "SEE_OTHER",
            RedirectType::NotModified => "NOT_MODIFIED",
            RedirectType::UseProxy => "USE_PROXY",
            RedirectType::SwitchProxy => "SWITCH_PROXY",
            RedirectType::TemporaryRedirect => "TEMPORARY_REDIRECT",
            RedirectType::PermanentRedirect => "PERMANENT_REDIRECT",
            RedirectType::MultipleChoices => "MULTIPLE_CHOICES",
        }
    }

    #[inline]
    fn wire(self) -> u16 {
        self.to_int()
    }
}

impl TryFrom<u16> for RedirectType {
    type Error = EnumError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::from_int(value)
    }
}

impl fmt::Display for RedirectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_int() {
        assert_eq!(RedirectType::from_int(301).unwrap(), RedirectType::Permanent);
        assert_eq!(RedirectType::from_int(302).unwrap(), RedirectType::Temporary);
        assert_eq!(
            RedirectType::from_int(300).unwrap(),
            RedirectType::MultipleChoices
        );
        assert_eq!(RedirectType::Permanent.to_string(), "Permanent Redirect");
    }

    #[test]
    fn test_invalid_code() {
        let err = RedirectType::from_int(200).unwrap_err();
        assert_eq!(err.to_string(), "Invalid redirect type: 200");
        assert!(!RedirectType::is_valid(309));
        assert!(RedirectType::is_valid(306));
    }

    #[test]
    fn test_roundtrip() {
        for r in RedirectType::all() {
            assert_eq!(RedirectType::from_int(r.to_int()).unwrap(), *r);
        }
    }

    #[test]
    fn test_declaration_order() {
        assert_eq!(
            RedirectType::wires(),
            vec![302, 301, 303, 304, 305, 306, 307, 308, 300]
        );
    }

    #[test]
    fn test_record() {
        let record = RedirectType::SeeOther.to_record();
        assert_eq!(record.name, "SEE_OTHER");
        assert_eq!(record.value, 303);
    }

    #[test]
    fn test_permanence_and_method() {
        assert!(RedirectType::PermanentRedirect.is_permanent());
        assert!(RedirectType::PermanentRedirect.preserves_method());
        assert!(!RedirectType::Permanent.preserves_method());
        assert!(!RedirectType::Temporary.is_permanent());
    }
}
