//! HTTP status codes
//!
//! Standard IETF codes plus the de-facto Cloudflare (52x, 530) and proxy
//! timeout (598, 599) codes. `Unknown` (0) is a sentinel outside every class.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use bibo_core::{ClosedSet, EnumError, EnumResult};

use crate::StatusCodeCategory;

/// HTTP response status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum HttpStatus {
    // 1xx
    Continue = 100,
    SwitchingProtocols = 101,
    Processing = 102,
    EarlyHints = 103,

    // 2xx
    Ok = 200,
    Created = 201,
    Accepted = 202,
    NonAuthoritativeInformation = 203,
    NoContent = 204,
    ResetContent = 205,
    PartialContent = 206,

    // 3xx
    MultipleChoices = 300,
    MovedPermanently = 301,
    Found = 302,
    SeeOther = 303,
    NotModified = 304,
    UseProxy = 305,
    TemporaryRedirect = 307,
    PermanentRedirect = 308,

    // 4xx
    BadRequest = 400,
    Unauthorized = 401,
    PaymentRequired = 402,
    Forbidden = 403,
    NotFound = 404,
    MethodNotAllowed = 405,
    NotAcceptable = 406,
    ProxyAuthenticationRequired = 407,
    RequestTimeout = 408,
    Conflict = 409,
    Gone = 410,
    LengthRequired = 411,
    PreconditionFailed = 412,
    PayloadTooLarge = 413,
    UriTooLong = 414,
    UnsupportedMediaType = 415,
    RangeNotSatisfiable = 416,
    ExpectationFailed = 417,
    ImATeapot = 418,
    MisdirectedRequest = 421,
    UnprocessableEntity = 422,
    Locked = 423,
    FailedDependency = 424,
    TooEarly = 425,
    UpgradeRequired = 426,
    PreconditionRequired = 428,
    TooManyRequests = 429,
    RequestHeaderFieldsTooLarge = 431,
    UnavailableForLegalReasons = 451,

    // 5xx
    InternalServerError = 500,
    NotImplemented = 501,
    BadGateway = 502,
    ServiceUnavailable = 503,
    GatewayTimeout = 504,
    HttpVersionNotSupported = 505,
    VariantAlsoNegotiates = 506,
    InsufficientStorage = 507,
    LoopDetected = 508,
    NotExtended = 510,
    NetworkAuthenticationRequired = 511,
    UnknownError = 520,
    WebServerIsDown = 521,
    ConnectionTimedOut = 522,
    OriginIsUnreachable = 523,
    ATimeoutOccurred = 524,
    SslHandshakeFailed = 525,
    InvalidSsl = 526,
    RailgunError = 527,
    SiteIsFrozen = 530,
    NetworkReadTimeoutError = 598,
    NetworkConnectTimeoutError = 599,

    /// Sentinel for codes this table does not know
    Unknown = 0,
}

/// Interchange record for a status
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct StatusRecord {
    pub code: u16,
    pub message: &'static str,
    pub category: &'static str,
}

impl HttpStatus {
    /// Numeric status code
    #[inline]
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Look up a status by code, failing on codes with no member
    pub fn from_code(code: u16) -> EnumResult<Self> {
        Self::try_from_code(code).ok_or(EnumError::InvalidHttpStatus(code))
    }

    /// Look up a status by code
    pub fn try_from_code(code: u16) -> Option<Self> {
        Self::from_wire(code)
    }

    /// Look up a status by code, mapping unlisted codes to `Unknown`
    pub fn resolve(code: u16) -> Self {
        Self::try_from_code(code).unwrap_or(HttpStatus::Unknown)
    }

    /// Whether `code` has a member (0 maps to `Unknown`)
    pub fn is_valid(code: u16) -> bool {
        Self::try_from_code(code).is_some()
    }

    /// Reason phrase for a raw code; empty when the code has no member
    pub fn reason_phrase(code: u16) -> &'static str {
        Self::try_from_code(code).map_or("", HttpStatus::message)
    }

    /// Reason phrase
    pub fn message(self) -> &'static str {
        match self {
            HttpStatus::Continue => "Continue",
            HttpStatus::SwitchingProtocols => "Switching Protocols",
            HttpStatus::Processing => "Processing",
            HttpStatus::EarlyHints => "Early Hints",
            HttpStatus::Ok => "OK",
            HttpStatus::Created => "Created",
            HttpStatus::Accepted => "Accepted",
            HttpStatus::NonAuthoritativeInformation => "Non-Authoritative Information",
            HttpStatus::NoContent => "No Content",
            HttpStatus::ResetContent => "Reset Content",
            HttpStatus::PartialContent => "Partial Content",
            HttpStatus::MultipleChoices => "Multiple Choices",
            HttpStatus::MovedPermanently => "Moved Permanently",
            HttpStatus::Found => "Found",
            HttpStatus::SeeOther => "See Other",
            HttpStatus::NotModified => "Not Modified",
            HttpStatus::UseProxy => "Use Proxy",
            HttpStatus::TemporaryRedirect => "Temporary Redirect",
            HttpStatus::PermanentRedirect => "Permanent Redirect",
            HttpStatus::BadRequest => "Bad Request",
            HttpStatus::Unauthorized => "Unauthorized",
            HttpStatus::PaymentRequired => "Payment Required",
            HttpStatus::Forbidden => "Forbidden",
            HttpStatus::NotFound => "Not Found",
            HttpStatus::MethodNotAllowed => "Method Not Allowed",
            HttpStatus::NotAcceptable => "Not Acceptable",
            HttpStatus::ProxyAuthenticationRequired => "Proxy Authentication Required",
            HttpStatus::RequestTimeout => "Request Timeout",
            HttpStatus::Conflict => "Conflict",
            HttpStatus::Gone => "Gone",
            HttpStatus::LengthRequired => "Length Required",
            HttpStatus::PreconditionFailed => "Precondition Failed",
            HttpStatus::PayloadTooLarge => "Payload Too Large",
            HttpStatus::UriTooLong => "URI Too Long",
            HttpStatus::UnsupportedMediaType => "Unsupported Media Type",
            HttpStatus::RangeNotSatisfiable => "Range Not Satisfiable",
            HttpStatus::ExpectationFailed => "Expectation Failed",
            HttpStatus::ImATeapot => "I'm a teapot",
            HttpStatus::MisdirectedRequest => "Misdirected Request",
            HttpStatus::UnprocessableEntity => "Unprocessable Entity",
            HttpStatus::Locked => "Locked",
            HttpStatus::FailedDependency => "Failed Dependency",
            HttpStatus::TooEarly => "Too Early",
            HttpStatus::UpgradeRequired => "Upgrade Required",
            HttpStatus::PreconditionRequired => "Precondition Required",
            HttpStatus::TooManyRequests => "Too Many Requests",
            HttpStatus::RequestHeaderFieldsTooLarge => "Request Header Fields Too Large",
            HttpStatus::UnavailableForLegalReasons => "Unavailable For Legal Reasons",
            HttpStatus::InternalServerError => "Internal Server Error",
            HttpStatus::NotImplemented => "Not Implemented",
            HttpStatus::BadGateway => "Bad Gateway",
            HttpStatus::ServiceUnavailable => "Service Unavailable",
            HttpStatus::GatewayTimeout => "Gateway Timeout",
            HttpStatus::HttpVersionNotSupported => "HTTP Version Not Supported",
            HttpStatus::VariantAlsoNegotiates => "Variant Also Negotiates",
            HttpStatus::InsufficientStorage => "Insufficient Storage",
            HttpStatus::LoopDetected => "Loop Detected",
            HttpStatus::NotExtended => "Not Extended",
            HttpStatus::NetworkAuthenticationRequired => "Network Authentication Required",
            HttpStatus::UnknownError | HttpStatus::Unknown => "Unknown Error",
            HttpStatus::WebServerIsDown => "Web Server Is Down",
            HttpStatus::ConnectionTimedOut => "Connection Timed Out",
            HttpStatus::OriginIsUnreachable => "Origin Is Unreachable",
            HttpStatus::ATimeoutOccurred => "A Timeout Occurred",
            HttpStatus::SslHandshakeFailed => "SSL Handshake Failed",
            HttpStatus::InvalidSsl => "Invalid SSL Certificate",
            HttpStatus::RailgunError => "Railgun Error",
            HttpStatus::SiteIsFrozen => "Site Is Frozen",
            HttpStatus::NetworkReadTimeoutError => "Network Read Timeout Error",
            HttpStatus::NetworkConnectTimeoutError => "Network Connect Timeout Error",
        }
    }

    /// Status class, `None` for `Unknown`
    #[inline]
    pub fn status_category(self) -> Option<StatusCodeCategory> {
        StatusCodeCategory::from_code(self.code())
    }

    /// Status class name, `"Unknown"` outside the 1xx-5xx bands
    pub fn category(self) -> &'static str {
        self.status_category()
            .map_or("Unknown", StatusCodeCategory::readable_name)
    }

    /// 1xx
    #[inline]
    pub fn is_informational(self) -> bool {
        (100..200).contains(&self.code())
    }

    /// 2xx
    #[inline]
    pub fn is_success(self) -> bool {
        (200..300).contains(&self.code())
    }

    /// 3xx
    #[inline]
    pub fn is_redirection(self) -> bool {
        (300..400).contains(&self.code())
    }

    /// 4xx
    #[inline]
    pub fn is_client_error(self) -> bool {
        (400..500).contains(&self.code())
    }

    /// 5xx
    #[inline]
    pub fn is_server_error(self) -> bool {
        (500..600).contains(&self.code())
    }

    /// 4xx or 5xx
    #[inline]
    pub fn is_error(self) -> bool {
        self.is_client_error() || self.is_server_error()
    }

    /// Reason phrases of every member in `category`, keyed by code
    pub fn messages_in(category: StatusCodeCategory) -> BTreeMap<u16, &'static str> {
        Self::ALL
            .iter()
            .filter(|s| s.status_category() == Some(category))
            .map(|s| (s.code(), s.message()))
            .collect()
    }

    /// `{code, message, category}` view; `to_record` gives the `{name, value}` pair
    pub fn to_status_record(self) -> StatusRecord {
        StatusRecord {
            code: self.code(),
            message: self.message(),
            category: self.category(),
        }
    }
}

impl ClosedSet for HttpStatus {
    type Wire = u16;

    const ALL: &'static [Self] = &[
        HttpStatus::Continue,
        HttpStatus::SwitchingProtocols,
        HttpStatus::Processing,
        HttpStatus::EarlyHints,
        HttpStatus::Ok,
        HttpStatus::Created,
        HttpStatus::Accepted,
        HttpStatus::NonAuthoritativeInformation,
        HttpStatus::NoContent,
        HttpStatus::ResetContent,
        HttpStatus::PartialContent,
        HttpStatus::MultipleChoices,
        HttpStatus::MovedPermanently,
        HttpStatus::Found,
        HttpStatus::SeeOther,
        HttpStatus::NotModified,
        HttpStatus::UseProxy,
        HttpStatus::TemporaryRedirect,
        HttpStatus::PermanentRedirect,
        HttpStatus::BadRequest,
        HttpStatus::Unauthorized,
        HttpStatus::PaymentRequired,
        HttpStatus::Forbidden,
        HttpStatus::NotFound,
        HttpStatus::MethodNotAllowed,
        HttpStatus::NotAcceptable,
        HttpStatus::ProxyAuthenticationRequired,
        HttpStatus::RequestTimeout,
        HttpStatus::Conflict,
        HttpStatus::Gone,
        HttpStatus::LengthRequired,
        HttpStatus::PreconditionFailed,
        HttpStatus::PayloadTooLarge,
        HttpStatus::UriTooLong,
        HttpStatus::UnsupportedMediaType,
        HttpStatus::RangeNotSatisfiable,
        HttpStatus::ExpectationFailed,
        HttpStatus::ImATeapot,
        HttpStatus::MisdirectedRequest,
        HttpStatus::UnprocessableEntity,
        HttpStatus::Locked,
        HttpStatus::FailedDependency,
        HttpStatus::TooEarly,
        HttpStatus::UpgradeRequired,
        HttpStatus::PreconditionRequired,
        HttpStatus::TooManyRequests,
        HttpStatus::RequestHeaderFieldsTooLarge,
        HttpStatus::UnavailableForLegalReasons,
        HttpStatus::InternalServerError,
        HttpStatus::NotImplemented,
        HttpStatus::BadGateway,
        HttpStatus::ServiceUnavailable,
        HttpStatus::GatewayTimeout,
        HttpStatus::HttpVersionNotSupported,
        HttpStatus::VariantAlsoNegotiates,
        HttpStatus::InsufficientStorage,
        HttpStatus::LoopDetected,
        HttpStatus::NotExtended,
        HttpStatus::NetworkAuthenticationRequired,
        HttpStatus::UnknownError,
        HttpStatus::WebServerIsDown,
        HttpStatus::ConnectionTimedOut,
        HttpStatus::OriginIsUnreachable,
        HttpStatus::ATimeoutOccurred,
        HttpStatus::SslHandshakeFailed,
        HttpStatus::InvalidSsl,
        HttpStatus::RailgunError,
        HttpStatus::SiteIsFrozen,
        HttpStatus::NetworkReadTimeoutError,
        HttpStatus::NetworkConnectTimeoutError,
        HttpStatus::Unknown,
    ];

    fn name(self) -> &'static str {
        match self {
            HttpStatus::Continue => "Continue",
            HttpStatus::SwitchingProtocols => "SwitchingProtocols",
            HttpStatus::Processing => "Processing",
            HttpStatus::EarlyHints => "EarlyHints",
            HttpStatus::Ok => "OK",
            HttpStatus::Created => "Created",
            HttpStatus::Accepted => "Accepted",
            HttpStatus::NonAuthoritativeInformation => "NonAuthoritativeInformation",
            HttpStatus::NoContent => "NoContent",
            HttpStatus::ResetContent => "ResetContent",
            HttpStatus::PartialContent => "PartialContent",
            HttpStatus::MultipleChoices => "MultipleChoices",
            HttpStatus::MovedPermanently => "MovedPermanently",
            HttpStatus::Found => "Found",
            HttpStatus::SeeOther => "SeeOther",
            HttpStatus::NotModified => "NotModified",
            HttpStatus::UseProxy => "UseProxy",
            HttpStatus::TemporaryRedirect => "TemporaryRedirect",
            HttpStatus::PermanentRedirect => "PermanentRedirect",
            HttpStatus::BadRequest => "BadRequest",
            HttpStatus::Unauthorized => "Unauthorized",
            HttpStatus::PaymentRequired => "PaymentRequired",
            HttpStatus::Forbidden => "Forbidden",
            HttpStatus::NotFound => "NotFound",
            HttpStatus::MethodNotAllowed => "MethodNotAllowed",
            HttpStatus::NotAcceptable => "NotAcceptable",
            HttpStatus::ProxyAuthenticationRequired => "ProxyAuthenticationRequired",
            HttpStatus::RequestTimeout => "RequestTimeout",
            HttpStatus::Conflict => "Conflict",
            HttpStatus::Gone => "Gone",
            HttpStatus::LengthRequired => "LengthRequired",
            HttpStatus::PreconditionFailed => "PreconditionFailed",
            HttpStatus::PayloadTooLarge => "PayloadTooLarge",
            HttpStatus::UriTooLong => "UriTooLong",
            HttpStatus::UnsupportedMediaType => "UnsupportedMediaType",
            HttpStatus::RangeNotSatisfiable => "RangeNotSatisfiable",
            HttpStatus::ExpectationFailed => "ExpectationFailed",
            HttpStatus::ImATeapot => "ImATeapot",
            HttpStatus::MisdirectedRequest => "MisdirectedRequest",
            HttpStatus::UnprocessableEntity => "UnprocessableEntity",
            HttpStatus::Locked => "Locked",
            HttpStatus::FailedDependency => "FailedDependency",
            HttpStatus::TooEarly => "TooEarly",
            HttpStatus::UpgradeRequired => "UpgradeRequired",
            HttpStatus::PreconditionRequired => "PreconditionRequired",
            HttpStatus::TooManyRequests => "TooManyRequests",
            HttpStatus::RequestHeaderFieldsTooLarge => "RequestHeaderFieldsTooLarge",
            HttpStatus::UnavailableForLegalReasons => "UnavailableForLegalReasons",
            HttpStatus::InternalServerError => "InternalServerError",
            HttpStatus::NotImplemented => "NotImplemented",
            HttpStatus::BadGateway => "BadGateway",
            HttpStatus::ServiceUnavailable => "ServiceUnavailable",
            HttpStatus::GatewayTimeout => "GatewayTimeout",
            HttpStatus::HttpVersionNotSupported => "HttpVersionNotSupported",
            HttpStatus::VariantAlsoNegotiates => "VariantAlsoNegotiates",
            HttpStatus::InsufficientStorage => "InsufficientStorage",
            HttpStatus::LoopDetected => "LoopDetected",
            HttpStatus::NotExtended => "NotExtended",
            HttpStatus::NetworkAuthenticationRequired => "NetworkAuthenticationRequired",
            HttpStatus::UnknownError => "UnknownError",
            HttpStatus::WebServerIsDown => "WebServerIsDown",
            HttpStatus::ConnectionTimedOut => "ConnectionTimedOut",
            HttpStatus::OriginIsUnreachable => "OriginIsUnreachable",
            HttpStatus::ATimeoutOccurred => "ATimeoutOccurred",
            HttpStatus::SslHandshakeFailed => "SSLHandshakeFailed",
            HttpStatus::InvalidSsl => "InvalidSSL",
            HttpStatus::RailgunError => "RailgunError",
            HttpStatus::SiteIsFrozen => "SiteIsFrozen",
            HttpStatus::NetworkReadTimeoutError => "NetworkReadTimeoutError",
            HttpStatus::NetworkConnectTimeoutError => "NetworkConnectTimeoutError",
            HttpStatus::Unknown => "Unknown",
        }
    }

    #[inline]
    fn wire(self) -> u16 {
        self.code()
    }
}

impl TryFrom<u16> for HttpStatus {
    type Error = EnumError;

    fn try_from(code: u16) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl From<HttpStatus> for u16 {
    fn from(status: HttpStatus) -> Self {
        status.code()
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code(), self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_status_code_values() {
        assert_eq!(HttpStatus::Ok.code(), 200);
        assert_eq!(HttpStatus::Created.code(), 201);
        assert_eq!(HttpStatus::NoContent.code(), 204);
        assert_eq!(HttpStatus::MovedPermanently.code(), 301);
        assert_eq!(HttpStatus::NotFound.code(), 404);
        assert_eq!(HttpStatus::ImATeapot.code(), 418);
        assert_eq!(HttpStatus::InternalServerError.code(), 500);
        assert_eq!(HttpStatus::ServiceUnavailable.code(), 503);
        assert_eq!(HttpStatus::ConnectionTimedOut.code(), 522);
    }

    #[test]
    fn test_lookup_by_code() {
        assert_eq!(HttpStatus::from_code(200).unwrap(), HttpStatus::Ok);
        assert_eq!(HttpStatus::from_code(404).unwrap(), HttpStatus::NotFound);
        assert_eq!(HttpStatus::try_from(418).unwrap(), HttpStatus::ImATeapot);
        assert_eq!(HttpStatus::from_code(0).unwrap(), HttpStatus::Unknown);

        let err = HttpStatus::from_code(299).unwrap_err();
        assert_eq!(err.to_string(), "Invalid HTTP status: 299");
        assert!(!HttpStatus::is_valid(999));
    }

    #[test]
    fn test_resolve_falls_back_to_unknown() {
        assert_eq!(HttpStatus::resolve(503), HttpStatus::ServiceUnavailable);
        assert_eq!(HttpStatus::resolve(999), HttpStatus::Unknown);
        assert_eq!(HttpStatus::resolve(999).message(), "Unknown Error");
    }

    #[test]
    fn test_teapot() {
        let s = HttpStatus::ImATeapot;
        assert_eq!(s.message(), "I'm a teapot");
        assert_eq!(s.category(), "Client Error");
        assert!(s.is_client_error());
        assert!(!s.is_server_error());
    }

    #[test]
    fn test_messages() {
        assert_eq!(HttpStatus::Ok.message(), "OK");
        assert_eq!(HttpStatus::NotFound.message(), "Not Found");
        assert_eq!(HttpStatus::ServiceUnavailable.message(), "Service Unavailable");
        assert_eq!(HttpStatus::UnknownError.message(), "Unknown Error");
        assert_eq!(HttpStatus::InvalidSsl.message(), "Invalid SSL Certificate");
    }

    #[test]
    fn test_reason_phrase_for_unmapped_code_is_empty() {
        assert_eq!(HttpStatus::reason_phrase(404), "Not Found");
        assert_eq!(HttpStatus::reason_phrase(299), "");
        assert_eq!(HttpStatus::reason_phrase(0), "Unknown Error");
    }

    #[test]
    fn test_category_helpers() {
        assert!(HttpStatus::Ok.is_success());
        assert!(HttpStatus::MovedPermanently.is_redirection());
        assert!(HttpStatus::BadRequest.is_client_error());
        assert!(HttpStatus::InternalServerError.is_server_error());
        assert!(HttpStatus::EarlyHints.is_informational());

        assert!(!HttpStatus::Ok.is_client_error());
        assert!(!HttpStatus::Ok.is_server_error());
        assert!(!HttpStatus::Ok.is_redirection());
    }

    #[test]
    fn test_is_error_spans_client_and_server_bands() {
        assert!(HttpStatus::NotFound.is_error());
        assert!(HttpStatus::BadGateway.is_error());
        assert!(HttpStatus::ConnectionTimedOut.is_error());
        assert!(!HttpStatus::Ok.is_error());
        assert!(!HttpStatus::Found.is_error());
        assert!(!HttpStatus::Continue.is_error());
        assert!(!HttpStatus::Unknown.is_error());
    }

    #[test]
    fn test_unknown_matches_no_band() {
        let s = HttpStatus::Unknown;
        assert!(!s.is_informational());
        assert!(!s.is_success());
        assert!(!s.is_redirection());
        assert!(!s.is_client_error());
        assert!(!s.is_server_error());
        assert_eq!(s.category(), "Unknown");
        assert_eq!(s.status_category(), None);
    }

    #[test]
    fn test_grouped_messages() {
        let success = HttpStatus::messages_in(StatusCodeCategory::Success);
        assert_eq!(success.get(&200), Some(&"OK"));
        assert!(!success.contains_key(&404));

        let client = HttpStatus::messages_in(StatusCodeCategory::ClientError);
        assert_eq!(client.get(&404), Some(&"Not Found"));

        let server = HttpStatus::messages_in(StatusCodeCategory::ServerError);
        assert_eq!(server.get(&500), Some(&"Internal Server Error"));
        assert!(!server.contains_key(&0));
    }

    #[test]
    fn test_codes_are_unique() {
        let mut codes = HttpStatus::wires();
        let total = codes.len();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), total);
    }

    #[test]
    fn test_status_record() {
        let json = serde_json::to_value(HttpStatus::NotFound.to_status_record()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": 404, "message": "Not Found", "category": "Client Error" })
        );
    }

    #[test]
    fn test_record_keeps_closed_set_shape() {
        let record = HttpStatus::ImATeapot.to_record();
        assert_eq!(record.name, "ImATeapot");
        assert_eq!(record.value, 418);
        let json = serde_json::to_value(record).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "ImATeapot", "value": 418 }));
    }

    #[test]
    fn test_display() {
        assert_eq!(HttpStatus::NotFound.to_string(), "404 Not Found");
    }

    proptest! {
        #[test]
        fn prop_bands_partition_members(idx in 0usize..HttpStatus::ALL.len()) {
            let s = HttpStatus::ALL[idx];
            let hits = [
                s.is_informational(),
                s.is_success(),
                s.is_redirection(),
                s.is_client_error(),
                s.is_server_error(),
            ]
            .iter()
            .filter(|b| **b)
            .count();
            if s == HttpStatus::Unknown {
                prop_assert_eq!(hits, 0);
            } else {
                prop_assert_eq!(hits, 1);
            }
        }

        #[test]
        fn prop_validity_agrees_with_lookup(code in any::<u16>()) {
            prop_assert_eq!(HttpStatus::is_valid(code), HttpStatus::from_code(code).is_ok());
        }
    }
}
