//! HTTP request methods
//!
//! Method properties follow RFC 9110 section 9.2 and are fixed membership
//! lists, not derived from the token.

use std::fmt;
use std::str::FromStr;

use bibo_core::{CaseProjection, ClosedSet, EnumError, EnumResult};

/// CGI variable carrying the inbound request method
pub const REQUEST_METHOD_VAR: &str = "REQUEST_METHOD";

/// HTTP request method
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum HttpMethod {
    /// Retrieve a representation
    #[default]
    Get,
    /// Submit data for processing
    Post,
    /// Replace the target resource
    Put,
    /// Remove the target resource
    Delete,
    /// Partially modify the target resource
    Patch,
    /// `GET` without a body
    Head,
    /// Describe communication options
    Options,
    /// Open a tunnel
    Connect,
    /// Loop-back test
    Trace,
    /// Route wildcard matching every method
    Any,
}

/// Source of the inbound request method token
pub trait RequestContext {
    /// Raw method token, `None` when the host did not provide one
    fn method_token(&self) -> Option<String>;
}

/// Reads the method from the process environment (CGI convention)
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl RequestContext for ProcessEnv {
    fn method_token(&self) -> Option<String> {
        std::env::var(REQUEST_METHOD_VAR).ok()
    }
}

impl HttpMethod {
    /// Parse a method token, case-insensitively.
    ///
    /// The token is uppercased before matching; errors carry the uppercased
    /// token.
    pub fn parse(method: &str) -> EnumResult<Self> {
        let method = method.to_ascii_uppercase();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.wire() == method)
            .ok_or(EnumError::InvalidHttpMethod(method))
    }

    /// Whether `method` is a known token after uppercasing
    pub fn is_valid_method(method: &str) -> bool {
        Self::parse(method).is_ok()
    }

    /// Method of the inbound request, `GET` when the context has none
    pub fn from_request<C: RequestContext + ?Sized>(ctx: &C) -> EnumResult<Self> {
        match ctx.method_token() {
            Some(token) => Self::parse(&token),
            None => {
                tracing::debug!("request context has no method, assuming GET");
                Ok(HttpMethod::Get)
            }
        }
    }

    /// Method of the inbound request as seen by the process environment
    pub fn from_process_env() -> EnumResult<Self> {
        Self::from_request(&ProcessEnv)
    }

    /// No intended state change on the server
    pub fn is_safe(self) -> bool {
        matches!(
            self,
            HttpMethod::Get | HttpMethod::Head | HttpMethod::Options | HttpMethod::Trace
        )
    }

    /// Repeating the request has the same effect as sending it once
    pub fn is_idempotent(self) -> bool {
        matches!(
            self,
            HttpMethod::Get
                | HttpMethod::Put
                | HttpMethod::Delete
                | HttpMethod::Head
                | HttpMethod::Options
                | HttpMethod::Trace
        )
    }

    /// Responses may be stored for reuse
    pub fn is_cacheable(self) -> bool {
        matches!(
            self,
            HttpMethod::Get | HttpMethod::Head | HttpMethod::Options
        )
    }

    /// Changes server state
    pub fn is_write_operation(self) -> bool {
        matches!(
            self,
            HttpMethod::Post | HttpMethod::Put | HttpMethod::Delete | HttpMethod::Patch
        )
    }

    /// Only retrieves state; `CONNECT` and `ANY` are neither read nor write
    pub fn is_read_operation(self) -> bool {
        matches!(
            self,
            HttpMethod::Get | HttpMethod::Head | HttpMethod::Options | HttpMethod::Trace
        )
    }
}

impl ClosedSet for HttpMethod {
    type Wire = &'static str;

    const ALL: &'static [Self] = &[
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Connect,
        HttpMethod::Trace,
        HttpMethod::Any,
    ];

    #[inline]
    fn name(self) -> &'static str {
        self.wire()
    }

    fn wire(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Connect => "CONNECT",
            HttpMethod::Trace => "TRACE",
            HttpMethod::Any => "ANY",
        }
    }
}

impl CaseProjection for HttpMethod {}

impl FromStr for HttpMethod {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}
