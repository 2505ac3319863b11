//! Media types
//!
//! A media type can be derived from:
//! - A `Content-Type` header line (parameters after `;` are dropped)
//! - A file extension
//! - A file path (extension extracted first)

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use bibo_core::{CaseProjection, ClosedSet, EnumError, EnumResult};

/// Media type of a request or response body
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// `application/json`
    Json,
    /// `application/xml`
    Xml,
    /// `text/html`
    Html,
    /// `application/x-www-form-urlencoded`
    FormUrlEncoded,
    /// `text/plain`
    Text,
    /// `multipart/form-data`
    MultipartFormData,
    /// `application/octet-stream`
    OctetStream,
    /// `*/*`
    Any,
}

impl ContentType {
    /// Parse a bare media type, case-insensitively.
    ///
    /// Both `*/*` and `*` denote `Any`.
    pub fn parse(value: &str) -> EnumResult<Self> {
        match value.to_ascii_lowercase().as_str() {
            "application/json" => Ok(ContentType::Json),
            "application/xml" => Ok(ContentType::Xml),
            "text/html" => Ok(ContentType::Html),
            "application/x-www-form-urlencoded" => Ok(ContentType::FormUrlEncoded),
            "text/plain" => Ok(ContentType::Text),
            "multipart/form-data" => Ok(ContentType::MultipartFormData),
            "application/octet-stream" => Ok(ContentType::OctetStream),
            "*/*" | "*" => Ok(ContentType::Any),
            _ => Err(EnumError::InvalidContentType(value.to_string())),
        }
    }

    /// Whether `value` is a known bare media type
    pub fn is_valid(value: &str) -> bool {
        Self::parse(value).is_ok()
    }

    /// Media type of a header value such as `application/json; charset=utf-8`
    pub fn from_header(header: &str) -> Option<Self> {
        let essence = header.split(';').next()?.trim();
        if essence.is_empty() {
            return None;
        }
        Self::parse(essence).ok()
    }

    /// Media type for an extension without the leading dot, case-insensitively
    pub fn from_file_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(ContentType::Json),
            "xml" => Some(ContentType::Xml),
            "html" | "htm" => Some(ContentType::Html),
            "txt" => Some(ContentType::Text),
            "form" => Some(ContentType::FormUrlEncoded),
            "multipart" => Some(ContentType::MultipartFormData),
            "bin" | "octet-stream" => Some(ContentType::OctetStream),
            _ => None,
        }
    }

    /// Media type implied by the extension of `path`; the file need not exist
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?;
        Self::from_file_extension(extension)
    }

    /// Like [`ContentType::from_path`], but a missing file yields `None`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Option<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no such file, media type unknown");
            return None;
        }
        Self::from_path(path)
    }

    #[inline]
    pub fn is_json(self) -> bool {
        self == ContentType::Json
    }

    #[inline]
    pub fn is_xml(self) -> bool {
        self == ContentType::Xml
    }

    #[inline]
    pub fn is_html(self) -> bool {
        self == ContentType::Html
    }

    #[inline]
    pub fn is_form_url_encoded(self) -> bool {
        self == ContentType::FormUrlEncoded
    }

    #[inline]
    pub fn is_text(self) -> bool {
        self == ContentType::Text
    }

    #[inline]
    pub fn is_multipart_form_data(self) -> bool {
        self == ContentType::MultipartFormData
    }

    #[inline]
    pub fn is_octet_stream(self) -> bool {
        self == ContentType::OctetStream
    }

    #[inline]
    pub fn is_any(self) -> bool {
        self == ContentType::Any
    }
}

impl ClosedSet for ContentType {
    type Wire = &'static str;

    const ALL: &'static [Self] = &[
        ContentType::Json,
        ContentType::Xml,
        ContentType::Html,
        ContentType::FormUrlEncoded,
        ContentType::Text,
        ContentType::MultipartFormData,
        ContentType::OctetStream,
        ContentType::Any,
    ];

    fn name(self) -> &'static str {
        match self {
            ContentType::Json => "JSON",
            ContentType::Xml => "XML",
            ContentType::Html => "HTML",
            ContentType::FormUrlEncoded => "FORM_URLENCODED",
            ContentType::Text => "TEXT",
            ContentType::MultipartFormData => "MULTIPART_FORM_DATA",
            ContentType::OctetStream => "OCTET_STREAM",
            ContentType::Any => "ANY",
        }
    }

    fn wire(self) -> &'static str {
        match self {
            ContentType::Json => "application/json",
            ContentType::Xml => "application/xml",
            ContentType::Html => "text/html",
            ContentType::FormUrlEncoded => "application/x-www-form-urlencoded",
            ContentType::Text => "text/plain",
            ContentType::MultipartFormData => "multipart/form-data",
            ContentType::OctetStream => "application/octet-stream",
            ContentType::Any => "*/*",
        }
    }
}

impl CaseProjection for ContentType {}

impl FromStr for ContentType {
    type Err = EnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire())
    }
}
