//! Error types for enumeration parsing

use thiserror::Error;

/// Parse failures across all enumerations.
///
/// Variants carry the offending input; HTTP methods are reported uppercased.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumError {
    // HTTP
    #[error("Invalid HTTP method: {0}")]
    InvalidHttpMethod(String),

    #[error("Invalid HTTP status: {0}")]
    InvalidHttpStatus(u16),

    #[error("Invalid status code category: {0}")]
    InvalidStatusCodeCategory(String),

    #[error("Invalid redirect type: {0}")]
    InvalidRedirectType(u16),

    #[error("Invalid content type: {0}")]
    InvalidContentType(String),

    #[error("Invalid SameSite value: {0}")]
    InvalidSameSite(String),

    // Crypto
    #[error("Invalid cipher algorithm: {0}")]
    InvalidCipherAlgo(String),

    #[error("Invalid crypto version: {0}")]
    InvalidCryptoVersion(String),

    #[error("Invalid key length: requested {requested}, max {max}")]
    InvalidKeyLength { requested: usize, max: usize },

    // Application
    #[error("Invalid cache driver: {0}")]
    InvalidCacheDriver(String),

    #[error("Invalid database driver: {0}")]
    InvalidDatabaseDriver(String),

    #[error("Invalid environment: {0}")]
    InvalidEnvironment(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("Invalid app version: {0}")]
    InvalidAppVersion(String),

    #[error("Invalid API version: {0}")]
    InvalidApiVersion(String),

    #[error("Invalid response buffer size: {0}")]
    InvalidResponseBufferSize(String),
}

/// Result type for enumeration parsing
pub type EnumResult<T> = Result<T, EnumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_carry_raw_input() {
        assert_eq!(
            EnumError::InvalidCacheDriver("invalid".into()).to_string(),
            "Invalid cache driver: invalid"
        );
        assert_eq!(
            EnumError::InvalidSameSite("Loose".into()).to_string(),
            "Invalid SameSite value: Loose"
        );
        assert_eq!(
            EnumError::InvalidRedirectType(200).to_string(),
            "Invalid redirect type: 200"
        );
    }

    #[test]
    fn test_key_length_message() {
        let err = EnumError::InvalidKeyLength {
            requested: 9000,
            max: 8160,
        };
        assert_eq!(err.to_string(), "Invalid key length: requested 9000, max 8160");
    }
}
