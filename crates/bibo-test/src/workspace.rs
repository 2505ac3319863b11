//! Workspace-wide audit over every enumeration

use bibo_app::{
    ApiVersion, AppVersion, CacheDriver, DatabaseDriver, Environment, LogLevel, ResponseBufferSize,
};
use bibo_core::ClosedSet;
use bibo_crypto::{CipherAlgo, CryptoVersion, HashAlgorithm};
use bibo_http::{ContentType, HttpMethod, HttpStatus, RedirectType, SameSite, StatusCodeCategory};

use crate::{audit_registry, audit_round_trip, audit_validity, AuditFailure, AuditResult};

/// Inputs no enumeration accepts, or accepts only after case folding
pub const PROBE_INPUTS: &[&str] = &[
    "",
    " ",
    "invalid",
    "FiLe",
    "get",
    "Client Error",
    "application/json; charset=utf-8",
    "*",
    "SHA256",
    "v1",
    "none",
    "8192",
    "\u{0}",
    "ünïcode",
];

/// Audit every string-valued enumeration: registry, round trip, validity
fn audit_string_set<T, P, V>(kind: &'static str, parse: P, is_valid: V) -> AuditResult
where
    T: ClosedSet<Wire = &'static str>,
    P: Fn(&str) -> Option<T> + Copy,
    V: Fn(&str) -> bool,
{
    audit_registry::<T>(kind)?;
    audit_round_trip(kind, parse)?;
    audit_validity(kind, parse, is_valid, PROBE_INPUTS)
}

/// Run every audit, collecting all failures
pub fn audit_workspace() -> Vec<AuditFailure> {
    let results = [
        audit_string_set(
            "HttpMethod",
            |s| HttpMethod::parse(s).ok(),
            HttpMethod::is_valid_method,
        ),
        audit_string_set(
            "StatusCodeCategory",
            |s| StatusCodeCategory::parse(s).ok(),
            StatusCodeCategory::is_valid,
        ),
        audit_string_set(
            "ContentType",
            |s| ContentType::parse(s).ok(),
            ContentType::is_valid,
        ),
        audit_string_set("SameSite", |s| SameSite::parse(s).ok(), SameSite::is_valid),
        audit_string_set(
            "HashAlgorithm",
            HashAlgorithm::parse,
            HashAlgorithm::is_valid,
        ),
        audit_string_set(
            "CipherAlgo",
            |s| CipherAlgo::parse(s).ok(),
            CipherAlgo::is_valid,
        ),
        audit_string_set(
            "CryptoVersion",
            |s| CryptoVersion::parse(s).ok(),
            CryptoVersion::is_valid,
        ),
        audit_string_set(
            "CacheDriver",
            |s| CacheDriver::parse(s).ok(),
            CacheDriver::is_valid,
        ),
        audit_string_set(
            "DatabaseDriver",
            |s| DatabaseDriver::parse(s).ok(),
            DatabaseDriver::is_valid,
        ),
        audit_string_set(
            "Environment",
            |s| Environment::parse(s).ok(),
            Environment::is_valid,
        ),
        audit_string_set("LogLevel", |s| LogLevel::parse(s).ok(), LogLevel::is_valid),
        audit_string_set(
            "AppVersion",
            |s| AppVersion::parse(s).ok(),
            AppVersion::is_valid,
        ),
        audit_string_set(
            "ApiVersion",
            |s| ApiVersion::parse(s).ok(),
            ApiVersion::is_valid,
        ),
        audit_registry::<HttpStatus>("HttpStatus"),
        audit_registry::<RedirectType>("RedirectType"),
        audit_registry::<ResponseBufferSize>("ResponseBufferSize"),
    ];

    results.into_iter().filter_map(Result::err).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    use bibo_core::CaseProjection;

    #[test]
    fn test_workspace_is_clean() {
        let failures = audit_workspace();
        assert!(failures.is_empty(), "{failures:#?}");
    }

    #[test]
    fn test_cache_driver_scenarios() {
        assert_eq!(CacheDriver::parse("FiLe").unwrap(), CacheDriver::File);
        assert_eq!(
            CacheDriver::parse("invalid").unwrap_err().to_string(),
            "Invalid cache driver: invalid"
        );
    }

    #[test]
    fn test_teapot_scenario() {
        let s = HttpStatus::from_code(418).unwrap();
        assert_eq!(s.message(), "I'm a teapot");
        assert_eq!(s.category(), "Client Error");
        assert!(s.is_client_error());
    }

    #[test]
    fn test_sha256_scenario() {
        let alg = HashAlgorithm::Sha256;
        assert_eq!(alg.length(), 32);
        assert_eq!(
            alg.digest_hex(b"Hello, World!"),
            "dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f"
        );
    }

    #[test]
    fn test_header_scenario() {
        assert_eq!(
            ContentType::from_header("application/json; charset=utf-8"),
            Some(ContentType::Json)
        );
    }

    #[test]
    fn test_redirect_scenario() {
        let r = RedirectType::from_int(301).unwrap();
        assert_eq!(r, RedirectType::Permanent);
        assert_eq!(r.to_string(), "Permanent Redirect");
    }

    #[test]
    fn test_status_category_agrees_with_category_type() {
        for status in HttpStatus::all() {
            let expected = StatusCodeCategory::from_code(status.code())
                .map_or("Unknown", |c| c.as_str());
            assert_eq!(status.category(), expected, "{status}");
        }
    }

    proptest! {
        #[test]
        fn prop_band_partition(code in 100u16..600) {
            let category = StatusCodeCategory::from_code(code);
            prop_assert!(category.is_some());
            let holders = StatusCodeCategory::all()
                .iter()
                .filter(|c| c.code_range().contains(&code))
                .count();
            prop_assert_eq!(holders, 1);
            if let Some(status) = HttpStatus::try_from_code(code) {
                prop_assert_eq!(status.status_category(), category);
            }
        }

        #[test]
        fn prop_validity_agrees_with_parse(input in "\\PC{0,24}") {
            prop_assert_eq!(
                CacheDriver::is_valid(&input),
                CacheDriver::parse(&input).is_ok()
            );
            prop_assert_eq!(
                DatabaseDriver::is_valid(&input),
                DatabaseDriver::parse(&input).is_ok()
            );
            prop_assert_eq!(
                HttpMethod::is_valid_method(&input),
                HttpMethod::parse(&input).is_ok()
            );
            prop_assert_eq!(
                ContentType::is_valid(&input),
                ContentType::parse(&input).is_ok()
            );
            prop_assert_eq!(
                LogLevel::is_valid(&input),
                LogLevel::parse(&input).is_ok()
            );
            prop_assert_eq!(
                HashAlgorithm::is_valid(&input),
                HashAlgorithm::parse(&input).is_some()
            );
        }

        #[test]
        fn prop_parse_is_case_insensitive(idx in 0usize..15, upper in any::<bool>()) {
            let driver = DatabaseDriver::all()[idx];
            let input = if upper { driver.uppercase() } else { driver.title_case() };
            prop_assert_eq!(DatabaseDriver::parse(&input).unwrap(), driver);
        }

        #[test]
        fn prop_redirect_validity(code in any::<u16>()) {
            prop_assert_eq!(RedirectType::is_valid(code), RedirectType::from_int(code).is_ok());
            if let Ok(r) = RedirectType::from_int(code) {
                prop_assert_eq!(r.to_int(), code);
            }
        }
    }
}
