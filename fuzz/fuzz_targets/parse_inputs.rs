#![no_main]

use libfuzzer_sys::fuzz_target;

use bibo_app::{CacheDriver, DatabaseDriver, Environment, LogLevel, ResponseBufferSize};
use bibo_core::ClosedSet;
use bibo_crypto::{CipherAlgo, HashAlgorithm};
use bibo_http::{ContentType, HttpMethod, SameSite, StatusCodeCategory};

fuzz_target!(|input: &str| {
    // Validity must agree with parse, and a successful parse must land on a
    // member whose wire value folds back to the input.
    if let Ok(d) = CacheDriver::parse(input) {
        assert!(CacheDriver::is_valid(input));
        assert!(d.wire().eq_ignore_ascii_case(input));
    } else {
        assert!(!CacheDriver::is_valid(input));
    }

    if let Ok(m) = HttpMethod::parse(input) {
        assert!(m.wire().eq_ignore_ascii_case(input));
    }

    assert_eq!(DatabaseDriver::is_valid(input), DatabaseDriver::parse(input).is_ok());
    assert_eq!(Environment::is_valid(input), Environment::parse(input).is_ok());
    assert_eq!(LogLevel::is_valid(input), LogLevel::parse(input).is_ok());
    assert_eq!(ContentType::is_valid(input), ContentType::parse(input).is_ok());
    assert_eq!(SameSite::is_valid(input), SameSite::parse(input).is_ok());
    assert_eq!(CipherAlgo::is_valid(input), CipherAlgo::parse(input).is_ok());
    assert_eq!(HashAlgorithm::is_valid(input), HashAlgorithm::parse(input).is_some());
    assert_eq!(
        StatusCodeCategory::is_valid(input),
        StatusCodeCategory::parse(input).is_ok()
    );
    assert_eq!(
        ResponseBufferSize::is_valid(input),
        ResponseBufferSize::parse(input).is_ok()
    );

    let _ = ContentType::from_header(input);
    let _ = ContentType::from_path(input);
});
