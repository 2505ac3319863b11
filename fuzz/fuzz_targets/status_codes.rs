#![no_main]

use libfuzzer_sys::fuzz_target;

use bibo_http::{HttpStatus, RedirectType, StatusCodeCategory};

fuzz_target!(|code: u16| {
    let status = HttpStatus::resolve(code);
    if HttpStatus::is_valid(code) {
        assert_eq!(status.code(), code);
        assert_eq!(HttpStatus::reason_phrase(code), status.message());
    } else {
        assert_eq!(status, HttpStatus::Unknown);
        assert_eq!(HttpStatus::reason_phrase(code), "");
    }

    if let Some(category) = StatusCodeCategory::from_code(code) {
        assert!(category.code_range().contains(&code));
    }

    assert_eq!(RedirectType::is_valid(code), RedirectType::from_int(code).is_ok());
});
