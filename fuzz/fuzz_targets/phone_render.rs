#![no_main]

use libfuzzer_sys::fuzz_target;
use phone_format::{DigitString, MAX_DIGITS, NATIONAL_LEN, PhoneFormatter};

// Longest country code a layout holds.
const COUNTRY_CODE_LEN: usize = 3;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    let formatter = PhoneFormatter::new();
    let text = formatter.format(raw);

    assert_eq!(formatter.format(text.as_str()), text, "format is not idempotent");
    assert!(text.chars().all(|c| c.is_ascii_digit() || PhoneFormatter::is_delimiter(c)));

    let kept = DigitString::extract(&text);
    let all = DigitString::extract(raw);
    assert!(kept.len() <= MAX_DIGITS);
    assert!(all.as_str().starts_with(kept.as_str()));
    if all.len() <= NATIONAL_LEN + COUNTRY_CODE_LEN {
        assert_eq!(kept, all, "digits of {raw:?} were dropped");
    }

    let _ = formatter.parse(&text);
});
