use mask_core::{FailureRecord, FieldId, FieldStore};
use phone_format::{PhoneFormatter, ValidationFailure};

/// Type `input` key by key into a fresh field, then settle it.
fn settle(input: &str) -> (Option<String>, Vec<FailureRecord<ValidationFailure>>) {
    let mut store = FieldStore::new(PhoneFormatter::new());
    let id = FieldId::from_raw(7);
    store.type_str(id, input);
    let mut failures: Vec<FailureRecord<ValidationFailure>> = Vec::new();
    let value = store.value(id, &mut failures);
    (value, failures)
}

fn assert_fails(input: &str, value: &str, text: &str, code: &str) {
    let (actual, failures) = settle(input);
    assert_eq!(actual.as_deref(), Some(value), "value of {input:?}");
    let first = failures
        .first()
        .unwrap_or_else(|| panic!("{input:?} did not fail to parse"));
    assert_eq!(first.field, FieldId::from_raw(7));
    assert_eq!(first.text, text);
    assert_eq!(first.failure.code(), code);
}

#[test]
fn number_too_short() {
    assert_fails("206", "206", "(206) ", "phone-formatter.number-too-short");
}

#[test]
fn area_code_starting_with_zero() {
    assert_fails(
        "062 659 0912",
        "0626590912",
        "(062) 659-0912",
        "phone-formatter.area-code-zero",
    );
}

#[test]
fn area_code_starting_with_one() {
    // A leading 1 is taken as a trunk prefix, which skews the grouping too.
    assert_fails(
        "162 659 0912",
        "1626590912",
        "1 (626) 590-912",
        "phone-formatter.area-code-one",
    );
}

#[test]
fn area_code_like_n9n() {
    assert_fails(
        "898 659 0912",
        "8986590912",
        "(898) 659-0912",
        "phone-formatter.area-code-n9n",
    );
}

#[test]
fn central_office_starting_with_one() {
    assert_fails(
        "206 123 0912",
        "2061230912",
        "(206) 123-0912",
        "phone-formatter.central-office-one",
    );
}

#[test]
fn central_office_like_n11() {
    assert_fails(
        "206 911 0912",
        "2069110912",
        "(206) 911-0912",
        "phone-formatter.central-office-n11",
    );
}

#[test]
fn country_code_is_ignored_for_area_code() {
    assert_fails(
        "1 051 659 0712",
        "10516590712",
        "1 (051) 659-0712",
        "phone-formatter.area-code-zero",
    );
}

#[test]
fn country_code_is_ignored_for_central_office() {
    assert_fails(
        "1 206 123 0712",
        "12061230712",
        "1 (206) 123-0712",
        "phone-formatter.central-office-one",
    );
}

#[test]
fn valid_numbers_do_not_notify() {
    for input in ["415 555 1234", "1 415 555 1234", "+44 207 946 0958"] {
        let (value, failures) = settle(input);
        assert!(value.is_some());
        assert!(failures.is_empty(), "{input:?}: {failures:?}");
    }
}

#[test]
fn blur_settles_and_notifies_once() {
    let mut store = FieldStore::new(PhoneFormatter::new());
    let id = FieldId::from_raw(1);
    store.type_str(id, "0626590912");

    let mut failures: Vec<FailureRecord<ValidationFailure>> = Vec::new();
    assert_eq!(store.blur(id, &mut failures).as_deref(), Some("0626590912"));
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].failure, ValidationFailure::AreaCodeZero);
}

#[test]
fn invalid_numbers_are_not_blocked_while_typing() {
    let mut store = FieldStore::new(PhoneFormatter::new());
    let id = FieldId::from_raw(1);
    assert_eq!(store.type_str(id, "0626590912"), 10);
    assert_eq!(store.get(id), Some("(062) 659-0912"));
}
