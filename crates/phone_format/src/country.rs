//! International calling codes used to split `+<country><national>` input.
//!
//! Only one- and two-digit codes need to be known: any prefix that is not one
//! of them is treated as a three-digit code once three digits exist. The
//! three-digit entries below exist so hosts can show a country hint.

/// A calling code and the ISO 3166 initials of its primary country.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CallingCode {
    pub code: &'static str,
    pub iso: &'static str,
}

const fn cc(code: &'static str, iso: &'static str) -> CallingCode {
    CallingCode { code, iso }
}

static CALLING_CODES: &[CallingCode] = &[
    cc("1", "US"),
    cc("7", "RU"),
    cc("20", "EG"),
    cc("27", "ZA"),
    cc("30", "GR"),
    cc("31", "NL"),
    cc("32", "BE"),
    cc("33", "FR"),
    cc("34", "ES"),
    cc("36", "HU"),
    cc("39", "IT"),
    cc("40", "RO"),
    cc("41", "CH"),
    cc("43", "AT"),
    cc("44", "GB"),
    cc("45", "DK"),
    cc("46", "SE"),
    cc("47", "NO"),
    cc("48", "PL"),
    cc("49", "DE"),
    cc("51", "PE"),
    cc("52", "MX"),
    cc("53", "CU"),
    cc("54", "AR"),
    cc("55", "BR"),
    cc("56", "CL"),
    cc("57", "CO"),
    cc("58", "VE"),
    cc("60", "MY"),
    cc("61", "AU"),
    cc("62", "ID"),
    cc("63", "PH"),
    cc("64", "NZ"),
    cc("65", "SG"),
    cc("66", "TH"),
    cc("81", "JP"),
    cc("82", "KR"),
    cc("84", "VN"),
    cc("86", "CN"),
    cc("90", "TR"),
    cc("91", "IN"),
    cc("92", "PK"),
    cc("93", "AF"),
    cc("94", "LK"),
    cc("95", "MM"),
    cc("98", "IR"),
    cc("212", "MA"),
    cc("234", "NG"),
    cc("254", "KE"),
    cc("351", "PT"),
    cc("353", "IE"),
    cc("358", "FI"),
    cc("380", "UA"),
    cc("852", "HK"),
    cc("886", "TW"),
    cc("966", "SA"),
    cc("971", "AE"),
    cc("972", "IL"),
];

/// Longest calling code, in digits.
pub(crate) const MAX_COUNTRY_CODE_LEN: usize = 3;

/// Look up a calling code by its digits.
///
/// ```
/// use phone_format::calling_code;
///
/// assert_eq!(calling_code("44").map(|c| c.iso), Some("GB"));
/// assert_eq!(calling_code("5"), None);
/// ```
pub fn calling_code(code: &str) -> Option<&'static CallingCode> {
    CALLING_CODES.iter().find(|c| c.code == code)
}

/// Length of the country code at the start of `digits`, typed after a `+`.
///
/// A known one- or two-digit code wins; otherwise the code is three digits
/// long once three digits exist. `None` while the code is still ambiguous.
pub(crate) fn country_code_len(digits: &str) -> Option<usize> {
    (1..MAX_COUNTRY_CODE_LEN)
        .filter(|&len| digits.len() >= len)
        .find(|&len| calling_code(&digits[..len]).is_some())
        .or_else(|| (digits.len() >= MAX_COUNTRY_CODE_LEN).then_some(MAX_COUNTRY_CODE_LEN))
}
