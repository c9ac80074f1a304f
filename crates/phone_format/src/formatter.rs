use crate::country::{CallingCode, calling_code};
use crate::digits::DigitString;
use crate::error::{ConfigError, ValidationFailure};
use crate::layout::{Layout, Lead, NATIONAL_LEN};
use mask_core::{CaretState, EditOutcome, EditRequest, Parsed, TextFormatter};

/// Longest digit string [`PhoneFormatter::format`] keeps (E.164).
pub const MAX_DIGITS: usize = 15;

/// Characters the formatter inserts. They are fixed and never accepted as
/// typed input.
pub const DELIMITERS: [char; 5] = ['(', ')', ' ', '-', '+'];

/// Construction options for [`PhoneFormatter`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct PhoneFormatterConfig {
    /// Custom delimiter. Only `None` is accepted.
    pub delimiter: Option<char>,
}

/// Formats phone numbers as they are typed.
///
/// The formatter holds no per-field state; one value can serve any number of
/// fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PhoneFormatter {
    _private: (),
}

impl PhoneFormatter {
    pub fn new() -> Self {
        Self { _private: () }
    }

    pub fn with_config(config: &PhoneFormatterConfig) -> Result<Self, ConfigError> {
        if let Some(ch) = config.delimiter {
            return Err(ConfigError::InvalidConfiguration {
                reason: format!("delimiters are fixed, cannot use {ch:?}"),
            });
        }
        Ok(Self::new())
    }

    /// Always fails: the delimiter set cannot be customized.
    pub fn with_delimiter(delimiter: char) -> Result<Self, ConfigError> {
        Self::with_config(&PhoneFormatterConfig {
            delimiter: Some(delimiter),
        })
    }

    #[inline]
    pub fn is_delimiter(ch: char) -> bool {
        DELIMITERS.contains(&ch)
    }

    /// Format raw input, guessing the layout from its digits and its first
    /// character.
    ///
    /// A leading `+` selects an international layout and a leading `1` a
    /// trunk prefix; every other non-digit is dropped.
    pub fn format<'a>(&self, raw: impl Into<Option<&'a str>>) -> String {
        let Some(raw) = raw.into() else {
            return String::new();
        };
        self.render(DigitString::extract(raw), Lead::of(raw))
    }

    pub(crate) fn render(&self, mut digits: DigitString, lead: Lead) -> String {
        digits.truncate(MAX_DIGITS);
        Layout::guess(&digits, lead).render(&digits)
    }

    /// Layout `text` would be rendered with.
    pub fn layout_for(&self, text: &str) -> Layout {
        let mut digits = DigitString::extract(text);
        digits.truncate(MAX_DIGITS);
        Layout::guess(&digits, Lead::of(text))
    }

    /// Calling code of an international number, when it is a known one.
    ///
    /// ```
    /// use phone_format::PhoneFormatter;
    ///
    /// let formatter = PhoneFormatter::new();
    /// assert_eq!(formatter.country_for("+44 20 7946 0958").map(|c| c.iso), Some("GB"));
    /// assert_eq!(formatter.country_for("(415) 555-1234"), None);
    /// ```
    pub fn country_for(&self, text: &str) -> Option<&'static CallingCode> {
        match self.layout_for(text) {
            Layout::International {
                country_code_len, ..
            } => {
                let digits = DigitString::extract(text);
                calling_code(&digits.as_str()[..country_code_len])
            }
            Layout::Domestic11 => calling_code("1"),
            _ => None,
        }
    }

    /// Strip punctuation and any country code, keeping the national number.
    ///
    /// ```
    /// use phone_format::PhoneFormatter;
    ///
    /// let formatter = PhoneFormatter::new();
    /// assert_eq!(formatter.digits_without_country_code("+44 7570 127892").as_str(), "7570127892");
    /// assert_eq!(formatter.digits_without_country_code("(206) 82").as_str(), "20682");
    /// ```
    pub fn digits_without_country_code(&self, text: &str) -> DigitString {
        DigitString::extract(text).last(NATIONAL_LEN)
    }

    /// Check a national number against NANP rules.
    pub fn validate(&self, national: &DigitString) -> Result<(), ValidationFailure> {
        let d = national.as_bytes();
        if d.len() < NATIONAL_LEN {
            return Err(ValidationFailure::NumberTooShort);
        }

        let (area, exchange) = (&d[0..3], &d[3..6]);
        match area[0] {
            b'0' => return Err(ValidationFailure::AreaCodeZero),
            b'1' => return Err(ValidationFailure::AreaCodeOne),
            _ => {}
        }
        if area[1] == b'9' && area[2] == area[0] {
            return Err(ValidationFailure::AreaCodeN9N);
        }
        if exchange[0] == b'1' {
            return Err(ValidationFailure::CentralOfficeOne);
        }
        if exchange[1..] == *b"11" {
            return Err(ValidationFailure::CentralOfficeN11);
        }
        Ok(())
    }

    /// Parse formatted text into its digits, validating the national part.
    pub fn parse(&self, text: &str) -> Parsed<ValidationFailure> {
        let value = DigitString::extract(text).into_string();
        let failure = self
            .validate(&self.digits_without_country_code(text))
            .err();
        Parsed { value, failure }
    }
}

impl TextFormatter for PhoneFormatter {
    type Failure = ValidationFailure;

    fn format(&self, raw: Option<&str>) -> String {
        PhoneFormatter::format(self, raw)
    }

    fn translate_edit(&self, text: &str, caret: CaretState, edit: &EditRequest) -> EditOutcome {
        PhoneFormatter::translate_edit(self, text, caret, edit)
    }

    fn parse(&self, text: &str) -> Parsed<ValidationFailure> {
        PhoneFormatter::parse(self, text)
    }
}
