//! Phone number layouts and rendering.
//!
//! A layout is a pure function of the digits and the first character of the
//! raw input; it is re-derived on every render and never stored.

use crate::country::{MAX_COUNTRY_CODE_LEN, country_code_len};
use crate::digits::DigitString;
use std::ops::Range;

/// Digits in a national (area code + exchange + subscriber) number.
pub const NATIONAL_LEN: usize = 10;

/// Delimiters of `(AAA) PPP-SSSS`, keyed by output position relative to the
/// start of the national number.
const NATIONAL_DELIMITERS: [(usize, char); 4] = [(0, '('), (4, ')'), (5, ' '), (9, '-')];

/// Digit offsets where the area code, exchange and subscriber groups start,
/// relative to the national number, plus its end.
const NATIONAL_GROUPS: [usize; 4] = [0, 3, 6, NATIONAL_LEN];

/// Classification of the first non-whitespace character of raw input.
///
/// A leading `+` asks for an international layout, and a leading digit `1` is
/// a trunk prefix. A `1` that follows a delimiter, as in `(123`, is part of
/// the area code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Lead {
    Plus,
    Digit,
    Other,
}

impl Lead {
    /// ```
    /// use phone_format::Lead;
    ///
    /// assert_eq!(Lead::of(" +1 415"), Lead::Plus);
    /// assert_eq!(Lead::of("1-415"), Lead::Digit);
    /// assert_eq!(Lead::of("(123"), Lead::Other);
    /// ```
    pub fn of(raw: &str) -> Lead {
        Lead::from_chars(raw.chars())
    }

    pub(crate) fn from_chars(chars: impl IntoIterator<Item = char>) -> Lead {
        match chars.into_iter().find(|c| !c.is_whitespace()) {
            Some('+') => Lead::Plus,
            Some(c) if c.is_ascii_digit() => Lead::Digit,
            _ => Lead::Other,
        }
    }
}

/// How a digit string is punctuated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layout {
    /// No digits and no `+`.
    Empty,
    /// `(AAA) PPP-SSSS`.
    Domestic10,
    /// `1 (AAA) PPP-SSSS`.
    Domestic11,
    /// `[+]<cc> (AAA) PPP-SSSS`.
    International { country_code_len: usize, plus: bool },
    /// A `+` followed by digits that do not yet name a country code.
    PendingCountryCode,
}

impl Layout {
    /// Guess the layout for `digits`, given how the raw input started.
    ///
    /// ```
    /// use phone_format::{DigitString, Layout, Lead};
    ///
    /// let guess = |raw: &str| Layout::guess(&DigitString::extract(raw), Lead::of(raw));
    /// assert_eq!(guess("415"), Layout::Domestic10);
    /// assert_eq!(guess("1415"), Layout::Domestic11);
    /// assert_eq!(guess("(141"), Layout::Domestic10);
    /// assert_eq!(guess("+5"), Layout::PendingCountryCode);
    /// assert_eq!(
    ///     guess("442068290752"),
    ///     Layout::International { country_code_len: 2, plus: false }
    /// );
    /// ```
    pub fn guess(digits: &DigitString, lead: Lead) -> Layout {
        let len = digits.len();
        if lead == Lead::Plus {
            // Digits past the national number all belong to the country code.
            return match country_code_len(digits.as_str()) {
                Some(known) => Layout::International {
                    country_code_len: known
                        .max(len.saturating_sub(NATIONAL_LEN))
                        .min(MAX_COUNTRY_CODE_LEN),
                    plus: true,
                },
                None => Layout::PendingCountryCode,
            };
        }

        if len == 0 {
            Layout::Empty
        } else if lead == Lead::Digit && digits.starts_with('1') && len <= NATIONAL_LEN + 1 {
            Layout::Domestic11
        } else if len <= NATIONAL_LEN {
            Layout::Domestic10
        } else {
            Layout::International {
                country_code_len: (len - NATIONAL_LEN).min(MAX_COUNTRY_CODE_LEN),
                plus: false,
            }
        }
    }

    /// Maximum number of digits this layout holds.
    pub fn capacity(self) -> usize {
        match self {
            Layout::Domestic10 => NATIONAL_LEN,
            Layout::Domestic11 => NATIONAL_LEN + 1,
            Layout::International {
                country_code_len, ..
            } => country_code_len + NATIONAL_LEN,
            Layout::Empty | Layout::PendingCountryCode => MAX_COUNTRY_CODE_LEN + NATIONAL_LEN,
        }
    }

    #[inline]
    pub fn has_plus(self) -> bool {
        matches!(
            self,
            Layout::PendingCountryCode | Layout::International { plus: true, .. }
        )
    }

    /// Number of digits before the national number.
    pub fn prefix_len(self) -> usize {
        match self {
            Layout::Empty | Layout::Domestic10 | Layout::PendingCountryCode => 0,
            Layout::Domestic11 => 1,
            Layout::International {
                country_code_len, ..
            } => country_code_len,
        }
    }

    /// Digit ranges of the contiguous groups (country code or leading `1`,
    /// area code, exchange, subscriber) for a string of `len` digits.
    pub fn groups(self, len: usize) -> Vec<Range<usize>> {
        let mut bounds = Vec::with_capacity(NATIONAL_GROUPS.len() + 1);
        match self {
            Layout::Empty => {}
            Layout::PendingCountryCode => bounds.extend([0, len]),
            _ => {
                let prefix = self.prefix_len();
                if prefix > 0 {
                    bounds.push(0);
                }
                bounds.extend(NATIONAL_GROUPS.iter().map(|at| prefix + at));
            }
        }

        bounds
            .windows(2)
            .map(|w| w[0].min(len)..w[1].min(len))
            .filter(|r| !r.is_empty())
            .collect()
    }

    /// First digit index of the group that contains digit `index - 1`, i.e.
    /// the group a caret at logical index `index` sits inside or right after.
    pub fn group_start(self, len: usize, index: usize) -> usize {
        let Some(last) = index.checked_sub(1) else {
            return 0;
        };
        self.groups(len)
            .into_iter()
            .find(|g| g.contains(&last))
            .map(|g| g.start)
            .unwrap_or(0)
    }

    /// Render `digits` with this layout's delimiters.
    ///
    /// Delimiters are emitted in front of the digit that follows them, and
    /// the delimiters directly after the last digit are emitted too, so a
    /// completed group carries its separator (`(415) `). Digits past
    /// [`capacity`](Self::capacity) are dropped.
    pub fn render(self, digits: &DigitString) -> String {
        if digits.is_empty() {
            return if self.has_plus() {
                "+".to_string()
            } else {
                String::new()
            };
        }
        if self == Layout::PendingCountryCode {
            return format!("+{digits}");
        }

        let mut out = String::with_capacity(digits.len() + 8);
        for ch in digits.as_str().chars().take(self.capacity()) {
            self.push_delimiters(&mut out);
            out.push(ch);
        }
        self.push_delimiters(&mut out);
        out
    }

    fn push_delimiters(self, out: &mut String) {
        while let Some(delimiter) = self.delimiter_at(out.len()) {
            out.push(delimiter);
        }
    }

    /// Delimiter that belongs at output position `pos`, if any.
    fn delimiter_at(self, pos: usize) -> Option<char> {
        let (prefix_end, national_start) = match self {
            Layout::Empty | Layout::PendingCountryCode => return None,
            Layout::Domestic10 => (None, 0),
            Layout::Domestic11 => (Some(1), 2),
            Layout::International {
                country_code_len,
                plus,
            } => {
                if plus && pos == 0 {
                    return Some('+');
                }
                let prefix_end = usize::from(plus) + country_code_len;
                (Some(prefix_end), prefix_end + 1)
            }
        };

        if prefix_end == Some(pos) {
            return Some(' ');
        }
        let rel = pos.checked_sub(national_start)?;
        NATIONAL_DELIMITERS
            .iter()
            .find(|(at, _)| *at == rel)
            .map(|(_, ch)| *ch)
    }
}
