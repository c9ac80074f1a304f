use std::fmt;
use std::ops::Range;

/// An ordered sequence of ASCII decimal digits, with no punctuation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DigitString(String);

impl DigitString {
    /// Wrap `s` if it consists of digits only.
    pub fn new(s: impl Into<String>) -> Option<Self> {
        let s = s.into();
        s.bytes().all(|b| b.is_ascii_digit()).then_some(Self(s))
    }

    /// Keep the digits of `raw`, dropping everything else.
    ///
    /// ```
    /// use phone_format::DigitString;
    ///
    /// assert_eq!(DigitString::extract("+1 (415) 555-1234").as_str(), "14155551234");
    /// assert!(DigitString::extract("call me").is_empty());
    /// ```
    pub fn extract(raw: &str) -> Self {
        Self(raw.chars().filter(char::is_ascii_digit).collect())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn starts_with(&self, digit: char) -> bool {
        self.0.starts_with(digit)
    }

    /// Drop digits past `len`.
    pub fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    /// The trailing `n` digits (all of them when there are fewer).
    pub fn last(&self, n: usize) -> DigitString {
        let skip = self.len().saturating_sub(n);
        Self(self.0[skip..].to_string())
    }

    /// A copy with the digits in `range` replaced by `with`.
    ///
    /// The range is clamped to the string.
    pub fn splice(&self, range: Range<usize>, with: &DigitString) -> DigitString {
        let end = range.end.min(self.len());
        let start = range.start.min(end);
        let mut out = String::with_capacity(self.len() - (end - start) + with.len());
        out.push_str(&self.0[..start]);
        out.push_str(&with.0);
        out.push_str(&self.0[end..]);
        Self(out)
    }

    /// A copy with the digits in `range` removed.
    pub fn without(&self, range: Range<usize>) -> DigitString {
        self.splice(range, &DigitString::default())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<char> for DigitString {
    /// A one-digit string, or an empty one for non-digits.
    fn from(ch: char) -> Self {
        if ch.is_ascii_digit() {
            Self(ch.to_string())
        } else {
            Self::default()
        }
    }
}

impl AsRef<str> for DigitString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DigitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
