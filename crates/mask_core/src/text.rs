//! Offset utilities for masked text.
//!
//! Formatted text interleaves digits with delimiters. These functions convert
//! between byte offsets in that text and *logical digit indices* (positions
//! counted over digits only), which is the coordinate system carets are
//! tracked in across re-rendering.

/// Largest char boundary of `s` at or before `index`.
///
/// Hosts may hand over offsets that point past the text or into a
/// multi-byte character (a pasted `"–"`, say).
///
/// ```
/// use mask_core::clamp_to_char_boundary;
///
/// assert_eq!(clamp_to_char_boundary("4–1", 2), 1);
/// assert_eq!(clamp_to_char_boundary("4–1", 4), 4);
/// assert_eq!(clamp_to_char_boundary("4–1", 100), 5);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    (0..=index).rev().find(|&i| s.is_char_boundary(i)).unwrap_or(0)
}

/// Number of ASCII digits in `s`.
#[inline]
pub fn digit_count(s: &str) -> usize {
    s.bytes().filter(u8::is_ascii_digit).count()
}

/// Logical digit index of a caret at `offset`: the number of digits before it.
///
/// # Examples
///
/// ```
/// use mask_core::digit_index_at;
///
/// assert_eq!(digit_index_at("(415) 555-", 0), 0);
/// assert_eq!(digit_index_at("(415) 555-", 4), 3);
/// assert_eq!(digit_index_at("(415) 555-", 6), 3); // after ") "
/// assert_eq!(digit_index_at("(415) 555-", 99), 6);
/// ```
pub fn digit_index_at(s: &str, offset: usize) -> usize {
    let offset = clamp_to_char_boundary(s, offset);
    digit_count(&s[..offset])
}

/// Offset of the caret placed directly before the digit at `index`.
///
/// Delimiters preceding that digit stay to the left of the caret. When there
/// is no such digit the caret goes to the end of the text, after any
/// trailing delimiters.
///
/// # Examples
///
/// ```
/// use mask_core::offset_before_digit;
///
/// assert_eq!(offset_before_digit("(415) 555-", 0), 1);
/// assert_eq!(offset_before_digit("(415) 555-", 3), 6);
/// assert_eq!(offset_before_digit("(415) 555-", 6), 10);
/// assert_eq!(offset_before_digit("", 0), 0);
/// ```
pub fn offset_before_digit(s: &str, index: usize) -> usize {
    s.bytes()
        .enumerate()
        .filter(|(_, b)| b.is_ascii_digit())
        .nth(index)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}

/// Offset directly after the `count`-th digit (1-based).
///
/// Delimiters following that digit stay to the right. `count == 0` maps to
/// the start of the text; a count past the last digit maps to the end.
///
/// # Examples
///
/// ```
/// use mask_core::offset_after_digit;
///
/// assert_eq!(offset_after_digit("(415) 555-", 3), 4);
/// assert_eq!(offset_after_digit("(415) 555-", 4), 7);
/// assert_eq!(offset_after_digit("(415) 555-", 0), 0);
/// assert_eq!(offset_after_digit("(415) 555-", 9), 10);
/// ```
pub fn offset_after_digit(s: &str, count: usize) -> usize {
    let Some(last) = count.checked_sub(1) else {
        return 0;
    };
    s.bytes()
        .enumerate()
        .filter(|(_, b)| b.is_ascii_digit())
        .nth(last)
        .map(|(i, _)| i + 1)
        .unwrap_or(s.len())
}
