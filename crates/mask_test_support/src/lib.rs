//! Test helpers for masked fields.
//!
//! - [`fixtures`]: TOML edit fixtures in caret notation, replayed against a
//!   formatter
//! - [`diff_states`]: expected/actual report pointing at the first mismatch

pub mod fixtures;

pub use mask_core::{format_state, parse_keys, parse_state};

pub fn diff_states(expected: &str, actual: &str) -> String {
    let width = expected.len().max(actual.len());
    let marker: String = expected
        .chars()
        .zip(actual.chars())
        .take_while(|(a, b)| a == b)
        .map(|_| ' ')
        .chain(std::iter::once('^'))
        .collect();
    format!(
        "  expected: {expected:<width$}\n    actual: {actual:<width$}\n            {marker}\n"
    )
}
