//! Formatter and delegate traits.
//!
//! [`TextFormatter`] is the seam between the generic field plumbing in this
//! crate and a concrete mask. [`FieldDelegate`] is the host-side channel that
//! receives parse failures.
//!
//! # Design Principles
//!
//! - Formatters are immutable values; every operation is a pure function of
//!   its inputs, so a single formatter can serve any number of fields
//! - Parse failures are informational: they are reported through the
//!   delegate and never block or revert an edit

use crate::edit::{EditOutcome, EditRequest};
use crate::id::FieldId;
use crate::selection::CaretState;
use std::fmt;

/// Result of parsing a field's formatted text into its stored value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Parsed<E> {
    /// The value the host should store (for masks over digits, the digits).
    pub value: String,
    /// Why the value is not acceptable, if it is not.
    pub failure: Option<E>,
}

impl<E> Parsed<E> {
    pub fn ok(value: String) -> Self {
        Self {
            value,
            failure: None,
        }
    }

    #[inline]
    pub fn is_valid(&self) -> bool {
        self.failure.is_none()
    }
}

/// A mask: formats raw input and translates edits on its formatted text.
pub trait TextFormatter {
    /// Reason a settled value fails to parse.
    type Failure: Clone + fmt::Debug + fmt::Display;

    /// Format raw input. `None` formats to the empty string.
    fn format(&self, raw: Option<&str>) -> String;

    /// Translate `edit` against `text` and `caret` into the next state.
    ///
    /// Must return [`EditOutcome::Rejected`] for disallowed edits and must
    /// never return a state whose text this formatter would not render.
    fn translate_edit(&self, text: &str, caret: CaretState, edit: &EditRequest) -> EditOutcome;

    /// Parse formatted text into the stored value, with an optional failure.
    fn parse(&self, text: &str) -> Parsed<Self::Failure>;
}

/// Host-side receiver for parse failures.
pub trait FieldDelegate<E> {
    /// Called when a settled field fails to parse.
    ///
    /// `text` is the formatted text at the time of the failure.
    fn field_did_fail_to_parse(&mut self, field: FieldId, text: &str, failure: &E);
}

/// One recorded parse failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FailureRecord<E> {
    pub field: FieldId,
    pub text: String,
    pub failure: E,
}

impl<E: Clone> FieldDelegate<E> for Vec<FailureRecord<E>> {
    fn field_did_fail_to_parse(&mut self, field: FieldId, text: &str, failure: &E) {
        self.push(FailureRecord {
            field,
            text: text.to_string(),
            failure: failure.clone(),
        });
    }
}

/// A delegate that drops every notification.
impl<E> FieldDelegate<E> for () {
    fn field_did_fail_to_parse(&mut self, _field: FieldId, _text: &str, _failure: &E) {}
}
