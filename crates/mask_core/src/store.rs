//! Central store for masked field text, carets and selections.
//!
//! This store is UI-agnostic: it does not perform layout, hit-testing or
//! keyboard handling. Hosts translate their events into [`EditRequest`]s and
//! the store routes them through its [`TextFormatter`].

use crate::edit::{EditOutcome, EditRequest, FieldState};
use crate::id::FieldId;
use crate::selection::CaretState;
use crate::state::FieldEntry;
use crate::traits::{FieldDelegate, TextFormatter};
use std::collections::HashMap;

/// Central store for masked field state.
///
/// It handles:
/// - Formatted text and its revision tracking
/// - Caret and selection positioning
/// - Routing edits through the formatter
/// - Settling fields and notifying a [`FieldDelegate`] of parse failures
///
/// Every event is processed to completion before the next one; the store
/// performs no locking and no background work.
#[derive(Clone, Debug, Default)]
pub struct FieldStore<F> {
    formatter: F,
    fields: HashMap<FieldId, FieldEntry>,
}

impl<F: TextFormatter> FieldStore<F> {
    /// Create a new, empty store driven by `formatter`.
    pub fn new(formatter: F) -> Self {
        Self {
            formatter,
            fields: HashMap::new(),
        }
    }

    pub fn formatter(&self) -> &F {
        &self.formatter
    }

    /// Returns `true` if an entry exists for this field.
    pub fn has(&self, id: FieldId) -> bool {
        self.fields.contains_key(&id)
    }

    /// Returns the formatted text for this field, if any.
    pub fn get(&self, id: FieldId) -> Option<&str> {
        self.fields.get(&id).map(|f| f.text.as_str())
    }

    /// Returns the current caret or selection for this field, if any.
    pub fn caret(&self, id: FieldId) -> Option<CaretState> {
        self.fields.get(&id).map(|f| f.caret)
    }

    /// Snapshot of text and caret.
    pub fn state(&self, id: FieldId) -> Option<FieldState> {
        self.fields
            .get(&id)
            .map(|f| FieldState::new(f.text.clone(), f.caret))
    }

    /// Monotonic revision counter for the field's text.
    pub fn value_revision(&self, id: FieldId) -> u64 {
        self.fields.get(&id).map(|f| f.value_rev).unwrap_or(0)
    }

    /// Format `raw` and store it, placing the caret at the end.
    pub fn set(&mut self, id: FieldId, raw: &str) {
        let text = self.formatter.format(Some(raw));
        let st = self.fields.entry(id).or_default();
        if st.text != text {
            mark_text_dirty(st);
        }
        st.caret = CaretState::Caret(text.len());
        st.text = text;
    }

    /// Ensure an entry exists; if missing, inserts the formatted `raw`.
    pub fn ensure_initial(&mut self, id: FieldId, raw: &str) {
        if self.has(id) {
            return;
        }
        let text = self.formatter.format(Some(raw));
        let caret = CaretState::Caret(text.len());
        self.fields.insert(
            id,
            FieldEntry {
                text,
                value_rev: 0,
                caret,
            },
        );
    }

    /// Place text and caret verbatim, e.g. when restoring a host snapshot.
    ///
    /// The text is not re-formatted; the next edit normalizes it.
    pub fn set_state(&mut self, id: FieldId, state: FieldState) {
        let st = self.fields.entry(id).or_default();
        if st.text != state.text {
            mark_text_dirty(st);
        }
        st.caret = state.caret.clamp_to(&state.text);
        st.text = state.text;
    }

    /// Called when a field gains focus. A field seen for the first time
    /// starts empty; an existing one keeps its text and caret.
    pub fn focus(&mut self, id: FieldId) {
        clamp_state(self.fields.entry(id).or_default());
    }

    /// Called when a field loses focus.
    ///
    /// Clears the selection and settles the field, reporting any parse
    /// failure to `delegate`.
    pub fn blur(
        &mut self,
        id: FieldId,
        delegate: &mut dyn FieldDelegate<F::Failure>,
    ) -> Option<String> {
        let st = self.fields.get_mut(&id)?;
        clamp_state(st);
        st.caret = CaretState::Caret(st.caret.range().start);
        self.value(id, delegate)
    }

    /// Clear all stored field state.
    pub fn clear(&mut self) {
        self.fields.clear();
    }

    /// Apply an edit to a field. Returns `true` if text or caret changed.
    ///
    /// Missing fields are created empty first. Rejected edits leave the field
    /// untouched.
    pub fn apply(&mut self, id: FieldId, edit: &EditRequest) -> bool {
        let st = self.fields.entry(id).or_default();
        clamp_state(st);

        match self.formatter.translate_edit(&st.text, st.caret, edit) {
            EditOutcome::Applied(next) => {
                if next.text != st.text {
                    mark_text_dirty(st);
                }
                st.caret = next.caret.clamp_to(&next.text);
                st.text = next.text;
                true
            }
            EditOutcome::Rejected => false,
        }
    }

    /// Deliver every character of `input` as a separate keystroke.
    ///
    /// Returns the number of keystrokes that changed the field.
    pub fn type_str(&mut self, id: FieldId, input: &str) -> usize {
        input
            .chars()
            .filter(|&ch| self.apply(id, &EditRequest::Insert(ch)))
            .count()
    }

    /// Settle the field and return its parsed value.
    ///
    /// If the current text fails to parse, `delegate` is told which field
    /// failed, with the formatted text at the time and the reason. The value
    /// is returned either way.
    pub fn value(
        &self,
        id: FieldId,
        delegate: &mut dyn FieldDelegate<F::Failure>,
    ) -> Option<String> {
        let st = self.fields.get(&id)?;
        let parsed = self.formatter.parse(&st.text);
        if let Some(failure) = &parsed.failure {
            log::debug!(
                target: "mask_core.store",
                "{id} failed to parse {:?}: {failure}",
                st.text
            );
            delegate.field_did_fail_to_parse(id, &st.text, failure);
        }
        Some(parsed.value)
    }
}

// Entry helpers.

fn clamp_state(st: &mut FieldEntry) {
    st.caret = st.caret.clamp_to(&st.text);
}

fn mark_text_dirty(st: &mut FieldEntry) {
    st.value_rev = st.value_rev.wrapping_add(1);
}
