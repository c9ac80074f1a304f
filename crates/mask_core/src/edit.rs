//! Edit vocabulary exchanged between a host and a formatter.

use crate::selection::CaretState;

/// Horizontal direction for caret movement and selection extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
}

/// A discrete edit delivered by the host, expressed against the current
/// formatted text and caret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditRequest {
    /// A single typed character.
    Insert(char),
    /// Text delivered by a paste.
    Paste(String),
    /// Delete backwards (backspace).
    Backspace,
    /// Delete backwards to the start of the current group (alt+backspace).
    BackspaceWord,
    /// Delete forwards (delete key).
    DeleteForward,
    /// Arrow key without shift.
    Move(Direction),
    /// Arrow key with shift.
    ExtendSelection(Direction),
    MoveToStart,
    MoveToEnd,
    SelectAll,
}

impl EditRequest {
    /// Returns `true` for edits that may change the text (as opposed to
    /// caret-only navigation).
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            EditRequest::Insert(_)
                | EditRequest::Paste(_)
                | EditRequest::Backspace
                | EditRequest::BackspaceWord
                | EditRequest::DeleteForward
        )
    }
}

/// Formatted text together with its caret or selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub text: String,
    pub caret: CaretState,
}

impl FieldState {
    pub fn new(text: impl Into<String>, caret: CaretState) -> Self {
        Self {
            text: text.into(),
            caret,
        }
    }

    /// State with the caret placed at the end of `text`.
    pub fn at_end(text: impl Into<String>) -> Self {
        let text = text.into();
        let caret = CaretState::Caret(text.len());
        Self { text, caret }
    }
}

/// Result of translating an edit.
///
/// A rejected edit is not an error: the host keeps its previous text and
/// caret untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditOutcome {
    Applied(FieldState),
    Rejected,
}

impl EditOutcome {
    /// `Applied(next)` unless `next` is identical to the previous state.
    pub fn from_states(prev_text: &str, prev_caret: CaretState, next: FieldState) -> Self {
        if next.text == prev_text && next.caret == prev_caret {
            EditOutcome::Rejected
        } else {
            EditOutcome::Applied(next)
        }
    }

    #[inline]
    pub fn is_rejected(&self) -> bool {
        matches!(self, EditOutcome::Rejected)
    }

    /// The resulting state, falling back to the previous one when rejected.
    pub fn into_state(self, prev_text: &str, prev_caret: CaretState) -> FieldState {
        match self {
            EditOutcome::Applied(state) => state,
            EditOutcome::Rejected => FieldState::new(prev_text, prev_caret),
        }
    }
}
