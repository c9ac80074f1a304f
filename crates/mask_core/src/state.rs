//! Internal field state representation.
//!
//! This module contains the per-field state that is stored in the FieldStore.

use crate::selection::CaretState;

/// Internal state for a single masked field.
///
/// This is not exposed publicly; it is managed by [`FieldStore`](crate::FieldStore).
#[derive(Clone, Debug, Default)]
pub(crate) struct FieldEntry {
    /// The current formatted text.
    pub text: String,

    /// Monotonic revision counter, incremented on any text change.
    /// Useful for cache invalidation.
    pub value_rev: u64,

    /// Caret or selection over `text` (always on UTF-8 char boundaries).
    pub caret: CaretState,
}
