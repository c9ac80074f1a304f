//! # mask_core
//!
//! UI-agnostic editing layer for masked text fields.
//!
//! A masked field shows formatted text (for example `(415) 555-1234`) while the
//! user edits the underlying digits. This crate provides the pieces shared by
//! every mask:
//! - [`FieldId`]: a generic, opaque identifier for fields
//! - [`CaretState`] and [`SelectionRange`]: caret/selection over formatted text
//! - [`EditRequest`] and [`EditOutcome`]: the edit vocabulary a host delivers
//! - [`TextFormatter`]: the seam a concrete mask implements
//! - [`FieldStore`]: central store for field text, caret and revisions
//! - [`parse_state`], [`format_state`] and [`parse_keys`]: caret notation
//!   (`"(4|1>1) 11"`) and key names (`"shift+left"`) for hosts and tests
//!
//! ## Design Principles
//!
//! Caret positions are tracked in *logical digit indices*: an offset into the
//! formatted text is mapped to the number of digits before it, the edit is
//! applied to the digits, and the index is mapped back into the re-rendered
//! text. The helpers in this crate ([`digit_index_at`], [`offset_before_digit`],
//! [`offset_after_digit`]) implement that mapping.
//!
//! This crate does not depend on any UI toolkit, layout system or platform API.

mod edit;
mod id;
mod keys;
mod notation;
mod selection;
mod state;
mod store;
mod text;
mod traits;

pub use edit::{Direction, EditOutcome, EditRequest, FieldState};
pub use id::FieldId;
pub use keys::parse_keys;
pub use notation::{format_state, parse_state};
pub use selection::{Affinity, CaretState, SelectionRange};
pub use store::FieldStore;
pub use traits::{FailureRecord, FieldDelegate, Parsed, TextFormatter};

// Re-export text utilities for formatters that implement their own
// edit translation on top of the digit-index mapping.
pub use text::{
    clamp_to_char_boundary, digit_count, digit_index_at, offset_after_digit, offset_before_digit,
};
