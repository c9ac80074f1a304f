//! Caret and selection representation.

use crate::text::clamp_to_char_boundary;

/// Byte range `start..end` of formatted text, `start <= end`.
///
/// Offsets sit on char boundaries once passed through [`CaretState::clamp_to`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    /// Range between two offsets given in either order.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            SelectionRange { start: a, end: b }
        } else {
            SelectionRange { start: b, end: a }
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }

    /// Width in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// The selected part of `text`. Panics when the range does not fit it.
    #[inline]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.start..self.end]
    }
}

/// Which end of a selection moves when it is extended with shift+arrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affinity {
    /// The start is the moving end (the selection was grown leftwards).
    Upstream,
    /// The end is the moving end (the selection was grown rightwards).
    Downstream,
}

/// Caret or selection over a field's formatted text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaretState {
    /// A collapsed caret at a byte offset.
    Caret(usize),
    /// A non-empty selection.
    Selection {
        range: SelectionRange,
        affinity: Affinity,
    },
}

impl Default for CaretState {
    fn default() -> Self {
        CaretState::Caret(0)
    }
}

impl CaretState {
    #[inline]
    pub fn caret(at: usize) -> Self {
        CaretState::Caret(at)
    }

    /// Build a selection; a zero-width selection collapses to a caret.
    pub fn selection(a: usize, b: usize, affinity: Affinity) -> Self {
        let range = SelectionRange::new(a, b);
        if range.is_empty() {
            return CaretState::Caret(range.start);
        }
        CaretState::Selection { range, affinity }
    }

    /// The covered range; a caret is an empty range at its offset.
    #[inline]
    pub fn range(&self) -> SelectionRange {
        match *self {
            CaretState::Caret(at) => SelectionRange::new(at, at),
            CaretState::Selection { range, .. } => range,
        }
    }

    #[inline]
    pub fn is_collapsed(&self) -> bool {
        self.range().is_empty()
    }

    /// Clamp both ends to character boundaries of `text`.
    pub fn clamp_to(self, text: &str) -> Self {
        match self {
            CaretState::Caret(at) => CaretState::Caret(clamp_to_char_boundary(text, at)),
            CaretState::Selection { range, affinity } => CaretState::selection(
                clamp_to_char_boundary(text, range.start),
                clamp_to_char_boundary(text, range.end),
                affinity,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_orders_its_ends() {
        let range = SelectionRange::new(4, 1);
        assert_eq!((range.start, range.end, range.len()), (1, 4, 3));
        assert_eq!(range.slice("(415) "), "415");
    }

    #[test]
    fn empty_selection_collapses_to_caret() {
        assert_eq!(
            CaretState::selection(3, 3, Affinity::Upstream),
            CaretState::Caret(3)
        );
        assert!(CaretState::caret(2).is_collapsed());
    }

    #[test]
    fn clamp_to_pulls_offsets_into_text() {
        let state = CaretState::selection(2, 40, Affinity::Downstream).clamp_to("(41");
        assert_eq!(
            state,
            CaretState::Selection {
                range: SelectionRange::new(2, 3),
                affinity: Affinity::Downstream,
            }
        );
        assert_eq!(
            CaretState::selection(5, 9, Affinity::Upstream).clamp_to("(4"),
            CaretState::Caret(2)
        );
    }
}
