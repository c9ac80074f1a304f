//! Edit translation for [`PhoneFormatter`].
//!
//! Every edit goes through logical digit indices: the caret or selection is
//! mapped to digit indices in the pre-edit text, the edit is applied to the
//! digits, the result is re-rendered and the caret is mapped back. Delimiters
//! never hold the caret and are never deleted on their own.

use crate::digits::DigitString;
use crate::formatter::{MAX_DIGITS, PhoneFormatter};
use crate::layout::{Layout, Lead};
use mask_core::{
    Affinity, CaretState, Direction, EditOutcome, EditRequest, FieldState, SelectionRange,
    digit_index_at, offset_after_digit, offset_before_digit,
};

/// Pre-edit state, resolved to digit indices.
struct Before<'a> {
    text: &'a str,
    caret: CaretState,
    range: SelectionRange,
    digits: DigitString,
    layout: Layout,
    /// Digit index at the selection start (or caret).
    start: usize,
    /// Digit index at the selection end (or caret).
    end: usize,
}

impl<'a> Before<'a> {
    fn new(text: &'a str, caret: CaretState) -> Self {
        let range = caret.range();
        let digits = DigitString::extract(text);
        Self {
            text,
            caret,
            range,
            layout: Layout::guess(&digits, Lead::of(text)),
            digits,
            start: digit_index_at(text, range.start),
            end: digit_index_at(text, range.end),
        }
    }

    /// Lead of the raw text after replacing `text[from..to]` with `with`.
    fn lead_after(&self, from: usize, to: usize, with: &str) -> Lead {
        Lead::from_chars(
            self.text[..from]
                .chars()
                .chain(with.chars())
                .chain(self.text[to..].chars()),
        )
    }

    /// Lead after replacing the selection (or inserting at the caret).
    fn lead_replacing(&self, with: &str) -> Lead {
        self.lead_after(self.range.start, self.range.end, with)
    }

    /// Whether writing `with` over the selection would push a surviving
    /// leading `+` away from the front.
    fn displaces_plus(&self, with: &str) -> bool {
        self.lead_replacing("") == Lead::Plus && self.lead_replacing(with) != Lead::Plus
    }

    #[inline]
    fn replaces_digits(&self) -> bool {
        self.start < self.end
    }

    fn with_caret(&self, caret: CaretState) -> FieldState {
        FieldState::new(self.text, caret)
    }
}

impl PhoneFormatter {
    /// Translate `edit` on `text` into the next text and caret.
    ///
    /// Returns [`EditOutcome::Rejected`] when the edit is not allowed or would
    /// change nothing.
    ///
    /// ```
    /// use mask_core::{CaretState, EditOutcome, EditRequest, FieldState};
    /// use phone_format::PhoneFormatter;
    ///
    /// let formatter = PhoneFormatter::new();
    /// let outcome = formatter.translate_edit("(41", CaretState::Caret(3), &EditRequest::Insert('5'));
    /// assert_eq!(outcome, EditOutcome::Applied(FieldState::at_end("(415) ")));
    ///
    /// let outcome = formatter.translate_edit("(415) ", CaretState::Caret(6), &EditRequest::Backspace);
    /// assert_eq!(outcome, EditOutcome::Applied(FieldState::at_end("(41")));
    /// ```
    pub fn translate_edit(&self, text: &str, caret: CaretState, edit: &EditRequest) -> EditOutcome {
        let caret = caret.clamp_to(text);
        let before = Before::new(text, caret);

        let next = match edit {
            EditRequest::Insert(ch) => self.insert(&before, *ch),
            EditRequest::Paste(pasted) => self.paste(&before, pasted),
            EditRequest::Backspace => self.backspace(&before),
            EditRequest::BackspaceWord => self.backspace_word(&before),
            EditRequest::DeleteForward => self.delete_forward(&before),
            EditRequest::Move(direction) => Some(move_caret(&before, *direction)),
            EditRequest::ExtendSelection(direction) => extend_selection(&before, *direction),
            EditRequest::MoveToStart => Some(before.with_caret(CaretState::Caret(0))),
            EditRequest::MoveToEnd => Some(before.with_caret(CaretState::Caret(text.len()))),
            EditRequest::SelectAll => (!text.is_empty()).then(|| {
                before.with_caret(CaretState::selection(0, text.len(), Affinity::Downstream))
            }),
        };

        match next {
            Some(next) => EditOutcome::from_states(text, caret, next),
            None => {
                log::trace!(
                    target: "phone_format.edit",
                    "rejected {edit:?} at {caret:?} in {text:?}"
                );
                EditOutcome::Rejected
            }
        }
    }

    fn insert(&self, b: &Before<'_>, ch: char) -> Option<FieldState> {
        if ch == '+' {
            // Only a first `+` that ends up leading the text.
            if b.lead_replacing("") == Lead::Plus || b.lead_replacing("+") != Lead::Plus {
                return None;
            }
            let digits = b.digits.without(b.start..b.end);
            return self.grow(b, digits, Lead::Plus, 0);
        }
        if !ch.is_ascii_digit() {
            return None;
        }
        let mut buf = [0; 4];
        let typed = ch.encode_utf8(&mut buf);
        if b.displaces_plus(typed) {
            return None;
        }
        let lead = b.lead_replacing(typed);
        let digits = b.digits.splice(b.start..b.end, &DigitString::from(ch));
        self.grow(b, digits, lead, b.start + 1)
    }

    fn paste(&self, b: &Before<'_>, pasted: &str) -> Option<FieldState> {
        if b.displaces_plus(pasted) {
            return None;
        }
        let incoming = DigitString::extract(pasted);
        let lead = b.lead_replacing(pasted);
        let adds_plus = lead == Lead::Plus && b.lead_replacing("") != Lead::Plus;
        if incoming.is_empty() && !adds_plus {
            return None;
        }
        let index = b.start + incoming.len();
        let digits = b.digits.splice(b.start..b.end, &incoming);
        self.grow(b, digits, lead, index)
    }

    fn backspace(&self, b: &Before<'_>) -> Option<FieldState> {
        if !b.range.is_empty() {
            return Some(self.delete_selection(b));
        }
        let caret = b.range.start;
        match b.start.checked_sub(1) {
            Some(prev) => {
                let from = offset_before_digit(b.text, prev);
                Some(self.delete_digits(b, prev..b.start, from, caret))
            }
            None if Lead::of(&b.text[..caret]) == Lead::Plus => {
                Some(self.delete_digits(b, 0..0, 0, caret))
            }
            None => None,
        }
    }

    fn backspace_word(&self, b: &Before<'_>) -> Option<FieldState> {
        if !b.range.is_empty() || b.start == 0 {
            return self.backspace(b);
        }
        let group = b.layout.group_start(b.digits.len(), b.start);
        let from = offset_before_digit(b.text, group);
        Some(self.delete_digits(b, group..b.start, from, b.range.start))
    }

    fn delete_forward(&self, b: &Before<'_>) -> Option<FieldState> {
        if !b.range.is_empty() {
            return Some(self.delete_selection(b));
        }
        let caret = b.range.start;
        if b.start == 0 && b.text[caret..].starts_with('+') {
            return Some(self.delete_digits(b, 0..0, caret, caret + 1));
        }
        if b.start >= b.digits.len() {
            return None;
        }
        let to = offset_after_digit(b.text, b.start + 1);
        Some(self.delete_digits(b, b.start..b.start + 1, caret, to))
    }

    fn delete_selection(&self, b: &Before<'_>) -> FieldState {
        self.delete_digits(b, b.start..b.end, b.range.start, b.range.end)
    }

    /// Remove `text[from..to]`, which holds the digits at `span`.
    fn delete_digits(
        &self,
        b: &Before<'_>,
        span: std::ops::Range<usize>,
        from: usize,
        to: usize,
    ) -> FieldState {
        let lead = b.lead_after(from, to, "");
        let index = span.start;
        self.commit(b.digits.without(span), lead, index)
    }

    /// Commit an edit that may add digits, unless they no longer fit.
    fn grow(
        &self,
        b: &Before<'_>,
        digits: DigitString,
        lead: Lead,
        index: usize,
    ) -> Option<FieldState> {
        let len = digits.len();
        let layout = Layout::guess(&digits, lead);
        if len > MAX_DIGITS || len > layout.capacity() {
            return None;
        }
        // A full field does not reflow into a longer layout by typing.
        if !b.replaces_digits() && len > b.digits.len() && len > b.layout.capacity() {
            return None;
        }
        Some(self.commit(digits, lead, index))
    }

    /// Render `digits` and place the caret before digit `index`.
    fn commit(&self, digits: DigitString, lead: Lead, index: usize) -> FieldState {
        let text = self.render(digits, lead);
        let caret = CaretState::Caret(offset_before_digit(&text, index));
        FieldState::new(text, caret)
    }
}

fn move_caret(b: &Before<'_>, direction: Direction) -> FieldState {
    let at = match (b.caret, direction) {
        (CaretState::Selection { range, .. }, Direction::Left) => range.start,
        (CaretState::Selection { range, .. }, Direction::Right) => range.end,
        (CaretState::Caret(_), Direction::Left) => match b.start.checked_sub(1) {
            Some(prev) => offset_before_digit(b.text, prev),
            None => 0,
        },
        (CaretState::Caret(_), Direction::Right) => {
            if b.start >= b.digits.len() {
                b.text.len()
            } else {
                offset_before_digit(b.text, b.start + 1)
            }
        }
    };
    b.with_caret(CaretState::Caret(at))
}

/// Grow or shrink the selection by one digit at its moving end.
///
/// The start snaps to just before its digit and the end to just after its
/// digit, so delimiters stay outside the selection where possible.
fn extend_selection(b: &Before<'_>, direction: Direction) -> Option<FieldState> {
    let affinity = match b.caret {
        CaretState::Selection { affinity, .. } => affinity,
        CaretState::Caret(_) => match direction {
            Direction::Left => Affinity::Upstream,
            Direction::Right => Affinity::Downstream,
        },
    };

    let len = b.digits.len();
    let (mut start, mut end) = (b.start, b.end);
    let moving = match affinity {
        Affinity::Upstream => &mut start,
        Affinity::Downstream => &mut end,
    };
    *moving = match direction {
        Direction::Left => moving.checked_sub(1)?,
        Direction::Right if *moving < len => *moving + 1,
        Direction::Right => return None,
    };

    let caret = if start >= end {
        CaretState::Caret(offset_before_digit(b.text, start.min(end)))
    } else {
        CaretState::selection(
            offset_before_digit(b.text, start),
            offset_after_digit(b.text, end),
            affinity,
        )
    };
    Some(b.with_caret(caret))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(text: &str, caret: CaretState, edit: EditRequest) -> EditOutcome {
        PhoneFormatter::new().translate_edit(text, caret, &edit)
    }

    fn applied(text: &str, caret: CaretState, edit: EditRequest) -> FieldState {
        match apply(text, caret, edit.clone()) {
            EditOutcome::Applied(next) => next,
            EditOutcome::Rejected => panic!("{edit:?} on {text:?} at {caret:?} was rejected"),
        }
    }

    #[test]
    fn typing_skips_over_new_delimiters() {
        let next = applied("(41", CaretState::Caret(3), EditRequest::Insert('5'));
        assert_eq!(next, FieldState::at_end("(415) "));
        let next = applied("", CaretState::Caret(0), EditRequest::Insert('1'));
        assert_eq!(next, FieldState::at_end("1 ("));
    }

    #[test]
    fn typing_in_the_middle_keeps_caret_on_digit() {
        let next = applied("(314) ", CaretState::Caret(3), EditRequest::Insert('9'));
        assert_eq!(next, FieldState::new("(319) 4", CaretState::Caret(6)));
    }

    #[test]
    fn plus_only_at_the_start() {
        let next = applied("", CaretState::Caret(0), EditRequest::Insert('+'));
        assert_eq!(next, FieldState::at_end("+"));
        assert!(apply("+", CaretState::Caret(1), EditRequest::Insert('+')).is_rejected());
        assert!(apply("(41", CaretState::Caret(3), EditRequest::Insert('+')).is_rejected());

        assert!(apply("(54", CaretState::Caret(1), EditRequest::Insert('+')).is_rejected());

        let next = applied("(54", CaretState::Caret(0), EditRequest::Insert('+'));
        assert_eq!(next, FieldState::new("+54 (", CaretState::Caret(1)));
    }

    #[test]
    fn digits_cannot_be_typed_in_front_of_plus() {
        assert!(apply("+54 (", CaretState::Caret(0), EditRequest::Insert('7')).is_rejected());
        let full = "+1 (314) 555-123";
        assert!(apply(full, CaretState::Caret(0), EditRequest::Insert('7')).is_rejected());
        assert!(apply(full, CaretState::Caret(0), EditRequest::Paste("7".into())).is_rejected());

        // Replacing the plus itself is an ordinary edit.
        let caret = CaretState::selection(0, 1, Affinity::Downstream);
        let next = applied("+54 (", caret, EditRequest::Insert('7'));
        assert_eq!(next, FieldState::new("(754) ", CaretState::Caret(2)));
    }

    #[test]
    fn letters_and_delimiters_are_rejected() {
        for ch in ['a', '(', ')', ' ', '-', '.', 'é'] {
            assert!(
                apply("(415) ", CaretState::Caret(6), EditRequest::Insert(ch)).is_rejected(),
                "{ch:?}"
            );
        }
    }

    #[test]
    fn one_typed_inside_parens_is_not_a_trunk_prefix() {
        let next = applied("(23", CaretState::Caret(1), EditRequest::Insert('1'));
        assert_eq!(next, FieldState::new("(123) ", CaretState::Caret(2)));
        let next = applied("(23", CaretState::Caret(0), EditRequest::Insert('1'));
        assert_eq!(next, FieldState::new("1 (23", CaretState::Caret(3)));
    }

    #[test]
    fn full_domestic_number_rejects_more_digits() {
        let full = "(415) 555-1212";
        assert!(apply(full, CaretState::Caret(full.len()), EditRequest::Insert('3')).is_rejected());
        assert!(apply(full, CaretState::Caret(1), EditRequest::Insert('3')).is_rejected());
    }

    #[test]
    fn full_international_number_rejects_more_digits() {
        let full = "+854 (314) 555-1234";
        assert!(apply(full, CaretState::Caret(full.len()), EditRequest::Insert('9')).is_rejected());
        let full = "1 (314) 555-1234";
        assert!(apply(full, CaretState::Caret(full.len()), EditRequest::Insert('9')).is_rejected());
    }

    #[test]
    fn replacing_a_selection_does_not_count_as_growth() {
        let full = "(415) 555-1212";
        let caret = CaretState::selection(1, 4, Affinity::Downstream);
        let next = applied(full, caret, EditRequest::Insert('9'));
        assert_eq!(next, FieldState::new("(955) 512-12", CaretState::Caret(2)));
    }

    #[test]
    fn backspace_at_start_removes_plus() {
        let next = applied("+", CaretState::Caret(1), EditRequest::Backspace);
        assert_eq!(next, FieldState::at_end(""));
        let next = applied("+54 (", CaretState::Caret(1), EditRequest::Backspace);
        assert_eq!(next, FieldState::new("(54", CaretState::Caret(1)));
        assert!(apply("(4", CaretState::Caret(1), EditRequest::Backspace).is_rejected());
        assert!(apply("", CaretState::Caret(0), EditRequest::Backspace).is_rejected());
    }

    #[test]
    fn backspace_deletes_selected_digits() {
        let caret = CaretState::selection(6, 9, Affinity::Upstream);
        let next = applied("(314) 555-1234", caret, EditRequest::Backspace);
        assert_eq!(next, FieldState::new("(314) 123-4", CaretState::Caret(6)));
    }

    #[test]
    fn selection_covering_plus_drops_it() {
        let caret = CaretState::selection(0, 2, Affinity::Downstream);
        let next = applied("+1 (", caret, EditRequest::Backspace);
        assert_eq!(next, FieldState::at_end(""));
    }

    #[test]
    fn backspace_word_stays_inside_leading_group() {
        let next = applied("1 (314) ", CaretState::Caret(6), EditRequest::BackspaceWord);
        assert_eq!(next, FieldState::at_end("1 ("));
        let next = applied("+54 (3", CaretState::Caret(3), EditRequest::BackspaceWord);
        assert_eq!(next, FieldState::new("+3", CaretState::Caret(1)));
    }

    #[test]
    fn delete_forward_removes_next_digit() {
        let next = applied("(415) ", CaretState::Caret(2), EditRequest::DeleteForward);
        assert_eq!(next, FieldState::new("(45", CaretState::Caret(2)));
        assert!(apply("(415) ", CaretState::Caret(6), EditRequest::DeleteForward).is_rejected());
        let next = applied("+1 (", CaretState::Caret(0), EditRequest::DeleteForward);
        assert_eq!(next, FieldState::new("1 (", CaretState::Caret(0)));
    }

    #[test]
    fn paste_with_plus_at_start() {
        let next = applied("", CaretState::Caret(0), EditRequest::Paste("+44 7570 127892".into()));
        assert_eq!(next, FieldState::at_end("+44 (757) 012-7892"));
    }

    #[test]
    fn paste_of_thirteen_digits_with_plus() {
        let pasted = EditRequest::Paste("+44 1234 567 8901".into());
        let next = applied("", CaretState::Caret(0), pasted);
        assert_eq!(next, FieldState::at_end("+441 (234) 567-8901"));
    }

    #[test]
    fn full_plus_number_does_not_widen_its_country_code() {
        let full = "+44 (757) 012-7892";
        assert!(apply(full, CaretState::Caret(full.len()), EditRequest::Insert('1')).is_rejected());
    }

    #[test]
    fn paste_without_digits_is_rejected() {
        assert!(apply("(41", CaretState::Caret(3), EditRequest::Paste("abc".into())).is_rejected());
        assert!(apply("+", CaretState::Caret(1), EditRequest::Paste("+".into())).is_rejected());
    }

    #[test]
    fn paste_past_capacity_is_rejected() {
        let outcome = apply(
            "(415) 555-1234",
            CaretState::Caret(14),
            EditRequest::Paste("99".into()),
        );
        assert!(outcome.is_rejected());
    }

    #[test]
    fn arrows_step_over_delimiters() {
        let next = applied("(411) 11", CaretState::Caret(7), EditRequest::Move(Direction::Left));
        assert_eq!(next.caret, CaretState::Caret(6));
        let next = applied("(411) 11", CaretState::Caret(6), EditRequest::Move(Direction::Left));
        assert_eq!(next.caret, CaretState::Caret(3));
        let next = applied("(411) 11", CaretState::Caret(3), EditRequest::Move(Direction::Right));
        assert_eq!(next.caret, CaretState::Caret(6));
        let next = applied("(411) ", CaretState::Caret(3), EditRequest::Move(Direction::Right));
        assert_eq!(next.caret, CaretState::Caret(6));
        let next = applied("(4", CaretState::Caret(1), EditRequest::Move(Direction::Left));
        assert_eq!(next.caret, CaretState::Caret(0));
        assert!(apply("(4", CaretState::Caret(2), EditRequest::Move(Direction::Right)).is_rejected());
    }

    #[test]
    fn arrows_collapse_selection() {
        let caret = CaretState::selection(2, 7, Affinity::Downstream);
        let next = applied("(411) 11", caret, EditRequest::Move(Direction::Left));
        assert_eq!(next.caret, CaretState::Caret(2));
        let next = applied("(411) 11", caret, EditRequest::Move(Direction::Right));
        assert_eq!(next.caret, CaretState::Caret(7));
    }

    #[test]
    fn shrinking_selection_to_nothing_collapses() {
        let caret = CaretState::selection(2, 3, Affinity::Downstream);
        let next = applied("(411) 11", caret, EditRequest::ExtendSelection(Direction::Left));
        assert_eq!(next.caret, CaretState::Caret(2));
    }

    #[test]
    fn extend_selection_stops_at_edges() {
        let left = EditRequest::ExtendSelection(Direction::Left);
        let right = EditRequest::ExtendSelection(Direction::Right);
        assert!(apply("(411) 11", CaretState::Caret(1), left).is_rejected());
        assert!(apply("(411) 11", CaretState::Caret(8), right).is_rejected());
    }

    #[test]
    fn home_end_and_select_all() {
        let next = applied("(411) 11", CaretState::Caret(4), EditRequest::MoveToStart);
        assert_eq!(next.caret, CaretState::Caret(0));
        let next = applied("(411) 11", CaretState::Caret(4), EditRequest::MoveToEnd);
        assert_eq!(next.caret, CaretState::Caret(8));
        let next = applied("(411) 11", CaretState::Caret(4), EditRequest::SelectAll);
        assert_eq!(next.caret, CaretState::selection(0, 8, Affinity::Downstream));
        assert!(apply("", CaretState::Caret(0), EditRequest::SelectAll).is_rejected());
    }

    #[test]
    fn out_of_range_caret_is_clamped() {
        let next = applied("(41", CaretState::Caret(99), EditRequest::Insert('5'));
        assert_eq!(next, FieldState::at_end("(415) "));
    }
}
