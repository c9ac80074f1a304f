#![no_main]

use libfuzzer_sys::fuzz_target;
use mask_core::{Direction, EditOutcome, EditRequest, FieldState, digit_count};
use phone_format::{MAX_DIGITS, PhoneFormatter};

const KEYS: &[u8] = b"0123456789+( -a";

fn edit_for(byte: u8, next: Option<u8>) -> EditRequest {
    match byte % 32 {
        n @ 0..15 => EditRequest::Insert(KEYS[n as usize] as char),
        15 => EditRequest::Backspace,
        16 => EditRequest::BackspaceWord,
        17 => EditRequest::DeleteForward,
        18 => EditRequest::Move(Direction::Left),
        19 => EditRequest::Move(Direction::Right),
        20 => EditRequest::ExtendSelection(Direction::Left),
        21 => EditRequest::ExtendSelection(Direction::Right),
        22 => EditRequest::MoveToStart,
        23 => EditRequest::MoveToEnd,
        24 => EditRequest::SelectAll,
        _ => {
            let seed = next.unwrap_or(0);
            let pasted: String = (0..seed % 8)
                .map(|i| KEYS[((seed as usize) + i as usize * 7) % KEYS.len()] as char)
                .collect();
            EditRequest::Paste(pasted)
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let formatter = PhoneFormatter::new();
    let mut state = FieldState::default();

    for (i, &byte) in data.iter().enumerate().take(256) {
        let edit = edit_for(byte, data.get(i + 1).copied());
        match formatter.translate_edit(&state.text, state.caret, &edit) {
            EditOutcome::Applied(next) => {
                if !edit.is_mutation() {
                    assert_eq!(next.text, state.text, "{edit:?} changed the text");
                }
                state = next;
            }
            EditOutcome::Rejected => continue,
        }

        assert_eq!(
            formatter.format(state.text.as_str()),
            state.text,
            "{edit:?} produced text the formatter would not render"
        );
        assert!(digit_count(&state.text) <= MAX_DIGITS);
        let range = state.caret.range();
        assert!(range.end <= state.text.len());
        assert!(state.text.is_char_boundary(range.start));
        assert!(state.text.is_char_boundary(range.end));
    }
});
