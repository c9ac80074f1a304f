//! Caret notation for field states, used by fixtures and the CLI.
//!
//! | notation     | state                                   |
//! |--------------|-----------------------------------------|
//! | `(41\|`      | caret at offset 3                       |
//! | `(411) <1\|1`| selection `[6, 7)`, start moves (upstream)  |
//! | `(4\|1>1) 11`| selection `[2, 3)`, end moves (downstream)  |

use crate::edit::FieldState;
use crate::selection::{Affinity, CaretState};
use crate::text::clamp_to_char_boundary;

const CARET: char = '|';
const UPSTREAM: char = '<';
const DOWNSTREAM: char = '>';

/// Parse caret notation into text and caret.
///
/// ```
/// use mask_core::{Affinity, CaretState};
/// use mask_core::parse_state;
///
/// let state = parse_state("(4|1>1) 11").unwrap();
/// assert_eq!(state.text, "(411) 11");
/// assert_eq!(state.caret, CaretState::selection(2, 3, Affinity::Downstream));
/// ```
pub fn parse_state(notation: &str) -> Result<FieldState, String> {
    let mut text = String::with_capacity(notation.len());
    let mut caret = None;
    let mut upstream = None;
    let mut downstream = None;

    for ch in notation.chars() {
        let slot = match ch {
            CARET => &mut caret,
            UPSTREAM => &mut upstream,
            DOWNSTREAM => &mut downstream,
            _ => {
                text.push(ch);
                continue;
            }
        };
        if slot.replace(text.len()).is_some() {
            return Err(format!("duplicate '{ch}' in {notation:?}"));
        }
    }

    let Some(caret) = caret else {
        return Err(format!("missing '{CARET}' in {notation:?}"));
    };
    let caret = match (upstream, downstream) {
        (None, None) => CaretState::Caret(caret),
        (Some(start), None) if start < caret => {
            CaretState::selection(start, caret, Affinity::Upstream)
        }
        (None, Some(end)) if caret < end => CaretState::selection(caret, end, Affinity::Downstream),
        _ => {
            return Err(format!(
                "expected '{UPSTREAM}' before '{CARET}' or '{DOWNSTREAM}' after it in {notation:?}"
            ));
        }
    };
    Ok(FieldState { text, caret })
}

/// Render a field state in caret notation.
pub fn format_state(state: &FieldState) -> String {
    let mut marks = match state.caret {
        CaretState::Caret(at) => vec![(at, CARET)],
        CaretState::Selection { range, affinity } => match affinity {
            Affinity::Upstream => vec![(range.start, UPSTREAM), (range.end, CARET)],
            Affinity::Downstream => vec![(range.start, CARET), (range.end, DOWNSTREAM)],
        },
    };
    marks.sort_by_key(|(at, _)| *at);

    let mut out = String::with_capacity(state.text.len() + 2);
    let mut last = 0;
    for (at, mark) in marks {
        let at = clamp_to_char_boundary(&state.text, at);
        out.push_str(&state.text[last..at]);
        out.push(mark);
        last = at;
    }
    out.push_str(&state.text[last..]);
    out
}
