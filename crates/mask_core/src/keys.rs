use crate::edit::{Direction, EditRequest};

const PASTE_PREFIX: &str = "paste:";

/// Translate a key name into the edit requests it delivers.
///
/// Named keys map to one request; `paste:<text>` pastes `<text>`; any other
/// string types each of its characters in turn.
///
/// ```
/// use mask_core::{Direction, EditRequest};
/// use mask_core::parse_keys;
///
/// assert_eq!(parse_keys("shift+left"), vec![EditRequest::ExtendSelection(Direction::Left)]);
/// assert_eq!(parse_keys("41"), vec![EditRequest::Insert('4'), EditRequest::Insert('1')]);
/// ```
pub fn parse_keys(keys: &str) -> Vec<EditRequest> {
    if let Some(text) = keys.strip_prefix(PASTE_PREFIX) {
        return vec![EditRequest::Paste(text.to_string())];
    }
    match named_key(keys) {
        Some(edit) => vec![edit],
        None => keys.chars().map(EditRequest::Insert).collect(),
    }
}

fn named_key(name: &str) -> Option<EditRequest> {
    let edit = match name {
        "backspace" => EditRequest::Backspace,
        "alt+backspace" => EditRequest::BackspaceWord,
        "delete" => EditRequest::DeleteForward,
        "left" => EditRequest::Move(Direction::Left),
        "right" => EditRequest::Move(Direction::Right),
        "shift+left" => EditRequest::ExtendSelection(Direction::Left),
        "shift+right" => EditRequest::ExtendSelection(Direction::Right),
        "home" => EditRequest::MoveToStart,
        "end" => EditRequest::MoveToEnd,
        "select-all" => EditRequest::SelectAll,
        _ => return None,
    };
    Some(edit)
}
