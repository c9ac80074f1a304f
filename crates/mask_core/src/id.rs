//! Field identifiers.
//!
//! A field is keyed by a bare `u64` so hosts can reuse whatever handle their
//! widget toolkit already has (a view tag, an element index) through `From`.

/// Key of a field in a [`FieldStore`](crate::FieldStore), also reported back
/// in [`FieldDelegate`](crate::FieldDelegate) notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldId(u64);

impl FieldId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        FieldId(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for FieldId {
    fn from(raw: u64) -> Self {
        FieldId(raw)
    }
}

impl From<u32> for FieldId {
    fn from(raw: u32) -> Self {
        FieldId(u64::from(raw))
    }
}

impl From<FieldId> for u64 {
    fn from(id: FieldId) -> Self {
        id.0
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field#{}", self.0)
    }
}
