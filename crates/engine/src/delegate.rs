//! Host delegate interface.
//!
//! The field sits in front of an optional host delegate. It owns edit
//! handling, the begin-editing cursor placement and the submit commit; every
//! other callback is forwarded as-is. Every method has a default, so a field
//! without a delegate behaves like one with a delegate that overrides nothing.

use crate::edit::{EditEvent, EndEditingReason};
use crate::provider::FieldSnapshot;

pub trait FieldDelegate {
    fn should_begin_editing(&mut self, _field: &FieldSnapshot<'_>) -> bool {
        true
    }

    fn did_begin_editing(&mut self, _field: &FieldSnapshot<'_>) {}

    fn should_end_editing(&mut self, _field: &FieldSnapshot<'_>) -> bool {
        true
    }

    fn did_end_editing(&mut self, _field: &FieldSnapshot<'_>, _reason: EndEditingReason) {}

    /// Only consulted when an edit leaves the user text empty. Returning
    /// `true` asks the host to apply the raw edit itself.
    fn should_change_characters(&mut self, _field: &FieldSnapshot<'_>, _edit: &EditEvent) -> bool {
        false
    }

    fn should_return(&mut self, _field: &FieldSnapshot<'_>) -> bool {
        true
    }

    fn should_clear(&mut self, _field: &FieldSnapshot<'_>) -> bool {
        true
    }
}
