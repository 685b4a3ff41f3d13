//! Edit events delivered by the host and the outcomes reported back.

use crate::style::StyledText;

/// Char range over the display text targeted by an edit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditRange {
    pub location: usize,
    pub length: usize,
}

impl EditRange {
    pub fn new(location: usize, length: usize) -> Self {
        Self { location, length }
    }

    /// Zero-length range at `location`.
    pub fn caret(location: usize) -> Self {
        Self { location, length: 0 }
    }

    pub fn end(&self) -> usize {
        self.location.saturating_add(self.length)
    }
}

/// A proposed replacement of `range` with `replacement`.
///
/// An empty replacement is a deletion; anything else is an insertion or a
/// replacement of the selected range (paste included).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditEvent {
    pub range: EditRange,
    pub replacement: String,
}

impl EditEvent {
    pub fn new(range: EditRange, replacement: impl Into<String>) -> Self {
        Self {
            range,
            replacement: replacement.into(),
        }
    }

    /// Insert `text` at char offset `at`.
    pub fn insert(at: usize, text: impl Into<String>) -> Self {
        Self::new(EditRange::caret(at), text)
    }

    /// Delete `length` chars starting at `location`.
    pub fn delete(location: usize, length: usize) -> Self {
        Self::new(EditRange::new(location, length), String::new())
    }

    /// Backspace with the cursor at `cursor`. `None` when the cursor is at the start.
    pub fn backspace(cursor: usize) -> Option<Self> {
        cursor.checked_sub(1).map(|location| Self::delete(location, 1))
    }

    pub fn is_deletion(&self) -> bool {
        self.replacement.is_empty()
    }
}

/// Result of reconciling one edit event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditOutcome {
    /// Full display text with its user/prediction split.
    pub display: StyledText,
    /// Char offset the host must place the cursor at.
    pub cursor: usize,
    /// `true` only when user text emptied and the attached delegate asked for
    /// the raw edit to be applied by the host.
    pub forward_to_host: bool,
}

/// Why editing ended.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EndEditingReason {
    /// Focus moved away from the field.
    #[default]
    Blurred,
    /// The field was submitted with end-editing-on-return enabled.
    Committed,
}

/// Result of a return/submit action.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// Suggestion that was committed as user text, if one was resolvable.
    pub committed: Option<String>,
    /// Delegate answer to `should_return` (true when no delegate is attached).
    pub should_return: bool,
    /// Whether the submit also ended editing.
    pub ended_editing: bool,
}
