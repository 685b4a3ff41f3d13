//! Reconciler for a single predictive text field.
//!
//! [`PredictiveField`] owns the canonical user text. Each edit is handled in
//! one synchronous pass:
//!
//! 1. rebuild the proposed value the edit targets (always relative to user
//!    text, never the suggestion tail),
//! 2. classify it against the current user text,
//! 3. update user text from the classification,
//! 4. ask the provider for a suggestion,
//! 5. compose the display text, style split and cursor.
//!
//! Only the user text survives between edits. The display, the split and the
//! cursor are recomputed from scratch every time.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::delegate::FieldDelegate;
use crate::diff::{TextChange, classify};
use crate::edit::{EditEvent, EditOutcome, EndEditingReason, SubmitOutcome};
use crate::provider::{FieldSnapshot, SuggestionProvider};
use crate::style::StyledText;
use crate::text::{char_len, drop_last_char, splice_chars, take_chars};

/// Behavioural switches of a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldBehavior {
    /// Re-case the user segment to match the suggestion.
    pub formats_case: bool,
    /// End editing after a submit the delegate accepts.
    pub end_editing_on_return: bool,
}

impl Default for FieldBehavior {
    fn default() -> Self {
        Self {
            formats_case: true,
            end_editing_on_return: true,
        }
    }
}

#[derive(Default)]
pub struct PredictiveField {
    user_text: String,
    display: StyledText,
    cursor: usize,
    editing: bool,
    behavior: FieldBehavior,
    provider: Option<Box<dyn SuggestionProvider>>,
    delegate: Option<Box<dyn FieldDelegate>>,
}

impl fmt::Debug for PredictiveField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredictiveField")
            .field("user_text", &self.user_text)
            .field("display", &self.display)
            .field("cursor", &self.cursor)
            .field("editing", &self.editing)
            .field("behavior", &self.behavior)
            .field("has_provider", &self.provider.is_some())
            .field("has_delegate", &self.delegate.is_some())
            .finish()
    }
}

impl PredictiveField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_behavior(behavior: FieldBehavior) -> Self {
        Self {
            behavior,
            ..Self::default()
        }
    }

    pub fn with_provider(mut self, provider: impl SuggestionProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    pub fn with_delegate(mut self, delegate: impl FieldDelegate + 'static) -> Self {
        self.delegate = Some(Box::new(delegate));
        self
    }

    // ----- Getters -----
    pub fn user_text(&self) -> &str {
        &self.user_text
    }
    pub fn display_text(&self) -> &str {
        self.display.text()
    }
    pub fn styled(&self) -> &StyledText {
        &self.display
    }
    pub fn cursor(&self) -> usize {
        self.cursor
    }
    pub fn is_editing(&self) -> bool {
        self.editing
    }
    pub fn behavior(&self) -> FieldBehavior {
        self.behavior
    }
    /// Whether a suggestion tail is currently shown.
    pub fn has_prediction(&self) -> bool {
        !self.display.prediction_segment().is_empty()
    }

    // ----- Setters -----
    pub fn set_behavior(&mut self, behavior: FieldBehavior) {
        self.behavior = behavior;
    }

    pub fn set_provider(&mut self, provider: Option<Box<dyn SuggestionProvider>>) {
        self.provider = provider;
    }

    pub fn set_delegate(&mut self, delegate: Option<Box<dyn FieldDelegate>>) {
        self.delegate = delegate;
    }

    pub fn take_delegate(&mut self) -> Option<Box<dyn FieldDelegate>> {
        self.delegate.take()
    }

    /// Assign text programmatically. No suggestion is requested.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.user_text = text.into();
        self.display = StyledText::plain(self.user_text.clone());
        self.cursor = char_len(&self.user_text);
    }

    // ----- Editing -----

    /// Reconcile `edit` against the currently displayed text.
    pub fn apply_edit(&mut self, edit: &EditEvent) -> EditOutcome {
        let current = self.display.text().to_string();
        self.apply_edit_to(edit, &current)
    }

    /// Reconcile `edit` against `current_display`, the value the host shows.
    pub fn apply_edit_to(&mut self, edit: &EditEvent, current_display: &str) -> EditOutcome {
        let proposed = self.proposed_value(edit, current_display);
        if !edit.is_deletion() && edit.range.location < char_len(&self.user_text) {
            // The splice already holds the whole new value; a positional diff
            // would only see the divergent tail.
            debug!(user_text = %self.user_text, proposed = %proposed, "replaced inside user text");
            self.user_text = proposed;
        } else {
            let change = classify(&self.user_text, &proposed);
            debug!(?change, user_text = %self.user_text, proposed = %proposed, "classified edit");
            self.apply_change(&change);
        }

        if self.user_text.is_empty() {
            self.reset_display();
            let forward_to_host = match self.delegate.as_mut() {
                Some(delegate) => {
                    let snapshot = snapshot_of(&self.user_text, &self.display, self.editing);
                    delegate.should_change_characters(&snapshot, edit)
                }
                None => false,
            };
            return EditOutcome {
                display: self.display.clone(),
                cursor: 0,
                forward_to_host,
            };
        }

        let display_text = match self.query_suggestion() {
            Some(suggestion) => {
                self.adopt_suggestion_case(&suggestion);
                suggestion
            }
            None => self.user_text.clone(),
        };
        self.display = StyledText::new(display_text, char_len(&self.user_text));
        self.cursor = self.display.user_len();

        EditOutcome {
            display: self.display.clone(),
            cursor: self.cursor,
            forward_to_host: false,
        }
    }

    /// The full value the edit would produce, expressed relative to user text.
    fn proposed_value(&self, edit: &EditEvent, current_display: &str) -> String {
        let range = edit.range;
        if !edit.is_deletion() {
            return splice_chars(&self.user_text, range.location, range.length, &edit.replacement);
        }

        let user_folded = self.user_text.to_lowercase();
        if drop_last_char(&user_folded) == current_display.to_lowercase() {
            trace!("deletion spliced against display text");
            return splice_chars(current_display, range.location, range.length, "");
        }

        let user_len = char_len(&self.user_text);
        if range.location < user_len {
            trace!(location = range.location, "deletion truncates user text");
            take_chars(&self.user_text, range.location).to_string()
        } else {
            trace!("deletion inside suggestion tail drops last user char");
            drop_last_char(&self.user_text).to_string()
        }
    }

    fn apply_change(&mut self, change: &TextChange) {
        match change {
            TextChange::Added { text } => self.user_text.push_str(text),
            TextChange::Removed { removed, added } => {
                let keep = char_len(&self.user_text).saturating_sub(char_len(removed));
                let mut next = take_chars(&self.user_text, keep).to_string();
                if let Some(added) = added {
                    next.push_str(added);
                }
                self.user_text = next;
            }
            TextChange::None => {}
        }
    }

    fn adopt_suggestion_case(&mut self, suggestion: &str) {
        if !self.behavior.formats_case {
            return;
        }
        let user_len = char_len(&self.user_text);
        if char_len(suggestion) >= user_len {
            self.user_text = take_chars(suggestion, user_len).to_string();
        }
    }

    fn query_suggestion(&self) -> Option<String> {
        if self.user_text.is_empty() {
            return None;
        }
        let provider = self.provider.as_ref()?;
        let snapshot = self.snapshot();
        let suggestion = provider.suggest(&snapshot, &self.user_text);
        debug!(prefix = %self.user_text, ?suggestion, "queried provider");
        suggestion
    }

    fn reset_display(&mut self) {
        self.display = StyledText::default();
        self.cursor = 0;
    }

    fn snapshot(&self) -> FieldSnapshot<'_> {
        snapshot_of(&self.user_text, &self.display, self.editing)
    }

    // ----- Focus -----

    /// Focus the field. Returns `false` when the delegate refuses.
    pub fn begin_editing(&mut self) -> bool {
        if self.editing {
            return true;
        }
        let snapshot = snapshot_of(&self.user_text, &self.display, self.editing);
        if let Some(delegate) = self.delegate.as_mut()
            && !delegate.should_begin_editing(&snapshot)
        {
            return false;
        }
        self.editing = true;
        self.cursor = self.display.user_len();
        let snapshot = snapshot_of(&self.user_text, &self.display, self.editing);
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.did_begin_editing(&snapshot);
        }
        true
    }

    /// Blur the field. Text is left untouched.
    pub fn end_editing(&mut self, reason: EndEditingReason) -> bool {
        if !self.editing {
            return true;
        }
        let snapshot = snapshot_of(&self.user_text, &self.display, self.editing);
        if let Some(delegate) = self.delegate.as_mut()
            && !delegate.should_end_editing(&snapshot)
        {
            return false;
        }
        self.editing = false;
        let snapshot = snapshot_of(&self.user_text, &self.display, self.editing);
        if let Some(delegate) = self.delegate.as_mut() {
            delegate.did_end_editing(&snapshot, reason);
        }
        true
    }

    // ----- Actions -----

    /// Commit the current suggestion as user text without ending editing.
    ///
    /// Empty user text is never sent to the provider, so there is nothing to
    /// commit and `None` is returned.
    pub fn accept_suggestion(&mut self) -> Option<String> {
        let suggestion = self.query_suggestion()?;
        self.user_text = suggestion.clone();
        self.display = StyledText::plain(suggestion.clone());
        self.cursor = self.display.user_len();
        debug!(committed = %suggestion, "accepted suggestion");
        Some(suggestion)
    }

    /// Return/submit: commit any suggestion, then ask the delegate.
    pub fn submit(&mut self) -> SubmitOutcome {
        let committed = self.accept_suggestion();
        let snapshot = snapshot_of(&self.user_text, &self.display, self.editing);
        let should_return = match self.delegate.as_mut() {
            Some(delegate) => delegate.should_return(&snapshot),
            None => true,
        };
        let ended_editing = self.behavior.end_editing_on_return
            && should_return
            && self.editing
            && self.end_editing(EndEditingReason::Committed);
        SubmitOutcome {
            committed,
            should_return,
            ended_editing,
        }
    }

    /// Programmatic clear. Returns `false` when the delegate refuses.
    pub fn clear(&mut self) -> bool {
        let snapshot = snapshot_of(&self.user_text, &self.display, self.editing);
        if let Some(delegate) = self.delegate.as_mut()
            && !delegate.should_clear(&snapshot)
        {
            return false;
        }
        self.user_text.clear();
        self.reset_display();
        true
    }
}

fn snapshot_of<'a>(user_text: &'a str, display: &'a StyledText, editing: bool) -> FieldSnapshot<'a> {
    FieldSnapshot {
        user_text,
        display_text: display.text(),
        editing,
    }
}
