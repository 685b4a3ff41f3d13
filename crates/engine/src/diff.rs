//! Positional text diff used to work out what a keystroke did.
//!
//! The classifier compares two full values left to right and reports the
//! change as a pure suffix addition, a removal (optionally followed by new
//! trailing content), or no change at all. It is deliberately positional:
//! `"test" -> "testtest"` is an addition of `"test"`, not a detected repeat.
//!
//! Comparison is case-sensitive; callers that want case-insensitive matching
//! fold both inputs first.

use serde::Serialize;

/// Classification of the difference between two values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TextChange {
    /// Both values are identical.
    None,
    /// `text` was appended to the previous value.
    Added { text: String },
    /// `removed` was cut from the end of the previous value and `added`, when
    /// present, now trails in its place.
    Removed { removed: String, added: Option<String> },
}

impl TextChange {
    pub fn added(text: impl Into<String>) -> Self {
        Self::Added { text: text.into() }
    }

    pub fn removed(removed: impl Into<String>, added: Option<&str>) -> Self {
        Self::Removed {
            removed: removed.into(),
            added: added.map(str::to_string),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

/// Classify the transformation from `previous` to `current`.
///
/// # Examples
///
/// ```
/// use predictive_engine::{TextChange, classify};
///
/// assert_eq!(classify("test", "testing"), TextChange::added("ing"));
/// assert_eq!(classify("testing", "test"), TextChange::removed("ing", None));
/// ```
pub fn classify(previous: &str, current: &str) -> TextChange {
    if let Some(text) = addition(previous, current) {
        return TextChange::Added { text };
    }
    if let Some((removed, added)) = removal(previous, current) {
        return TextChange::Removed { removed, added };
    }
    TextChange::None
}

/// Only fires when `current` is strictly longer than `previous`.
fn addition(previous: &str, current: &str) -> Option<String> {
    let previous: Vec<char> = previous.chars().collect();
    let current: Vec<char> = current.chars().collect();
    if current.len() <= previous.len() {
        return None;
    }
    let boundary = previous
        .iter()
        .zip(current.iter())
        .position(|(p, c)| p != c)
        .unwrap_or(previous.len());
    Some(current[boundary..].iter().collect())
}

fn removal(previous: &str, current: &str) -> Option<(String, Option<String>)> {
    if let Some(removed) = suffix_change(previous, current) {
        let added = suffix_change(current, previous);
        return Some((removed, added));
    }
    // `current` is a strict prefix of `previous`: the reverse scan runs past
    // the end of `current` and collects the dropped tail.
    suffix_change(current, previous).map(|removed| (removed, None))
}

/// Walk `to` against `from`. At the first mismatch the rest of `from` is the
/// divergent suffix; chars of `to` beyond the end of `from` are collected as
/// extra. Returns `None` when nothing diverges.
fn suffix_change(from: &str, to: &str) -> Option<String> {
    let from: Vec<char> = from.chars().collect();
    let mut changes = String::new();
    for (offset, ch) in to.chars().enumerate() {
        match from.get(offset) {
            None => changes.push(ch),
            Some(existing) if *existing == ch => {}
            Some(_) => {
                changes = from[offset..].iter().collect();
                break;
            }
        }
    }
    (!changes.is_empty()).then_some(changes)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &["", "t", "test", "testing", "Résumé", "a🙂b", "this is a test"];

    #[test]
    fn identical_values_are_unchanged() {
        for sample in SAMPLES {
            assert_eq!(classify(sample, sample), TextChange::None, "sample {sample:?}");
        }
    }

    #[test]
    fn true_prefix_classifies_as_addition_and_reverse_as_removal() {
        for full in SAMPLES {
            let len = full.chars().count();
            for cut in 0..len {
                let prefix: String = full.chars().take(cut).collect();
                let tail: String = full.chars().skip(cut).collect();
                assert_eq!(classify(&prefix, full), TextChange::added(tail.as_str()));
                assert_eq!(classify(full, &prefix), TextChange::removed(tail.as_str(), None));
            }
        }
    }

    #[test]
    fn addition_from_empty() {
        assert_eq!(classify("", "test"), TextChange::added("test"));
    }

    #[test]
    fn addition_from_test_to_testing() {
        assert_eq!(classify("test", "testing"), TextChange::added("ing"));
    }

    #[test]
    fn repeated_value_is_positional() {
        assert_eq!(classify("test", "testtest"), TextChange::added("test"));
    }

    #[test]
    fn appending_after_concatenation_round_trips() {
        let base = "predict";
        let extra = "ion";
        let grown = format!("{base}{extra}");
        assert_eq!(classify(base, &grown), TextChange::added(extra));
    }

    #[test]
    fn removal_from_testing_to_test() {
        assert_eq!(classify("testing", "test"), TextChange::removed("ing", None));
    }

    #[test]
    fn replacement_from_testing_to_resting() {
        assert_eq!(classify("testing", "resting"), TextChange::removed("testing", Some("resting")));
    }

    #[test]
    fn same_length_edit_reports_both_halves() {
        assert_eq!(classify("abc", "abd"), TextChange::removed("c", Some("d")));
    }

    #[test]
    fn longer_value_diverging_early_reports_current_tail() {
        assert_eq!(classify("abc", "xbcd"), TextChange::added("xbcd"));
    }

    #[test]
    fn everything_removed() {
        assert_eq!(classify("te", ""), TextChange::removed("te", None));
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert_eq!(classify("Test", "test"), TextChange::removed("Test", Some("test")));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(TextChange::removed("ing", None)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "removed", "removed": "ing", "added": null}));
        let json = serde_json::to_value(TextChange::None).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "none"}));
    }
}
