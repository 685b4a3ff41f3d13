//! Suggestion providers.
//!
//! A provider maps the current user text to at most one completion. The
//! returned string should case-insensitively start with the prefix it was
//! asked about; the field does not check this and simply renders whatever it
//! receives.
//!
//! Providers are called synchronously on every edit. A provider backed by
//! asynchronous work must answer from whatever it has cached by the time it
//! is asked.

use std::fmt::Debug;

use indexmap::IndexSet;

/// Read-only view of the field handed to providers and delegates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSnapshot<'a> {
    pub user_text: &'a str,
    pub display_text: &'a str,
    pub editing: bool,
}

/// Source of inline completions.
pub trait SuggestionProvider {
    fn suggest(&self, field: &FieldSnapshot<'_>, prefix: &str) -> Option<String>;
}

impl<F> SuggestionProvider for F
where
    F: Fn(&FieldSnapshot<'_>, &str) -> Option<String>,
{
    fn suggest(&self, field: &FieldSnapshot<'_>, prefix: &str) -> Option<String> {
        self(field, prefix)
    }
}

/// Never suggests anything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullProvider;

impl SuggestionProvider for NullProvider {
    fn suggest(&self, _field: &FieldSnapshot<'_>, _prefix: &str) -> Option<String> {
        None
    }
}

/// Suggests one fixed phrase whenever the prefix matches it.
#[derive(Clone, Debug)]
pub struct StaticSuggestion {
    phrase: String,
}

impl StaticSuggestion {
    pub fn new(phrase: impl Into<String>) -> Self {
        Self { phrase: phrase.into() }
    }
}

impl SuggestionProvider for StaticSuggestion {
    fn suggest(&self, _field: &FieldSnapshot<'_>, prefix: &str) -> Option<String> {
        if prefix.is_empty() {
            return None;
        }
        starts_with_ignore_case(&self.phrase, prefix).then(|| self.phrase.clone())
    }
}

/// Ordered dictionary of completions.
///
/// Lookups return the first entry (in insertion order) that extends the
/// prefix case-insensitively. An entry equal to the prefix is only returned
/// when nothing longer matches.
#[derive(Clone, Debug, Default)]
pub struct WordListProvider {
    words: IndexSet<String>,
}

impl WordListProvider {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words = words
            .into_iter()
            .map(Into::into)
            .filter(|word: &String| !word.is_empty())
            .collect();
        Self { words }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Best completion for `prefix`, if any.
    pub fn lookup(&self, prefix: &str) -> Option<&str> {
        if prefix.is_empty() {
            return None;
        }
        let prefix_len = prefix.chars().count();
        let mut exact = None;
        for word in &self.words {
            if !starts_with_ignore_case(word, prefix) {
                continue;
            }
            if word.chars().count() > prefix_len {
                return Some(word.as_str());
            }
            exact.get_or_insert(word.as_str());
        }
        exact
    }
}

impl SuggestionProvider for WordListProvider {
    fn suggest(&self, _field: &FieldSnapshot<'_>, prefix: &str) -> Option<String> {
        self.lookup(prefix).map(str::to_string)
    }
}

/// Case-insensitive `starts_with` over chars.
pub fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    let mut text_chars = text.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|expected| text_chars.next() == Some(expected))
}
