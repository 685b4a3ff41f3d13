//! Two-segment styling split of the display text.

use std::ops::Range;

use crate::text::{char_len, take_chars, skip_chars};

/// Which half of the display a segment belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SegmentRole {
    /// Typed by the user; drawn in the primary text colour.
    User,
    /// Supplied by the suggestion provider; drawn in the muted prediction colour.
    Prediction,
}

/// A styled char range of the display text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub role: SegmentRole,
    pub range: Range<usize>,
}

/// Display text plus the number of leading chars authored by the user.
///
/// `user_len` never exceeds the char length of `text`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    user_len: usize,
}

impl StyledText {
    pub fn new(text: impl Into<String>, user_len: usize) -> Self {
        let text = text.into();
        let user_len = user_len.min(char_len(&text));
        Self { text, user_len }
    }

    /// Everything styled as user text.
    pub fn plain(text: impl Into<String>) -> Self {
        let text = text.into();
        let user_len = char_len(&text);
        Self { text, user_len }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn user_len(&self) -> usize {
        self.user_len
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn user_segment(&self) -> &str {
        take_chars(&self.text, self.user_len)
    }

    pub fn prediction_segment(&self) -> &str {
        skip_chars(&self.text, self.user_len)
    }

    /// `[0, user_len)` as user text and `[user_len, len)` as prediction.
    pub fn segments(&self) -> [Segment; 2] {
        let total = char_len(&self.text);
        [
            Segment {
                role: SegmentRole::User,
                range: 0..self.user_len,
            },
            Segment {
                role: SegmentRole::Prediction,
                range: self.user_len..total,
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_user_and_prediction() {
        let styled = StyledText::new("this is", 2);
        assert_eq!(styled.user_segment(), "th");
        assert_eq!(styled.prediction_segment(), "is is");
        let [user, prediction] = styled.segments();
        assert_eq!(user.range, 0..2);
        assert_eq!(prediction.range, 2..7);
        assert_eq!(prediction.role, SegmentRole::Prediction);
    }

    #[test]
    fn user_len_is_clamped_to_text() {
        let styled = StyledText::new("ab", 5);
        assert_eq!(styled.user_len(), 2);
        assert_eq!(styled.prediction_segment(), "");
    }
}
