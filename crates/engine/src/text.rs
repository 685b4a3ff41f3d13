//! Character-addressed string helpers.
//!
//! Every offset handled by the field is a count of Unicode scalar values, so
//! these helpers translate char offsets into byte offsets before slicing.
//! Out-of-range offsets are clamped rather than rejected.

/// Number of chars in `text`.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Byte index of the char at `offset`, or `text.len()` when past the end.
pub fn byte_offset(text: &str, offset: usize) -> usize {
    text.char_indices().nth(offset).map(|(idx, _)| idx).unwrap_or(text.len())
}

/// The first `count` chars of `text`.
pub fn take_chars(text: &str, count: usize) -> &str {
    &text[..byte_offset(text, count)]
}

/// Everything after the first `count` chars of `text`.
pub fn skip_chars(text: &str, count: usize) -> &str {
    &text[byte_offset(text, count)..]
}

/// `text` without its final char.
pub fn drop_last_char(text: &str) -> &str {
    match text.char_indices().next_back() {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Replace `length` chars starting at `location` with `replacement`.
///
/// The range is clamped to the bounds of `text`, so a range that starts or
/// ends beyond the last char degrades to an append.
pub fn splice_chars(text: &str, location: usize, length: usize, replacement: &str) -> String {
    let start = byte_offset(text, location);
    let end = byte_offset(text, location.saturating_add(length));
    let mut out = String::with_capacity(text.len() + replacement.len());
    out.push_str(&text[..start]);
    out.push_str(replacement);
    out.push_str(&text[end..]);
    out
}
