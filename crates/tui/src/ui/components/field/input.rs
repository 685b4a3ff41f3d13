//! Translate terminal input into field commands.
//!
//! Every text-changing key becomes an [`EditEvent`] addressed at the field's
//! cursor, which always sits at the end of the user text. The field decides
//! what the edit means; this module never touches text itself.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use predictive_engine::{EditEvent, PredictiveField};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldCommand {
    Edit(EditEvent),
    /// Commit the visible suggestion and keep editing.
    Accept,
    /// Return key.
    Submit,
    /// Leave the field.
    Blur,
    Quit,
    Ignore,
}

/// Map a key press to a command for `field`.
pub fn command_for_key(field: &PredictiveField, key: KeyEvent) -> FieldCommand {
    if key.kind == KeyEventKind::Release {
        return FieldCommand::Ignore;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let cursor = field.cursor();

    match key.code {
        KeyCode::Char('c') if ctrl => FieldCommand::Quit,
        KeyCode::Char('u') if ctrl => delete_back_to(0, cursor),
        KeyCode::Char('w') if ctrl => delete_back_to(previous_word_start(field.user_text(), cursor), cursor),
        KeyCode::Char(_) if ctrl || alt => FieldCommand::Ignore,
        KeyCode::Char(ch) => FieldCommand::Edit(EditEvent::insert(cursor, ch.to_string())),
        KeyCode::Backspace => EditEvent::backspace(cursor).map_or(FieldCommand::Ignore, FieldCommand::Edit),
        KeyCode::Enter => FieldCommand::Submit,
        KeyCode::Tab => FieldCommand::Accept,
        KeyCode::Right | KeyCode::End if field.has_prediction() => FieldCommand::Accept,
        KeyCode::Esc if field.is_editing() => FieldCommand::Blur,
        KeyCode::Esc => FieldCommand::Quit,
        _ => FieldCommand::Ignore,
    }
}

/// Bracketed paste inserts the whole payload as a single edit. Line breaks
/// are flattened to spaces because the field is single-line.
pub fn command_for_paste(field: &PredictiveField, pasted: &str) -> FieldCommand {
    let flattened: String = pasted
        .chars()
        .filter(|ch| *ch != '\r')
        .map(|ch| if ch == '\n' { ' ' } else { ch })
        .collect();
    if flattened.is_empty() {
        return FieldCommand::Ignore;
    }
    FieldCommand::Edit(EditEvent::insert(field.cursor(), flattened))
}

fn delete_back_to(start: usize, cursor: usize) -> FieldCommand {
    if start >= cursor {
        return FieldCommand::Ignore;
    }
    FieldCommand::Edit(EditEvent::delete(start, cursor - start))
}

/// Char offset where the word before `cursor` starts, skipping trailing spaces.
fn previous_word_start(text: &str, cursor: usize) -> usize {
    let chars: Vec<char> = text.chars().take(cursor).collect();
    let mut idx = chars.len();
    while idx > 0 && chars[idx - 1].is_whitespace() {
        idx -= 1;
    }
    while idx > 0 && !chars[idx - 1].is_whitespace() {
        idx -= 1;
    }
    idx
}

#[cfg(test)]
mod tests {
    use super::*;
    use predictive_engine::StaticSuggestion;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
    }

    fn editing_field(text: &str) -> PredictiveField {
        let mut field = PredictiveField::new().with_provider(StaticSuggestion::new("hello world"));
        field.begin_editing();
        field.set_text(text);
        field
    }

    #[test]
    fn printable_chars_insert_at_cursor() {
        let field = editing_field("ab");
        assert_eq!(command_for_key(&field, key(KeyCode::Char('c'))), FieldCommand::Edit(EditEvent::insert(2, "c")));
        let shifted = KeyEvent::new(KeyCode::Char('C'), KeyModifiers::SHIFT);
        assert_eq!(command_for_key(&field, shifted), FieldCommand::Edit(EditEvent::insert(2, "C")));
    }

    #[test]
    fn backspace_targets_char_before_cursor() {
        let field = editing_field("ab");
        assert_eq!(command_for_key(&field, key(KeyCode::Backspace)), FieldCommand::Edit(EditEvent::delete(1, 1)));
        let empty = editing_field("");
        assert_eq!(command_for_key(&empty, key(KeyCode::Backspace)), FieldCommand::Ignore);
    }

    #[test]
    fn control_chords() {
        let field = editing_field("hello wor");
        assert_eq!(command_for_key(&field, ctrl('u')), FieldCommand::Edit(EditEvent::delete(0, 9)));
        assert_eq!(command_for_key(&field, ctrl('w')), FieldCommand::Edit(EditEvent::delete(6, 3)));
        assert_eq!(command_for_key(&field, ctrl('c')), FieldCommand::Quit);
        assert_eq!(command_for_key(&field, ctrl('x')), FieldCommand::Ignore);
    }

    #[test]
    fn delete_word_skips_trailing_spaces() {
        assert_eq!(previous_word_start("one two  ", 9), 4);
        assert_eq!(previous_word_start("one", 3), 0);
        assert_eq!(previous_word_start("", 0), 0);
    }

    #[test]
    fn right_arrow_accepts_only_with_prediction() {
        let mut field = editing_field("");
        assert_eq!(command_for_key(&field, key(KeyCode::Right)), FieldCommand::Ignore);
        field.apply_edit(&EditEvent::insert(0, "he"));
        assert!(field.has_prediction());
        assert_eq!(command_for_key(&field, key(KeyCode::Right)), FieldCommand::Accept);
        assert_eq!(command_for_key(&field, key(KeyCode::Tab)), FieldCommand::Accept);
    }

    #[test]
    fn escape_blurs_then_quits() {
        let mut field = editing_field("a");
        assert_eq!(command_for_key(&field, key(KeyCode::Esc)), FieldCommand::Blur);
        field.end_editing(predictive_engine::EndEditingReason::Blurred);
        assert_eq!(command_for_key(&field, key(KeyCode::Esc)), FieldCommand::Quit);
    }

    #[test]
    fn paste_flattens_newlines() {
        let field = editing_field("x");
        assert_eq!(command_for_paste(&field, "a\r\nb"), FieldCommand::Edit(EditEvent::insert(1, "a b")));
        assert_eq!(command_for_paste(&field, ""), FieldCommand::Ignore);
    }
}
