use predictive_engine::{EditEvent, PredictiveField, StaticSuggestion, TextChange, WordListProvider, classify};

fn word_field() -> PredictiveField {
    PredictiveField::new().with_provider(WordListProvider::new(["Seattle", "San Francisco", "Santa Fe", "Salem"]))
}

fn type_chars(field: &mut PredictiveField, text: &str) {
    for ch in text.chars() {
        let at = field.cursor();
        field.apply_edit(&EditEvent::insert(at, ch.to_string()));
    }
}

fn backspace(field: &mut PredictiveField) {
    let edit = EditEvent::backspace(field.cursor()).expect("cursor past start");
    field.apply_edit(&edit);
}

#[test]
fn typing_narrows_suggestion_and_keeps_cursor_at_user_text() {
    let mut field = word_field();

    type_chars(&mut field, "s");
    assert_eq!(field.user_text(), "S");
    assert_eq!(field.display_text(), "Seattle");
    assert_eq!(field.cursor(), 1);

    type_chars(&mut field, "an");
    assert_eq!(field.user_text(), "San");
    assert_eq!(field.display_text(), "San Francisco");
    assert_eq!(field.cursor(), 3);

    type_chars(&mut field, "t");
    assert_eq!(field.display_text(), "Santa Fe");
    assert_eq!(field.styled().prediction_segment(), "a Fe");
}

#[test]
fn typing_past_every_match_drops_the_tail() {
    let mut field = word_field();
    type_chars(&mut field, "sax");
    assert_eq!(field.user_text(), "Sax");
    assert_eq!(field.display_text(), "Sax");
    assert!(!field.has_prediction());
}

#[test]
fn backspacing_to_empty_clears_display() {
    let mut field = word_field();
    type_chars(&mut field, "sa");
    backspace(&mut field);
    assert_eq!(field.user_text(), "S");
    assert_eq!(field.display_text(), "Seattle");
    backspace(&mut field);
    assert_eq!(field.user_text(), "");
    assert_eq!(field.display_text(), "");
    assert_eq!(field.cursor(), 0);
}

#[test]
fn paste_replaces_selection_within_user_text() {
    let mut field = PredictiveField::new().with_provider(StaticSuggestion::new("resting place"));
    field.set_text("testing");

    field.apply_edit(&EditEvent::new(predictive_engine::EditRange::new(0, 7), "rest"));

    assert_eq!(field.user_text(), "rest");
    assert_eq!(field.display_text(), "resting place");
}

#[test]
fn submit_then_keep_typing_extends_committed_text() {
    let mut field = word_field();
    field.begin_editing();
    type_chars(&mut field, "sal");
    let outcome = field.submit();
    assert_eq!(outcome.committed.as_deref(), Some("Salem"));
    assert!(!field.is_editing());

    field.begin_editing();
    type_chars(&mut field, "!");
    assert_eq!(field.user_text(), "Salem!");
    assert_eq!(classify("Salem", field.user_text()), TextChange::added("!"));
}
