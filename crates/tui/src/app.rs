//! Application state for the predictive field demo.
//!
//! The app owns one [`PredictiveField`], routes terminal input to it as
//! field commands, and records what the field reported through a host
//! delegate so the screen can show the notification flow.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crossterm::event::KeyEvent;
use predictive_engine::{
    EditEvent, EndEditingReason, FieldDelegate, FieldSnapshot, PredictiveField, SuggestionProvider,
};
use predictive_util::Settings;
use tracing::debug;

use crate::ui::components::field::{FieldCommand, FieldStyle, command_for_key, command_for_paste};
use crate::ui::theme::{self, Theme};

const ACTIVITY_CAPACITY: usize = 50;

/// Host-side delegate that records every notification it receives.
#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    entries: Rc<RefCell<VecDeque<String>>>,
}

impl ActivityLog {
    pub fn push(&self, entry: impl Into<String>) {
        let mut entries = self.entries.borrow_mut();
        if entries.len() == ACTIVITY_CAPACITY {
            entries.pop_front();
        }
        entries.push_back(entry.into());
    }

    /// The last `count` entries, oldest first.
    pub fn recent(&self, count: usize) -> Vec<String> {
        let entries = self.entries.borrow();
        let skip = entries.len().saturating_sub(count);
        entries.iter().skip(skip).cloned().collect()
    }
}

impl FieldDelegate for ActivityLog {
    fn did_begin_editing(&mut self, field: &FieldSnapshot<'_>) {
        self.push(format!("editing started at {:?}", field.user_text));
    }

    fn did_end_editing(&mut self, field: &FieldSnapshot<'_>, reason: EndEditingReason) {
        let reason = match reason {
            EndEditingReason::Blurred => "blurred",
            EndEditingReason::Committed => "committed",
        };
        self.push(format!("editing ended ({reason}) with {:?}", field.user_text));
    }

    fn should_change_characters(&mut self, _field: &FieldSnapshot<'_>, edit: &EditEvent) -> bool {
        self.push(format!(
            "field emptied by edit at {}+{}",
            edit.range.location, edit.range.length
        ));
        false
    }

    fn should_return(&mut self, field: &FieldSnapshot<'_>) -> bool {
        self.push(format!("return with {:?}", field.user_text));
        true
    }
}

/// Inputs the runtime needs to build the app.
pub struct RunOptions {
    pub settings: Settings,
    pub provider: Box<dyn SuggestionProvider>,
}

pub struct App {
    pub field: PredictiveField,
    pub field_style: FieldStyle,
    pub theme: Box<dyn Theme>,
    pub theme_label: &'static str,
    pub submitted: Vec<String>,
    pub activity: ActivityLog,
    pub should_quit: bool,
}

impl App {
    pub fn new(options: RunOptions) -> Self {
        let RunOptions { settings, provider } = options;
        let loaded = theme::load(settings.theme.as_deref());
        let field_style = FieldStyle::resolve(&settings.appearance, loaded.theme.as_ref());
        let activity = ActivityLog::default();

        let mut field = PredictiveField::with_behavior(settings.behavior);
        field.set_provider(Some(provider));
        field.set_delegate(Some(Box::new(activity.clone())));
        field.begin_editing();

        Self {
            field,
            field_style,
            theme: loaded.theme,
            theme_label: loaded.definition.label,
            submitted: Vec::new(),
            activity,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let command = command_for_key(&self.field, key);
        self.execute(command);
    }

    pub fn handle_paste(&mut self, pasted: &str) {
        let command = command_for_paste(&self.field, pasted);
        self.execute(command);
    }

    pub fn execute(&mut self, command: FieldCommand) {
        match command {
            FieldCommand::Ignore => return,
            FieldCommand::Quit => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        // Any other key while blurred focuses the field first.
        if !self.field.is_editing() {
            if !self.field.begin_editing() {
                return;
            }
            if command == FieldCommand::Blur {
                return;
            }
        }

        match command {
            FieldCommand::Edit(edit) => {
                let outcome = self.field.apply_edit(&edit);
                debug!(display = outcome.display.text(), cursor = outcome.cursor, "edit applied");
            }
            FieldCommand::Accept => {
                if let Some(accepted) = self.field.accept_suggestion() {
                    self.activity.push(format!("accepted {accepted:?}"));
                }
            }
            FieldCommand::Submit => {
                let outcome = self.field.submit();
                if outcome.should_return && !self.field.user_text().is_empty() {
                    self.submitted.push(self.field.user_text().to_string());
                    self.field.clear();
                }
            }
            FieldCommand::Blur => {
                self.field.end_editing(EndEditingReason::Blurred);
            }
            FieldCommand::Ignore | FieldCommand::Quit => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use predictive_engine::WordListProvider;

    fn app() -> App {
        App::new(RunOptions {
            settings: Settings::default(),
            provider: Box::new(WordListProvider::new(["Seattle", "Salem"])),
        })
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn typing_and_submitting_records_committed_value() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.field.display_text(), "Salem");

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.submitted, vec!["Salem".to_string()]);
        assert_eq!(app.field.display_text(), "");
        assert!(!app.field.is_editing());
        let activity = app.activity.recent(10);
        assert!(activity.iter().any(|entry| entry == "return with \"Salem\""), "{activity:?}");
        assert!(activity.iter().any(|entry| entry.starts_with("editing ended (committed)")), "{activity:?}");
    }

    #[test]
    fn key_after_blur_refocuses_and_types() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(!app.field.is_editing());

        press(&mut app, KeyCode::Char('s'));

        assert!(app.field.is_editing());
        assert_eq!(app.field.user_text(), "S");
    }

    #[test]
    fn escape_twice_quits() {
        let mut app = app();
        press(&mut app, KeyCode::Esc);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn tab_accepts_suggestion_without_ending_editing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.field.user_text(), "Seattle");
        assert!(app.field.is_editing());
        assert!(app.submitted.is_empty());
    }

    #[test]
    fn activity_log_is_bounded() {
        let log = ActivityLog::default();
        for idx in 0..(ACTIVITY_CAPACITY + 5) {
            log.push(idx.to_string());
        }
        let recent = log.recent(usize::MAX);
        assert_eq!(recent.len(), ACTIVITY_CAPACITY);
        assert_eq!(recent.first().map(String::as_str), Some("5"));
    }
}
