//! Screen layout for the demo: title, the field, key hints, submitted values
//! and the delegate activity feed.

pub mod components;
pub mod runtime;
pub mod theme;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::app::App;
use components::field::render_field;

const ACTIVITY_ROWS: u16 = 6;

pub fn draw(frame: &mut Frame, app: &App) {
    let theme = app.theme.as_ref();
    let splits = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(ACTIVITY_ROWS),
        ])
        .split(frame.area());

    let title = Line::from(vec![
        Span::styled("Predictive field", theme.accent_emphasis_style()),
        Span::styled(format!("  · {}", app.theme_label), theme.text_muted_style()),
    ]);
    frame.render_widget(Paragraph::new(title), splits[0]);

    render_field(frame, splits[1], &app.field, &app.field_style);

    let hints = if app.field.is_editing() {
        "Enter submit · Tab/→ accept · Ctrl-W word · Ctrl-U line · Esc leave"
    } else {
        "Type to edit · Esc quit"
    };
    frame.render_widget(Paragraph::new(Span::styled(hints, theme.text_secondary_style())), splits[2]);

    let items: Vec<ListItem> = app
        .submitted
        .iter()
        .rev()
        .map(|value| ListItem::new(Span::styled(value.as_str(), theme.status_success())))
        .collect();
    let submitted = List::new(items).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(theme.border_style(false))
            .title(Span::styled(" Submitted ", theme.text_secondary_style())),
    );
    frame.render_widget(submitted, splits[3]);

    let visible = usize::from(ACTIVITY_ROWS.saturating_sub(1));
    let lines: Vec<Line> = app
        .activity
        .recent(visible)
        .into_iter()
        .map(|entry| Line::from(Span::styled(entry, theme.text_muted_style())))
        .collect();
    let activity = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(theme.border_style(false))
            .title(Span::styled(" Delegate ", theme.text_secondary_style())),
    );
    frame.render_widget(activity, splits[4]);
}
