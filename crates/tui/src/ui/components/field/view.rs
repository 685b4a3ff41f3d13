use predictive_engine::text::take_chars;
use predictive_engine::{PredictiveField, StyledText};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::style::FieldStyle;

/// Two spans: the user segment in the user style and the suggestion tail in
/// the prediction style.
pub fn styled_line<'a>(styled: &'a StyledText, style: &FieldStyle) -> Line<'a> {
    let mut spans = vec![Span::styled(styled.user_segment(), style.user)];
    let tail = styled.prediction_segment();
    if !tail.is_empty() {
        spans.push(Span::styled(tail, style.prediction));
    }
    Line::from(spans)
}

/// Draw the field into `area` and, while editing, place the terminal cursor
/// right after the user text.
pub fn render_field(frame: &mut Frame, area: Rect, field: &PredictiveField, style: &FieldStyle) {
    let focused = field.is_editing();
    let mut block = Block::default().padding(Padding::horizontal(style.text_offset));
    if style.show_border {
        let border = if focused { style.border_focused } else { style.border };
        block = block.borders(Borders::ALL).border_style(border);
    }
    let inner = block.inner(area);

    let styled = field.styled();
    let line = if styled.is_empty() && !style.placeholder_text.is_empty() {
        Line::from(Span::styled(style.placeholder_text.as_str(), style.placeholder))
    } else {
        styled_line(styled, style)
    };
    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let before_cursor = take_chars(styled.text(), field.cursor());
        let col = u16::try_from(before_cursor.width()).unwrap_or(u16::MAX);
        let x = inner.x.saturating_add(col).min(inner.right().saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}
