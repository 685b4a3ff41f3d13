use std::str::FromStr;

use predictive_util::Appearance;
use ratatui::style::{Color, Style};
use tracing::warn;

use crate::ui::theme::Theme;

/// Resolved presentation of the field: settings colours layered over the theme.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldStyle {
    pub user: Style,
    pub prediction: Style,
    pub placeholder: Style,
    pub border: Style,
    pub border_focused: Style,
    pub show_border: bool,
    pub text_offset: u16,
    pub placeholder_text: String,
}

impl FieldStyle {
    pub fn resolve<T: Theme + ?Sized>(appearance: &Appearance, theme: &T) -> Self {
        let roles = theme.roles();
        let user = parse_color(appearance.user_color.as_deref(), "user_color").unwrap_or(roles.text);
        let prediction = parse_color(appearance.prediction_color.as_deref(), "prediction_color").unwrap_or(roles.text_muted);
        let placeholder = parse_color(appearance.placeholder_color.as_deref(), "placeholder_color").unwrap_or(roles.text_muted);
        let border = parse_color(appearance.border_color.as_deref(), "border_color");

        Self {
            user: Style::default().fg(user),
            prediction: Style::default().fg(prediction),
            placeholder: Style::default().fg(placeholder),
            border: border.map_or_else(|| theme.border_style(false), |color| Style::default().fg(color)),
            border_focused: theme.border_style(true),
            show_border: appearance.border_width > 0,
            text_offset: appearance.text_offset,
            placeholder_text: appearance.placeholder.clone(),
        }
    }
}

fn parse_color(value: Option<&str>, setting: &str) -> Option<Color> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }
    match Color::from_str(value) {
        Ok(color) => Some(color),
        Err(error) => {
            warn!(setting, value, error = %error, "Unrecognized color; using theme default");
            None
        }
    }
}
