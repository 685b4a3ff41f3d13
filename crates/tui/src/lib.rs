//! # Predictive TUI
//!
//! Terminal rendering for a predictive text field. Typed characters are drawn
//! in the primary text colour and the provider's completion trails them in a
//! muted colour; the terminal cursor always sits between the two.
//!
//! The `field` component can be embedded in any ratatui application: map keys
//! with [`command_for_key`], feed the resulting edit events to a
//! [`predictive_engine::PredictiveField`], and draw it with [`render_field`].
//! [`run`] drives a standalone demo screen around a single field.

mod app;
mod ui;

use anyhow::Result;

pub use app::{ActivityLog, App, RunOptions};
pub use ui::components::field::{FieldCommand, FieldStyle, command_for_key, command_for_paste, render_field, styled_line};
pub use ui::theme::{LoadedTheme, Theme, ThemeRoles, load as load_theme};

/// Runs the interactive demo until the user quits.
///
/// Returns the values submitted during the session, most recent last.
///
/// # Errors
///
/// Terminal setup failures (raw mode, alternate screen) and draw errors.
pub async fn run(options: RunOptions) -> Result<Vec<String>> {
    ui::runtime::run_app(options).await
}
