//! Predictive text field component: key mapping, styling and rendering.

pub mod input;
pub mod style;
pub mod view;

pub use input::{FieldCommand, command_for_key, command_for_paste};
pub use style::FieldStyle;
pub use view::{render_field, styled_line};
