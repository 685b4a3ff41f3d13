//! UI components.

pub mod field;
