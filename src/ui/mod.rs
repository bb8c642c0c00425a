//! User interface components and views.
//!
//! This module contains the terminal rendering of the issue form and the
//! widgets it is built from.

pub mod components;
pub mod theme;
mod views;

pub use components::{SeverityPicker, TextArea, TextInput};
pub use theme::{theme, Theme};
pub use views::{FormFocus, IssueFormAction, IssueFormView, IssueTab};
