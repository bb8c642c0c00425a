//! Reusable UI components.

mod input;
mod severity_picker;
mod text_area;

pub use input::TextInput;
pub use severity_picker::SeverityPicker;
pub use text_area::TextArea;
