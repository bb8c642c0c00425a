//! Theme and styling configuration.

use std::sync::OnceLock;

use ratatui::style::Color;

/// Color theme for the issue form.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary foreground color.
    pub fg: Color,
    /// Accent color for titles and the focused element.
    pub accent: Color,
    /// Border of unfocused elements.
    pub border: Color,
    /// Border of the focused element.
    pub border_focused: Color,
    /// Text inside inputs.
    pub input_fg: Color,
    /// Placeholder and "unset" text.
    pub input_placeholder: Color,
    /// Foreground on a highlighted button.
    pub selection_fg: Color,
    /// Save button.
    pub success: Color,
    /// Reset button.
    pub warning: Color,
    /// Validation errors and the cancel button.
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Color::White,
            accent: Color::Cyan,
            border: Color::DarkGray,
            border_focused: Color::Yellow,
            input_fg: Color::White,
            input_placeholder: Color::DarkGray,
            selection_fg: Color::Black,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

static THEME: OnceLock<Theme> = OnceLock::new();

/// Get the active theme.
pub fn theme() -> &'static Theme {
    THEME.get_or_init(Theme::default)
}
