//! Inline severity picker.
//!
//! Cycles through the fixed severity vocabulary with the arrow keys (and
//! h/l in vim mode). The picker can show an unset state, which is what a
//! host gets if it asked for a label outside the vocabulary.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::issue::Severity;
use crate::ui::theme::theme;

/// Severity picker component.
#[derive(Debug, Clone, Default)]
pub struct SeverityPicker {
    /// The selected severity, if any.
    selected: Option<Severity>,
    /// Whether h/l also move the selection.
    vim_mode: bool,
}

impl SeverityPicker {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            selected: None,
            vim_mode,
        }
    }

    pub fn selected(&self) -> Option<Severity> {
        self.selected
    }

    pub fn set_selected(&mut self, severity: Option<Severity>) {
        self.selected = severity;
    }

    /// Handle keyboard input.
    ///
    /// Returns true if the selection changed. From the unset state, the
    /// first move selects `Critical` (right) or `Info` (left).
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        let next = match (key.code, key.modifiers) {
            (KeyCode::Right, KeyModifiers::NONE) => self.step_less_severe(),
            (KeyCode::Char('l'), KeyModifiers::NONE) if self.vim_mode => self.step_less_severe(),
            (KeyCode::Left, KeyModifiers::NONE) => self.step_more_severe(),
            (KeyCode::Char('h'), KeyModifiers::NONE) if self.vim_mode => self.step_more_severe(),
            _ => return false,
        };

        let changed = next != self.selected;
        self.selected = next;
        changed
    }

    fn step_less_severe(&self) -> Option<Severity> {
        Some(self.selected.map_or(Severity::Critical, |s| s.next()))
    }

    fn step_more_severe(&self) -> Option<Severity> {
        Some(self.selected.map_or(Severity::Info, |s| s.prev()))
    }

    /// Render the picker as a row of labels with the selection highlighted.
    pub fn render(&self, frame: &mut Frame, area: Rect, focused: bool) {
        let t = theme();

        let mut spans = Vec::with_capacity(Severity::ALL.len() * 2);
        for severity in Severity::ALL {
            let style = if Some(severity) == self.selected {
                Style::default()
                    .fg(t.selection_fg)
                    .bg(t.accent)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(t.input_placeholder)
            };
            spans.push(Span::styled(format!(" {} ", severity), style));
            spans.push(Span::raw(" "));
        }

        let border_style = if focused {
            Style::default().fg(t.border_focused)
        } else {
            Style::default().fg(t.border)
        };

        let title_style = if focused {
            Style::default().fg(t.accent).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(t.fg)
        };

        let title = if self.selected.is_none() {
            " Severity * (unset) "
        } else {
            " Severity * "
        };

        let block = Block::default()
            .title(Span::styled(title, title_style))
            .borders(Borders::ALL)
            .border_style(border_style);

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_starts_unset() {
        assert_eq!(SeverityPicker::new(true).selected(), None);
    }

    #[test]
    fn test_right_from_unset_selects_critical() {
        let mut picker = SeverityPicker::new(false);
        assert!(picker.handle_input(key(KeyCode::Right)));
        assert_eq!(picker.selected(), Some(Severity::Critical));
    }

    #[test]
    fn test_left_from_unset_selects_info() {
        let mut picker = SeverityPicker::new(false);
        assert!(picker.handle_input(key(KeyCode::Left)));
        assert_eq!(picker.selected(), Some(Severity::Info));
    }

    #[test]
    fn test_moves_and_clamps() {
        let mut picker = SeverityPicker::new(false);
        picker.set_selected(Some(Severity::Critical));

        assert!(picker.handle_input(key(KeyCode::Right)));
        assert_eq!(picker.selected(), Some(Severity::High));

        picker.handle_input(key(KeyCode::Left));
        assert!(!picker.handle_input(key(KeyCode::Left)));
        assert_eq!(picker.selected(), Some(Severity::Critical));
    }

    #[test]
    fn test_vim_keys_only_in_vim_mode() {
        let mut picker = SeverityPicker::new(false);
        picker.set_selected(Some(Severity::Medium));
        assert!(!picker.handle_input(key(KeyCode::Char('l'))));
        assert_eq!(picker.selected(), Some(Severity::Medium));

        let mut picker = SeverityPicker::new(true);
        picker.set_selected(Some(Severity::Medium));
        assert!(picker.handle_input(key(KeyCode::Char('l'))));
        assert_eq!(picker.selected(), Some(Severity::Low));
        assert!(picker.handle_input(key(KeyCode::Char('h'))));
        assert_eq!(picker.selected(), Some(Severity::Medium));
    }
}
