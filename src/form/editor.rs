//! Message editor collaborator for request and response payloads.
//!
//! The form never looks inside a payload. It hands bytes to an editor when a
//! record is loaded and takes whatever the editor holds when the record is
//! saved. Hosts with their own message viewers implement [`MessageEditor`];
//! [`BufferedEditor`] is the in-memory default.

use std::borrow::Cow;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::ui::theme::theme;

/// A component that stores, renders and returns a request or response payload.
pub trait MessageEditor {
    /// Replace the payload. `is_request` tells the editor which side of the
    /// exchange it is showing.
    fn set_message(&mut self, message: &[u8], is_request: bool);

    /// The current payload.
    fn message(&self) -> Vec<u8>;

    /// Draw the payload into `area`.
    fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool);

    /// Handle a key while the editor has focus.
    ///
    /// Returns true if the payload was modified.
    fn handle_input(&mut self, _key: KeyEvent) -> bool {
        false
    }
}

/// In-memory message editor.
///
/// Shows the payload as lossy UTF-8 and lets the user scroll it. The bytes
/// themselves are kept untouched.
#[derive(Debug, Clone, Default)]
pub struct BufferedEditor {
    /// The stored payload.
    message: Vec<u8>,
    /// Whether the payload is a request.
    is_request: bool,
    /// First visible line.
    scroll: u16,
}

impl BufferedEditor {
    /// Create an empty editor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the stored payload is a request.
    pub fn is_request(&self) -> bool {
        self.is_request
    }

    /// Current scroll offset in lines.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Text shown to the user.
    pub fn display_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.message)
    }

    fn line_count(&self) -> u16 {
        let lines = self.message.iter().filter(|b| **b == b'\n').count() + 1;
        u16::try_from(lines).unwrap_or(u16::MAX)
    }
}

impl MessageEditor for BufferedEditor {
    fn set_message(&mut self, message: &[u8], is_request: bool) {
        self.message = message.to_vec();
        self.is_request = is_request;
        self.scroll = 0;
    }

    fn message(&self) -> Vec<u8> {
        self.message.clone()
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        let t = theme();

        let title = if self.is_request {
            " Request "
        } else {
            " Response "
        };

        let border_style = if focused {
            Style::default().fg(t.border_focused)
        } else {
            Style::default().fg(t.border)
        };

        let block = Block::default()
            .title(Span::styled(title, Style::default().fg(t.fg)))
            .borders(Borders::ALL)
            .border_style(border_style);

        let paragraph = if self.message.is_empty() {
            Paragraph::new(Span::styled(
                "(empty)",
                Style::default().fg(t.input_placeholder),
            ))
        } else {
            Paragraph::new(self.display_text().into_owned())
                .style(Style::default().fg(t.input_fg))
                .wrap(Wrap { trim: false })
                .scroll((self.scroll, 0))
        };

        frame.render_widget(paragraph.block(block), area);
    }

    fn handle_input(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Down, KeyModifiers::NONE) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
                if self.scroll + 1 < self.line_count() {
                    self.scroll += 1;
                }
            }
            (KeyCode::Up, KeyModifiers::NONE) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
                self.scroll = self.scroll.saturating_sub(1);
            }
            (KeyCode::Home, _) => self.scroll = 0,
            _ => {}
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_message_stores_bytes_unchanged() {
        let mut editor = BufferedEditor::new();
        let payload = [0x47, 0x45, 0x54, 0x00, 0xff, 0x0a];
        editor.set_message(&payload, true);

        assert_eq!(editor.message(), payload.to_vec());
        assert!(editor.is_request());
    }

    #[test]
    fn test_display_text_is_lossy() {
        let mut editor = BufferedEditor::new();
        editor.set_message(&[b'o', b'k', 0xff], false);
        assert_eq!(editor.display_text(), "ok\u{fffd}");
        assert_eq!(editor.message(), vec![b'o', b'k', 0xff]);
    }

    #[test]
    fn test_scroll_is_bounded_by_lines() {
        let mut editor = BufferedEditor::new();
        editor.set_message(b"line1\nline2", false);

        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert!(!editor.handle_input(down));
        editor.handle_input(down);
        assert_eq!(editor.scroll(), 1);

        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        editor.handle_input(up);
        editor.handle_input(up);
        assert_eq!(editor.scroll(), 0);
    }

    #[test]
    fn test_set_message_resets_scroll() {
        let mut editor = BufferedEditor::new();
        editor.set_message(b"a\nb\nc", true);
        editor.handle_input(KeyEvent::new(KeyCode::Down, KeyModifiers::NONE));
        assert_eq!(editor.scroll(), 1);

        editor.set_message(b"x", true);
        assert_eq!(editor.scroll(), 0);
    }

    #[test]
    fn test_keys_never_modify_payload() {
        let mut editor = BufferedEditor::new();
        editor.set_message(b"body", false);

        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        assert!(!editor.handle_input(key));
        assert_eq!(editor.message(), b"body".to_vec());
    }
}
