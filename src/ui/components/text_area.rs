//! Multi-line text area for description and remediation.
//!
//! Content is split on `\n` only, so `content()` returns exactly what was
//! loaded (trailing newlines and `\r` included) until the user edits it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::theme;

/// A multi-line text area.
#[derive(Debug, Clone)]
pub struct TextArea {
    /// Lines of text, without their separators.
    lines: Vec<String>,
    /// Current line (0-indexed).
    cursor_line: usize,
    /// Current column in characters.
    cursor_col: usize,
    /// First visible line.
    scroll: usize,
}

impl TextArea {
    /// Create a text area holding `content`, cursor at the start.
    pub fn new(content: &str) -> Self {
        Self {
            lines: content.split('\n').map(String::from).collect(),
            cursor_line: 0,
            cursor_col: 0,
            scroll: 0,
        }
    }

    /// Create an empty text area.
    pub fn empty() -> Self {
        Self::new("")
    }

    /// Get the current content.
    pub fn content(&self) -> String {
        self.lines.join("\n")
    }

    pub fn cursor_line(&self) -> usize {
        self.cursor_line
    }

    pub fn cursor_col(&self) -> usize {
        self.cursor_col
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn line_len(&self, line: usize) -> usize {
        self.lines[line].chars().count()
    }

    fn byte_index(&self) -> usize {
        let line = &self.lines[self.cursor_line];
        line.char_indices()
            .nth(self.cursor_col)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }

    fn clamp_cursor_col(&mut self) {
        self.cursor_col = self.cursor_col.min(self.line_len(self.cursor_line));
    }

    fn ensure_cursor_visible(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.cursor_line < self.scroll {
            self.scroll = self.cursor_line;
        }
        if self.cursor_line >= self.scroll + visible_height {
            self.scroll = self.cursor_line + 1 - visible_height;
        }
    }

    /// Handle keyboard input.
    ///
    /// Returns true if the content was modified.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                let at = self.byte_index();
                self.lines[self.cursor_line].insert(at, c);
                self.cursor_col += 1;
                true
            }
            (KeyCode::Enter, KeyModifiers::NONE) => {
                let at = self.byte_index();
                let rest = self.lines[self.cursor_line].split_off(at);
                self.lines.insert(self.cursor_line + 1, rest);
                self.cursor_line += 1;
                self.cursor_col = 0;
                true
            }
            (KeyCode::Backspace, _) => self.delete_backward(),
            (KeyCode::Delete, _) => self.delete_forward(),
            (KeyCode::Left, KeyModifiers::NONE) => {
                if self.cursor_col > 0 {
                    self.cursor_col -= 1;
                } else if self.cursor_line > 0 {
                    self.cursor_line -= 1;
                    self.cursor_col = self.line_len(self.cursor_line);
                }
                false
            }
            (KeyCode::Right, KeyModifiers::NONE) => {
                if self.cursor_col < self.line_len(self.cursor_line) {
                    self.cursor_col += 1;
                } else if self.cursor_line + 1 < self.lines.len() {
                    self.cursor_line += 1;
                    self.cursor_col = 0;
                }
                false
            }
            (KeyCode::Up, KeyModifiers::NONE) => {
                if self.cursor_line > 0 {
                    self.cursor_line -= 1;
                    self.clamp_cursor_col();
                }
                false
            }
            (KeyCode::Down, KeyModifiers::NONE) => {
                if self.cursor_line + 1 < self.lines.len() {
                    self.cursor_line += 1;
                    self.clamp_cursor_col();
                }
                false
            }
            (KeyCode::Home, _) => {
                self.cursor_col = 0;
                false
            }
            (KeyCode::End, _) => {
                self.cursor_col = self.line_len(self.cursor_line);
                false
            }
            // Ctrl+K - delete to end of line, or join with the next line
            (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
                let at = self.byte_index();
                if at < self.lines[self.cursor_line].len() {
                    self.lines[self.cursor_line].truncate(at);
                    true
                } else if self.cursor_line + 1 < self.lines.len() {
                    let next = self.lines.remove(self.cursor_line + 1);
                    self.lines[self.cursor_line].push_str(&next);
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    fn delete_backward(&mut self) -> bool {
        if self.cursor_col > 0 {
            self.cursor_col -= 1;
            let at = self.byte_index();
            self.lines[self.cursor_line].remove(at);
            true
        } else if self.cursor_line > 0 {
            let current = self.lines.remove(self.cursor_line);
            self.cursor_line -= 1;
            self.cursor_col = self.line_len(self.cursor_line);
            self.lines[self.cursor_line].push_str(&current);
            true
        } else {
            false
        }
    }

    fn delete_forward(&mut self) -> bool {
        let at = self.byte_index();
        if at < self.lines[self.cursor_line].len() {
            self.lines[self.cursor_line].remove(at);
            true
        } else if self.cursor_line + 1 < self.lines.len() {
            let next = self.lines.remove(self.cursor_line + 1);
            self.lines[self.cursor_line].push_str(&next);
            true
        } else {
            false
        }
    }

    /// Render the text area inside a bordered block.
    pub fn render(&mut self, frame: &mut Frame, area: Rect, focused: bool, title: &str) {
        let t = theme();
        let visible_height = area.height.saturating_sub(2) as usize;
        self.ensure_cursor_visible(visible_height);

        let lines: Vec<Line> = self
            .lines
            .iter()
            .skip(self.scroll)
            .take(visible_height)
            .map(|line| Line::from(line.as_str()))
            .collect();

        let border_style = if focused {
            Style::default().fg(t.border_focused)
        } else {
            Style::default().fg(t.border)
        };

        let block = Block::default()
            .title(Span::styled(format!(" {} ", title), Style::default().fg(t.fg)))
            .borders(Borders::ALL)
            .border_style(border_style);

        let paragraph = Paragraph::new(lines)
            .style(Style::default().fg(t.input_fg))
            .block(block);
        frame.render_widget(paragraph, area);

        if focused {
            let col = u16::try_from(self.cursor_col).unwrap_or(u16::MAX);
            let row = u16::try_from(self.cursor_line - self.scroll).unwrap_or(u16::MAX);
            let cursor_x = area.x.saturating_add(1).saturating_add(col);
            let cursor_y = area.y.saturating_add(1).saturating_add(row);

            if cursor_y < area.y + area.height.saturating_sub(1)
                && cursor_x < area.x + area.width.saturating_sub(1)
            {
                frame.set_cursor_position(Position::new(cursor_x, cursor_y));
            }
        }
    }
}

impl Default for TextArea {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_content_is_verbatim() {
        for content in ["", "one", "a\nb", "trailing\n", "\n\n", "crlf\r\nline"] {
            let area = TextArea::new(content);
            assert_eq!(area.content(), content);
        }
    }

    #[test]
    fn test_line_count_includes_trailing_empty_line() {
        assert_eq!(TextArea::new("a\n").line_count(), 2);
        assert_eq!(TextArea::empty().line_count(), 1);
    }

    #[test]
    fn test_insert_char() {
        let mut area = TextArea::empty();
        assert!(area.handle_input(key(KeyCode::Char('a'))));
        assert_eq!(area.content(), "a");
    }

    #[test]
    fn test_enter_splits_line() {
        let mut area = TextArea::new("helloworld");
        for _ in 0..5 {
            area.handle_input(key(KeyCode::Right));
        }
        assert!(area.handle_input(key(KeyCode::Enter)));
        assert_eq!(area.content(), "hello\nworld");
        assert_eq!(area.cursor_line(), 1);
        assert_eq!(area.cursor_col(), 0);
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut area = TextArea::new("hello\nworld");
        area.handle_input(key(KeyCode::Down));
        assert!(area.handle_input(key(KeyCode::Backspace)));
        assert_eq!(area.content(), "helloworld");
        assert_eq!(area.cursor_col(), 5);
    }

    #[test]
    fn test_backspace_at_start() {
        let mut area = TextArea::new("hello");
        assert!(!area.handle_input(key(KeyCode::Backspace)));
        assert_eq!(area.content(), "hello");
    }

    #[test]
    fn test_delete_joins_lines() {
        let mut area = TextArea::new("ab\ncd");
        area.handle_input(key(KeyCode::End));
        assert!(area.handle_input(key(KeyCode::Delete)));
        assert_eq!(area.content(), "abcd");
        assert!(!area.handle_input(key(KeyCode::End)));
        assert!(!area.handle_input(key(KeyCode::Delete)));
    }

    #[test]
    fn test_multibyte_columns() {
        let mut area = TextArea::new("ñandú");
        area.handle_input(key(KeyCode::End));
        assert_eq!(area.cursor_col(), 5);
        assert!(area.handle_input(key(KeyCode::Backspace)));
        assert_eq!(area.content(), "ñand");
    }

    #[test]
    fn test_move_left_wraps_to_previous_line() {
        let mut area = TextArea::new("hello\nworld");
        area.handle_input(key(KeyCode::Down));
        area.handle_input(key(KeyCode::Left));
        assert_eq!(area.cursor_line(), 0);
        assert_eq!(area.cursor_col(), 5);
    }

    #[test]
    fn test_move_up_clamps_column() {
        let mut area = TextArea::new("hi\nhello");
        area.handle_input(key(KeyCode::Down));
        area.handle_input(key(KeyCode::End));
        area.handle_input(key(KeyCode::Up));
        assert_eq!(area.cursor_line(), 0);
        assert_eq!(area.cursor_col(), 2);
    }

    #[test]
    fn test_ctrl_k() {
        let mut area = TextArea::new("hello world\nnext");
        for _ in 0..5 {
            area.handle_input(key(KeyCode::Right));
        }

        let ctrl_k = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert!(area.handle_input(ctrl_k));
        assert_eq!(area.content(), "hello\nnext");
        assert!(area.handle_input(ctrl_k));
        assert_eq!(area.content(), "hellonext");
    }

    #[test]
    fn test_tab_is_not_consumed() {
        let mut area = TextArea::new("x");
        assert!(!area.handle_input(key(KeyCode::Tab)));
        assert_eq!(area.content(), "x");
    }
}
