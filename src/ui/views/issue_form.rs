//! Issue form view.
//!
//! Renders an [`IssueFormController`] as a modal overlay and turns key events
//! into edits, reset, save and cancel. Every edit is written straight into
//! the controller's draft, so the view holds widget state only.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs},
    Frame,
};
use tracing::debug;

use crate::config::Settings;
use crate::form::{CompletionSink, IssueFormController, MessageEditor, SaveOutcome};
use crate::issue::{FormField, IssueDraft};
use crate::ui::components::{SeverityPicker, TextArea, TextInput};
use crate::ui::theme::theme;

// ============================================================================
// Issue Form View
// ============================================================================

/// Actions returned from the issue form view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueFormAction {
    /// The issue was saved; the sink has already been notified.
    Saved(SaveOutcome),
    /// The form was closed without saving.
    Cancelled,
}

/// Focusable elements of the form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormFocus {
    #[default]
    Name,
    Severity,
    Host,
    Path,
    /// The tab bar (left/right switches tabs).
    Tabs,
    /// The content of the selected tab.
    TabBody,
    Save,
    Reset,
    Cancel,
}

impl FormFocus {
    const ORDER: [FormFocus; 9] = [
        FormFocus::Name,
        FormFocus::Severity,
        FormFocus::Host,
        FormFocus::Path,
        FormFocus::Tabs,
        FormFocus::TabBody,
        FormFocus::Save,
        FormFocus::Reset,
        FormFocus::Cancel,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn is_button(self) -> bool {
        matches!(self, FormFocus::Save | FormFocus::Reset | FormFocus::Cancel)
    }
}

/// Tabs below the header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IssueTab {
    #[default]
    Description,
    Remediation,
    Request,
    Response,
}

impl IssueTab {
    const ALL: [IssueTab; 4] = [
        IssueTab::Description,
        IssueTab::Remediation,
        IssueTab::Request,
        IssueTab::Response,
    ];

    pub fn title(self) -> &'static str {
        match self {
            IssueTab::Description => "Description",
            IssueTab::Remediation => "Remediation",
            IssueTab::Request => "Request",
            IssueTab::Response => "Response",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ALL[(self.index() + 1).min(Self::ALL.len() - 1)]
    }

    fn prev(self) -> Self {
        Self::ALL[self.index().saturating_sub(1)]
    }
}

/// The issue form view.
pub struct IssueFormView {
    name_input: TextInput,
    host_input: TextInput,
    path_input: TextInput,
    severity_picker: SeverityPicker,
    description_area: TextArea,
    remediation_area: TextArea,
    /// Currently focused element.
    focus: FormFocus,
    /// Currently selected tab.
    tab: IssueTab,
    /// Whether h/l also navigate.
    vim_mode: bool,
    /// Last validation or state error, shown above the buttons.
    error: Option<String>,
}

impl IssueFormView {
    /// Create a view with empty widgets.
    pub fn new(settings: &Settings) -> Self {
        Self {
            name_input: TextInput::new(),
            host_input: TextInput::new(),
            path_input: TextInput::new(),
            severity_picker: SeverityPicker::new(settings.vim_mode),
            description_area: TextArea::empty(),
            remediation_area: TextArea::empty(),
            focus: FormFocus::default(),
            tab: IssueTab::default(),
            vim_mode: settings.vim_mode,
            error: None,
        }
    }

    /// Populate the widgets from the controller's session and focus the
    /// first field. Call after `open`.
    pub fn load_from<S, E>(&mut self, form: &IssueFormController<S, E>)
    where
        S: CompletionSink,
        E: MessageEditor,
    {
        self.sync_from_form(form);
        self.focus = FormFocus::Name;
        self.tab = IssueTab::Description;
        self.error = None;
    }

    pub fn focus(&self) -> FormFocus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: FormFocus) {
        self.focus = focus;
    }

    pub fn tab(&self) -> IssueTab {
        self.tab
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether the host should route every key to this view while the form
    /// is open. Modeless forms leave the rest of the host interactive.
    pub fn captures_all_input<S, E>(form: &IssueFormController<S, E>) -> bool
    where
        S: CompletionSink,
        E: MessageEditor,
    {
        form.is_open() && form.modality().blocks_host_input()
    }

    /// Handle keyboard input.
    ///
    /// Returns an action when the form was saved or cancelled; the host
    /// should then close the overlay.
    pub fn handle_input<S, E>(
        &mut self,
        form: &mut IssueFormController<S, E>,
        key: KeyEvent,
    ) -> Option<IssueFormAction>
    where
        S: CompletionSink,
        E: MessageEditor,
    {
        if !form.is_open() {
            return None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => {
                form.cancel();
                Some(IssueFormAction::Cancelled)
            }
            (KeyCode::Char('s'), KeyModifiers::CONTROL) => self.save(form),
            (KeyCode::Char('r'), KeyModifiers::CONTROL) => {
                self.reset(form);
                None
            }
            (KeyCode::Tab, KeyModifiers::NONE) => {
                self.focus = self.focus.next();
                None
            }
            (KeyCode::BackTab, _) | (KeyCode::Tab, KeyModifiers::SHIFT) => {
                self.focus = self.focus.prev();
                None
            }
            (KeyCode::Enter, KeyModifiers::NONE) => match self.focus {
                FormFocus::Save => self.save(form),
                FormFocus::Reset => {
                    self.reset(form);
                    None
                }
                FormFocus::Cancel => {
                    form.cancel();
                    Some(IssueFormAction::Cancelled)
                }
                FormFocus::TabBody => {
                    self.handle_tab_body_input(form, key);
                    None
                }
                _ => {
                    self.focus = self.focus.next();
                    None
                }
            },
            _ => {
                self.handle_field_input(form, key);
                None
            }
        }
    }

    /// Handle input for the focused element.
    fn handle_field_input<S, E>(&mut self, form: &mut IssueFormController<S, E>, key: KeyEvent)
    where
        S: CompletionSink,
        E: MessageEditor,
    {
        match self.focus {
            FormFocus::Name => {
                if self.name_input.handle_input(key) {
                    Self::write_text(form, FormField::Name, self.name_input.value());
                }
            }
            FormFocus::Host => {
                if self.host_input.handle_input(key) {
                    Self::write_text(form, FormField::Host, self.host_input.value());
                }
            }
            FormFocus::Path => {
                if self.path_input.handle_input(key) {
                    Self::write_text(form, FormField::Path, self.path_input.value());
                }
            }
            FormFocus::Severity => {
                if self.severity_picker.handle_input(key) {
                    if let Ok(draft) = form.draft_mut() {
                        draft.set_severity(self.severity_picker.selected());
                    }
                }
            }
            FormFocus::Tabs => self.handle_tab_bar_input(key),
            FormFocus::TabBody => self.handle_tab_body_input(form, key),
            FormFocus::Save | FormFocus::Reset | FormFocus::Cancel => {
                self.handle_button_input(key);
            }
        }
    }

    fn handle_tab_bar_input(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Right, KeyModifiers::NONE) => self.tab = self.tab.next(),
            (KeyCode::Char('l'), KeyModifiers::NONE) if self.vim_mode => self.tab = self.tab.next(),
            (KeyCode::Left, KeyModifiers::NONE) => self.tab = self.tab.prev(),
            (KeyCode::Char('h'), KeyModifiers::NONE) if self.vim_mode => self.tab = self.tab.prev(),
            _ => {}
        }
    }

    fn handle_tab_body_input<S, E>(&mut self, form: &mut IssueFormController<S, E>, key: KeyEvent)
    where
        S: CompletionSink,
        E: MessageEditor,
    {
        match self.tab {
            IssueTab::Description => {
                if self.description_area.handle_input(key) {
                    let content = self.description_area.content();
                    Self::write_text(form, FormField::Description, content);
                }
            }
            IssueTab::Remediation => {
                if self.remediation_area.handle_input(key) {
                    let content = self.remediation_area.content();
                    Self::write_text(form, FormField::Remediation, content);
                }
            }
            IssueTab::Request => {
                form.request_editor_mut().handle_input(key);
            }
            IssueTab::Response => {
                form.response_editor_mut().handle_input(key);
            }
        }
    }

    fn handle_button_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left if self.focus != FormFocus::Save => self.focus = self.focus.prev(),
            KeyCode::Right if self.focus != FormFocus::Cancel => self.focus = self.focus.next(),
            _ => {}
        }
    }

    fn write_text<S, E>(form: &mut IssueFormController<S, E>, field: FormField, value: impl Into<String>)
    where
        S: CompletionSink,
        E: MessageEditor,
    {
        if let Ok(draft) = form.draft_mut() {
            draft.set_text(field, value);
        }
    }

    fn save<S, E>(&mut self, form: &mut IssueFormController<S, E>) -> Option<IssueFormAction>
    where
        S: CompletionSink,
        E: MessageEditor,
    {
        match form.save() {
            Ok(outcome) => {
                self.error = None;
                Some(IssueFormAction::Saved(outcome))
            }
            Err(e) => {
                debug!(error = %e, "Save refused by form");
                if let Some(field) = e.field() {
                    self.focus_field(field);
                }
                self.error = Some(e.user_message());
                None
            }
        }
    }

    fn reset<S, E>(&mut self, form: &mut IssueFormController<S, E>)
    where
        S: CompletionSink,
        E: MessageEditor,
    {
        match form.reset() {
            Ok(_) => {
                self.sync_from_form(form);
                self.error = None;
            }
            Err(e) => self.error = Some(e.user_message()),
        }
    }

    /// Move focus to the widget that edits `field`.
    fn focus_field(&mut self, field: FormField) {
        self.focus = match field {
            FormField::Name => FormFocus::Name,
            FormField::Severity => FormFocus::Severity,
            FormField::Host => FormFocus::Host,
            FormField::Path => FormFocus::Path,
            FormField::Description => {
                self.tab = IssueTab::Description;
                FormFocus::TabBody
            }
            FormField::Remediation => {
                self.tab = IssueTab::Remediation;
                FormFocus::TabBody
            }
        };
    }

    /// Copy the session's draft into the widgets. Unset fields show empty.
    fn sync_from_form<S, E>(&mut self, form: &IssueFormController<S, E>)
    where
        S: CompletionSink,
        E: MessageEditor,
    {
        let empty = IssueDraft::empty();
        let draft = form.session().map_or(&empty, |s| s.draft());

        self.name_input.set_value(draft.name().unwrap_or_default());
        self.host_input.set_value(draft.host().unwrap_or_default());
        self.path_input.set_value(draft.path().unwrap_or_default());
        self.severity_picker.set_selected(draft.severity());
        self.description_area = TextArea::new(draft.description().unwrap_or_default());
        self.remediation_area = TextArea::new(draft.remediation().unwrap_or_default());
    }

    /// Render the form as a modal overlay.
    pub fn render<S, E>(&mut self, form: &mut IssueFormController<S, E>, frame: &mut Frame, area: Rect)
    where
        S: CompletionSink,
        E: MessageEditor,
    {
        if !form.is_open() {
            return;
        }

        let dialog_width = 90u16.min(area.width.saturating_sub(4));
        let dialog_height = 28u16.min(area.height.saturating_sub(4));
        let dialog_area = centered_rect(area, dialog_width, dialog_height);

        frame.render_widget(Clear, dialog_area);

        let t = theme();
        let block = Block::default()
            .title(Span::styled(
                format!(" {} ", form.title()),
                Style::default().fg(t.accent).add_modifier(Modifier::BOLD),
            ))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(t.accent));

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Name
                Constraint::Length(3), // Severity
                Constraint::Length(3), // Host / Path
                Constraint::Length(1), // Tab bar
                Constraint::Min(4),    // Tab body
                Constraint::Length(1), // Errors
                Constraint::Length(1), // Buttons
            ])
            .split(inner);

        let location = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(chunks[2]);

        self.name_input.render_with_label(
            frame,
            chunks[0],
            "Issue Type/Name *",
            self.focus == FormFocus::Name,
        );
        self.severity_picker
            .render(frame, chunks[1], self.focus == FormFocus::Severity);
        self.host_input
            .render_with_label(frame, location[0], "Host *", self.focus == FormFocus::Host);
        self.path_input
            .render_with_label(frame, location[1], "Path *", self.focus == FormFocus::Path);

        self.render_tab_bar(frame, chunks[3]);
        self.render_tab_body(form, frame, chunks[4]);
        self.render_error(frame, chunks[5]);
        self.render_buttons(frame, chunks[6]);
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect) {
        let t = theme();

        let highlight = if self.focus == FormFocus::Tabs {
            Style::default()
                .fg(t.selection_fg)
                .bg(t.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(t.accent).add_modifier(Modifier::BOLD)
        };

        let tabs = Tabs::new(IssueTab::ALL.iter().map(|tab| tab.title()))
            .select(self.tab.index())
            .style(Style::default().fg(t.fg))
            .highlight_style(highlight);

        frame.render_widget(tabs, area);
    }

    fn render_tab_body<S, E>(&mut self, form: &mut IssueFormController<S, E>, frame: &mut Frame, area: Rect)
    where
        S: CompletionSink,
        E: MessageEditor,
    {
        let focused = self.focus == FormFocus::TabBody;
        match self.tab {
            IssueTab::Description => {
                self.description_area
                    .render(frame, area, focused, IssueTab::Description.title())
            }
            IssueTab::Remediation => {
                self.remediation_area
                    .render(frame, area, focused, IssueTab::Remediation.title())
            }
            IssueTab::Request => form.request_editor_mut().render(frame, area, focused),
            IssueTab::Response => form.response_editor_mut().render(frame, area, focused),
        }
    }

    fn render_error(&self, frame: &mut Frame, area: Rect) {
        if let Some(error) = &self.error {
            let t = theme();
            let paragraph = Paragraph::new(Span::styled(error.as_str(), Style::default().fg(t.error)))
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, area);
        }
    }

    fn render_buttons(&self, frame: &mut Frame, area: Rect) {
        let t = theme();

        let button = |label: &'static str, focus: FormFocus, color: Color| {
            let style = if self.focus == focus {
                Style::default()
                    .fg(t.selection_fg)
                    .bg(color)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(color)
            };
            Span::styled(label, style)
        };

        let line = Line::from(vec![
            button(" [^S] Save ", FormFocus::Save, t.success),
            Span::raw("  "),
            button(" [^R] Reset ", FormFocus::Reset, t.warning),
            Span::raw("  "),
            button(" [Esc] Cancel ", FormFocus::Cancel, t.error),
        ]);

        let style = if self.focus.is_button() {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        frame.render_widget(
            Paragraph::new(line).style(style).alignment(Alignment::Center),
            area,
        );
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Calculate a centered rectangle within the given area.
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

// ============================================================================
// Tests
// ============================================================================
