//! Issue form controller.
//!
//! The controller owns one [`EditSession`] and the two message editors. It
//! populates them from a record (or the default seed), restores the seed on
//! reset, and on save builds a new record and reports it to the host's
//! [`CompletionSink`] exactly once.

use tracing::{debug, info, warn};

use super::editor::{BufferedEditor, MessageEditor};
use super::modality::Modality;
use super::session::{EditMode, EditSession, IssueIndex};
use crate::config::Settings;
use crate::error::{FormError, Result};
use crate::issue::{IssueDraft, IssueRecord};

/// Receives the result of a confirmed save.
pub trait CompletionSink {
    /// An existing record at `index` was edited.
    fn on_updated(&mut self, index: IssueIndex, record: IssueRecord);

    /// A new record was created.
    fn on_created(&mut self, record: IssueRecord);
}

impl<T: CompletionSink + ?Sized> CompletionSink for &mut T {
    fn on_updated(&mut self, index: IssueIndex, record: IssueRecord) {
        (**self).on_updated(index, record);
    }

    fn on_created(&mut self, record: IssueRecord) {
        (**self).on_created(record);
    }
}

/// Result of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new issue was created.
    Created(IssueRecord),
    /// The issue at the given index was replaced.
    Updated(IssueIndex, IssueRecord),
}

impl SaveOutcome {
    /// The saved record.
    pub fn record(&self) -> &IssueRecord {
        match self {
            SaveOutcome::Created(record) | SaveOutcome::Updated(_, record) => record,
        }
    }

    /// Hand this outcome to a sink.
    pub fn notify(&self, sink: &mut impl CompletionSink) {
        match self {
            SaveOutcome::Created(record) => sink.on_created(record.clone()),
            SaveOutcome::Updated(index, record) => sink.on_updated(*index, record.clone()),
        }
    }
}

/// Marker returned when the form is closed without saving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cancelled;

/// Drives one issue form from open to save or cancel.
pub struct IssueFormController<S, E = BufferedEditor> {
    /// Where saved outcomes go.
    sink: S,
    /// Editor holding the request payload.
    request_editor: E,
    /// Editor holding the response payload.
    response_editor: E,
    /// The working copy, present between `open` and `save`/`cancel`.
    session: Option<EditSession>,
    /// Whether the form has been saved or cancelled.
    closed: bool,
    /// Title shown by front ends.
    title: String,
    /// How the form blocks the host.
    modality: Modality,
}

impl<S: CompletionSink> IssueFormController<S, BufferedEditor> {
    /// Create a controller with default settings and in-memory editors.
    pub fn new(sink: S) -> Self {
        Self::with_settings(sink, &Settings::default())
    }

    /// Create a controller with the given settings and in-memory editors.
    pub fn with_settings(sink: S, settings: &Settings) -> Self {
        Self::with_editors(sink, settings, BufferedEditor::new(), BufferedEditor::new())
    }
}

impl<S: CompletionSink, E: MessageEditor> IssueFormController<S, E> {
    /// Create a controller using host-supplied message editors.
    pub fn with_editors(
        sink: S,
        settings: &Settings,
        request_editor: E,
        response_editor: E,
    ) -> Self {
        debug!(title = %settings.title, modality = %settings.modality, "Creating issue form");

        Self {
            sink,
            request_editor,
            response_editor,
            session: None,
            closed: false,
            title: settings.title.clone(),
            modality: settings.modality,
        }
    }

    /// Open (or re-open) the form on a record.
    ///
    /// Without an initial record the default seed is used and the mode is
    /// forced to `New`. In `New` mode any `origin` is ignored.
    ///
    /// # Errors
    ///
    /// Returns `FormError::InvalidState` if `mode` is `Edit` without an
    /// origin index, or if the form was already saved or cancelled.
    pub fn open(
        &mut self,
        initial: Option<IssueRecord>,
        mode: EditMode,
        origin: Option<IssueIndex>,
    ) -> Result<&EditSession> {
        if self.closed {
            return Err(FormError::invalid_state("form is closed"));
        }

        if mode == EditMode::Edit && origin.is_none() {
            warn!("Edit requested without an origin index");
            return Err(FormError::invalid_state(
                "edit mode requires an origin index",
            ));
        }

        let (record, origin) = match (initial, mode) {
            (Some(record), EditMode::Edit) => (record, origin),
            (Some(record), EditMode::New) => (record, None),
            (None, mode) => {
                if mode == EditMode::Edit {
                    warn!("Edit requested without an issue, opening the default issue as new");
                }
                (IssueRecord::seed(), None)
            }
        };

        self.load_payloads(&record);
        let draft = IssueDraft::from_record(&record);
        let session = match origin {
            Some(index) => EditSession::edit_issue(draft, index),
            None => EditSession::new_issue(draft),
        };

        info!(
            mode = ?session.mode(),
            origin = ?session.origin_index(),
            name = %record.name,
            "Opened issue form"
        );

        Ok(&*self.session.insert(session))
    }

    /// Restore every field to the default seed, keeping mode and origin.
    ///
    /// # Errors
    ///
    /// Returns `FormError::InvalidState` if the form is not open.
    pub fn reset(&mut self) -> Result<&EditSession> {
        self.open_session()?;

        self.load_payloads(&IssueRecord::seed());
        let session = self.open_session_mut()?;
        session.replace_draft(IssueDraft::seed());

        debug!(mode = ?session.mode(), "Reset issue form to defaults");
        Ok(&*session)
    }

    /// Close the form without saving. The sink is never called.
    pub fn cancel(&mut self) -> Cancelled {
        if !self.closed {
            info!(
                mode = ?self.session.as_ref().map(EditSession::mode),
                "Issue form cancelled"
            );
        }
        self.close();
        Cancelled
    }

    /// Save the current field values.
    ///
    /// Builds a new record from the draft and the editors' payloads, closes
    /// the form, then reports the outcome to the sink once.
    ///
    /// # Errors
    ///
    /// Returns `FormError::IncompleteRecord` if a field is unset (the form
    /// stays open), or `FormError::InvalidState` if the form is not open.
    pub fn save(&mut self) -> Result<SaveOutcome> {
        let session = self.open_session()?;

        let record = session
            .draft()
            .to_record(self.request_editor.message(), self.response_editor.message())
            .map_err(|e| {
                warn!(field = ?e.field(), "Save rejected");
                e
            })?;

        let outcome = match session.origin_index() {
            Some(index) => SaveOutcome::Updated(index, record),
            None => SaveOutcome::Created(record),
        };

        self.close();
        outcome.notify(&mut self.sink);

        match &outcome {
            SaveOutcome::Created(record) => info!(name = %record.name, "Issue created"),
            SaveOutcome::Updated(index, record) => {
                info!(%index, name = %record.name, "Issue updated")
            }
        }

        Ok(outcome)
    }

    /// The current session, if the form is open.
    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    /// Mutable access to the working copy.
    ///
    /// # Errors
    ///
    /// Returns `FormError::InvalidState` if the form is not open.
    pub fn draft_mut(&mut self) -> Result<&mut IssueDraft> {
        Ok(self.open_session_mut()?.draft_mut())
    }

    /// Whether the form has been opened and not yet saved or cancelled.
    pub fn is_open(&self) -> bool {
        !self.closed && self.session.is_some()
    }

    /// Whether the form has been saved or cancelled.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn modality(&self) -> Modality {
        self.modality
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Consume the controller, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn request_editor(&self) -> &E {
        &self.request_editor
    }

    pub fn request_editor_mut(&mut self) -> &mut E {
        &mut self.request_editor
    }

    pub fn response_editor(&self) -> &E {
        &self.response_editor
    }

    pub fn response_editor_mut(&mut self) -> &mut E {
        &mut self.response_editor
    }

    fn load_payloads(&mut self, record: &IssueRecord) {
        self.request_editor.set_message(&record.request, true);
        self.response_editor.set_message(&record.response, false);
    }

    fn close(&mut self) {
        self.closed = true;
        self.session = None;
    }

    fn open_session(&self) -> Result<&EditSession> {
        if self.closed {
            return Err(FormError::invalid_state("form is closed"));
        }
        self.session
            .as_ref()
            .ok_or_else(|| FormError::invalid_state("form has not been opened"))
    }

    fn open_session_mut(&mut self) -> Result<&mut EditSession> {
        if self.closed {
            return Err(FormError::invalid_state("form is closed"));
        }
        self.session
            .as_mut()
            .ok_or_else(|| FormError::invalid_state("form has not been opened"))
    }
}
