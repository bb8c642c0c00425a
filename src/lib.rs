//! issue-form - an edit form for security issue records
//!
//! The form loads an issue (or a default seed) into an editable session,
//! lets the user reset or cancel, and on save hands a newly built record to
//! the host through a [`CompletionSink`]. The [`ui`] module renders the form
//! in a terminal with ratatui.

pub mod config;
pub mod error;
pub mod form;
pub mod issue;
pub mod logging;
pub mod ui;

pub use config::{Config, Settings};
pub use error::{FormError, Result};
pub use form::{
    BufferedEditor, Cancelled, CompletionSink, EditMode, EditSession, IssueFormController,
    IssueIndex, MessageEditor, Modality, SaveOutcome,
};
pub use issue::{FormField, IssueDraft, IssueRecord, Severity, DEFAULT_ISSUE};
