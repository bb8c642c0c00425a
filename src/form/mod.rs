//! The issue editing contract.
//!
//! This module provides:
//! - The controller that opens, resets, saves and cancels an issue form
//! - The edit session and its new/edit mode
//! - The completion sink and message editor collaborator traits
//! - Form modality

mod controller;
mod editor;
mod modality;
mod session;

pub use controller::{Cancelled, CompletionSink, IssueFormController, SaveOutcome};
pub use editor::{BufferedEditor, MessageEditor};
pub use modality::{Modality, ParseModalityError};
pub use session::{EditMode, EditSession, IssueIndex};
