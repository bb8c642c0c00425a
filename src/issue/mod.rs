//! Issue data model.
//!
//! This module defines the security issue record handed between the form and
//! its host, the fixed severity vocabulary, the default seed issue, and the
//! editable draft the form works on.

mod draft;
mod record;
mod severity;

pub use draft::{FormField, IssueDraft};
pub use record::{IssueRecord, IssueTemplate, DEFAULT_ISSUE};
pub use severity::{ParseSeverityError, Severity};
