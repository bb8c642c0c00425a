//! Form views.

mod issue_form;

pub use issue_form::{FormFocus, IssueFormAction, IssueFormView, IssueTab};
