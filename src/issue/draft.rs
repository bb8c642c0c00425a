//! Editable working copy of an issue.

use std::fmt;

use tracing::warn;

use super::{IssueRecord, Severity};
use crate::error::{FormError, Result};

/// An editable field of the issue form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Severity,
    Host,
    Path,
    Description,
    Remediation,
}

impl FormField {
    /// All fields in form order.
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Severity,
        FormField::Host,
        FormField::Path,
        FormField::Description,
        FormField::Remediation,
    ];

    /// Display label for the field.
    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Issue Type/Name",
            FormField::Severity => "Severity",
            FormField::Host => "Host",
            FormField::Path => "Path",
            FormField::Description => "Description",
            FormField::Remediation => "Remediation",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The in-progress values of the textual fields and the severity.
///
/// Any field may be unset. Loading a record or the seed sets all of them;
/// a draft with an unset field cannot be turned into a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssueDraft {
    name: Option<String>,
    host: Option<String>,
    path: Option<String>,
    severity: Option<Severity>,
    description: Option<String>,
    remediation: Option<String>,
}

impl IssueDraft {
    /// Create a draft with every field unset.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a draft holding the record's values verbatim.
    pub fn from_record(record: &IssueRecord) -> Self {
        Self {
            name: Some(record.name.clone()),
            host: Some(record.host.clone()),
            path: Some(record.path.clone()),
            severity: Some(record.severity),
            description: Some(record.description.clone()),
            remediation: Some(record.remediation.clone()),
        }
    }

    /// Create a draft holding the default seed.
    pub fn seed() -> Self {
        Self::from_record(&IssueRecord::seed())
    }

    /// Get the value of a text field. Always `None` for `Severity`.
    pub fn text(&self, field: FormField) -> Option<&str> {
        match field {
            FormField::Name => self.name.as_deref(),
            FormField::Host => self.host.as_deref(),
            FormField::Path => self.path.as_deref(),
            FormField::Description => self.description.as_deref(),
            FormField::Remediation => self.remediation.as_deref(),
            FormField::Severity => None,
        }
    }

    /// Set the value of a text field. Ignored for `Severity`.
    pub fn set_text(&mut self, field: FormField, value: impl Into<String>) {
        let value = Some(value.into());
        match field {
            FormField::Name => self.name = value,
            FormField::Host => self.host = value,
            FormField::Path => self.path = value,
            FormField::Description => self.description = value,
            FormField::Remediation => self.remediation = value,
            FormField::Severity => {}
        }
    }

    /// Unset a field.
    pub fn clear(&mut self, field: FormField) {
        match field {
            FormField::Name => self.name = None,
            FormField::Host => self.host = None,
            FormField::Path => self.path = None,
            FormField::Severity => self.severity = None,
            FormField::Description => self.description = None,
            FormField::Remediation => self.remediation = None,
        }
    }

    /// Check whether a field holds a value.
    pub fn is_set(&self, field: FormField) -> bool {
        match field {
            FormField::Severity => self.severity.is_some(),
            other => self.text(other).is_some(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.set_text(FormField::Name, value);
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn set_host(&mut self, value: impl Into<String>) {
        self.set_text(FormField::Host, value);
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, value: impl Into<String>) {
        self.set_text(FormField::Path, value);
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn set_description(&mut self, value: impl Into<String>) {
        self.set_text(FormField::Description, value);
    }

    pub fn remediation(&self) -> Option<&str> {
        self.remediation.as_deref()
    }

    pub fn set_remediation(&mut self, value: impl Into<String>) {
        self.set_text(FormField::Remediation, value);
    }

    /// Get the selected severity.
    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    /// Select a severity, or unset it with `None`.
    pub fn set_severity(&mut self, severity: Option<Severity>) {
        self.severity = severity;
    }

    /// Select a severity by its label.
    ///
    /// Matching is case-sensitive. A label outside the vocabulary leaves the
    /// severity unset and returns `false`.
    pub fn select_severity_label(&mut self, label: &str) -> bool {
        match label.parse::<Severity>() {
            Ok(severity) => {
                self.severity = Some(severity);
                true
            }
            Err(e) => {
                warn!(label, error = %e, "Severity label not in vocabulary");
                self.severity = None;
                false
            }
        }
    }

    /// The first unset field in form order, if any.
    pub fn missing_field(&self) -> Option<FormField> {
        FormField::ALL.into_iter().find(|field| !self.is_set(*field))
    }

    /// Build a complete record from this draft and the given payloads.
    ///
    /// # Errors
    ///
    /// Returns `FormError::IncompleteRecord` naming the first unset field.
    pub fn to_record(&self, request: Vec<u8>, response: Vec<u8>) -> Result<IssueRecord> {
        let missing = |field| FormError::IncompleteRecord { field };

        Ok(IssueRecord {
            name: self.name.clone().ok_or_else(|| missing(FormField::Name))?,
            severity: self.severity.ok_or_else(|| missing(FormField::Severity))?,
            host: self.host.clone().ok_or_else(|| missing(FormField::Host))?,
            path: self.path.clone().ok_or_else(|| missing(FormField::Path))?,
            description: self
                .description
                .clone()
                .ok_or_else(|| missing(FormField::Description))?,
            remediation: self
                .remediation
                .clone()
                .ok_or_else(|| missing(FormField::Remediation))?,
            request,
            response,
        })
    }
}
