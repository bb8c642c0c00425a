//! The edit session held by an open form.

use std::fmt;

use crate::issue::IssueDraft;

/// Identifier of the record an edit replaces.
///
/// Supplied by the host and handed back unchanged in
/// [`SaveOutcome::Updated`](super::SaveOutcome::Updated); the form never
/// interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IssueIndex(pub usize);

impl fmt::Display for IssueIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for IssueIndex {
    fn from(index: usize) -> Self {
        IssueIndex(index)
    }
}

/// Whether the form creates a new issue or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    #[default]
    New,
    Edit,
}

/// Where a saved record goes.
///
/// Holding the index inside the `Replace` variant keeps "index present"
/// and "edit mode" from ever disagreeing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SaveTarget {
    New,
    Replace(IssueIndex),
}

/// Working copy of one issue for the lifetime of one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    draft: IssueDraft,
    target: SaveTarget,
}

impl EditSession {
    /// Start a session for a new issue.
    pub fn new_issue(draft: IssueDraft) -> Self {
        Self {
            draft,
            target: SaveTarget::New,
        }
    }

    /// Start a session that replaces the record at `index`.
    pub fn edit_issue(draft: IssueDraft, index: IssueIndex) -> Self {
        Self {
            draft,
            target: SaveTarget::Replace(index),
        }
    }

    pub fn mode(&self) -> EditMode {
        match self.target {
            SaveTarget::New => EditMode::New,
            SaveTarget::Replace(_) => EditMode::Edit,
        }
    }

    /// The index being replaced. `Some` exactly when the mode is `Edit`.
    pub fn origin_index(&self) -> Option<IssueIndex> {
        match self.target {
            SaveTarget::New => None,
            SaveTarget::Replace(index) => Some(index),
        }
    }

    pub fn draft(&self) -> &IssueDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut IssueDraft {
        &mut self.draft
    }

    /// Replace the whole working copy, keeping mode and origin.
    pub fn replace_draft(&mut self, draft: IssueDraft) {
        self.draft = draft;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::Severity;

    #[test]
    fn test_new_issue_has_no_origin() {
        let session = EditSession::new_issue(IssueDraft::seed());
        assert_eq!(session.mode(), EditMode::New);
        assert_eq!(session.origin_index(), None);
    }

    #[test]
    fn test_edit_issue_keeps_origin() {
        let session = EditSession::edit_issue(IssueDraft::seed(), IssueIndex(7));
        assert_eq!(session.mode(), EditMode::Edit);
        assert_eq!(session.origin_index(), Some(IssueIndex(7)));
    }

    #[test]
    fn test_replace_draft_keeps_target() {
        let mut session = EditSession::edit_issue(IssueDraft::empty(), IssueIndex(3));
        session.replace_draft(IssueDraft::seed());

        assert_eq!(session.origin_index(), Some(IssueIndex(3)));
        assert_eq!(session.draft().severity(), Some(Severity::Critical));
    }

    #[test]
    fn test_issue_index_display() {
        assert_eq!(IssueIndex(42).to_string(), "42");
        assert_eq!(IssueIndex::from(5), IssueIndex(5));
    }
}
