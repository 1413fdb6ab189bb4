//! Document identity
//!
//! A document is tracked by the canonical string form of its location plus
//! its backing kind. Two events carrying the same identity address the same
//! slot in the workspace index: they overwrite, never duplicate.

use std::fmt;

/// How a document is backed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DocumentKind {
    /// Persisted on disk; participates in workspace totals
    File,
    /// Transient buffer (diff views, previews); can be the current document
    /// but is never written into the workspace index
    Virtual,
}

/// Stable key distinguishing one tracked document from another
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentId {
    location: String,
    kind: DocumentKind,
}

impl DocumentId {
    /// Identity for a document persisted at `location`.
    pub fn file(location: impl Into<String>) -> Self {
        DocumentId {
            location: location.into(),
            kind: DocumentKind::File,
        }
    }

    /// Identity for a transient buffer that only exists inside the host.
    pub fn transient(location: impl Into<String>) -> Self {
        DocumentId {
            location: location.into(),
            kind: DocumentKind::Virtual,
        }
    }

    /// Canonical location string; glob patterns match against this.
    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    pub fn is_file(&self) -> bool {
        self.kind == DocumentKind::File
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.location)
    }
}
