//! Collaborator seams toward the host environment
//!
//! The aggregation engine never talks to an editor, a file watcher or a
//! status bar directly; it sees these traits. Production code plugs in the
//! filesystem-backed implementations from `workspace`, tests plug in
//! scripted doubles and drive the engine's handlers with synthetic events.

use std::io;

use crate::config::Config;
use crate::document::DocumentId;
use crate::error::PagecountError;

/// Access to the host's document model, discovery and configuration store.
///
/// The engine is single-threaded; fetch futures never cross threads, so no
/// `Send` bound is wanted on them.
#[allow(async_fn_in_trait)]
pub trait WorkspaceHost {
    /// Full text of a document. The engine swallows failures: the prior
    /// stored entry stays untouched and nothing is surfaced to the user.
    async fn fetch_text(&self, id: &DocumentId) -> io::Result<String>;

    /// Identity of the document currently being viewed, if any.
    fn active_document(&self) -> Option<DocumentId>;

    /// Enumerate the documents matching `include`, skipping `exclude`
    /// matches. Invoked once per rescan; a malformed pattern is the one
    /// error this boundary reports instead of swallowing.
    fn discover(
        &self,
        include: &str,
        exclude: &[String],
    ) -> Result<Vec<DocumentId>, PagecountError>;

    /// Configuration snapshot. Polled at the start of every render cycle,
    /// never cached across cycles.
    fn config(&self) -> Config;
}

/// One display slot on the host's status surface.
pub trait StatusSurface {
    fn set_text(&mut self, text: &str);
    fn show(&mut self);
    fn hide(&mut self);
}
