//! Filesystem-backed host and terminal output surface
//!
//! Thin adapters between the engine's collaborator traits and a directory
//! tree on disk. The engine itself never sees paths or stdout, only the
//! traits from `host`.

use std::io;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSetBuilder};
use ignore::WalkBuilder;

use crate::config::Config;
use crate::document::DocumentId;
use crate::error::PagecountError;
use crate::host::{StatusSurface, WorkspaceHost};

/// Host over a directory tree on disk.
///
/// Discovery walks the tree (honoring ignore files) and keeps entries whose
/// root-relative path matches the include glob and none of the exclude
/// globs. Identities carry the path as walked, so later fetches and glob
/// filters see the same canonical string.
pub struct FsWorkspace {
    root: PathBuf,
    config: Config,
    active: Option<DocumentId>,
}

impl FsWorkspace {
    pub fn new(root: impl Into<PathBuf>, config: Config) -> Self {
        FsWorkspace {
            root: root.into(),
            config,
            active: None,
        }
    }

    /// Mark a document as the one currently being viewed.
    pub fn set_active(&mut self, id: Option<DocumentId>) {
        self.active = id;
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl WorkspaceHost for FsWorkspace {
    async fn fetch_text(&self, id: &DocumentId) -> io::Result<String> {
        tokio::fs::read_to_string(id.location()).await
    }

    fn active_document(&self) -> Option<DocumentId> {
        self.active.clone()
    }

    fn discover(
        &self,
        include: &str,
        exclude: &[String],
    ) -> Result<Vec<DocumentId>, PagecountError> {
        let include = Glob::new(include)?.compile_matcher();
        let mut excluded = GlobSetBuilder::new();
        for pattern in exclude {
            excluded.add(Glob::new(pattern)?);
        }
        let excluded = excluded.build()?;

        let mut found = Vec::new();
        for entry in WalkBuilder::new(&self.root).build() {
            let Ok(entry) = entry else {
                continue; // unreadable entries are skipped, not fatal
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
            if !include.is_match(relative) || excluded.is_match(relative) {
                continue;
            }
            found.push(DocumentId::file(entry.path().to_string_lossy()));
        }
        // Walk order varies by platform; keep discovery deterministic
        found.sort();
        Ok(found)
    }

    fn config(&self) -> Config {
        self.config.clone()
    }
}

/// Prints status updates as labelled lines; stands in for a status bar.
#[derive(Debug)]
pub struct TerminalStatus {
    label: &'static str,
    text: String,
    visible: bool,
}

impl TerminalStatus {
    pub fn new(label: &'static str) -> Self {
        TerminalStatus {
            label,
            text: String::new(),
            visible: false,
        }
    }

    /// The labelled line for this surface, if it is showing.
    pub fn line(&self) -> Option<String> {
        self.visible.then(|| format!("{}: {}", self.label, self.text))
    }
}

impl StatusSurface for TerminalStatus {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}
