//! Shared test utilities for pagecount
//!
//! Scripted doubles for the host seams so the engine can be driven with
//! synthetic identities and text, without a running editor or filesystem.

#[cfg(test)]
pub mod test_helpers {
    use std::collections::HashMap;
    use std::io;

    use crate::config::Config;
    use crate::document::DocumentId;
    use crate::error::PagecountError;
    use crate::host::{StatusSurface, WorkspaceHost};

    /// In-memory host: scripted document texts, discovery list, active
    /// identity and configuration snapshot.
    pub struct FakeHost {
        pub docs: HashMap<DocumentId, String>,
        pub discovered: Vec<DocumentId>,
        pub active: Option<DocumentId>,
        pub config: Config,
    }

    impl FakeHost {
        pub fn new() -> Self {
            FakeHost {
                docs: HashMap::new(),
                discovered: Vec::new(),
                active: None,
                config: Config::default(),
            }
        }

        /// Script a document: fetchable by text and yielded by discovery.
        pub fn with_doc(mut self, id: DocumentId, text: &str) -> Self {
            self.discovered.push(id.clone());
            self.docs.insert(id, text.to_string());
            self
        }

        /// Script a fetchable document that discovery does not yield
        /// (outside the include pattern, e.g. a diff buffer's backing).
        pub fn with_undiscovered_doc(mut self, id: DocumentId, text: &str) -> Self {
            self.docs.insert(id, text.to_string());
            self
        }

        pub fn with_active(mut self, id: DocumentId) -> Self {
            self.active = Some(id);
            self
        }

        pub fn with_config(mut self, config: Config) -> Self {
            self.config = config;
            self
        }
    }

    impl WorkspaceHost for FakeHost {
        async fn fetch_text(&self, id: &DocumentId) -> io::Result<String> {
            self.docs
                .get(id)
                .cloned()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such document"))
        }

        fn active_document(&self) -> Option<DocumentId> {
            self.active.clone()
        }

        fn discover(
            &self,
            _include: &str,
            _exclude: &[String],
        ) -> Result<Vec<DocumentId>, PagecountError> {
            Ok(self.discovered.clone())
        }

        fn config(&self) -> Config {
            self.config.clone()
        }
    }

    /// Surface double recording the pushed text, visibility, and how many
    /// times text was pushed (rescans must push exactly once).
    #[derive(Debug, Default)]
    pub struct RecordingStatus {
        pub text: String,
        pub visible: bool,
        pub updates: usize,
    }

    impl StatusSurface for RecordingStatus {
        fn set_text(&mut self, text: &str) {
            self.text = text.to_string();
            self.updates += 1;
        }

        fn show(&mut self) {
            self.visible = true;
        }

        fn hide(&mut self) {
            self.visible = false;
        }
    }

    /// Shorthand for a persisted markdown identity.
    pub fn md(location: &str) -> DocumentId {
        DocumentId::file(location)
    }
}
