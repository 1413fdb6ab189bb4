use std::collections::HashMap;

use crate::document::DocumentId;
use crate::error::PagecountError;
use crate::host::{StatusSurface, WorkspaceHost};
use crate::metrics::{DocumentMetrics, MetricsExtractor};

use super::render;

/// Aggregated workspace statistics, updated one event at a time.
///
/// The engine owns the workspace index (identity → metrics) and the
/// current-selection snapshot exclusively; every mutation runs to
/// completion on one logical sequence, so no locking is involved. Index
/// entries are tri-state: a missing key was never scanned, `None` marks a
/// document that was deleted, `Some` holds the last extracted metrics.
/// The distinction keeps "deleted" apart from "scanned, zero words" when
/// totals are filtered.
pub struct StatsEngine<H, S> {
    host: H,
    current_status: S,
    total_status: S,
    index: HashMap<DocumentId, Option<DocumentMetrics>>,
    /// Metrics of the most recently viewed or edited document. Independent
    /// of the index: a virtual buffer can be current without being counted.
    current: Option<DocumentMetrics>,
}

impl<H: WorkspaceHost, S: StatusSurface> StatsEngine<H, S> {
    pub fn new(host: H, current_status: S, total_status: S) -> Self {
        StatsEngine {
            host,
            current_status,
            total_status,
            index: HashMap::new(),
            current: None,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn current_status(&self) -> &S {
        &self.current_status
    }

    pub fn total_status(&self) -> &S {
        &self.total_status
    }

    // Handler entry points, registered once by the bootstrap layer. The
    // host's dispatch machinery stays on the other side of this seam.

    pub async fn on_create(&mut self, id: DocumentId) -> Result<(), PagecountError> {
        self.upsert(id).await
    }

    pub async fn on_change(&mut self, id: DocumentId) -> Result<(), PagecountError> {
        self.upsert(id).await
    }

    pub fn on_delete(&mut self, id: DocumentId) -> Result<(), PagecountError> {
        self.remove(id)
    }

    pub async fn on_config_changed(&mut self) -> Result<(), PagecountError> {
        self.rescan_all().await
    }

    pub async fn on_focus_changed(&mut self, id: DocumentId) -> Result<(), PagecountError> {
        self.upsert(id).await
    }

    /// Re-extract one document and store the result.
    ///
    /// The metrics land in the workspace index only for persisted
    /// documents; the current-selection snapshot is overwritten either
    /// way, so a diff view or preview still drives the current display.
    /// A failed fetch leaves every stored value untouched and skips the
    /// render.
    pub async fn upsert(&mut self, id: DocumentId) -> Result<(), PagecountError> {
        let text = match self.host.fetch_text(&id).await {
            Ok(text) => text,
            Err(_e) => {
                #[cfg(debug_assertions)]
                log::debug!("fetch failed for {}: {}", id, _e);
                return Ok(());
            }
        };
        let metrics = MetricsExtractor::extract(&text);
        if id.is_file() {
            self.index.insert(id, Some(metrics));
        }
        self.current = Some(metrics);
        self.render()
    }

    /// Mark a document as absent. Its slot stays in the index so a late
    /// create/change for the same identity overwrites rather than
    /// resurrects stale metrics. The current selection is not touched.
    pub fn remove(&mut self, id: DocumentId) -> Result<(), PagecountError> {
        self.index.insert(id, None);
        self.render()
    }

    /// Rebuild the index from a fresh discovery pass.
    ///
    /// This is the only path that clears out documents which still exist
    /// but no longer match the scan. Discovery errors (malformed globs)
    /// propagate; per-document fetch failures just leave that document
    /// out. Renders exactly once, after the full pass, so rescan cost on
    /// the display side stays O(1) rather than O(files). The current
    /// selection stays put: a directory scan is not a focus change.
    pub async fn rescan_all(&mut self) -> Result<(), PagecountError> {
        let config = self.host.config();
        let discovered = self.host.discover(
            &config.workspace.include,
            &config.workspace.exclude_from_total,
        )?;
        self.index.clear();
        for id in discovered {
            match self.host.fetch_text(&id).await {
                Ok(text) => {
                    self.index.insert(id, Some(MetricsExtractor::extract(&text)));
                }
                Err(_e) => {
                    #[cfg(debug_assertions)]
                    log::debug!("fetch failed for {} during rescan: {}", id, _e);
                }
            }
        }
        self.render()
    }

    /// Recompute both summaries and push them to the status surfaces.
    ///
    /// Read-only over the stored state; safe to call any number of times
    /// between mutations. Takes a fresh configuration snapshot from the
    /// host on every call. A malformed exclusion pattern fails this one
    /// render attempt and propagates to the caller's error channel.
    pub fn render(&mut self) -> Result<(), PagecountError> {
        let config = self.host.config();
        let active = self.host.active_document();
        let state = render::summarize(&self.index, self.current.as_ref(), active.as_ref(), &config)?;
        render::push(&state, &mut self.current_status, &mut self.total_status);
        Ok(())
    }
}
