use std::collections::HashMap;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::config::{Config, DisplayConfig, PageConfig};
use crate::document::DocumentId;
use crate::error::PagecountError;
use crate::estimate;
use crate::host::StatusSurface;
use crate::metrics::DocumentMetrics;

/// Formatted output of one render cycle.
///
/// Recomputed wholesale on every aggregation update, never diffed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderState {
    pub current_text: String,
    pub current_visible: bool,
    pub total_text: String,
    pub total_visible: bool,
}

/// Sums over the filtered workspace index.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WorkspaceTotals {
    pub word_count: usize,
    pub line_count: usize,
    pub character_count: usize,
    pub page_count: usize,
    pub document_count: usize,
}

/// Compute both status lines from the stored state.
///
/// Read-only; the caller pushes the result to the surfaces. The current
/// figure prefers the live selection and falls back to the scanned entry
/// for the active document, which covers the window between startup scan
/// and the first focus event.
pub(crate) fn summarize(
    index: &HashMap<DocumentId, Option<DocumentMetrics>>,
    current: Option<&DocumentMetrics>,
    active: Option<&DocumentId>,
    config: &Config,
) -> Result<RenderState, PagecountError> {
    let excluded = exclusion_set(&config.workspace.exclude_from_total)?;

    let current_metrics = current
        .copied()
        .or_else(|| active.and_then(|id| index.get(id).copied().flatten()));

    let totals = workspace_totals(index, &excluded, &config.pages);

    let total_text = summary_line(
        totals.word_count,
        totals.line_count,
        totals.page_count,
        Some(totals.document_count),
        estimate::reading_minutes(totals.word_count, &config.reading_time),
        &config.display,
    );

    let (current_text, current_visible) = match current_metrics {
        Some(metrics) => (
            summary_line(
                metrics.word_count,
                metrics.line_count,
                estimate::page_count(Some(&metrics), &config.pages),
                None,
                estimate::reading_minutes(metrics.word_count, &config.reading_time),
                &config.display,
            ),
            config.display.show_current_stats_in_statusbar,
        ),
        None => (String::new(), false),
    };

    Ok(RenderState {
        current_text,
        current_visible,
        total_text,
        total_visible: config.display.show_total_stats_in_statusbar,
    })
}

/// Apply a computed state to the two surfaces.
pub(crate) fn push<S: StatusSurface>(state: &RenderState, current: &mut S, total: &mut S) {
    if state.current_visible {
        current.set_text(&state.current_text);
        current.show();
    } else {
        current.hide();
    }
    if state.total_visible {
        total.set_text(&state.total_text);
        total.show();
    } else {
        total.hide();
    }
}

/// Sum the filtered set: present entries whose identity matches no
/// exclusion pattern. Exclusions only ever narrow totals; the current
/// figure is untouched by them.
pub(crate) fn workspace_totals(
    index: &HashMap<DocumentId, Option<DocumentMetrics>>,
    excluded: &GlobSet,
    pages: &PageConfig,
) -> WorkspaceTotals {
    let mut totals = WorkspaceTotals::default();
    for (id, slot) in index {
        let Some(metrics) = slot else {
            continue; // deleted
        };
        if excluded.is_match(id.location()) {
            continue;
        }
        totals.word_count += metrics.word_count;
        totals.line_count += metrics.line_count;
        totals.character_count += metrics.character_count;
        totals.page_count += estimate::page_count(Some(metrics), pages);
        totals.document_count += 1;
    }
    totals
}

/// Compile the exclusion patterns. An empty list matches nothing; a
/// malformed pattern fails the whole render attempt.
pub(crate) fn exclusion_set(patterns: &[String]) -> Result<GlobSet, PagecountError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern)?);
    }
    Ok(builder.build()?)
}

/// One figure with its unit, singular only for the literal value 1.
fn count_phrase(value: usize, singular: &str, plural: &str) -> String {
    if value == 1 {
        format!("1 {}", singular)
    } else {
        format!("{} {}", value, plural)
    }
}

/// Append a segment, inserting the connector only between two non-empty
/// sides.
fn append_segment(line: &mut String, connector: &str, segment: &str) {
    if segment.is_empty() {
        return;
    }
    if !line.is_empty() {
        line.push_str(connector);
    }
    line.push_str(segment);
}

/// Assemble one summary line from the enabled figures.
///
/// `document_count` is only present on the workspace total; the current
/// document never reports a document count.
fn summary_line(
    words: usize,
    lines: usize,
    pages: usize,
    document_count: Option<usize>,
    reading_minutes: f64,
    display: &DisplayConfig,
) -> String {
    let mut line = String::new();
    if display.show_word_count {
        append_segment(&mut line, "", &count_phrase(words, "word", "words"));
    }
    if display.show_line_count {
        append_segment(&mut line, " in ", &count_phrase(lines, "line", "lines"));
    }
    if display.show_page_count {
        append_segment(&mut line, " on ", &count_phrase(pages, "page", "pages"));
    }
    if let Some(documents) = document_count {
        if display.show_document_count {
            append_segment(
                &mut line,
                " in ",
                &count_phrase(documents, "document", "documents"),
            );
        }
    }
    if display.show_estimated_reading_time {
        append_segment(
            &mut line,
            " takes ",
            &estimate::format_reading_time(reading_minutes),
        );
    }
    line
}
