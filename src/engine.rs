//! Aggregation store and renderer
//!
//! The stateful heart of the crate: a per-document metrics cache keyed by
//! document identity, kept consistent under create/change/delete/focus/
//! configuration events, plus the read-only summarisation step that turns
//! the cache into the two status lines.

mod render;
mod store;


// Re-export public types
pub use render::RenderState;
pub use store::StatsEngine;
