//! The [`LayoutStrategy`] trait and its error type.
//!
//! A strategy decides where outline levels and pages land under the output
//! root. The driver only ever talks to this trait, so swapping
//! [`HierarchicalLayout`](super::HierarchicalLayout) for
//! [`FlatLayout`](super::FlatLayout) needs no driver changes.

use crate::paths::LayoutRoot;
use crate::types::{ContentPage, LevelDescriptor};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("Failed to write category metadata {}: {source}", .path.display())]
    WriteSidecar { path: PathBuf, source: io::Error },
    #[error("Failed to encode category metadata: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Maps outline levels and pages onto output paths.
///
/// `level_context`, `page_path` and `link_path` are pure. `new_level` is the
/// only operation with side effects.
pub trait LayoutStrategy: Send + Sync {
    /// The output root this strategy was built with.
    fn root(&self) -> &LayoutRoot;

    /// Logical context a level would get, without creating anything.
    fn level_context(&self, level: &LevelDescriptor) -> String;

    /// Materialize a level and return its logical context, to be threaded
    /// to the level's descendants.
    fn new_level(&self, level: &LevelDescriptor) -> Result<String, LayoutError>;

    /// Output file path for `page`. `extension` includes its leading dot.
    fn page_path(&self, page: &ContentPage, extension: &str) -> PathBuf;

    /// Site-relative URL other pages use to link to `page`.
    fn link_path(&self, page: &ContentPage) -> String {
        format!("/{}", page.explicit_slug().unwrap_or(&page.id))
    }
}
