//! Outline loading and the depth-first layout driver.
//!
//! An outline is a JSON tree of levels and pages, usually exported from the
//! content source:
//!
//! ```json
//! {
//!   "children": [
//!     { "level": { "label": "Getting Started", "children": [
//!         { "page": { "id": "a1", "title": "Install", "body": "# Install\n" } }
//!     ] } },
//!     { "page": { "id": "b2", "title": "FAQ", "slug": "/faq" } }
//!   ]
//! }
//! ```
//!
//! [`drive`] walks it depth-first. Each level is materialized through the
//! strategy and its returned context is threaded to its children; each page
//! gets that context, is resolved to a path, and has its body written there.
//! Sibling order is the 1-based position among a node's siblings, counting
//! levels and pages together.
//!
//! [`plan`] performs the same walk without any side effects.

use crate::layout::{LayoutError, LayoutStrategy, Storage};
use crate::paths;
use crate::sanitize::sanitize;
use crate::tracker::OutputTracker;
use crate::types::{ContentPage, LevelDescriptor};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Outline parse error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),
    #[error("Failed to write page {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Root of an outline file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Outline {
    #[serde(default)]
    pub children: Vec<OutlineNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutlineNode {
    Level(OutlineLevel),
    Page(OutlinePage),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutlineLevel {
    pub label: String,
    #[serde(default)]
    pub children: Vec<OutlineNode>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutlinePage {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    /// Rendered content written to the page's output file.
    #[serde(default)]
    pub body: String,
}

impl Outline {
    pub fn load(path: &Path) -> Result<Self, DriveError> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, DriveError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Everything one walk visited, in visit order.
#[derive(Debug, Clone, Default)]
pub struct DriveReport {
    pub entries: Vec<ReportEntry>,
    /// Stale files deleted after the walk (only with cleanup enabled).
    pub removed: Vec<PathBuf>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    /// Nesting depth, 0 at the top of the outline.
    pub depth: usize,
    /// Position among siblings, as passed to the strategy.
    pub order: u32,
    pub kind: EntryKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryKind {
    Level { label: String, context: String },
    Page { title: String, path: PathBuf, link: String },
}

impl DriveReport {
    pub fn level_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.kind, EntryKind::Level { .. }))
            .count()
    }

    pub fn page_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e.kind, EntryKind::Page { .. }))
            .count()
    }

    /// Output paths of every page, in visit order.
    pub fn page_paths(&self) -> Vec<&Path> {
        self.entries
            .iter()
            .filter_map(|e| match &e.kind {
                EntryKind::Page { path, .. } => Some(path.as_path()),
                EntryKind::Level { .. } => None,
            })
            .collect()
    }
}

/// Materialize `outline` through `strategy`, writing page bodies via
/// `storage`.
///
/// With a `tracker`, every resolved page path is marked seen; cleanup is the
/// caller's call. The first storage failure aborts the walk. Nothing already
/// written is rolled back.
pub fn drive(
    outline: &Outline,
    strategy: &dyn LayoutStrategy,
    storage: &dyn Storage,
    extension: &str,
    tracker: Option<&mut OutputTracker>,
) -> Result<DriveReport, DriveError> {
    let mut walker = Walker {
        strategy,
        storage: Some(storage),
        extension,
        tracker,
        report: DriveReport::default(),
    };
    walker.walk(&outline.children, "", 0)?;
    tracing::info!(
        levels = walker.report.level_count(),
        pages = walker.report.page_count(),
        root = %strategy.root(),
        "Layout complete"
    );
    Ok(walker.report)
}

/// Resolve every path `drive` would produce, without touching storage.
pub fn plan(
    outline: &Outline,
    strategy: &dyn LayoutStrategy,
    extension: &str,
) -> Result<DriveReport, DriveError> {
    let mut walker = Walker {
        strategy,
        storage: None,
        extension,
        tracker: None,
        report: DriveReport::default(),
    };
    walker.walk(&outline.children, "", 0)?;
    Ok(walker.report)
}

struct Walker<'a> {
    strategy: &'a dyn LayoutStrategy,
    /// `None` for a dry run.
    storage: Option<&'a dyn Storage>,
    extension: &'a str,
    tracker: Option<&'a mut OutputTracker>,
    report: DriveReport,
}

impl Walker<'_> {
    fn walk(&mut self, nodes: &[OutlineNode], context: &str, depth: usize) -> Result<(), DriveError> {
        for (i, node) in nodes.iter().enumerate() {
            let order = u32::try_from(i + 1).unwrap_or(u32::MAX);
            match node {
                OutlineNode::Level(level) => self.visit_level(level, order, context, depth)?,
                OutlineNode::Page(page) => self.visit_page(page, order, context, depth)?,
            }
        }
        Ok(())
    }

    fn visit_level(
        &mut self,
        level: &OutlineLevel,
        order: u32,
        parent_context: &str,
        depth: usize,
    ) -> Result<(), DriveError> {
        if sanitize(&level.label).is_empty() {
            tracing::warn!(label = %level.label, "Level label sanitizes to an empty segment");
        }
        let descriptor = LevelDescriptor::new(order, parent_context, level.label.as_str());
        let context = match self.storage {
            Some(_) => self.strategy.new_level(&descriptor)?,
            None => self.strategy.level_context(&descriptor),
        };
        self.report.entries.push(ReportEntry {
            depth,
            order,
            kind: EntryKind::Level {
                label: level.label.clone(),
                context: context.clone(),
            },
        });
        self.walk(&level.children, &context, depth + 1)
    }

    fn visit_page(
        &mut self,
        page: &OutlinePage,
        order: u32,
        context: &str,
        depth: usize,
    ) -> Result<(), DriveError> {
        let mut content_page = ContentPage::new(page.id.as_str(), page.title.as_str())
            .with_layout_context(context);
        content_page.slug = page.slug.clone();

        if paths::page_stem(content_page.name_for_file()).is_empty() {
            tracing::warn!(id = %page.id, title = %page.title, "Page name sanitizes to an empty file stem");
        }

        let path = self.strategy.page_path(&content_page, self.extension);
        if let Some(storage) = self.storage {
            write_page(storage, &path, &page.body)?;
        }
        if let Some(tracker) = self.tracker.as_deref_mut() {
            tracker.mark_seen(&path);
        }
        tracing::debug!(id = %page.id, path = %path.display(), "Resolved page");

        self.report.entries.push(ReportEntry {
            depth,
            order,
            kind: EntryKind::Page {
                title: page.title.clone(),
                link: self.strategy.link_path(&content_page),
                path,
            },
        });
        Ok(())
    }
}

fn write_page(storage: &dyn Storage, path: &Path, body: &str) -> Result<(), DriveError> {
    let to_write_error = |source| DriveError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        storage.create_dir_all(parent).map_err(to_write_error)?;
    }
    storage.write(path, body.as_bytes()).map_err(to_write_error)
}
