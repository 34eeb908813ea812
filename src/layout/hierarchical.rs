//! Directory-per-level layout.
//!
//! The output tree mirrors the outline: each level becomes a directory named
//! after its lower-cased sanitized label, holding a `_category_.json` that
//! tells Docusaurus the level's sidebar position and display label. Pages
//! are named after their slug (or title), so with slugs set the public URL
//! stays `https://site/slug` regardless of nesting.
//!
//! ```text
//! docs/
//! ├── getting-started/
//! │   ├── _category_.json        {"position":1,"label":"Getting Started"}
//! │   ├── Install.md
//! │   └── first-steps/
//! │       ├── _category_.json    {"position":2,"label":"First Steps"}
//! │       └── Whats-New-.md
//! └── reference/
//!     └── _category_.json        {"position":2,"label":"Reference"}
//! ```

use super::storage::{FsStorage, Storage};
use super::strategy::{LayoutError, LayoutStrategy};
use crate::config::CategoryConfig;
use crate::paths::{self, LayoutRoot};
use crate::types::{ContentPage, LevelDescriptor};
use std::path::{Path, PathBuf};

/// Sidecar file written into every level directory.
pub const CATEGORY_FILENAME: &str = "_category_.json";

pub struct HierarchicalLayout<S: Storage = FsStorage> {
    root: LayoutRoot,
    storage: S,
    category: CategoryConfig,
}

impl HierarchicalLayout<FsStorage> {
    pub fn new(root: impl Into<LayoutRoot>) -> Self {
        Self::with_storage(root, FsStorage)
    }
}

impl<S: Storage> HierarchicalLayout<S> {
    pub fn with_storage(root: impl Into<LayoutRoot>, storage: S) -> Self {
        Self {
            root: root.into(),
            storage,
            category: CategoryConfig::default(),
        }
    }

    /// Optional fields to copy into every sidecar.
    pub fn with_category(mut self, category: CategoryConfig) -> Self {
        self.category = category;
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Write the level's sidecar, replacing any previous one.
    fn write_category_metadata(
        &self,
        dir: &Path,
        order: u32,
        label: &str,
    ) -> Result<(), LayoutError> {
        let metadata = self.category.metadata(order, label);
        let json = serde_json::to_string(&metadata)?;
        let path = dir.join(CATEGORY_FILENAME);
        self.storage
            .write(&path, json.as_bytes())
            .map_err(|source| LayoutError::WriteSidecar { path, source })
    }
}

impl<S: Storage> LayoutStrategy for HierarchicalLayout<S> {
    fn root(&self) -> &LayoutRoot {
        &self.root
    }

    fn level_context(&self, level: &LevelDescriptor) -> String {
        paths::level_context(&level.parent_context, &level.label)
    }

    fn new_level(&self, level: &LevelDescriptor) -> Result<String, LayoutError> {
        let context = self.level_context(level);
        let dir = paths::level_dir(&self.root, &context);

        self.storage
            .create_dir_all(&dir)
            .map_err(|source| LayoutError::CreateDir {
                path: dir.clone(),
                source,
            })?;
        self.write_category_metadata(&dir, level.order, &level.label)?;

        tracing::debug!(
            order = level.order,
            label = %level.label,
            context = %context,
            dir = %dir.display(),
            "Created level"
        );
        Ok(context)
    }

    fn page_path(&self, page: &ContentPage, extension: &str) -> PathBuf {
        let stem = paths::page_stem(page.name_for_file());
        paths::page_path(&self.root, &page.layout_context, &stem, extension)
    }
}
