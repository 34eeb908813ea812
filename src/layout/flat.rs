//! Single-directory layout keyed by page id.
//!
//! Every page lands directly under the root as `<id><extension>`. Levels
//! produce no directories and no sidecars, so the outline's structure only
//! survives in whatever sidebar the site builds from the pages themselves.
//! Ids don't change when a page is renamed, which keeps output paths stable
//! across title edits.

use super::strategy::{LayoutError, LayoutStrategy};
use crate::paths::{self, LayoutRoot};
use crate::types::{ContentPage, LevelDescriptor};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct FlatLayout {
    root: LayoutRoot,
}

impl FlatLayout {
    pub fn new(root: impl Into<LayoutRoot>) -> Self {
        Self { root: root.into() }
    }
}

impl LayoutStrategy for FlatLayout {
    fn root(&self) -> &LayoutRoot {
        &self.root
    }

    fn level_context(&self, level: &LevelDescriptor) -> String {
        level.parent_context.clone()
    }

    fn new_level(&self, level: &LevelDescriptor) -> Result<String, LayoutError> {
        Ok(self.level_context(level))
    }

    fn page_path(&self, page: &ContentPage, extension: &str) -> PathBuf {
        paths::page_path(&self.root, "", &paths::page_stem(&page.id), extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn levels_create_nothing() {
        let tmp = TempDir::new().unwrap();
        let layout = FlatLayout::new(tmp.path());

        let context = layout
            .new_level(&LevelDescriptor::new(1, "", "Guides"))
            .unwrap();

        assert_eq!(context, "");
        assert_eq!(std::fs::read_dir(tmp.path()).unwrap().count(), 0);
    }

    #[test]
    fn pages_sit_at_root_named_by_id() {
        let layout = FlatLayout::new("/out");
        let page = ContentPage::new("9120ec9960244ead80fa2ef4bc1bba25", "Intro")
            .with_layout_context("/Guides/Deep");

        assert_eq!(
            layout.page_path(&page, ".md"),
            PathBuf::from("/out/9120ec9960244ead80fa2ef4bc1bba25.md")
        );
    }

    #[test]
    fn nested_context_passes_through_unchanged() {
        let layout = FlatLayout::new("/out");
        let level = LevelDescriptor::new(3, "/Outer", "Inner");
        assert_eq!(layout.level_context(&level), "/Outer");
    }
}
