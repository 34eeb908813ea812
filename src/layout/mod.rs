//! Layout strategies: where outline levels and pages land on disk.
//!
//! [`LayoutStrategy`] is the seam the outline driver talks to. Two
//! implementations ship:
//!
//! - [`HierarchicalLayout`]: one directory per level plus a
//!   `_category_.json` sidecar, pages named by slug or title.
//! - [`FlatLayout`]: every page directly under the root, named by id.
//!
//! Side effects go through [`Storage`] ([`FsStorage`] in production).

mod flat;
mod hierarchical;
mod storage;
mod strategy;

pub use flat::FlatLayout;
pub use hierarchical::{CATEGORY_FILENAME, HierarchicalLayout};
pub use storage::{FsStorage, Storage};
pub use strategy::{LayoutError, LayoutStrategy};

use crate::config::{LayoutConfig, StrategyKind};

/// Build the strategy selected by `config`, writing to the real filesystem.
pub fn from_config(config: &LayoutConfig) -> Box<dyn LayoutStrategy> {
    match config.strategy {
        StrategyKind::Hierarchical => Box::new(
            HierarchicalLayout::new(config.output_root.as_str())
                .with_category(config.category.clone()),
        ),
        StrategyKind::Flat => Box::new(FlatLayout::new(config.output_root.as_str())),
    }
}

#[cfg(test)]
pub(crate) use storage::tests::{MockStorage, RecordedOp};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_config_honors_strategy_and_root() {
        let config = LayoutConfig {
            output_root: "site/docs/".into(),
            strategy: StrategyKind::Flat,
            ..LayoutConfig::default()
        };
        let layout = from_config(&config);
        assert_eq!(layout.root().as_str(), "site/docs");

        let page = crate::types::ContentPage::new("id1", "Title").with_layout_context("/A");
        assert_eq!(
            layout.page_path(&page, ".md"),
            std::path::PathBuf::from("site/docs/id1.md")
        );
    }

    #[test]
    fn from_config_defaults_to_hierarchical() {
        let layout = from_config(&LayoutConfig::default());
        let page = crate::types::ContentPage::new("id1", "Title").with_layout_context("/A");
        assert_eq!(
            layout.page_path(&page, ".md"),
            std::path::PathBuf::from("./docs/a/Title.md")
        );
    }
}
