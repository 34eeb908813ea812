//! Shared test utilities for the docu-layout test suite.
//!
//! Provides the outline fixture, on-disk tree listings and sidecar readers.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = TempDir::new().unwrap();
//! let layout = HierarchicalLayout::new(tmp.path());
//! drive(&fixture_outline(), &layout, &FsStorage, ".md", None).unwrap();
//!
//! assert_tree(tmp.path(), &["faq.md", "getting-started/", ...]);
//! assert_eq!(read_category(&tmp.path().join("getting-started")).position, 1);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::layout::CATEGORY_FILENAME;
use crate::outline::Outline;
use crate::types::CategoryMetadata;

// =========================================================================
// Fixtures
// =========================================================================

/// The outline in `fixtures/outline.json`.
pub fn fixture_outline() -> Outline {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/outline.json");
    Outline::load(&path).unwrap_or_else(|e| panic!("fixture {} unreadable: {e}", path.display()))
}

/// Create a file (and its parents) under `root` with placeholder content.
pub fn touch(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "x").unwrap();
    path
}

// =========================================================================
// Tree inspection
// =========================================================================

/// Every entry under `root`, relative, sorted, directories suffixed with `/`.
pub fn list_tree(root: &Path) -> Vec<String> {
    let mut entries: Vec<String> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|e| e.unwrap())
        .map(|e| {
            let rel = e.path().strip_prefix(root).unwrap().to_string_lossy().to_string();
            if e.file_type().is_dir() {
                format!("{rel}/")
            } else {
                rel
            }
        })
        .collect();
    entries.sort();
    entries
}

/// Assert the tree under `root` is exactly `expected` (any order).
pub fn assert_tree(root: &Path, expected: &[&str]) {
    let actual = list_tree(root);
    let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    expected.sort();
    assert_eq!(
        actual, expected,
        "\nactual tree:\n  {}\nexpected:\n  {}",
        actual.join("\n  "),
        expected.join("\n  ")
    );
}

/// Parse the `_category_.json` in `dir`. Panics if missing or malformed.
pub fn read_category(dir: &Path) -> CategoryMetadata {
    let path = dir.join(CATEGORY_FILENAME);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("no sidecar at {}: {e}", path.display()));
    serde_json::from_str(&content).unwrap()
}

// =========================================================================
// End-to-end over the fixture
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{FsStorage, HierarchicalLayout};
    use crate::outline::drive;
    use tempfile::TempDir;

    #[test]
    fn fixture_lays_out_expected_tree() {
        let tmp = TempDir::new().unwrap();
        let layout = HierarchicalLayout::new(tmp.path());

        drive(&fixture_outline(), &layout, &FsStorage, ".md", None).unwrap();

        assert_tree(
            tmp.path(),
            &[
                "faq.md",
                "getting-started/",
                "getting-started/Install.md",
                "getting-started/_category_.json",
                "getting-started/first-steps/",
                "getting-started/first-steps/Quick-Tour.md",
                "getting-started/first-steps/Whats-New-.md",
                "getting-started/first-steps/_category_.json",
                "reference-api/",
                "reference-api/_category_.json",
                "reference-api/api-endpoints.md",
            ],
        );
    }

    #[test]
    fn fixture_sidecars_record_order_and_verbatim_labels() {
        let tmp = TempDir::new().unwrap();
        let layout = HierarchicalLayout::new(tmp.path());

        drive(&fixture_outline(), &layout, &FsStorage, ".md", None).unwrap();

        let getting_started = read_category(&tmp.path().join("getting-started"));
        assert_eq!(getting_started, CategoryMetadata::new(1, "Getting Started"));
        let first_steps = read_category(&tmp.path().join("getting-started/first-steps"));
        assert_eq!(first_steps, CategoryMetadata::new(2, "First Steps"));
        let reference = read_category(&tmp.path().join("reference-api"));
        assert_eq!(reference, CategoryMetadata::new(2, "Reference: API"));
    }

    #[test]
    fn fixture_rerun_is_idempotent() {
        let tmp = TempDir::new().unwrap();
        let layout = HierarchicalLayout::new(tmp.path());

        drive(&fixture_outline(), &layout, &FsStorage, ".md", None).unwrap();
        let first = list_tree(tmp.path());
        let sidecar = read_category(&tmp.path().join("getting-started/first-steps"));
        drive(&fixture_outline(), &layout, &FsStorage, ".md", None).unwrap();

        assert_eq!(list_tree(tmp.path()), first);
        assert_eq!(
            read_category(&tmp.path().join("getting-started/first-steps")),
            sidecar
        );
    }
}
