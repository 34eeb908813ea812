//! Stale output tracking.
//!
//! A layout run rewrites every page it knows about, but pages that were
//! removed or renamed upstream would otherwise linger in the output tree
//! forever. [`OutputTracker`] snapshots the existing page files before the
//! run, crosses off every path the run resolves, and can delete whatever is
//! left afterwards.
//!
//! Only `.md` and `.mdx` files are tracked. Sidecars, images and anything
//! else under the root are never touched.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const PAGE_EXTENSIONS: &[&str] = &["md", "mdx"];

#[derive(Debug, Default)]
pub struct OutputTracker {
    unseen: BTreeSet<PathBuf>,
}

impl OutputTracker {
    /// Record every page file currently under `root`.
    ///
    /// A missing root yields an empty tracker (first run).
    pub fn scan(root: &Path) -> Self {
        let unseen = WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file() && is_page_file(e.path()))
            .map(|e| e.into_path())
            .collect::<BTreeSet<_>>();
        tracing::debug!(root = %root.display(), existing = unseen.len(), "Scanned existing pages");
        Self { unseen }
    }

    /// Cross `path` off the list. Unknown paths are ignored.
    pub fn mark_seen(&mut self, path: &Path) {
        self.unseen.remove(path);
    }

    /// Files recorded by [`scan`](Self::scan) and not yet marked seen.
    pub fn unseen(&self) -> impl Iterator<Item = &Path> {
        self.unseen.iter().map(PathBuf::as_path)
    }

    /// Delete every unseen file and return what was removed, in path order.
    ///
    /// Files that disappeared since the scan are skipped. Any other removal
    /// error stops the cleanup.
    pub fn cleanup(self) -> io::Result<Vec<PathBuf>> {
        let mut removed = Vec::new();
        for path in self.unseen {
            match std::fs::remove_file(&path) {
                Ok(()) => {
                    tracing::warn!(path = %path.display(), "Removed stale page");
                    removed.push(path);
                }
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => return Err(e),
            }
        }
        Ok(removed)
    }
}

fn is_page_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| PAGE_EXTENSIONS.contains(&ext))
}
