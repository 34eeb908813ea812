//! Pure path arithmetic for the generated docs tree.
//!
//! Everything here is string composition: no function touches the
//! filesystem, so the layout rules can be exercised without a temp dir.
//! Strategies in [`crate::layout`] call into this module and then hand the
//! results to a [`Storage`](crate::layout::Storage) for the side effects.
//!
//! ## Logical vs physical paths
//!
//! A level's *logical context* (`/Getting-Started/Install`) keeps the case of
//! the labels it was built from, because callers thread it to descendants and
//! show it to users. The *physical* directory it lives in is the lower-cased
//! form of that context under the output root (`docs/getting-started/install`).
//! Page paths follow the physical form for the directory part and keep the
//! case of the page's own file name.

use crate::sanitize::sanitize;
use std::fmt;
use std::path::{Path, PathBuf};

/// The output root of a layout run.
///
/// Normalized once at construction: runs of `/` collapse and a trailing `/`
/// is dropped (except for the filesystem root itself). Never mutated after.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRoot(String);

impl LayoutRoot {
    pub fn new(root: impl AsRef<str>) -> Self {
        let collapsed = collapse_separators(root.as_ref());
        let trimmed = match collapsed.trim_end_matches('/') {
            "" if collapsed.starts_with('/') => "/",
            other => other,
        };
        Self(trimmed.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_path(&self) -> &Path {
        Path::new(&self.0)
    }
}

impl From<String> for LayoutRoot {
    fn from(root: String) -> Self {
        Self::new(root)
    }
}

impl From<&str> for LayoutRoot {
    fn from(root: &str) -> Self {
        Self::new(root)
    }
}

impl From<&Path> for LayoutRoot {
    fn from(root: &Path) -> Self {
        Self::new(root.to_string_lossy())
    }
}

impl From<PathBuf> for LayoutRoot {
    fn from(root: PathBuf) -> Self {
        Self::from(root.as_path())
    }
}

impl fmt::Display for LayoutRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Collapse every run of `/` into a single `/`.
pub fn collapse_separators(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut prev_slash = false;
    for c in path.chars() {
        if c == '/' {
            if !prev_slash {
                out.push(c);
            }
            prev_slash = true;
        } else {
            out.push(c);
            prev_slash = false;
        }
    }
    out
}

/// Logical context of a new level: `parent + "/" + sanitize(label)`.
///
/// Case is preserved. An empty parent is the top of the outline.
pub fn level_context(parent_context: &str, label: &str) -> String {
    format!("{parent_context}/{}", sanitize(label))
}

/// Physical directory for a logical context: the root joined with the
/// lower-cased context.
pub fn level_dir(root: &LayoutRoot, context: &str) -> PathBuf {
    let joined = format!("{}/{}", root.as_str(), context.to_lowercase());
    PathBuf::from(collapse_separators(&joined))
}

/// File stem for a page's file-name candidate.
///
/// Runs the full sanitization pipeline, then repeats the separator and
/// space cleanup: removing curly quotes in the last step of [`sanitize`] can
/// bring the pieces of a `%20` back together.
pub fn page_stem(name: &str) -> String {
    collapse_separators(&sanitize(name))
        .replace("%20", "-")
        .replace(' ', "-")
}

/// Full output path for a page: `root / context / stem + extension`.
///
/// The context part is lower-cased so the file lands inside the directory
/// [`level_dir`] created for it. `extension` includes its leading dot.
pub fn page_path(root: &LayoutRoot, context: &str, stem: &str, extension: &str) -> PathBuf {
    let joined = format!(
        "{}/{}/{stem}{extension}",
        root.as_str(),
        context.to_lowercase()
    );
    PathBuf::from(collapse_separators(&joined))
}
