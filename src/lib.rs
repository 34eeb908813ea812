//! # docu-layout
//!
//! Turns an ordered outline of content pages into a Docusaurus-style docs
//! tree on disk: one directory per outline level, a `_category_.json` in each
//! recording its sidebar position and label, and one markdown file per page.
//!
//! # Architecture
//!
//! ```text
//! outline.json ──▶ outline::drive ──▶ LayoutStrategy ──▶ Storage ──▶ docs/
//!                    (depth-first)      (where things go)  (side effects)
//! ```
//!
//! The driver walks the outline and threads each level's *logical context*
//! (`/Getting-Started/First-Steps`) down to its children. The strategy owns
//! every naming decision; the storage owns every write. Path arithmetic lives
//! in [`paths`] and never touches the filesystem, so the layout rules are
//! testable with plain string assertions.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`sanitize`] | Label → safe path segment pipeline |
//! | [`paths`] | Pure path composition: contexts, level dirs, page paths |
//! | [`layout`] | `LayoutStrategy` trait, hierarchical and flat strategies, storage seam |
//! | [`outline`] | Outline JSON model and the depth-first driver |
//! | [`tracker`] | Stale page detection and cleanup |
//! | [`config`] | `docu-layout.toml` loading, validation, merging |
//! | [`types`] | Page, level and category sidecar types |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Logical Context Keeps Case, Directories Don't
//!
//! Level contexts returned to the driver preserve the label's case so they
//! read naturally in reports and logs. The directories they map to are
//! lower-cased, which keeps URLs stable and avoids surprises when a tree
//! built on a case-insensitive filesystem is deployed to a case-sensitive one.
//! Page paths use the lower-cased directory part too, so pages always land
//! inside the directory their level created.
//!
//! ## Sanitize for the Toolchain, Not Just the Filesystem
//!
//! Quotes, apostrophes and `?` are legal on most filesystems but break
//! translation tooling downstream, so [`sanitize::sanitize`] removes them
//! (or turns `?` into `-`) on top of the usual illegal-character cleanup.
//!
//! ## No Collision Handling
//!
//! Two siblings whose labels sanitize to the same segment share a directory,
//! and the later sidecar wins. Re-running a layout is therefore idempotent,
//! and nothing silently renames content behind the author's back.

pub mod config;
pub mod layout;
pub mod outline;
pub mod output;
pub mod paths;
pub mod sanitize;
pub mod tracker;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
