//! CLI output formatting for layout runs.
//!
//! # Information-First Display
//!
//! Output is **information-centric, not file-centric**. Each entity (level or
//! page) leads with its sibling position and display label; where it landed
//! follows the arrow. Levels show their logical context, pages their file
//! path relative to the output root.
//!
//! ```text
//! Layout → ./docs
//! 001 Getting Started → /Getting-Started
//!     001 Install → getting-started/Install.md
//!     002 First Steps → /Getting-Started/First-Steps
//!         001 What's New? → getting-started/first-steps/Whats-New-.md
//! 002 FAQ → faq.md
//!
//! Removed
//!     old/Retired-Page.md
//!
//! Created 2 levels, 3 pages
//! ```
//!
//! # Architecture
//!
//! `format_*` functions return `Vec<String>` for testability and `print_*`
//! wrappers write to stdout. Format functions are pure.

use crate::outline::{DriveReport, EntryKind};
use crate::paths::LayoutRoot;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: u32) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// `path` relative to `root` when it lives under it, else as-is.
fn display_relative(path: &Path, root: &LayoutRoot) -> String {
    path.strip_prefix(root.as_path())
        .unwrap_or(path)
        .display()
        .to_string()
}

fn plural(n: usize, one: &str, many: &str) -> String {
    if n == 1 {
        format!("{n} {one}")
    } else {
        format!("{n} {many}")
    }
}

/// Format the result of a layout run (or a dry-run plan).
pub fn format_layout_output(report: &DriveReport, root: &LayoutRoot, dry_run: bool) -> Vec<String> {
    let mut lines = Vec::new();
    let heading = if dry_run { "Plan" } else { "Layout" };
    lines.push(format!("{heading} \u{2192} {root}"));

    for entry in &report.entries {
        let target = match &entry.kind {
            EntryKind::Level { label, context } => format!("{label} \u{2192} {context}"),
            EntryKind::Page { title, path, .. } => {
                format!("{title} \u{2192} {}", display_relative(path, root))
            }
        };
        lines.push(format!(
            "{}{} {}",
            indent(entry.depth),
            format_index(entry.order),
            target
        ));
    }

    if !report.removed.is_empty() {
        lines.push(String::new());
        lines.push("Removed".to_string());
        for path in &report.removed {
            lines.push(format!("    {}", display_relative(path, root)));
        }
    }

    lines.push(String::new());
    let verb = if dry_run { "Planned" } else { "Created" };
    lines.push(format!(
        "{verb} {}, {}",
        plural(report.level_count(), "level", "levels"),
        plural(report.page_count(), "page", "pages")
    ));
    lines
}

/// Print layout output to stdout.
pub fn print_layout_output(report: &DriveReport, root: &LayoutRoot, dry_run: bool) {
    for line in format_layout_output(report, root, dry_run) {
        println!("{}", line);
    }
}
