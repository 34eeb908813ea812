//! Label sanitization for path segments.
//!
//! Outline labels and page titles are written by people, so they contain
//! anything: slashes, colons, emoji, curly quotes. [`sanitize`] turns such a
//! label into a single path segment that is safe on every common filesystem
//! and that downstream translation tooling (Crowdin) accepts.
//!
//! ## Pipeline
//!
//! The rules run in a fixed order:
//!
//! 1. Filesystem cleanup: drop `/ \ < > : * | "` and control characters,
//!    blank out the reserved names `.`/`..` and Windows device names
//!    (`CON`, `NUL`, `COM1`, ...), trim trailing dots and spaces, and cap the
//!    result at 255 bytes.
//! 2. Spaces become hyphens.
//! 3. Doubled `/` separators collapse.
//! 4. `%20` becomes a hyphen.
//! 5. Straight and curly double quotes and apostrophes are removed, `?`
//!    becomes a hyphen.
//!
//! `?` is deliberately not dropped in step 1 so that `What's New?` keeps a
//! visible trailing hyphen (`Whats-New-`) instead of silently losing it.
//!
//! The function is total: it never fails, and a label made only of
//! punctuation may come out empty.

use crate::paths::collapse_separators;

/// Characters no common filesystem accepts inside a single path segment.
const ILLEGAL_CHARS: &[char] = &['/', '\\', '<', '>', ':', '*', '|', '"'];

/// Characters that are legal on disk but rejected by translation tooling.
/// `"` is absent because [`ILLEGAL_CHARS`] already strips it.
const QUOTE_CHARS: [char; 3] = ['\u{201C}', '\u{201D}', '\''];

/// Longest segment most filesystems allow, in bytes.
const MAX_SEGMENT_BYTES: usize = 255;

/// Windows device names, matched case-insensitively with or without extension.
const WINDOWS_RESERVED: &[&str] = &["con", "prn", "aux", "nul"];
const WINDOWS_NUMBERED_RESERVED: &[&str] = &["com", "lpt"];

/// Sanitize a human-readable label into one path segment.
///
/// ```
/// use docu_layout::sanitize::sanitize;
///
/// assert_eq!(sanitize("Getting Started"), "Getting-Started");
/// assert_eq!(sanitize("What's New?"), "Whats-New-");
/// assert_eq!(sanitize("a/b: c"), "ab-c");
/// ```
pub fn sanitize(label: &str) -> String {
    let segment = filesystem_safe(label);
    let hyphenated = segment.replace(' ', "-");
    collapse_separators(&hyphenated)
        .replace("%20", "-")
        .replace(QUOTE_CHARS, "")
        .replace('?', "-")
}

/// Step 1 of the pipeline: make the label legal as a filesystem segment.
fn filesystem_safe(label: &str) -> String {
    let stripped: String = label
        .chars()
        .filter(|c| !ILLEGAL_CHARS.contains(c) && !is_control(*c))
        .collect();

    if is_dots_only(&stripped) || is_windows_reserved(&stripped) {
        return String::new();
    }

    let trimmed = stripped.trim_end_matches(['.', ' ']);
    truncate_to_boundary(trimmed, MAX_SEGMENT_BYTES).to_string()
}

/// C0 and C1 control characters.
fn is_control(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{1F}' | '\u{80}'..='\u{9F}')
}

fn is_dots_only(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c == '.')
}

/// `CON`, `con.txt`, `LPT1`, `com9.md` and friends.
fn is_windows_reserved(s: &str) -> bool {
    let stem = s.split('.').next().unwrap_or(s).to_ascii_lowercase();
    if WINDOWS_RESERVED.contains(&stem.as_str()) {
        return true;
    }
    WINDOWS_NUMBERED_RESERVED.iter().any(|prefix| {
        stem.len() == prefix.len() + 1
            && stem.starts_with(prefix)
            && stem.as_bytes()[prefix.len()].is_ascii_digit()
    })
}

/// Cut `s` to at most `max` bytes without splitting a character.
fn truncate_to_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
