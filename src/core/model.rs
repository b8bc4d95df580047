// LineSift - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.

use serde::Serialize;
use std::path::{Path, PathBuf};

// =============================================================================
// Document
// =============================================================================

/// A file that has been read fully into memory, split into lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path the document was read from.
    pub path: PathBuf,

    /// Lines in file order, without terminators.
    pub lines: Vec<String>,
}

impl Document {
    pub fn new(path: PathBuf, lines: Vec<String>) -> Self {
        Self { path, lines }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// File name for display, falling back to the full path.
    pub fn display_name(&self) -> String {
        display_name(&self.path)
    }

    /// All lines joined with `\n`, as shown in the original-file pane.
    pub fn joined(&self) -> String {
        self.lines.join("\n")
    }
}

/// File name component of `path`, or the whole path if it has none.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// =============================================================================
// Matched line
// =============================================================================

/// One line of the loaded document that contains the search term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchedLine {
    /// 1-based line number in the source document.
    pub line_number: usize,

    /// Line text, without terminator.
    pub text: String,
}

/// Join matched lines with `\n`, as shown in the filtered-results pane.
pub fn join_matches(matches: &[MatchedLine]) -> String {
    let mut out = String::new();
    for (i, m) in matches.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&m.text);
    }
    out
}

/// Render rows with a right-aligned line-number gutter.
///
/// `max_number` sets the gutter width so every row lines up.
pub fn format_numbered<'a, I>(rows: I, max_number: usize) -> String
where
    I: IntoIterator<Item = (usize, &'a str)>,
{
    let width = max_number.max(1).to_string().len();
    let mut out = String::new();
    for (i, (number, text)) in rows.into_iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("{number:>width$} \u{2502} {text}"));
    }
    out
}
