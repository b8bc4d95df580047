// LineSift - core/filter.rs
//
// Literal substring filter over document lines.
// Core layer: pure logic, no I/O or UI dependencies.

use crate::core::model::MatchedLine;
use crate::util::error::SearchError;

/// A validated, non-empty search term.
///
/// Matching is literal and case-sensitive: no escaping, no wildcards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Validate raw search-field input.
    ///
    /// When `trim` is set, surrounding whitespace is stripped first, so a
    /// whitespace-only input counts as empty.
    pub fn parse(input: &str, trim: bool) -> Result<Self, SearchError> {
        let term = if trim { input.trim() } else { input };
        if term.is_empty() {
            return Err(SearchError::EmptyTerm);
        }
        Ok(Self(term.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if `line` contains this term.
    pub fn matches(&self, line: &str) -> bool {
        line.contains(self.0.as_str())
    }
}

/// Keep the lines that contain `term`, in their original order.
///
/// The result is always an ordered subsequence of `lines`; each entry carries
/// its 1-based line number.
pub fn filter_lines<S: AsRef<str>>(lines: &[S], term: &SearchTerm) -> Vec<MatchedLine> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| term.matches(line.as_ref()))
        .map(|(idx, line)| MatchedLine {
            line_number: idx + 1,
            text: line.as_ref().to_string(),
        })
        .collect()
}
