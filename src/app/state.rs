// LineSift - app/state.rs
//
// Application state management. Holds the loaded document, the current
// filtered results, the search input, and any notice waiting to be shown.
// Owned by the eframe::App implementation.

use crate::core::filter::{filter_lines, SearchTerm};
use crate::core::model::{display_name, format_numbered, join_matches, Document, MatchedLine};
use crate::platform::config::AppConfig;
use crate::platform::fs::read_lines;
use crate::util::constants::MAX_CLIPBOARD_LINES;
use crate::util::error::{LoadError, SearchError};
use std::path::{Path, PathBuf};

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Error,
    Warning,
}

/// A message that must be acknowledged by the user in a blocking dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    fn file_error(err: &LoadError) -> Self {
        Self {
            level: NoticeLevel::Error,
            title: "File Error".to_string(),
            message: format!("Error reading file: {err}"),
        }
    }

    fn empty_term() -> Self {
        Self {
            level: NoticeLevel::Warning,
            title: "Input Error".to_string(),
            message: "Please enter a search string.".to_string(),
        }
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Validated configuration.
    pub config: AppConfig,

    /// Most recently loaded document (None until the first successful load).
    pub document: Option<Document>,

    /// Lines of `document` that matched the last search.
    pub matches: Vec<MatchedLine>,

    /// Term the current `matches` were produced with.
    pub last_term: Option<String>,

    /// Search field contents, edited directly by the toolbar.
    pub search_input: String,

    /// Cached text of the original-file pane.
    pub original_text: String,

    /// Cached text of the filtered-results pane.
    pub filtered_text: String,

    /// Status message for the status bar.
    pub status_message: String,

    /// Non-fatal warnings (e.g. from config loading).
    pub warnings: Vec<String>,

    /// Notice waiting to be displayed in a blocking dialog.
    pub pending_notice: Option<Notice>,

    /// Path chosen by the user (or the CLI) that should be loaded this frame.
    pub pending_load: Option<PathBuf>,

    /// Set by the toolbar when a search was requested.
    pub request_search: bool,

    /// Whether to show the About window.
    pub show_about: bool,
}

impl AppState {
    /// Create initial state from a validated configuration.
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            document: None,
            matches: Vec::new(),
            last_term: None,
            search_input: String::new(),
            original_text: String::new(),
            filtered_text: String::new(),
            status_message: "Ready. Load a file to begin.".to_string(),
            warnings: Vec::new(),
            pending_notice: None,
            pending_load: None,
            request_search: false,
            show_about: false,
        }
    }

    /// Search is only possible once a file has been loaded.
    pub fn can_search(&self) -> bool {
        self.document.is_some()
    }

    /// Directory of the loaded file, used as the open dialog's start point.
    pub fn last_directory(&self) -> Option<&Path> {
        self.document.as_ref().and_then(|d| d.path.parent())
    }

    /// Read `path` into memory and show it in the original-file pane.
    ///
    /// On success any previous filtered results are cleared. On failure an
    /// error notice is queued and the current state is left untouched.
    pub fn load_file(&mut self, path: PathBuf) {
        match read_lines(&path, self.config.max_file_size) {
            Ok(lines) => {
                let document = Document::new(path, lines);
                tracing::info!(
                    path = %document.path.display(),
                    lines = document.line_count(),
                    "File loaded"
                );
                self.status_message = format!(
                    "Loaded {} ({} lines).",
                    document.display_name(),
                    document.line_count()
                );
                self.document = Some(document);
                self.refresh_original_text();
                self.clear_results();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load file");
                self.status_message = format!("Could not load {}.", display_name(&path));
                self.pending_notice = Some(Notice::file_error(&e));
            }
        }
    }

    /// Filter the loaded file by the current search input.
    ///
    /// The file is re-read from disk so the results reflect its current
    /// content. If that content changed since the last load, the fresh lines
    /// replace the loaded document so the results always come from the
    /// document that is on screen.
    pub fn run_search(&mut self) {
        let Some(path) = self.document.as_ref().map(|d| d.path.clone()) else {
            return;
        };

        let term = match SearchTerm::parse(&self.search_input, self.config.trim_term) {
            Ok(t) => t,
            Err(SearchError::EmptyTerm) => {
                tracing::debug!("Search skipped: empty term");
                self.pending_notice = Some(Notice::empty_term());
                return;
            }
        };

        let lines = match read_lines(&path, self.config.max_file_size) {
            Ok(lines) => lines,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to re-read file for search");
                self.status_message = format!("Search failed for {}.", display_name(&path));
                self.pending_notice = Some(Notice::file_error(&e));
                return;
            }
        };

        let matches = filter_lines(&lines, &term);
        tracing::info!(
            term_len = term.as_str().len(),
            matched = matches.len(),
            total = lines.len(),
            "Search complete"
        );

        if let Some(doc) = self.document.as_mut() {
            if doc.lines != lines {
                tracing::info!(path = %path.display(), "File changed on disk; refreshing");
                doc.lines = lines;
                self.refresh_original_text();
            }
        }

        self.status_message = format!(
            "{} of {} lines contain \"{}\".",
            matches.len(),
            self.total_lines(),
            term.as_str()
        );
        self.matches = matches;
        self.last_term = Some(term.as_str().to_string());
        self.refresh_filtered_text();
    }

    /// Toggle the line-number gutter and rebuild both pane texts.
    pub fn set_show_line_numbers(&mut self, show: bool) {
        if self.config.show_line_numbers == show {
            return;
        }
        self.config.show_line_numbers = show;
        self.refresh_original_text();
        self.refresh_filtered_text();
    }

    /// Hint shown instead of the original-file pane, if it has no lines.
    pub fn original_placeholder(&self) -> Option<&'static str> {
        match self.document {
            None => Some("No file loaded."),
            Some(ref doc) if doc.line_count() == 0 => Some("The file is empty."),
            Some(_) => None,
        }
    }

    /// Hint shown instead of the filtered-results pane, if it has no lines.
    pub fn filtered_placeholder(&self) -> Option<String> {
        if !self.matches.is_empty() {
            return None;
        }
        Some(match (&self.last_term, self.can_search()) {
            (Some(term), _) => format!("No lines contain \"{term}\"."),
            (None, true) => "Enter a search term and press Search File.".to_string(),
            (None, false) => String::new(),
        })
    }

    /// Remove and return the pending notice, if any.
    pub fn take_notice(&mut self) -> Option<Notice> {
        self.pending_notice.take()
    }

    pub fn total_lines(&self) -> usize {
        self.document.as_ref().map_or(0, Document::line_count)
    }

    /// Filtered lines as plain text for the clipboard, capped at
    /// `MAX_CLIPBOARD_LINES`.
    pub fn filtered_results_report(&self) -> String {
        let shown = self.matches.len().min(MAX_CLIPBOARD_LINES);
        let mut report = join_matches(&self.matches[..shown]);
        if shown < self.matches.len() {
            report.push_str(&format!(
                "\n... {} more lines not copied",
                self.matches.len() - shown
            ));
        }
        report
    }

    fn clear_results(&mut self) {
        self.matches.clear();
        self.filtered_text.clear();
        self.last_term = None;
    }

    fn refresh_original_text(&mut self) {
        self.original_text = match self.document {
            Some(ref doc) if self.config.show_line_numbers => format_numbered(
                doc.lines.iter().enumerate().map(|(i, l)| (i + 1, l.as_str())),
                doc.line_count(),
            ),
            Some(ref doc) => doc.joined(),
            None => String::new(),
        };
    }

    fn refresh_filtered_text(&mut self) {
        self.filtered_text = if self.config.show_line_numbers {
            format_numbered(
                self.matches.iter().map(|m| (m.line_number, m.text.as_str())),
                self.total_lines(),
            )
        } else {
            join_matches(&self.matches)
        };
    }
}
