// LineSift - tests/e2e_load_search.rs
//
// End-to-end tests for the load -> search -> export pipeline.
//
// These tests exercise the real filesystem through AppState, the same entry
// points the GUI drives, with no mocks. Every case writes its own fixture
// into a temporary directory.

use linesift::app::state::{AppState, NoticeLevel};
use linesift::core::export::{export_csv, export_json, ExportReport};
use linesift::platform::config::AppConfig;
use std::fs;
use std::path::{Path, PathBuf};

// =============================================================================
// Helpers
// =============================================================================

fn fixture(dir: &Path, name: &str, body: &[u8]) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, body).unwrap();
    path
}

fn search(state: &mut AppState, term: &str) {
    state.search_input = term.to_string();
    state.run_search();
}

fn filtered(state: &AppState) -> Vec<&str> {
    state.matches.iter().map(|m| m.text.as_str()).collect()
}

// =============================================================================
// Load + search
// =============================================================================

/// The documented example: "app" keeps apple and applesauce, in order.
#[test]
fn e2e_filters_fruit_example() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(dir.path(), "fruit.txt", b"apple\nbanana\napplesauce\n");

    let mut state = AppState::new(AppConfig::default());
    state.load_file(path);
    search(&mut state, "app");

    assert!(state.take_notice().is_none());
    assert_eq!(filtered(&state), vec!["apple", "applesauce"]);
    assert_eq!(state.filtered_text, "apple\napplesauce");
    assert_eq!(state.original_text, "apple\nbanana\napplesauce");
}

/// Filtered output is always an ordered subsequence of the loaded lines.
#[test]
fn e2e_results_are_ordered_subsequence() {
    let dir = tempfile::tempdir().unwrap();
    let body = "ERROR disk full\ninfo ok\nerror lowercase\nERROR net down\r\nwarn ERRORS\n";
    let path = fixture(dir.path(), "app.log", body.as_bytes());

    let mut state = AppState::new(AppConfig::default());
    state.load_file(path);
    search(&mut state, "ERROR");

    let doc = state.document.as_ref().unwrap();
    let numbers: Vec<usize> = state.matches.iter().map(|m| m.line_number).collect();
    assert_eq!(numbers, vec![1, 4, 5]);
    for m in &state.matches {
        assert_eq!(doc.lines[m.line_number - 1], m.text);
        assert!(m.text.contains("ERROR"));
    }
}

/// An empty term produces a warning and never touches the filtered pane.
#[test]
fn e2e_empty_term_warns() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(dir.path(), "fruit.txt", b"apple\n");

    let mut state = AppState::new(AppConfig::default());
    state.load_file(path);
    search(&mut state, "");

    let notice = state.take_notice().expect("warning notice");
    assert_eq!(notice.level, NoticeLevel::Warning);
    assert_eq!(notice.title, "Input Error");
    assert!(state.filtered_text.is_empty());
    assert!(state.last_term.is_none());
}

/// With trimming disabled a whitespace term is searched literally.
#[test]
fn e2e_untrimmed_whitespace_term() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(dir.path(), "words.txt", b"one two\nthree\n");

    let config = AppConfig {
        trim_term: false,
        ..AppConfig::default()
    };
    let mut state = AppState::new(config);
    state.load_file(path);
    search(&mut state, " ");

    assert!(state.take_notice().is_none());
    assert_eq!(filtered(&state), vec!["one two"]);
}

// =============================================================================
// Failure paths
// =============================================================================

/// A missing file raises an error notice and leaves both panes unchanged.
#[test]
fn e2e_missing_file_keeps_panes() {
    let dir = tempfile::tempdir().unwrap();
    let good = fixture(dir.path(), "fruit.txt", b"apple\nbanana\n");

    let mut state = AppState::new(AppConfig::default());
    state.load_file(good);
    search(&mut state, "ban");
    let (original, results) = (state.original_text.clone(), state.filtered_text.clone());

    state.load_file(dir.path().join("does-not-exist.txt"));

    let notice = state.take_notice().expect("error notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("does-not-exist.txt"));
    assert_eq!(state.original_text, original);
    assert_eq!(state.filtered_text, results);
}

/// Invalid UTF-8 is reported as a file error rather than displayed garbled.
#[test]
fn e2e_invalid_utf8_is_file_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(dir.path(), "binary.dat", &[0x61, 0x0a, 0xc3, 0x28]);

    let mut state = AppState::new(AppConfig::default());
    state.load_file(path);

    let notice = state.take_notice().expect("error notice");
    assert_eq!(notice.level, NoticeLevel::Error);
    assert!(notice.message.contains("invalid UTF-8"));
    assert!(!state.can_search());
}

/// Files over the configured cap are refused.
#[test]
fn e2e_file_over_size_cap_refused() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(dir.path(), "big.txt", &vec![b'x'; 4096]);

    let config = AppConfig {
        max_file_size: 1024,
        ..AppConfig::default()
    };
    let mut state = AppState::new(config);
    state.load_file(path);

    let notice = state.take_notice().expect("error notice");
    assert!(notice.message.contains("exceeds maximum of 1024 bytes"));
    assert!(state.document.is_none());
}

/// Search re-reads the file, so edits made after loading are picked up.
#[test]
fn e2e_search_sees_changes_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(dir.path(), "notes.txt", b"todo: a\n");

    let mut state = AppState::new(AppConfig::default());
    state.load_file(path.clone());
    fs::write(&path, b"todo: a\ndone: b\ntodo: c\n").unwrap();
    search(&mut state, "todo");

    assert_eq!(filtered(&state), vec!["todo: a", "todo: c"]);
    assert_eq!(state.total_lines(), 3);
    assert_eq!(state.original_text, "todo: a\ndone: b\ntodo: c");
}

// =============================================================================
// Export
// =============================================================================

/// Results written to disk as CSV and JSON round-trip their content.
#[test]
fn e2e_exports_results() {
    let dir = tempfile::tempdir().unwrap();
    let path = fixture(dir.path(), "fruit.txt", b"apple\nbanana\napplesauce\n");

    let mut state = AppState::new(AppConfig::default());
    state.load_file(path.clone());
    search(&mut state, "app");

    let csv_path = dir.path().join("out.csv");
    let n = export_csv(
        &state.matches,
        fs::File::create(&csv_path).unwrap(),
        &csv_path,
    )
    .unwrap();
    assert_eq!(n, 2);
    assert_eq!(
        fs::read_to_string(&csv_path).unwrap(),
        "line,text\n1,apple\n3,applesauce\n"
    );

    let json_path = dir.path().join("out.json");
    let report = ExportReport {
        source: &path,
        term: "app",
        exported_at: chrono::Utc::now(),
        matches: &state.matches,
    };
    export_json(&report, fs::File::create(&json_path).unwrap(), &json_path).unwrap();
    let value: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(value["matches"].as_array().unwrap().len(), 2);
    assert_eq!(value["matches"][1]["line_number"], 3);
}
