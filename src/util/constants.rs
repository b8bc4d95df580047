// LineSift - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "LineSift";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "LineSift";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// File limits
// =============================================================================

/// Default cap on the size of a file that may be loaded.
///
/// Files are held fully in memory and re-read on every search, so very large
/// inputs are refused up front instead of stalling the UI thread.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 64 * 1024 * 1024; // 64 MB

/// Smallest user-configurable file size cap.
pub const MIN_MAX_FILE_SIZE: u64 = 1024; // 1 KB

/// Hard upper bound on the file size cap.
pub const ABSOLUTE_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024; // 1 GB

// =============================================================================
// Search
// =============================================================================

/// Whether surrounding whitespace is stripped from the search term by default.
pub const DEFAULT_TRIM_TERM: bool = true;

/// Width of the search text field in points.
pub const SEARCH_FIELD_WIDTH: f32 = 220.0;

// =============================================================================
// UI defaults
// =============================================================================

/// Initial window size, matching the classic two-pane layout.
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [900.0, 600.0];

/// Minimum window size.
pub const MIN_WINDOW_SIZE: [f32; 2] = [600.0, 400.0];

/// Default UI body font size in points.
pub const DEFAULT_FONT_SIZE: f32 = 14.0;

/// Minimum user-configurable UI font size (points).
pub const MIN_FONT_SIZE: f32 = 10.0;

/// Maximum user-configurable UI font size (points).
pub const MAX_FONT_SIZE: f32 = 24.0;

/// Whether the panes show a line-number gutter by default.
pub const DEFAULT_SHOW_LINE_NUMBERS: bool = false;

/// Side length of the procedurally rendered window icon in pixels.
pub const ICON_SIZE: u32 = 64;

// =============================================================================
// Export
// =============================================================================

/// Maximum number of matched lines written by a single export.
pub const MAX_EXPORT_LINES: usize = 5_000_000;

/// Maximum number of matched lines copied to the clipboard at once.
pub const MAX_CLIPBOARD_LINES: usize = 100_000;

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Log levels accepted in `[logging] level`.
pub const VALID_LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

// =============================================================================
// Configuration
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";
