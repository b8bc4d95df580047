// LineSift - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. config.toml loading
// 3. Logging initialisation (debug mode support)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can still use
// `crate::app::...`, `crate::core::...` etc.
pub use linesift::app;
pub use linesift::core;
pub use linesift::platform;
pub use linesift::ui;
pub use linesift::util;

use clap::Parser;
use std::path::PathBuf;

/// Render the window icon: a rounded page with three text bars, the middle
/// one highlighted as a match.
fn render_icon() -> egui::IconData {
    let size = util::constants::ICON_SIZE;
    let s = size as f32;
    let page = image::Rgba([243u8, 244, 246, 255]); // Gray 100
    let text = image::Rgba([107u8, 114, 128, 255]); // Gray 500
    let hit = image::Rgba([59u8, 130, 246, 255]); // Blue 500
    let clear = image::Rgba([0u8, 0, 0, 0]);

    let img = image::RgbaImage::from_fn(size, size, |x, y| {
        let (fx, fy) = (x as f32 / s, y as f32 / s);
        if !(0.15..0.85).contains(&fx) || !(0.08..0.92).contains(&fy) {
            return clear;
        }
        let in_bar = (0.25..0.75).contains(&fx);
        match fy {
            fy if (0.25..0.33).contains(&fy) && in_bar => text,
            fy if (0.46..0.54).contains(&fy) && in_bar => hit,
            fy if (0.67..0.75).contains(&fy) && in_bar => text,
            _ => page,
        }
    });

    egui::IconData {
        rgba: img.into_raw(),
        width: size,
        height: size,
    }
}

/// LineSift - load a text file and filter its lines by a search term.
#[derive(Parser, Debug)]
#[command(name = "LineSift", version, about)]
struct Cli {
    /// File to load at startup (use Load File in the window if omitted).
    path: Option<PathBuf>,

    /// Directory containing config.toml (defaults to the platform config dir).
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is loaded before logging so [logging] level can take effect;
    // its warnings are replayed once the subscriber exists.
    let config_dir = cli
        .config_dir
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_dir);
    let (config, config_warnings) = platform::config::load_config(&config_dir);

    util::logging::init(cli.debug, config.log_level.as_deref());

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config_dir = %config_dir.display(),
        "LineSift starting"
    );
    for warning in &config_warnings {
        tracing::warn!(warning = %warning, "Config warning");
    }

    let mut state = app::state::AppState::new(config);
    if !config_warnings.is_empty() {
        state.status_message = format!(
            "Started with {} config warning(s); defaults used where invalid.",
            config_warnings.len()
        );
    }
    state.warnings = config_warnings;

    // A path given on the CLI is loaded on the first frame, through the same
    // path as the Load File button, so failures surface as a dialog.
    state.pending_load = cli.path;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size(util::constants::DEFAULT_WINDOW_SIZE)
            .with_min_inner_size(util::constants::MIN_WINDOW_SIZE)
            .with_icon(render_icon()),
        centered: true,
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::LineSiftApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch LineSift GUI: {e}");
        std::process::exit(1);
    }
}
