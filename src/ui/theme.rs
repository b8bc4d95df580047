// LineSift - ui/theme.rs
//
// Visual settings and layout constants.
// No dependencies on app state or business logic.

use egui::Color32;

/// Apply dark/light visuals and scale every text style to `font_size`.
///
/// Sizes are scaled relative to the egui body size so headings stay
/// proportionally larger than body text.
pub fn apply(ctx: &egui::Context, dark_mode: bool, font_size: f32) {
    ctx.set_visuals(if dark_mode {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });

    let defaults = egui::Style::default();
    let base = defaults
        .text_styles
        .get(&egui::TextStyle::Body)
        .map_or(font_size, |f| f.size);
    let scale = font_size / base;
    ctx.style_mut(|style| {
        for (text_style, font_id) in style.text_styles.iter_mut() {
            if let Some(default) = defaults.text_styles.get(text_style) {
                font_id.size = default.size * scale;
            }
        }
    });
}

/// Pane title colour.
pub const PANE_TITLE: Color32 = Color32::from_rgb(96, 165, 250); // Blue 400

/// Placeholder text colour for empty panes.
pub const PLACEHOLDER: Color32 = Color32::from_rgb(107, 114, 128); // Gray 500

/// Layout constants.
pub const PANE_SPACING: f32 = 10.0;
pub const PANEL_MARGIN: f32 = 5.0;
