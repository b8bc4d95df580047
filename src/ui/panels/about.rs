// LineSift - ui/panels/about.rs
//
// Help > About window: version, matching rules, and config location.

use crate::app::state::AppState;
use crate::util::constants::{APP_NAME, APP_VERSION, CONFIG_FILE_NAME};

/// Render the About window while `state.show_about` is set.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    if !state.show_about {
        return;
    }

    let mut close = false;
    egui::Window::new(APP_NAME)
        .collapsible(false)
        .resizable(false)
        .default_pos(ctx.screen_rect().center())
        .show(ctx, |ui| {
            ui.heading(format!("{APP_NAME} {APP_VERSION}"));
            ui.label("Filters the lines of a text file by a search term.");
            ui.separator();

            egui::Grid::new("about_grid")
                .num_columns(2)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    ui.label("Matching:");
                    ui.label("literal substring, case-sensitive");
                    ui.end_row();

                    ui.label("Trim term:");
                    ui.label(if state.config.trim_term { "yes" } else { "no" });
                    ui.end_row();

                    ui.label("Size limit:");
                    ui.label(format!("{} KB", state.config.max_file_size / 1024));
                    ui.end_row();

                    ui.label("Settings:");
                    ui.label(CONFIG_FILE_NAME);
                    ui.end_row();
                });

            ui.separator();
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("MIT License").small().weak());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    close = ui.button("Close").clicked();
                });
            });
        });

    if close {
        state.show_about = false;
    }
}
