// LineSift - ui/panels/toolbar.rs
//
// Top toolbar: search field plus Load / Search / Quit buttons.
// Actions are recorded on the state and carried out by the app loop.

use crate::app::state::AppState;
use crate::util::constants::SEARCH_FIELD_WIDTH;

/// Show the native open dialog and queue the chosen file for loading.
pub fn pick_file(state: &mut AppState) {
    let mut dialog = rfd::FileDialog::new().set_title("Load File");
    if let Some(dir) = state.last_directory() {
        dialog = dialog.set_directory(dir);
    }
    if let Some(path) = dialog.pick_file() {
        tracing::debug!(path = %path.display(), "File chosen");
        state.pending_load = Some(path);
    }
}

/// Render the toolbar.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal(|ui| {
        ui.label("Search:");
        let field = ui.add(
            egui::TextEdit::singleline(&mut state.search_input)
                .desired_width(SEARCH_FIELD_WIDTH)
                .hint_text("text to find"),
        );
        // Enter in the field behaves like the Search button.
        if field.lost_focus()
            && ui.input(|i| i.key_pressed(egui::Key::Enter))
            && state.can_search()
        {
            state.request_search = true;
        }

        if ui.button("Load File").clicked() {
            pick_file(state);
        }

        let search = ui
            .add_enabled(state.can_search(), egui::Button::new("Search File"))
            .on_disabled_hover_text("Load a file first");
        if search.clicked() {
            state.request_search = true;
        }

        if ui.button("Quit").clicked() {
            ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}
