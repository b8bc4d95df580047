// LineSift - ui/panels/panes.rs
//
// The two side-by-side read-only text panes: original file and
// filtered results.

use crate::app::state::AppState;
use crate::ui::theme;

/// Render both panes in equal-width columns.
pub fn render(ui: &mut egui::Ui, state: &AppState) {
    let filtered_placeholder = state.filtered_placeholder();

    ui.columns(2, |columns| {
        text_pane(
            &mut columns[0],
            "original_pane",
            "Original File",
            &state.original_text,
            state.original_placeholder(),
        );
        text_pane(
            &mut columns[1],
            "filtered_pane",
            "Filtered Results",
            &state.filtered_text,
            filtered_placeholder.as_deref(),
        );
    });
}

/// One titled, scrollable, read-only monospace pane.
///
/// `placeholder` replaces the text when set; a blank-only file still shows
/// its (empty) lines.
fn text_pane(ui: &mut egui::Ui, id: &str, title: &str, text: &str, placeholder: Option<&str>) {
    ui.group(|ui| {
        ui.label(egui::RichText::new(title).strong().color(theme::PANE_TITLE));
        ui.separator();
        egui::ScrollArea::both()
            .id_salt(id)
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                if let Some(placeholder) = placeholder {
                    ui.label(egui::RichText::new(placeholder).italics().color(theme::PLACEHOLDER));
                } else {
                    // A `&str` buffer makes the TextEdit selectable but not editable.
                    let mut buffer = text;
                    ui.add(
                        egui::TextEdit::multiline(&mut buffer)
                            .font(egui::TextStyle::Monospace)
                            .desired_width(f32::INFINITY),
                    );
                }
            });
    });
}
