// LineSift - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the UI panels and carries out the actions they request.

use crate::app::state::{AppState, Notice, NoticeLevel};
use crate::core::export::{create_export_file, export_csv, export_json, ExportReport};
use crate::ui;
use std::path::Path;

/// Export file formats offered in the File menu.
#[derive(Debug, Clone, Copy)]
enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn label(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Json => "JSON",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// The LineSift application.
pub struct LineSiftApp {
    pub state: AppState,
    /// Theme settings last pushed to egui, to re-apply only on change.
    applied_theme: Option<(bool, f32)>,
}

impl LineSiftApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            applied_theme: None,
        }
    }

    fn sync_theme(&mut self, ctx: &egui::Context) {
        let wanted = (self.state.config.dark_mode, self.state.config.font_size);
        if self.applied_theme != Some(wanted) {
            ui::theme::apply(ctx, wanted.0, wanted.1);
            self.applied_theme = Some(wanted);
        }
    }

    /// Show a notice as a native blocking dialog.
    fn show_notice(notice: &Notice) {
        let level = match notice.level {
            NoticeLevel::Error => rfd::MessageLevel::Error,
            NoticeLevel::Warning => rfd::MessageLevel::Warning,
        };
        rfd::MessageDialog::new()
            .set_level(level)
            .set_title(notice.title.as_str())
            .set_description(notice.message.as_str())
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }

    fn export_results(&mut self, format: ExportFormat) {
        let Some(source) = self.state.document.as_ref().map(|d| d.path.clone()) else {
            return;
        };
        let Some(dest) = rfd::FileDialog::new()
            .add_filter(format.label(), &[format.extension()])
            .set_file_name(format!("results.{}", format.extension()))
            .save_file()
        else {
            return;
        };

        self.state.status_message = match self.write_export(format, &source, &dest) {
            Ok(n) => {
                tracing::info!(path = %dest.display(), lines = n, "Results exported");
                format!("Exported {n} lines to {}.", format.label())
            }
            Err(e) => {
                tracing::warn!(path = %dest.display(), error = %e, "Export failed");
                e.to_string()
            }
        };
    }

    fn write_export(
        &self,
        format: ExportFormat,
        source: &Path,
        dest: &Path,
    ) -> crate::util::error::Result<usize> {
        let writer = create_export_file(dest, self.state.matches.len())?;
        let written = match format {
            ExportFormat::Csv => export_csv(&self.state.matches, writer, dest),
            ExportFormat::Json => {
                let report = ExportReport {
                    source,
                    term: self.state.last_term.as_deref().unwrap_or_default(),
                    exported_at: chrono::Utc::now(),
                    matches: &self.state.matches,
                };
                export_json(&report, writer, dest)
            }
        }?;
        Ok(written)
    }
}

impl eframe::App for LineSiftApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_theme(ctx);

        // ---- Carry out actions requested by panels (or the CLI) ----
        if let Some(path) = self.state.pending_load.take() {
            self.state.load_file(path);
        }
        if self.state.request_search {
            self.state.request_search = false;
            self.state.run_search();
        }
        if let Some(notice) = self.state.take_notice() {
            Self::show_notice(&notice);
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Load File\u{2026}").clicked() {
                        ui.close_menu();
                        ui::panels::toolbar::pick_file(&mut self.state);
                    }
                    ui.separator();
                    let has_results = !self.state.matches.is_empty();
                    ui.add_enabled_ui(has_results, |ui| {
                        ui.menu_button("Export Results", |ui| {
                            for format in [ExportFormat::Csv, ExportFormat::Json] {
                                if ui.button(format!("{}\u{2026}", format.label())).clicked() {
                                    ui.close_menu();
                                    self.export_results(format);
                                }
                            }
                        });
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
                ui.menu_button("Edit", |ui| {
                    let n = self.state.matches.len();
                    ui.add_enabled_ui(n > 0, |ui| {
                        if ui.button(format!("Copy Filtered Results ({n} lines)")).clicked() {
                            ctx.copy_text(self.state.filtered_results_report());
                            self.state.status_message =
                                format!("Copied {n} filtered lines to clipboard.");
                            ui.close_menu();
                        }
                    });
                });
                ui.menu_button("View", |ui| {
                    let mut numbers = self.state.config.show_line_numbers;
                    if ui.checkbox(&mut numbers, "Line Numbers").changed() {
                        self.state.set_show_line_numbers(numbers);
                    }
                    ui.checkbox(&mut self.state.config.dark_mode, "Dark Mode");
                });
                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        self.state.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        // Toolbar
        egui::TopBottomPanel::top("toolbar")
            .frame(egui::Frame::side_top_panel(&ctx.style()).inner_margin(ui::theme::PANEL_MARGIN))
            .show(ctx, |ui| {
                ui::panels::toolbar::render(ui, &mut self.state);
            });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                if !self.state.warnings.is_empty() {
                    ui.separator();
                    ui.label(
                        egui::RichText::new(format!("{} warning(s)", self.state.warnings.len()))
                            .color(egui::Color32::from_rgb(217, 119, 6)), // Amber 600
                    )
                    .on_hover_text(self.state.warnings.join("\n"));
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(ref doc) = self.state.document {
                        ui.label(format!(
                            "{}/{} lines",
                            self.state.matches.len(),
                            doc.line_count()
                        ));
                        ui.separator();
                        ui.label(doc.display_name())
                            .on_hover_text(doc.path.display().to_string());
                    }
                });
            });
        });

        // Central panel (two panes)
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.spacing_mut().item_spacing.x = ui::theme::PANE_SPACING;
            ui::panels::panes::render(ui, &self.state);
        });

        ui::panels::about::render(ctx, &mut self.state);
    }
}
