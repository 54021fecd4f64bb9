//! Dashboard view: operation log viewer and about panel.

use crate::gui::app::GuiApp;
use crate::operation_log;
use eframe::egui::{self, RichText};

impl GuiApp {
    pub(crate) fn view_dashboard(&mut self, ui: &mut egui::Ui) {
        self.render_section_header(ui, "[H]", "DASHBOARD");
        ui.add_space(self.theme.spacing_sm);

        let theme = self.theme;

        theme.frame_panel().show(ui, |ui| {
            ui.label(RichText::new("About").strong().color(theme.primary));
            ui.add_space(theme.spacing_xs);
            ui.label(format!("Walgen v{}", env!("CARGO_PKG_VERSION")));
            ui.label(
                RichText::new(
                    "Pre-generates wallets in bulk for Twitter and Telegram handles \
                     against a wallet creation API.",
                )
                .color(theme.text_secondary),
            );
            ui.add_space(theme.spacing_xs);
            ui.horizontal(|ui| {
                ui.label(RichText::new("Endpoint:").color(theme.text_secondary));
                ui.monospace(&self.config.endpoint_url);
            });
            ui.horizontal(|ui| {
                ui.label(RichText::new("Batch size:").color(theme.text_secondary));
                ui.monospace(format!("{}", self.config.batch_size));
                ui.label(RichText::new("Batch delay:").color(theme.text_secondary));
                ui.monospace(format!("{} ms", self.config.batch_delay_ms));
            });
        });

        ui.add_space(self.theme.spacing_sm);

        theme.frame_panel().show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Operation Log").strong().color(theme.primary));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.add(theme.button_small("[O] Open Folder")).clicked() {
                        let path = std::path::PathBuf::from(operation_log::log_file_path());
                        if let Some(dir) = path.parent() {
                            if let Err(e) = open::that(dir) {
                                tracing::warn!("Failed to open log folder: {}", e);
                            }
                        }
                    }
                    if ui.add(theme.button_small("[R] Refresh")).clicked() {
                        self.refresh_logs();
                    }
                });
            });
            ui.add_space(theme.spacing_xs);

            egui::ScrollArea::vertical()
                .max_height(360.0)
                .auto_shrink([false, false])
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    ui.monospace(
                        RichText::new(&self.log_view.content)
                            .size(12.0)
                            .color(theme.text_secondary),
                    );
                });
        });
    }
}
