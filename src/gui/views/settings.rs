//! Settings view. Edits apply to the current session only; restart the
//! app (or set WALGEN_* variables) for durable changes.

use crate::config::Config;
use crate::gui::app::GuiApp;
use crate::gui::notifications::NotificationEntry;
use eframe::egui::{self, RichText};
use url::Url;

impl GuiApp {
    pub(crate) fn view_settings(&mut self, ui: &mut egui::Ui) {
        self.render_section_header(ui, "[*]", "SETTINGS");
        ui.add_space(self.theme.spacing_sm);

        let theme = self.theme;
        let mut apply_clicked = false;
        let mut reload_clicked = false;

        theme.frame_panel().show(ui, |ui| {
            egui::Grid::new("settings_grid")
                .num_columns(2)
                .spacing([theme.spacing_md, theme.spacing_sm])
                .show(ui, |ui| {
                    ui.label(RichText::new("API endpoint").color(theme.text_secondary));
                    ui.add(
                        egui::TextEdit::singleline(&mut self.settings.endpoint)
                            .desired_width(360.0),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Batch size").color(theme.text_secondary))
                        .on_hover_text("Handles dispatched concurrently per batch");
                    ui.add(egui::DragValue::new(&mut self.settings.batch_size).clamp_range(1..=50));
                    ui.end_row();

                    ui.label(RichText::new("Batch delay (ms)").color(theme.text_secondary))
                        .on_hover_text("Pause between batches to avoid hammering the API");
                    ui.add(
                        egui::DragValue::new(&mut self.settings.batch_delay_ms)
                            .clamp_range(0..=60_000)
                            .speed(50),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Request timeout (s)").color(theme.text_secondary));
                    ui.add(
                        egui::DragValue::new(&mut self.settings.request_timeout_secs)
                            .clamp_range(1..=300),
                    );
                    ui.end_row();

                    ui.label(RichText::new("Export directory").color(theme.text_secondary));
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut self.settings.export_directory)
                                .desired_width(280.0),
                        );
                        if ui.small_button("Browse").clicked() {
                            if let Some(dir) = rfd::FileDialog::new().pick_folder() {
                                self.settings.export_directory =
                                    dir.to_string_lossy().to_string();
                            }
                        }
                    });
                    ui.end_row();
                });

            ui.add_space(theme.spacing_sm);

            ui.horizontal(|ui| {
                if ui.add(theme.button_primary("[OK] Apply")).clicked() {
                    apply_clicked = true;
                }
                if ui
                    .add(theme.button_secondary("[R] Reload From Environment"))
                    .clicked()
                {
                    reload_clicked = true;
                }
            });

            if let Some(ref status) = self.settings.status {
                ui.add_space(theme.spacing_xs);
                ui.label(RichText::new(status).color(theme.accent_cyan));
            }
        });

        ui.add_space(self.theme.spacing_sm);
        ui.label(
            RichText::new(
                "Settings apply to this session only. Set WALGEN_ENDPOINT, \
                 WALGEN_BATCH_SIZE, WALGEN_BATCH_DELAY_MS or \
                 WALGEN_REQUEST_TIMEOUT_SECS to change the startup defaults.",
            )
            .size(12.0)
            .color(theme.text_secondary),
        );

        if apply_clicked {
            self.apply_settings();
        }
        if reload_clicked {
            self.reload_settings();
        }
    }

    fn apply_settings(&mut self) {
        if let Err(e) = Url::parse(&self.settings.endpoint) {
            self.settings.status = Some(format!("[!!] Invalid endpoint URL: {}", e));
            return;
        }

        self.config.endpoint_url = self.settings.endpoint.clone();
        self.config.batch_size = self.settings.batch_size.max(1);
        self.config.batch_delay_ms = self.settings.batch_delay_ms;
        self.config.request_timeout_secs = self.settings.request_timeout_secs.max(1);
        self.config.export_directory = self.settings.export_directory.clone();

        self.settings.status = Some("[OK] Settings applied for this session".to_string());
        self.notifications
            .push_back(NotificationEntry::new("Settings updated".to_string()));
    }

    fn reload_settings(&mut self) {
        self.config = Config::from_env();
        self.settings.endpoint = self.config.endpoint_url.clone();
        self.settings.batch_size = self.config.batch_size;
        self.settings.batch_delay_ms = self.config.batch_delay_ms;
        self.settings.request_timeout_secs = self.config.request_timeout_secs;
        self.settings.export_directory = self.config.export_directory.clone();
        self.settings.status = Some("[OK] Reloaded configuration from environment".to_string());
    }
}
