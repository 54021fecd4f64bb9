//! Bulk generator view: handle input, batch run, retry and export.

use crate::export;
use crate::gui::app::GuiApp;
use crate::gui::notifications::NotificationEntry;
use crate::parser;
use crate::types::{HandleType, RunStatus};
use eframe::egui::{self, RichText};
use std::fs;

impl GuiApp {
    pub(crate) fn view_generator(&mut self, ui: &mut egui::Ui) {
        self.render_section_header(ui, "[G]", "BULK WALLET GENERATOR");
        ui.add_space(self.theme.spacing_sm);

        let has_results = !self.generator.tracker.results().is_empty();
        if !has_results && self.generator.run_status == RunStatus::Idle {
            self.render_input_panel(ui);
        } else {
            self.render_run_panel(ui);
        }
    }

    fn render_input_panel(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;

        theme.frame_panel().show(ui, |ui| {
            ui.label(
                RichText::new("Import handles from a CSV file or add them one by one.")
                    .color(theme.text_secondary),
            );
            ui.add_space(theme.spacing_sm);

            ui.horizontal(|ui| {
                if ui.add(theme.button_primary("[^] Load CSV File")).clicked() {
                    self.load_csv_file();
                }
                if ui
                    .add(theme.button_secondary("[v] Download Template"))
                    .on_hover_text("Save a sample CSV showing the expected layout")
                    .clicked()
                {
                    self.save_template();
                }
                if let Some(ref name) = self.generator.loaded_file {
                    ui.label(
                        RichText::new(format!("Loaded: {}", name)).color(theme.accent_cyan),
                    );
                }
            });

            ui.add_space(theme.spacing_md);
            ui.label(RichText::new("Manual entry").strong().color(theme.primary));
            ui.add_space(theme.spacing_xs);

            let mut add_clicked = false;
            ui.horizontal(|ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.generator.manual_handle)
                        .hint_text("@username")
                        .desired_width(220.0),
                );
                egui::ComboBox::from_id_source("manual_handle_kind")
                    .selected_text(self.generator.manual_kind.as_str())
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.generator.manual_kind,
                            HandleType::Twitter,
                            "TWITTER",
                        );
                        ui.selectable_value(
                            &mut self.generator.manual_kind,
                            HandleType::Telegram,
                            "TELEGRAM",
                        );
                    });
                if ui.add(theme.button_small("[+] Add")).clicked() {
                    add_clicked = true;
                }
            });
            if add_clicked {
                self.add_manual_entry();
            }

            if let Some(ref error) = self.generator.input_error {
                ui.add_space(theme.spacing_xs);
                ui.colored_label(theme.error, format!("[!!] {}", error));
            }
        });

        ui.add_space(self.theme.spacing_sm);

        if !self.generator.entries.is_empty() {
            theme.frame_panel().show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!(
                            "{} handle(s) staged",
                            self.generator.entries.len()
                        ))
                        .strong()
                        .color(theme.primary),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.add(theme.button_small("[C] Clear All")).clicked() {
                            self.generator.entries.clear();
                            self.generator.loaded_file = None;
                        }
                    });
                });
                ui.add_space(theme.spacing_xs);

                let mut remove_index = None;
                egui::ScrollArea::vertical()
                    .max_height(220.0)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        egui::Grid::new("staged_entries")
                            .num_columns(3)
                            .striped(true)
                            .min_col_width(80.0)
                            .show(ui, |ui| {
                                for (index, entry) in self.generator.entries.iter().enumerate() {
                                    ui.label(&entry.handle);
                                    ui.label(entry.kind.as_str());
                                    if ui.small_button("[x]").clicked() {
                                        remove_index = Some(index);
                                    }
                                    ui.end_row();
                                }
                            });
                    });
                if let Some(index) = remove_index {
                    self.generator.entries.remove(index);
                }

                ui.add_space(theme.spacing_sm);
                let label = format!("[>>] Generate {} Wallets", self.generator.entries.len());
                if ui.add(theme.button_success(&label)).clicked() {
                    self.start_run();
                }
            });
        }
    }

    fn render_run_panel(&mut self, ui: &mut egui::Ui) {
        let theme = self.theme;
        let summary = self.generator.tracker.summary();
        let processing = self.generator.is_processing();

        theme.frame_panel().show(ui, |ui| {
            if processing {
                let progress = self.generator.progress;
                ui.label(
                    RichText::new(if self.generator.retrying {
                        "Retrying failed creations..."
                    } else {
                        "Generating wallets..."
                    })
                    .strong()
                    .color(theme.primary),
                );
                ui.add_space(theme.spacing_xs);
                ui.add(
                    egui::ProgressBar::new(progress.fraction())
                        .text(format!("{} / {}", progress.current, progress.total))
                        .fill(theme.primary),
                );
            } else if let Some(ref status) = self.generator.status {
                ui.label(RichText::new(status).strong().color(theme.text_primary));
            }

            ui.add_space(theme.spacing_sm);

            ui.horizontal(|ui| {
                if !processing {
                    if summary.failed > 0 {
                        if ui
                            .add(theme.button_warning(&format!(
                                "[R] Retry {} Failed",
                                summary.failed
                            )))
                            .clicked()
                        {
                            self.start_retry();
                        }
                    }
                    if summary.total > 0 {
                        if ui.add(theme.button_primary("[v] Export CSV")).clicked() {
                            self.export_results();
                        }
                    }
                    if ui.add(theme.button_secondary("[N] Start New Batch")).clicked() {
                        self.generator.reset();
                        return;
                    }
                }
            });
        });

        ui.add_space(self.theme.spacing_sm);

        let results = self.generator.tracker.results().to_vec();
        if !results.is_empty() {
            theme.frame_panel().show(ui, |ui| {
                self.generator.table.show(ui, &theme, &results, &summary);
            });
        }
    }

    fn load_csv_file(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .pick_file();
        let Some(path) = picked else {
            return;
        };

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                self.generator.input_error = Some(format!("Could not read file: {}", e));
                return;
            }
        };

        match parser::parse_handle_csv(&content) {
            Ok(entries) => {
                self.generator.input_error = None;
                self.generator.loaded_file = path
                    .file_name()
                    .map(|name| name.to_string_lossy().to_string());
                self.generator.entries = entries;
            }
            Err(e) => {
                self.generator.input_error = Some(e.to_string());
            }
        }
    }

    fn add_manual_entry(&mut self) {
        match parser::manual_entry(&self.generator.manual_handle, self.generator.manual_kind) {
            Ok(entry) => {
                self.generator.input_error = None;
                self.generator.manual_handle.clear();
                self.generator.entries.push(entry);
            }
            Err(e) => {
                self.generator.input_error = Some(e.to_string());
            }
        }
    }

    fn save_template(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_file_name("handles-template.csv")
            .add_filter("CSV files", &["csv"])
            .save_file();
        let Some(path) = picked else {
            return;
        };

        match export::write_template(&path) {
            Ok(()) => {
                self.notifications.push_back(NotificationEntry::new(format!(
                    "Template saved to {}",
                    path.display()
                )));
            }
            Err(e) => {
                self.generator.input_error = Some(format!("Could not save template: {}", e));
            }
        }
    }

    fn export_results(&mut self) {
        let picked = rfd::FileDialog::new()
            .set_directory(&self.config.export_directory)
            .set_file_name(export::default_export_filename())
            .add_filter("CSV files", &["csv"])
            .save_file();
        let Some(path) = picked else {
            return;
        };

        match export::write_results_csv(&path, self.generator.tracker.results()) {
            Ok(()) => {
                self.notifications.push_back(NotificationEntry::new(format!(
                    "Results exported to {}",
                    path.display()
                )));
            }
            Err(e) => {
                self.generator.status = Some(format!("[!!] Export failed: {}", e));
            }
        }
    }
}
