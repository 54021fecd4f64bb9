//! Results table widget for the GUI
//! Displays per-handle wallet results with summary counts and pagination.

use crate::gui::helpers::{page_count, status_color, status_icon, truncate_middle};
use crate::gui::theme::AppTheme;
use crate::tracker::RunSummary;
use crate::types::WalletResult;
use eframe::egui::{self, RichText};

/// Rows shown per page
pub const PAGE_SIZE: usize = 25;

/// Paginated view over a tracked result set. The widget only holds the
/// current page; the results themselves live in the tracker.
#[derive(Default)]
pub struct ResultsTable {
    page: usize,
}

impl ResultsTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Jump back to the first page (after a new run or a retry)
    pub fn reset_page(&mut self) {
        self.page = 0;
    }

    /// Render the summary line and the current page of results
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        theme: &AppTheme,
        results: &[WalletResult],
        summary: &RunSummary,
    ) {
        // Summary counts
        ui.horizontal(|ui| {
            if summary.pending > 0 {
                ui.colored_label(
                    theme.text_secondary,
                    format!("[..] {} pending", summary.pending),
                );
            }
            if summary.success > 0 {
                ui.colored_label(theme.success, format!("[OK] {} success", summary.success));
            }
            if summary.failed > 0 {
                ui.colored_label(theme.error, format!("[!!] {} failed", summary.failed));
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(format!("{} total", summary.total))
                        .color(theme.text_secondary),
                );
            });
        });

        ui.add_space(theme.spacing_xs);

        let pages = page_count(results.len(), PAGE_SIZE);
        if self.page >= pages {
            self.page = pages - 1;
        }
        let start = self.page * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(results.len());

        egui::Grid::new("results_grid")
            .num_columns(5)
            .striped(true)
            .min_col_width(60.0)
            .show(ui, |ui| {
                ui.label(RichText::new("Handle").strong());
                ui.label(RichText::new("Type").strong());
                ui.label(RichText::new("Wallet Address").strong());
                ui.label(RichText::new("Status").strong());
                ui.label(RichText::new("Error").strong());
                ui.end_row();

                for result in &results[start..end] {
                    ui.label(truncate_middle(&result.handle, 24));
                    ui.label(result.kind.as_str());
                    if result.wallet_address.is_empty() {
                        ui.label(RichText::new("-").color(theme.text_secondary));
                    } else {
                        ui.monospace(truncate_middle(&result.wallet_address, 20))
                            .on_hover_text(&result.wallet_address);
                    }
                    ui.colored_label(
                        status_color(result.status, theme),
                        format!("{} {}", status_icon(result.status), result.status),
                    );
                    match &result.error_message {
                        Some(message) => {
                            ui.colored_label(theme.error, truncate_middle(message, 40))
                                .on_hover_text(message);
                        }
                        None => {
                            ui.label("");
                        }
                    }
                    ui.end_row();
                }
            });

        // Pagination controls, only when needed
        if pages > 1 {
            ui.add_space(theme.spacing_xs);
            ui.horizontal(|ui| {
                if ui
                    .add_enabled(self.page > 0, egui::Button::new("< Prev"))
                    .clicked()
                {
                    self.page -= 1;
                }
                ui.label(
                    RichText::new(format!("Page {} / {}", self.page + 1, pages))
                        .color(theme.text_secondary),
                );
                if ui
                    .add_enabled(self.page + 1 < pages, egui::Button::new("Next >"))
                    .clicked()
                {
                    self.page += 1;
                }
            });
        }
    }
}
