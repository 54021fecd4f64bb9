//! Main GUI application module
//!
//! Contains the GuiApp struct and all its implementations.

use crate::{
    batch::{self, BatchOptions, RunEvent},
    client::{ClientConfig, WalletApiClient},
    config::Config,
    gui::widgets::ResultsTable,
    operation_log,
    tracker::ResultTracker,
    types::{HandleEntry, HandleType, Progress, ResultStatus, RunStatus, WalletResult},
};
use anyhow::{anyhow, Result};
use eframe::{egui, egui::RichText, App, Frame, NativeOptions};
use std::collections::VecDeque;
use std::sync::mpsc;
use std::thread;
use tokio::runtime::Builder;

use super::async_job::AsyncJob;
use super::notifications::NotificationEntry;
use super::theme::{configure_style, AppTheme};

/// GUI section enum for navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuiSection {
    Generator,
    Dashboard,
    Settings,
}

/// State for the bulk generator view
pub(crate) struct GeneratorState {
    /// Staged input rows, removable until a run starts
    pub(crate) entries: Vec<HandleEntry>,
    pub(crate) manual_handle: String,
    pub(crate) manual_kind: HandleType,
    /// Blocking input-validation message (empty CSV, no valid rows, ...)
    pub(crate) input_error: Option<String>,
    /// Name of the loaded CSV file, for display
    pub(crate) loaded_file: Option<String>,
    pub(crate) tracker: ResultTracker,
    pub(crate) run_status: RunStatus,
    pub(crate) progress: Progress,
    /// Whether the current processing pass is a retry of failed items
    pub(crate) retrying: bool,
    pub(crate) status: Option<String>,
    pub(crate) job: Option<AsyncJob<()>>,
    pub(crate) event_receiver: Option<tokio::sync::mpsc::UnboundedReceiver<RunEvent>>,
    pub(crate) table: ResultsTable,
    pub(crate) operation_logged: bool,
}

impl Default for GeneratorState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            manual_handle: String::new(),
            manual_kind: HandleType::Twitter,
            input_error: None,
            loaded_file: None,
            tracker: ResultTracker::new(),
            run_status: RunStatus::Idle,
            progress: Progress::default(),
            retrying: false,
            status: None,
            job: None,
            event_receiver: None,
            table: ResultsTable::new(),
            operation_logged: false,
        }
    }
}

impl GeneratorState {
    pub(crate) fn is_processing(&self) -> bool {
        self.run_status == RunStatus::Processing
    }

    /// Back to the idle input state, discarding entries and results
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}

/// State for the dashboard's operation log viewer
pub(crate) struct LogViewState {
    pub(crate) content: String,
}

impl Default for LogViewState {
    fn default() -> Self {
        Self {
            content: "No logs yet. Run a bulk generation to create entries.".to_string(),
        }
    }
}

/// Editable settings form values (session-only, nothing is persisted)
pub(crate) struct SettingsFormState {
    pub(crate) endpoint: String,
    pub(crate) batch_size: usize,
    pub(crate) batch_delay_ms: u64,
    pub(crate) request_timeout_secs: u64,
    pub(crate) export_directory: String,
    pub(crate) status: Option<String>,
}

impl SettingsFormState {
    fn from_config(config: &Config) -> Self {
        Self {
            endpoint: config.endpoint_url.clone(),
            batch_size: config.batch_size,
            batch_delay_ms: config.batch_delay_ms,
            request_timeout_secs: config.request_timeout_secs,
            export_directory: config.export_directory.clone(),
            status: None,
        }
    }
}

pub struct GuiApp {
    pub(crate) config: Config,
    pub(crate) theme: AppTheme,
    pub(crate) section: GuiSection,
    pub(crate) notifications: VecDeque<NotificationEntry>,
    pub(crate) show_notifications_popup: bool,
    pub(crate) notification_toast_visible: bool,
    pub(crate) notification_toast_close_time: Option<std::time::Instant>,
    pub(crate) last_notification_count: usize,
    pub(crate) generator: GeneratorState,
    pub(crate) log_view: LogViewState,
    pub(crate) settings: SettingsFormState,
}

impl GuiApp {
    fn new(config: Config, ctx: &egui::Context) -> Self {
        let theme = AppTheme::default();
        configure_style(ctx, &theme);

        let settings = SettingsFormState::from_config(&config);

        Self {
            config,
            theme,
            section: GuiSection::Generator,
            notifications: VecDeque::with_capacity(20),
            show_notifications_popup: false,
            notification_toast_visible: false,
            notification_toast_close_time: None,
            last_notification_count: 0,
            generator: GeneratorState::default(),
            log_view: LogViewState::default(),
            settings,
        }
    }

    pub(crate) fn spawn_job<T, FutBuilder, Fut>(&self, builder: FutBuilder) -> AsyncJob<T>
    where
        T: Send + 'static,
        FutBuilder: FnOnce() -> Fut + Send + 'static,
        Fut: std::future::Future<Output = Result<T>> + 'static,
    {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let result = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime.block_on(builder()),
                Err(e) => Err(anyhow!("Failed to create async runtime: {}", e)),
            };
            let _ = tx.send(result);
        });
        AsyncJob::new(rx)
    }

    /// Kick off a dispatch over the given work list (initial run or retry).
    fn spawn_generation(&mut self, work: Vec<WalletResult>, retrying: bool) {
        let (event_tx, event_rx) = tokio::sync::mpsc::unbounded_channel();
        let endpoint = self.config.endpoint_url.clone();
        let client_config = ClientConfig {
            timeout: self.config.request_timeout(),
            connect_timeout: std::time::Duration::from_secs(10),
        };
        let options = BatchOptions::from(&self.config);

        self.generator.progress = Progress {
            current: 0,
            total: work.len(),
        };
        self.generator.run_status = RunStatus::Processing;
        self.generator.retrying = retrying;
        self.generator.operation_logged = false;
        self.generator.status = None;
        self.generator.event_receiver = Some(event_rx);
        self.generator.table.reset_page();

        self.generator.job = Some(self.spawn_job(move || async move {
            let client = WalletApiClient::with_config(&endpoint, client_config)
                .map_err(|e| anyhow!("Failed to create API client: {}", e))?;
            batch::process_batches(&client, options, work, Some(&event_tx)).await;
            Ok(())
        }));
    }

    /// Submit the staged entries as a new run.
    pub(crate) fn start_run(&mut self) {
        if self.generator.entries.is_empty() {
            self.generator.input_error =
                Some("No valid entries found in the CSV file".to_string());
            return;
        }
        self.generator.input_error = None;
        let work = self.generator.tracker.begin_run(&self.generator.entries);
        self.spawn_generation(work, false);
    }

    /// Re-dispatch only the currently failed items.
    pub(crate) fn start_retry(&mut self) {
        let work = self.generator.tracker.mark_failed_pending();
        if work.is_empty() {
            return;
        }
        self.spawn_generation(work, true);
    }

    fn poll_jobs(&mut self) {
        // Drain run events streamed from the dispatcher
        let mut run_completed = false;
        if let Some(receiver) = &mut self.generator.event_receiver {
            while let Ok(event) = receiver.try_recv() {
                match event {
                    RunEvent::BatchCompleted { results, progress } => {
                        self.generator.tracker.record_batch(&results);
                        self.generator.progress = progress;
                    }
                    RunEvent::Completed => {
                        run_completed = true;
                        break;
                    }
                }
            }
        }

        if run_completed {
            self.generator.event_receiver = None;
            self.generator.job = None;
            self.generator.run_status = RunStatus::Complete;
            self.finish_run();
        }

        // Worker errors (client construction, runtime failure) surface here
        if let Some(job) = &mut self.generator.job {
            if let Some(res) = job.poll() {
                if let Err(e) = res {
                    self.generator.status = Some(format!("[!!] Failed: {}", e));
                    self.generator.run_status = RunStatus::Complete;
                    self.fail_remaining_pending(&e.to_string());
                    self.notifications
                        .push_back(NotificationEntry::new(format!("Bulk run failed: {}", e)));
                }
                self.generator.job = None;
                self.generator.event_receiver = None;
            }
        }
    }

    /// Items still pending when the worker dies are failures, not limbo.
    fn fail_remaining_pending(&mut self, message: &str) {
        let stuck: Vec<WalletResult> = self
            .generator
            .tracker
            .results()
            .iter()
            .filter(|r| r.status == ResultStatus::Pending)
            .map(|r| r.clone().failed(message))
            .collect();
        if !stuck.is_empty() {
            self.generator.tracker.record_batch(&stuck);
        }
    }

    /// Log and announce a completed run.
    fn finish_run(&mut self) {
        let summary = self.generator.tracker.summary();
        let operation = if self.generator.retrying {
            "Retry Failed Creations"
        } else {
            "Bulk Wallet Generation"
        };

        self.generator.status = Some(format!("[OK] {}", summary.summary()));
        self.notifications.push_back(NotificationEntry::new(format!(
            "{} complete. {}",
            operation,
            summary.summary()
        )));

        if !self.generator.operation_logged {
            self.generator.operation_logged = true;
            let failed_lines = self
                .generator
                .tracker
                .results()
                .iter()
                .filter(|r| r.status == ResultStatus::Failed)
                .map(|r| {
                    format!(
                        "{} ({}): {}",
                        r.handle,
                        r.kind,
                        r.error_message.as_deref().unwrap_or("unknown error")
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");

            let details = if failed_lines.is_empty() {
                summary.summary()
            } else {
                format!("{}\nFailures:\n{}", summary.summary(), failed_lines)
            };

            if let Err(e) =
                operation_log::append_log(operation, &self.config.endpoint_url, details)
            {
                tracing::warn!("Failed to append operation log: {}", e);
            }
        }
    }

    pub(crate) fn refresh_logs(&mut self) {
        self.log_view.content = match operation_log::read_log() {
            Ok(content) if content.trim().is_empty() => {
                "No logs yet. Run a bulk generation to create entries.".to_string()
            }
            Ok(content) => content,
            Err(e) => format!("Failed to read log: {}", e),
        };
    }

    pub(crate) fn render_section_header(&self, ui: &mut egui::Ui, icon: &str, title: &str) {
        ui.heading(
            RichText::new(self.theme.section_header_text(icon, title))
                .color(self.theme.primary),
        );
        ui.label(RichText::new("-".repeat(48)).size(10.0).color(self.theme.primary));
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.poll_jobs();

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.add_space(10.0);
            ui.horizontal_wrapped(|ui| {
                ui.heading(
                    RichText::new("[=] WALGEN")
                        .size(24.0)
                        .color(self.theme.primary),
                );
                ui.label(
                    RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                        .size(12.0)
                        .color(self.theme.text_primary),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    // Current endpoint, so a wrong target is visible at a glance
                    egui::Frame::none()
                        .fill(self.theme.surface)
                        .rounding(4.0)
                        .inner_margin(egui::Margin::symmetric(8.0, 4.0))
                        .show(ui, |ui| {
                            ui.monospace(
                                RichText::new(&self.config.endpoint_url)
                                    .color(self.theme.text_secondary)
                                    .size(12.0),
                            );
                        });
                });
            });
            ui.add_space(6.0);
        });

        // Check for new notifications and trigger toast
        let current_notification_count = self.notifications.len();
        if current_notification_count > self.last_notification_count {
            self.notification_toast_visible = true;
            self.notification_toast_close_time =
                Some(std::time::Instant::now() + std::time::Duration::from_secs(5));
        }
        self.last_notification_count = current_notification_count;

        // Auto-close toast after timeout
        if let Some(close_time) = self.notification_toast_close_time {
            if std::time::Instant::now() >= close_time {
                self.notification_toast_visible = false;
                self.notification_toast_close_time = None;
            }
        }

        // Notification toast/icon overlay - bottom right corner
        let notification_count = self.notifications.len();
        let has_notifications = notification_count > 0;
        let latest_notification = self.notifications.back().map(|n| n.message.clone());

        egui::Area::new(egui::Id::new("notification_overlay"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -10.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(self.theme.surface_hover)
                    .rounding(6.0)
                    .stroke(egui::Stroke::new(1.0, self.theme.primary))
                    .inner_margin(egui::Margin::symmetric(8.0, 6.0))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            let icon_color = if has_notifications {
                                self.theme.success
                            } else {
                                self.theme.text_secondary
                            };

                            if ui
                                .add(
                                    egui::Button::new(
                                        RichText::new("[!]").size(14.0).color(icon_color).strong(),
                                    )
                                    .fill(egui::Color32::TRANSPARENT)
                                    .stroke(egui::Stroke::NONE),
                                )
                                .on_hover_text("Click to view notification history")
                                .clicked()
                            {
                                self.show_notifications_popup = !self.show_notifications_popup;
                            }

                            if self.notification_toast_visible {
                                if let Some(ref msg) = latest_notification {
                                    ui.add_space(4.0);
                                    let display_text = if msg.chars().count() > 40 {
                                        format!("{}...", msg.chars().take(40).collect::<String>())
                                    } else {
                                        msg.clone()
                                    };
                                    ui.label(
                                        RichText::new(&display_text)
                                            .size(12.0)
                                            .color(self.theme.text_primary),
                                    );
                                }
                            } else if has_notifications {
                                ui.add_space(2.0);
                                ui.label(
                                    RichText::new(format!("{}", notification_count))
                                        .size(10.0)
                                        .color(self.theme.accent_amber),
                                );
                            }
                        });
                    });
            });

        // Notification history popup window
        if self.show_notifications_popup {
            egui::Window::new("[#] Notification History")
                .collapsible(false)
                .resizable(true)
                .default_width(450.0)
                .default_height(350.0)
                .anchor(egui::Align2::RIGHT_BOTTOM, [-10.0, -50.0])
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("{} notifications", self.notifications.len()))
                                .color(self.theme.text_secondary),
                        );
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui
                                .add(
                                    egui::Button::new(
                                        RichText::new("[X] Close").color(self.theme.text_primary),
                                    )
                                    .fill(self.theme.secondary),
                                )
                                .clicked()
                            {
                                self.show_notifications_popup = false;
                            }
                            if ui
                                .add(
                                    egui::Button::new(
                                        RichText::new("[C] Clear").color(self.theme.text_primary),
                                    )
                                    .fill(self.theme.secondary),
                                )
                                .clicked()
                            {
                                self.notifications.clear();
                            }
                        });
                    });
                    ui.add_space(self.theme.spacing_xs);
                    ui.label(RichText::new("-".repeat(50)).size(10.0).color(self.theme.primary));
                    ui.add_space(self.theme.spacing_xs);

                    egui::ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .max_height(280.0)
                        .show(ui, |ui| {
                            if self.notifications.is_empty() {
                                ui.label(
                                    RichText::new("No notifications yet.")
                                        .color(self.theme.text_secondary),
                                );
                            } else {
                                for notification in self.notifications.iter().rev() {
                                    ui.horizontal(|ui| {
                                        ui.label(
                                            RichText::new(format!("[{}]", notification.time_ago()))
                                                .size(11.0)
                                                .color(self.theme.text_secondary),
                                        );
                                        ui.label(
                                            RichText::new(&notification.message)
                                                .size(12.0)
                                                .color(self.theme.text_primary),
                                        );
                                    });
                                    ui.add_space(3.0);
                                }
                            }
                        });
                });
        }

        egui::SidePanel::left("nav")
            .resizable(false)
            .default_width(180.0)
            .frame(
                egui::Frame::none()
                    .fill(self.theme.surface)
                    .stroke(egui::Stroke::new(1.0, self.theme.primary)),
            )
            .show(ctx, |ui| {
                ui.add_space(self.theme.spacing_md);

                ui.horizontal(|ui| {
                    ui.add_space(self.theme.spacing_xs);
                    ui.label(RichText::new("-".repeat(22)).size(10.0).color(self.theme.primary));
                });
                ui.add_space(self.theme.spacing_sm);

                let nav_items = [
                    (GuiSection::Generator, "[G] Bulk Generator"),
                    (GuiSection::Dashboard, "[H] Dashboard"),
                    (GuiSection::Settings, "[*] Settings"),
                ];

                for (section, label) in nav_items {
                    let selected = self.section == section;

                    ui.horizontal(|ui| {
                        if selected {
                            ui.add_space(2.0);
                            let (rect, _) = ui
                                .allocate_exact_size(egui::vec2(3.0, 20.0), egui::Sense::hover());
                            ui.painter().rect_filled(rect, 0.0, self.theme.primary);
                            ui.add_space(4.0);
                        } else {
                            ui.add_space(9.0);
                        }

                        let text_color = if selected {
                            self.theme.text_primary
                        } else {
                            self.theme.text_secondary
                        };
                        let response = ui.add(
                            egui::Button::new(RichText::new(label).size(13.0).color(text_color))
                                .fill(egui::Color32::TRANSPARENT)
                                .stroke(egui::Stroke::NONE)
                                .sense(egui::Sense::click()),
                        );

                        if response.clicked() {
                            self.section = section;
                            // Auto-refresh logs when entering Dashboard
                            if section == GuiSection::Dashboard {
                                self.refresh_logs();
                            }
                        }
                    });
                    ui.add_space(self.theme.spacing_xs);
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(self.theme.spacing_md);
            egui::ScrollArea::vertical().show(ui, |ui| {
                match self.section {
                    GuiSection::Generator => self.view_generator(ui),
                    GuiSection::Dashboard => self.view_dashboard(ui),
                    GuiSection::Settings => self.view_settings(ui),
                }
            });
        });

        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

pub fn launch(config: Config) -> Result<()> {
    let app_creator = move |cc: &eframe::CreationContext<'_>| {
        Box::new(GuiApp::new(config.clone(), &cc.egui_ctx)) as Box<dyn App>
    };

    let viewport = egui::ViewportBuilder::default().with_inner_size([1100.0, 720.0]);

    let native_options = NativeOptions {
        viewport,
        // Window state persistence (size, position) - run results are never persisted
        persist_window: true,
        ..Default::default()
    };

    eframe::run_native(
        "Walgen - Bulk Wallet Pre-Generation Utility",
        native_options,
        Box::new(app_creator),
    )
    .map_err(|e| anyhow!("Failed to start GUI: {}", e))
}
