//! Main egui application: owns the session machine and drives its effects.

use std::rc::Rc;

use egui::{self, Align, CentralPanel, Layout, RichText, SidePanel, TopBottomPanel};

use buddy_core::collaborator::Collaborator;
use buddy_core::event_bus::EventBus;
use buddy_core::machine::{Input, SessionMachine};
use buddy_core::ports::GenerativePort;
use buddy_platform::download;
use buddy_platform::host::EffectHost;
use buddy_platform::llm::GeminiProvider;
use buddy_types::config::{AiConfig, BuddyConfig};
use buddy_types::event::{Intent, SessionEvent};
use buddy_types::stage::Stage;
use buddy_ui::panels::settings::{ApplyFeedback, SettingsAction};
use buddy_ui::panels::{chat, landing, matching, settings, timer, workspace};
use buddy_ui::state::UiState;
use buddy_ui::theme;

/// The main application state
pub struct BuddyApp {
    ui_state: UiState,
    config: BuddyConfig,
    /// Settings being edited; applied on demand
    draft_ai: AiConfig,
    apply_feedback: Option<ApplyFeedback>,
    machine: SessionMachine,
    events: EventBus<SessionEvent>,
    inbox: EventBus<Input>,
    host: EffectHost,
}

impl BuddyApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        theme::apply_theme(&cc.egui_ctx);

        let config = BuddyConfig::from_build_env();
        if !config.ai.has_credential() {
            log::warn!("No Gemini API key in the build environment; buddy will use canned replies");
        }

        let events = EventBus::new();
        let inbox = EventBus::new();
        let machine = SessionMachine::new(config.sprint.clone(), events.clone());

        let ctx = cc.egui_ctx.clone();
        let host = EffectHost::new(inbox.clone(), build_collaborator(&config), move || {
            ctx.request_repaint()
        });

        machine.publish();

        Self {
            ui_state: UiState::new(),
            draft_ai: config.ai.clone(),
            config,
            apply_feedback: None,
            machine,
            events,
            inbox,
            host,
        }
    }

    /// Feed one user intent to the machine and run what it asks for
    fn dispatch(&mut self, intent: Intent, ctx: &egui::Context) {
        log::debug!("Intent: {:?}", intent);
        let effects = self.machine.handle(Input::Intent(intent));
        self.host.run(effects);
        ctx.request_repaint();
    }

    /// Drain timer and collaborator results into the machine
    fn pump_inbox(&mut self) {
        while self.inbox.has_pending() {
            for input in self.inbox.drain() {
                let effects = self.machine.handle(input);
                self.host.run(effects);
            }
        }
    }

    fn apply_settings(&mut self) {
        self.config.ai = self.draft_ai.clone();
        self.host.set_collaborator(build_collaborator(&self.config));
        let message = if self.config.ai.has_credential() {
            format!("Using {}", self.config.ai.chat_model)
        } else {
            "Applied without a key".to_string()
        };
        log::info!("AI settings applied: {}", message);
        self.apply_feedback = Some(ApplyFeedback {
            message,
            success: self.config.ai.has_credential(),
        });
    }
}

fn build_collaborator(config: &BuddyConfig) -> Rc<Collaborator> {
    let port: Rc<dyn GenerativePort> = Rc::new(GeminiProvider::new(config.ai.clone()));
    Rc::new(Collaborator::new(port, config.ai.clone(), config.sprint.history_window))
}

impl eframe::App for BuddyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pump_inbox();

        // Drain snapshots from the machine
        let events = self.events.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
        }

        let mut intents: Vec<Intent> = Vec::new();

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Study Sprint")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                ui.label(
                    RichText::new(&self.ui_state.status_text)
                        .color(theme::TEXT_SECONDARY)
                        .small(),
                );
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui
                        .selectable_label(self.ui_state.show_settings, "Settings")
                        .clicked()
                    {
                        self.ui_state.show_settings = !self.ui_state.show_settings;
                    }
                    let snapshot = &self.ui_state.snapshot;
                    if snapshot.stage == Stage::Sprinting {
                        timer::compact_clock(ui, snapshot.time_remaining, snapshot.sprint_duration);
                    }
                });
            });
        });

        // ── Settings side panel ──────────────────────────────
        if self.ui_state.show_settings {
            SidePanel::right("settings_panel")
                .min_width(280.0)
                .max_width(350.0)
                .show(ctx, |ui| {
                    match settings::settings_panel(
                        ui,
                        &mut self.draft_ai,
                        self.machine.config(),
                        self.apply_feedback.as_ref(),
                    ) {
                        SettingsAction::ApplyClicked => self.apply_settings(),
                        SettingsAction::Changed => self.apply_feedback = None,
                        SettingsAction::None => {}
                    }
                });
        }

        // ── Main content ─────────────────────────────────────
        let stage = self.ui_state.stage();
        if stage.has_chat() {
            SidePanel::right("chat_panel")
                .resizable(false)
                .exact_width(theme::CHAT_WIDTH)
                .show(ctx, |ui| {
                    intents.extend(chat::chat_panel(ui, &mut self.ui_state));
                });
            CentralPanel::default().show(ctx, |ui| {
                intents.extend(workspace::workspace_panel(ui, &mut self.ui_state));
            });
            intents.extend(workspace::abandon_dialog(ctx, &mut self.ui_state));
        } else if stage == Stage::Matching {
            CentralPanel::default().show(ctx, |ui| {
                matching::matching_panel(ui);
            });
        } else {
            CentralPanel::default().show(ctx, |ui| {
                intents.extend(landing::landing_panel(ui));
            });
        }

        if let Some(sticker) = self.ui_state.take_download() {
            if let Err(e) = download::save_bytes(&sticker.bytes, &sticker.mime, download::STICKER_FILENAME) {
                log::warn!("Sticker download failed: {}", e);
            }
        }

        for intent in intents {
            self.dispatch(intent, ctx);
        }
    }
}
