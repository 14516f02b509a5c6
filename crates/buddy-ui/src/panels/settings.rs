//! Settings panel: Gemini credential, models and generation knobs.
//! Edits live in memory only; nothing is persisted across reloads.

use egui::{self, RichText, Vec2};
use buddy_types::config::{AiConfig, SprintConfig};
use crate::theme::*;

const CHAT_MODELS: &[&str] = &["gemini-3-flash-preview", "gemini-2.5-flash", "gemini-2.5-pro"];
const IMAGE_MODELS: &[&str] = &["gemini-2.5-flash-image", "gemini-3-pro-image-preview"];

/// What the caller should do after rendering the settings panel
#[derive(Debug, PartialEq, Eq)]
pub enum SettingsAction {
    /// Nothing changed
    None,
    /// A field was changed
    Changed,
    /// The user clicked Apply
    ApplyClicked,
}

/// Apply feedback passed in from the app layer
#[derive(Clone)]
pub struct ApplyFeedback {
    pub message: String,
    pub success: bool,
}

/// Render the settings panel. Returns an action for the caller to handle.
pub fn settings_panel(
    ui: &mut egui::Ui,
    config: &mut AiConfig,
    sprint: &SprintConfig,
    feedback: Option<&ApplyFeedback>,
) -> SettingsAction {
    let mut changed = false;
    let mut apply_clicked = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
            ui.separator();

            // ── Gemini Section ───────────────────────────────
            ui.label(RichText::new("Gemini").color(ACCENT).strong());
            ui.add_space(2.0);

            // API Key (masked)
            ui.label(RichText::new("API Key").color(TEXT_SECONDARY).small());
            let api_key_edit = egui::TextEdit::singleline(&mut config.api_key)
                .password(true)
                .hint_text("AIza...");
            if ui.add(api_key_edit).changed() {
                changed = true;
            }
            let (status, color) = if config.has_credential() {
                ("Key present", SUCCESS)
            } else {
                ("No key: buddy replies with canned lines", WARNING)
            };
            ui.label(RichText::new(status).color(color).small());

            ui.add_space(4.0);

            ui.label(RichText::new("Chat Model").color(TEXT_SECONDARY).small());
            changed |= model_combo(ui, "chat_model", &mut config.chat_model, CHAT_MODELS);

            ui.add_space(4.0);

            ui.label(RichText::new("Reward Image Model").color(TEXT_SECONDARY).small());
            changed |= model_combo(ui, "image_model", &mut config.image_model, IMAGE_MODELS);

            ui.add_space(4.0);

            // Custom base URL
            ui.label(RichText::new("API Base URL (optional)").color(TEXT_SECONDARY).small());
            let mut base_url = config.api_base.clone().unwrap_or_default();
            if ui
                .add(
                    egui::TextEdit::singleline(&mut base_url)
                        .hint_text(AiConfig::default().base_url().to_string()),
                )
                .changed()
            {
                config.api_base = if base_url.trim().is_empty() {
                    None
                } else {
                    Some(base_url)
                };
                changed = true;
            }

            ui.add_space(4.0);

            // Temperature
            ui.label(RichText::new("Temperature").color(TEXT_SECONDARY).small());
            if ui
                .add(egui::Slider::new(&mut config.temperature, 0.0..=2.0))
                .changed()
            {
                changed = true;
            }

            // Max tokens
            ui.label(RichText::new("Max Reply Tokens").color(TEXT_SECONDARY).small());
            if ui
                .add(egui::Slider::new(&mut config.max_output_tokens, 32..=1024))
                .changed()
            {
                changed = true;
            }

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);

            // ── Sprint Section (read-only) ───────────────────
            ui.label(RichText::new("Sprint").color(ACCENT).strong());
            ui.label(
                RichText::new(format!(
                    "{} min sprints · buddy remembers the last {} messages",
                    sprint.duration_minutes(),
                    sprint.history_window
                ))
                .color(TEXT_SECONDARY)
                .small()
                .italics(),
            );

            // ── Apply Button ─────────────────────────────────
            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn = ui.add(
                    egui::Button::new(RichText::new("Apply").color(TEXT_PRIMARY).strong())
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(120.0, 28.0)),
                );
                if btn.clicked() {
                    apply_clicked = true;
                }

                if let Some(fb) = feedback {
                    let color = if fb.success { SUCCESS } else { ERROR };
                    ui.label(RichText::new(&fb.message).color(color).small());
                }
            });
        });

    if apply_clicked {
        SettingsAction::ApplyClicked
    } else if changed {
        SettingsAction::Changed
    } else {
        SettingsAction::None
    }
}

fn model_combo(ui: &mut egui::Ui, id: &str, model: &mut String, options: &[&str]) -> bool {
    let mut changed = false;
    egui::ComboBox::from_id_salt(id)
        .selected_text(model.as_str())
        .show_ui(ui, |ui| {
            for option in options {
                if ui
                    .selectable_label(model.as_str() == *option, *option)
                    .clicked()
                {
                    *model = option.to_string();
                    changed = true;
                }
            }
        });
    changed
}
