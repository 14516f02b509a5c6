//! Workspace column for the PLANNING, SPRINTING and COMPLETED stages,
//! plus the abandon confirmation window.

use egui::{self, Align, Align2, Layout, RichText, Vec2};
use buddy_types::event::Intent;
use buddy_types::stage::Stage;
use crate::panels::timer::timer_face;
use crate::state::UiState;
use crate::theme::*;

/// Render the card for the current stage. Returns the intent the user picked.
pub fn workspace_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<Intent> {
    let mut intent = None;

    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.add_space((ui.available_height() * 0.1).min(80.0));
        intent = match state.stage() {
            Stage::Planning => planning_card(ui, state),
            Stage::Sprinting => sprint_view(ui, state),
            Stage::Completed => completed_card(ui, state),
            Stage::Landing | Stage::Matching => None,
        };
    });

    intent
}

fn planning_card(ui: &mut egui::Ui, state: &mut UiState) -> Option<Intent> {
    let mut intent = None;

    card_frame().show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.horizontal(|ui| {
            ui.with_layout(Layout::right_to_left(Align::Min), |ui| {
                if ui.small_button("✕").on_hover_text("Start over").clicked() {
                    intent = Some(Intent::Reset);
                }
            });
        });
        ui.vertical_centered(|ui| {
            ui.heading(RichText::new("Goal Setting").strong().color(TEXT_PRIMARY));
            ui.label(RichText::new("What's the one thing you want to achieve?").color(TEXT_SECONDARY));
            ui.add_space(16.0);

            if state.snapshot.task.is_empty() {
                let can_send = state.snapshot.can_send();
                let response = ui.add_enabled(
                    can_send,
                    egui::TextEdit::singleline(&mut state.goal_text)
                        .hint_text("e.g. Write 500 words of essay...")
                        .horizontal_align(Align::Center)
                        .font(egui::FontId::proportional(18.0))
                        .desired_width(f32::INFINITY),
                );
                let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                let set = ui.add_enabled(
                    can_send && !state.goal_text.trim().is_empty(),
                    egui::Button::new(RichText::new("Set Goal").color(TEXT_PRIMARY))
                        .corner_radius(PANEL_ROUNDING),
                );
                if enter || set.clicked() {
                    if let Some(text) = state.take_goal() {
                        intent = Some(Intent::SendChat { text });
                    }
                }
            } else {
                current_focus(ui, &state.snapshot.task);
            }

            ui.add_space(12.0);
            let start = ui.add(
                egui::Button::new(
                    RichText::new(format!("Start {} min Sprint", state.snapshot.sprint_minutes()))
                        .strong()
                        .size(18.0)
                        .color(TEXT_PRIMARY),
                )
                .fill(ACCENT)
                .corner_radius(CARD_ROUNDING)
                .min_size(Vec2::new(ui.available_width(), 48.0)),
            );
            if start.clicked() {
                intent = Some(Intent::StartSprint);
            }
        });
    });

    intent
}

fn sprint_view(ui: &mut egui::Ui, state: &mut UiState) -> Option<Intent> {
    let snapshot = &state.snapshot;
    timer_face(ui, snapshot.time_remaining, snapshot.sprint_duration, snapshot.timer_running);
    ui.add_space(24.0);
    current_focus(ui, &snapshot.task);
    ui.add_space(24.0);

    let abandon = ui.add(
        egui::Button::new(RichText::new("ABANDON SPRINT").small().strong().color(TEXT_SECONDARY))
            .frame(false),
    );
    if abandon.on_hover_text("Give up and start over").clicked() {
        state.confirm_abandon = true;
    }
    None
}

fn completed_card(ui: &mut egui::Ui, state: &mut UiState) -> Option<Intent> {
    let mut intent = None;
    let mut download_clicked = false;
    let snapshot = &state.snapshot;

    card_frame().show(ui, |ui| {
        ui.set_width(CARD_WIDTH);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("🏆").size(44.0));
            ui.heading(RichText::new("Sprint Crushed!").strong().size(28.0).color(TEXT_PRIMARY));
            ui.label(
                RichText::new(format!("You stayed focused for {} minutes.", snapshot.sprint_minutes()))
                    .color(TEXT_SECONDARY),
            );
            if let Some(clock) = snapshot.completed_clock() {
                ui.label(RichText::new(format!("Finished at {}", clock)).small().color(TEXT_SECONDARY));
            }
            ui.add_space(16.0);

            egui::Frame::default()
                .fill(BG_PRIMARY)
                .corner_radius(CARD_ROUNDING)
                .stroke(egui::Stroke::new(2.0, ACCENT_ALT))
                .inner_margin(16.0)
                .show(ui, |ui| {
                    ui.set_min_height(220.0);
                    ui.vertical_centered(|ui| {
                        if let Some(reward) = &state.reward_image {
                            ui.add(reward.image().fit_to_exact_size(Vec2::splat(192.0)));
                            ui.add_space(8.0);
                            let download = ui.add(
                                egui::Button::new(RichText::new("⬇ Download").color(TEXT_PRIMARY))
                                    .fill(ACCENT_ALT)
                                    .corner_radius(PANEL_ROUNDING),
                            );
                            if download.clicked() {
                                download_clicked = true;
                            }
                        } else if snapshot.generating_reward {
                            ui.add_space(60.0);
                            ui.add(egui::Spinner::new().size(40.0).color(ACCENT));
                            ui.label(RichText::new("Generating...").color(TEXT_SECONDARY));
                        } else if snapshot.reward_requested {
                            ui.add_space(80.0);
                            ui.label(RichText::new("No sticker this time").color(TEXT_SECONDARY));
                        } else {
                            ui.add_space(50.0);
                            let reveal = ui.add(
                                egui::Button::new(
                                    RichText::new("✨ Tap to Reveal Reward").strong().size(18.0).color(TEXT_PRIMARY),
                                )
                                .fill(ACCENT_ALT)
                                .corner_radius(CARD_ROUNDING),
                            );
                            ui.label(RichText::new("AI Generated Collectible").small().color(TEXT_SECONDARY));
                            if reveal.clicked() {
                                intent = Some(Intent::RevealReward);
                            }
                        }
                    });
                });

            ui.add_space(16.0);
            let again = ui.add(
                egui::Button::new(RichText::new("⟳ New Session").strong().color(TEXT_PRIMARY))
                    .corner_radius(CARD_ROUNDING)
                    .min_size(Vec2::new(ui.available_width(), 40.0)),
            );
            if again.clicked() {
                intent = Some(Intent::Reset);
            }
        });
    });

    state.download_requested |= download_clicked;
    intent
}

fn current_focus(ui: &mut egui::Ui, task: &str) {
    egui::Frame::default()
        .fill(BG_SURFACE)
        .corner_radius(CARD_ROUNDING)
        .inner_margin(Vec2::new(20.0, 10.0))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("CURRENT FOCUS").small().strong().color(TEXT_SECONDARY));
                ui.label(RichText::new(task).size(18.0).color(TEXT_PRIMARY));
            });
        });
}

/// Confirmation window for abandoning a running sprint.
/// `AbandonSprint` is only returned once the user confirms.
pub fn abandon_dialog(ctx: &egui::Context, state: &mut UiState) -> Option<Intent> {
    if !state.confirm_abandon {
        return None;
    }
    let mut intent = None;

    egui::Window::new("Abort mission?")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(RichText::new("Your progress on this sprint will be lost.").color(TEXT_SECONDARY));
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                let confirm = ui.add(
                    egui::Button::new(RichText::new("Abandon").color(TEXT_PRIMARY))
                        .fill(ERROR)
                        .corner_radius(PANEL_ROUNDING),
                );
                if confirm.clicked() {
                    state.confirm_abandon = false;
                    intent = Some(Intent::AbandonSprint);
                }
                if ui.button("Keep going").clicked() {
                    state.confirm_abandon = false;
                }
            });
        });

    intent
}
