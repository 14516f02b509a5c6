//! Chat panel: buddy header, transcript and input field.

use egui::load::TexturePoll;
use egui::{self, Align, Color32, Layout, RichText, ScrollArea, Stroke, Vec2};
use buddy_types::buddy::Buddy;
use buddy_types::event::Intent;
use buddy_types::message::{Message, Sender};
use buddy_types::stage::Stage;
use crate::state::UiState;
use crate::theme::*;

/// Render the chat panel. Returns `SendChat` when the user submits input.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<Intent> {
    let buddy = state.snapshot.buddy.clone()?;
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                header(ui, &buddy, state.stage());
                ui.separator();

                // Messages area
                let available_height = ui.available_height() - 50.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in &state.snapshot.messages {
                            render_message(ui, message, &buddy);
                            ui.add_space(6.0);
                        }
                        if state.snapshot.awaiting_reply {
                            ui.horizontal(|ui| {
                                ui.add(egui::Spinner::new().size(12.0));
                                ui.label(RichText::new("typing").small().italics().color(TEXT_SECONDARY));
                            });
                        }
                    });

                ui.add_space(8.0);

                // Input area
                ui.horizontal(|ui| {
                    let can_send = state.snapshot.can_send();
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Type a message...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));
                    let response = ui.add_enabled(can_send, input);

                    let send_enabled = can_send && !state.input_text.trim().is_empty();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if enter || send_btn.clicked() {
                        if let Some(text) = state.take_input() {
                            submitted = Some(Intent::SendChat { text });
                            response.request_focus();
                        }
                    }
                });
            });
        });

    submitted
}

fn header(ui: &mut egui::Ui, buddy: &Buddy, stage: Stage) {
    ui.horizontal(|ui| {
        avatar(ui, buddy, 40.0);
        ui.vertical(|ui| {
            ui.label(RichText::new(format!("{} ✨", buddy.name)).strong().size(18.0).color(TEXT_PRIMARY));
            let mode = if stage == Stage::Sprinting { "FOCUS MODE ON" } else { "ACTIVE BUDDY" };
            ui.label(RichText::new(mode).small().color(TEXT_SECONDARY));
        });
        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            ui.label(RichText::new("●").color(SUCCESS))
                .on_hover_text(buddy.personality.as_str());
        });
    });
}

/// Round DiceBear avatar. The initial stands in until the image has loaded
/// or when it cannot be fetched.
pub fn avatar(ui: &mut egui::Ui, buddy: &Buddy, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.circle_filled(rect.center(), size / 2.0, ACCENT_ALT);

    let image = egui::Image::new(buddy.avatar_url.as_str())
        .corner_radius(egui::CornerRadius::same((size / 2.0) as u8))
        .show_loading_spinner(false);
    match image.load_for_size(ui.ctx(), rect.size()) {
        Ok(TexturePoll::Ready { .. }) => image.paint_at(ui, rect),
        _ => {
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                buddy.initial(),
                egui::FontId::proportional(size * 0.45),
                TEXT_PRIMARY,
            );
        }
    }

    painter.circle_stroke(rect.center(), size / 2.0 - 1.0, Stroke::new(2.0, TEXT_PRIMARY));
    response.on_hover_text(buddy.name.as_str())
}

fn render_message(ui: &mut egui::Ui, message: &Message, buddy: &Buddy) {
    match message.sender {
        Sender::System => {
            ui.vertical_centered(|ui| {
                egui::Frame::default()
                    .fill(BG_SURFACE)
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(6.0)
                    .show(ui, |ui| {
                        ui.label(RichText::new(&message.text).italics().small().color(TEXT_SECONDARY));
                    });
            });
        }
        Sender::User => {
            ui.with_layout(Layout::top_down(Align::Max), |ui| {
                bubble(ui, &message.text, ACCENT, TEXT_PRIMARY);
            });
        }
        Sender::Buddy => {
            ui.with_layout(Layout::top_down(Align::Min), |ui| {
                ui.label(RichText::new(&buddy.name).small().color(TEXT_SECONDARY));
                bubble(ui, &message.text, BG_SECONDARY, TEXT_PRIMARY);
            });
        }
    }
}

fn bubble(ui: &mut egui::Ui, text: &str, fill: Color32, color: Color32) {
    let max_width = ui.available_width() * 0.8;
    egui::Frame::default()
        .fill(fill)
        .corner_radius(CARD_ROUNDING)
        .inner_margin(Vec2::new(12.0, 8.0))
        .show(ui, |ui| {
            ui.set_max_width(max_width);
            ui.label(RichText::new(text).color(color));
        });
}
