//! Landing screen: hero text, feature cards and the start button.

use egui::{self, Align, Layout, RichText, Vec2};
use buddy_types::event::Intent;
use crate::theme::*;

const FEATURES: &[(&str, &str, &str)] = &[
    ("🤝", "Accountability", "Get matched with a unique AI personality who keeps you honest."),
    ("⏳", "Sprint Timer", "A focus timer that drains as you make progress."),
    ("✨", "Fun Rewards", "Collect unique AI-generated stickers for every sprint you crush."),
];

/// Render the landing screen. Returns `StartMatch` when the user is ready.
pub fn landing_panel(ui: &mut egui::Ui) -> Option<Intent> {
    let mut intent = None;

    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.add_space(ui.available_height() * 0.12);

        ui.label(
            RichText::new("🤖 YOUR AI STUDY BUDDY")
                .color(TEXT_SECONDARY)
                .small()
                .strong(),
        );
        ui.add_space(8.0);
        ui.label(RichText::new("Study Sprint 🚀").size(56.0).strong().color(TEXT_PRIMARY));
        ui.add_space(8.0);
        ui.label(
            RichText::new("Match with an AI buddy. Set the timer. Get rewards. No distractions.")
                .size(18.0)
                .color(TEXT_SECONDARY),
        );
        ui.add_space(24.0);

        let start = ui.add(
            egui::Button::new(RichText::new("Let's Go! 👉").size(20.0).strong().color(TEXT_PRIMARY))
                .fill(ACCENT)
                .corner_radius(CARD_ROUNDING)
                .min_size(Vec2::new(200.0, 56.0)),
        );
        if start.clicked() {
            intent = Some(Intent::StartMatch);
        }

        ui.add_space(40.0);

        let card_width = (ui.available_width().min(960.0) - 32.0) / FEATURES.len() as f32;
        ui.horizontal(|ui| {
            let spare = (ui.available_width() - card_width * FEATURES.len() as f32 - 16.0).max(0.0);
            ui.add_space(spare / 2.0);
            for (icon, title, blurb) in FEATURES {
                feature_card(ui, card_width - 16.0, icon, title, blurb);
            }
        });
    });

    intent
}

fn feature_card(ui: &mut egui::Ui, width: f32, icon: &str, title: &str, blurb: &str) {
    card_frame().show(ui, |ui| {
        ui.set_width(width - CARD_PADDING.x * 2.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(icon).size(40.0));
            ui.label(RichText::new(title).strong().size(18.0).color(TEXT_PRIMARY));
            ui.label(RichText::new(blurb).small().color(TEXT_SECONDARY));
        });
    });
}
