//! Matching screen shown while a buddy is "found".

use egui::{self, Align, Layout, RichText, Stroke};
use crate::theme::*;

pub fn matching_panel(ui: &mut egui::Ui) {
    let rect = ui.max_rect();
    let painter = ui.painter_at(rect);
    let center = rect.center();

    // Radar rings, sweeping with wall-clock time
    for radius in [100.0, 175.0, 250.0] {
        painter.circle_stroke(center, radius, Stroke::new(1.0, RADAR.linear_multiply(0.3)));
    }
    let t = ui.input(|i| i.time) as f32;
    let angle = t * std::f32::consts::TAU / 3.0;
    let tip = center + egui::vec2(angle.cos(), angle.sin()) * 250.0;
    painter.line_segment([center, tip], Stroke::new(2.0, RADAR.linear_multiply(0.6)));

    ui.with_layout(Layout::top_down(Align::Center), |ui| {
        ui.add_space(rect.height() / 2.0 - 60.0);
        ui.label(RichText::new("🤖").size(48.0));
        ui.add_space(8.0);
        ui.label(
            RichText::new("SCANNING NETWORK...")
                .monospace()
                .strong()
                .size(22.0)
                .color(TEXT_PRIMARY),
        );
        ui.add_space(8.0);
        ui.add(egui::Spinner::new().size(20.0).color(RADAR));
    });

    ui.ctx().request_repaint();
}
