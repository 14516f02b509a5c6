//! Timer face: a round gauge that drains as the sprint runs.

use egui::{self, Align2, Color32, FontId, RichText, Sense, Stroke, Vec2};
use crate::theme::*;

const FACE_SIZE: f32 = 240.0;

/// `MM:SS`, minutes not capped at 59
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Remaining share of the sprint, clamped to `0.0..=1.0`
pub fn remaining_fraction(remaining: u32, duration: u32) -> f32 {
    if duration == 0 {
        return 0.0;
    }
    (remaining as f32 / duration as f32).clamp(0.0, 1.0)
}

/// Liquid colour: calm above 60%, purple above 30%, red below
pub fn liquid_color(fraction: f32) -> Color32 {
    if fraction < 0.3 {
        TIMER_LOW
    } else if fraction < 0.6 {
        TIMER_HALF
    } else {
        TIMER_CALM
    }
}

/// Caption under the clock digits
pub fn face_caption(running: bool) -> &'static str {
    if running { "SPRINT ACTIVE" } else { "TIME'S UP" }
}

pub fn timer_face(ui: &mut egui::Ui, remaining: u32, duration: u32, running: bool) {
    let fraction = remaining_fraction(remaining, duration);
    let color = liquid_color(fraction);

    let (rect, _) = ui.allocate_exact_size(Vec2::splat(FACE_SIZE), Sense::hover());
    let painter = ui.painter_at(rect);
    let center = rect.center();
    let radius = FACE_SIZE / 2.0 - 4.0;

    painter.circle_filled(center, radius, BG_SECONDARY);

    // Liquid level: horizontal slices clipped to the circle
    let level = rect.bottom() - 4.0 - fraction * (radius * 2.0);
    let steps = 48;
    for i in 0..steps {
        let y = rect.top() + 4.0 + (i as f32 + 0.5) * (radius * 2.0 / steps as f32);
        if y < level {
            continue;
        }
        let dy = (y - center.y).abs();
        if dy >= radius {
            continue;
        }
        let half = (radius * radius - dy * dy).sqrt();
        painter.line_segment(
            [egui::pos2(center.x - half, y), egui::pos2(center.x + half, y)],
            Stroke::new(radius * 2.0 / steps as f32 + 0.5, color.linear_multiply(0.85)),
        );
    }

    painter.circle_stroke(center, radius, Stroke::new(3.0, TEXT_SECONDARY.linear_multiply(0.4)));

    let text_color = if fraction > 0.5 { BG_PRIMARY } else { TEXT_PRIMARY };
    painter.text(
        center,
        Align2::CENTER_CENTER,
        format_clock(remaining),
        FontId::proportional(48.0),
        text_color,
    );
    painter.text(
        center + Vec2::new(0.0, 38.0),
        Align2::CENTER_CENTER,
        face_caption(running),
        FontId::proportional(12.0),
        text_color,
    );
}

/// One-line clock for the top bar
pub fn compact_clock(ui: &mut egui::Ui, remaining: u32, duration: u32) {
    let color = liquid_color(remaining_fraction(remaining, duration));
    ui.label(RichText::new(format_clock(remaining)).monospace().strong().color(color));
}
