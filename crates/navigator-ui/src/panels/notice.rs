//! Full-page notice shown when startup fails. No chat is offered.

use egui::{self, RichText};

use crate::theme::*;

pub fn fatal_notice(ui: &mut egui::Ui, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        egui::Frame::default()
            .fill(FAILED_BUBBLE)
            .stroke(egui::Stroke::new(1.0, ERROR))
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_max_width(CHAT_MAX_WIDTH);
                ui.label(RichText::new("🚨 Career Navigator cannot start").color(ERROR).strong().size(18.0));
                ui.add_space(4.0);
                ui.label(RichText::new(message).color(TEXT_PRIMARY));
            });
    });
}
