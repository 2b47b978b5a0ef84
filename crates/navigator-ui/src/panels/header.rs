//! Page header — title, tagline, and the hero card.

use egui::{self, RichText};

use crate::theme::*;

pub fn header_panel(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.label(
            RichText::new("⚓ Career Navigator")
                .color(HEADER)
                .size(34.0)
                .strong(),
        );
        ui.label(
            RichText::new("Discover Your Dream Career with AI Guidance! 🚀")
                .color(TAGLINE)
                .size(18.0),
        );
        ui.add_space(12.0);

        egui::Frame::default()
            .fill(BG_HERO)
            .stroke(egui::Stroke::new(2.0, BORDER))
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.set_max_width(CHAT_MAX_WIDTH);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("🎓 🤖 💭 💼 🎯").size(36.0));
                    ui.label(
                        RichText::new("Student + AI = Career Discovery")
                            .color(TEXT_HERO)
                            .size(20.0)
                            .strong(),
                    );
                    ui.label(
                        RichText::new(
                            "Ask Captain Luffy about your interests, subjects you enjoy, or career goals.\n\
                             Get personalized guidance powered by AI to find your perfect career path! 🌟",
                        )
                        .color(TEXT_SECONDARY),
                    );
                });
            });
        ui.add_space(8.0);
    });
}
