//! Chat panel — displays the conversation and the input field.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use navigator_types::message::Role;

use crate::state::{ChatEntry, UiState, UserAction};
use crate::theme::*;

const INPUT_HINT: &str = "Ask Luffy about careers, subjects, or your interests...";

/// Render the chat panel. Returns a submit action when the student sends input.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState) -> Option<UserAction> {
    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.set_max_width(CHAT_MAX_WIDTH);

        let available_height = ui.available_height() - 56.0;
        ScrollArea::vertical()
            .max_height(available_height)
            .auto_shrink([false, false])
            .stick_to_bottom(true)
            .show(ui, |ui| {
                for entry in &state.messages {
                    render_message(ui, entry);
                    ui.add_space(6.0);
                }

                if state.is_busy() {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(RichText::new(&state.status_text).color(TEXT_SECONDARY));
                    });
                }
            });

        ui.add_space(8.0);

        let busy = state.is_busy();
        ui.horizontal(|ui| {
            let input = egui::TextEdit::singleline(&mut state.input_text)
                .hint_text(INPUT_HINT)
                .desired_width(ui.available_width() - 70.0)
                .font(egui::FontId::proportional(15.0));
            let response = ui.add_enabled(!busy, input);

            let send_enabled = !state.input_text.trim().is_empty() && !busy;
            let send_btn = ui.add_enabled(
                send_enabled,
                egui::Button::new(RichText::new("Send").color(egui::Color32::WHITE).strong())
                    .fill(if send_enabled { HEADER } else { BORDER })
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(60.0, 0.0)),
            );

            let enter = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if enter || send_btn.clicked() {
                if let Some(text) = state.take_input() {
                    action = Some(UserAction::Submit(text));
                    response.request_focus();
                }
            }
        });
    });

    action
}

fn render_message(ui: &mut egui::Ui, entry: &ChatEntry) {
    let (label, label_color, bg) = match (entry.role, entry.failed) {
        (Role::User, _) => ("🎓 You", TAGLINE, USER_BUBBLE),
        (_, true) => ("⚓ Luffy", ERROR, FAILED_BUBBLE),
        _ => ("⚓ Luffy", HEADER, ASSISTANT_BUBBLE),
    };
    let layout = match entry.role {
        Role::User => Layout::top_down(Align::Max),
        _ => Layout::top_down(Align::Min),
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::default()
            .fill(bg)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.set_max_width(CHAT_MAX_WIDTH * 0.85);
                ui.label(RichText::new(label).color(label_color).strong().small());
                ui.label(RichText::new(&entry.content).color(TEXT_PRIMARY));
            });
    });
}
