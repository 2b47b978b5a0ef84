//! Sidebar — usage notes, example questions, quick topics, and the
//! "start fresh" control.

use egui::{self, RichText, Vec2};
use navigator_types::topic::QuickTopic;

use crate::state::{UiState, UserAction};
use crate::theme::*;

pub const EXAMPLE_QUESTIONS: &[&str] = &[
    "I love math and physics, what careers use these?",
    "I want to help people, what options do I have?",
    "I'm interested in technology, show me career paths",
    "What skills do I need to become a doctor?",
];

const HOW_TO_USE: &[&str] = &[
    "Your favorite school subjects",
    "Career fields that interest you",
    "Skills you want to develop",
    "Dream jobs you're curious about",
];

/// Render the sidebar. Example questions and quick topics are disabled while
/// a reply is pending.
pub fn sidebar_panel(ui: &mut egui::Ui, state: &UiState) -> Option<UserAction> {
    let mut action = None;
    let idle = !state.is_busy();

    ui.add_space(8.0);
    ui.label(RichText::new("🗺 How to Use").strong().size(16.0));
    boxed(ui, INFO_BOX, |ui| {
        ui.label(RichText::new("Simply ask Luffy about:").strong());
        for item in HOW_TO_USE {
            ui.label(format!("• {}", item));
        }
    });

    ui.add_space(8.0);
    ui.label(RichText::new("💡 Example Questions").strong().size(16.0));
    boxed(ui, SUCCESS_BOX, |ui| {
        for question in EXAMPLE_QUESTIONS {
            let btn = egui::Button::new(RichText::new(format!("\"{}\"", question)).small())
                .frame(false)
                .wrap();
            if ui.add_enabled(idle, btn).clicked() {
                action = Some(UserAction::Submit(question.to_string()));
            }
        }
    });

    ui.add_space(8.0);
    ui.label(RichText::new("🧭 Quick Topics").strong().size(16.0));
    egui::Grid::new("quick_topics")
        .num_columns(2)
        .spacing(Vec2::new(6.0, 6.0))
        .show(ui, |ui| {
            for (i, topic) in QuickTopic::all().iter().enumerate() {
                let btn = egui::Button::new(format!("{} {}", topic.icon(), topic.label()))
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(110.0, 28.0));
                if ui.add_enabled(idle, btn).clicked() {
                    action = Some(UserAction::Topic(*topic));
                }
                if i % 2 == 1 {
                    ui.end_row();
                }
            }
        });

    ui.add_space(8.0);
    ui.separator();

    let clear = egui::Button::new(RichText::new("🧹 Start Fresh Conversation").strong())
        .corner_radius(PANEL_ROUNDING)
        .min_size(Vec2::new(ui.available_width(), 30.0));
    if ui.add_enabled(idle, clear).clicked() {
        action = Some(UserAction::Clear);
    }

    ui.separator();
    ui.label(
        RichText::new("Built with ❤ for students exploring their future!")
            .italics()
            .small()
            .color(TEXT_SECONDARY),
    );

    action
}

fn boxed(ui: &mut egui::Ui, fill: egui::Color32, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::default()
        .fill(fill)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}
