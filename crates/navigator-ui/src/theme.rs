//! UI theme constants — a light page with the orange/green brand colours.

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PAGE: Color32 = Color32::WHITE;
pub const BG_HERO: Color32 = Color32::from_rgb(241, 243, 245);
pub const BORDER: Color32 = Color32::from_rgb(222, 226, 230);
pub const HEADER: Color32 = Color32::from_rgb(255, 107, 53);
pub const TAGLINE: Color32 = Color32::from_rgb(46, 139, 87);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(33, 37, 41);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(108, 117, 125);
pub const TEXT_HERO: Color32 = Color32::from_rgb(73, 80, 87);
pub const USER_BUBBLE: Color32 = Color32::from_rgb(231, 241, 255);
pub const ASSISTANT_BUBBLE: Color32 = Color32::from_rgb(255, 243, 235);
pub const FAILED_BUBBLE: Color32 = Color32::from_rgb(255, 236, 236);
pub const INFO_BOX: Color32 = Color32::from_rgb(228, 242, 251);
pub const SUCCESS_BOX: Color32 = Color32::from_rgb(230, 245, 234);
pub const ERROR: Color32 = Color32::from_rgb(200, 35, 51);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(10);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);
pub const CHAT_MAX_WIDTH: f32 = 800.0;

/// Apply the light theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = BG_PAGE;
    style.visuals.window_fill = BG_PAGE;
    style.visuals.override_text_color = Some(TEXT_PRIMARY);

    style.visuals.widgets.inactive.bg_fill = BG_HERO;
    style.visuals.widgets.inactive.weak_bg_fill = BG_HERO;
    style.visuals.widgets.hovered.bg_fill = ASSISTANT_BUBBLE;
    style.visuals.widgets.hovered.weak_bg_fill = ASSISTANT_BUBBLE;
    style.visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, HEADER);
    style.visuals.widgets.active.bg_fill = HEADER;

    style.visuals.selection.bg_fill = HEADER.linear_multiply(0.3);
    style.visuals.selection.stroke = Stroke::new(1.0, HEADER);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
