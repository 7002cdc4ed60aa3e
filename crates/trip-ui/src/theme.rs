//! UI theme constants

use egui::{Color32, CornerRadius, Stroke, Vec2};

pub const BG_PRIMARY: Color32 = Color32::from_rgb(250, 247, 242);
pub const BG_SECONDARY: Color32 = Color32::from_rgb(241, 235, 225);
pub const BG_SURFACE: Color32 = Color32::from_rgb(229, 221, 207);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(41, 37, 33);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(120, 111, 100);
pub const ACCENT: Color32 = Color32::from_rgb(214, 104, 65);
pub const SUCCESS: Color32 = Color32::from_rgb(67, 142, 90);
pub const ERROR: Color32 = Color32::from_rgb(196, 58, 49);
pub const WARNING: Color32 = Color32::from_rgb(201, 150, 36);
pub const MAP_WATER: Color32 = Color32::from_rgb(205, 225, 234);
pub const MAP_GRID: Color32 = Color32::from_rgb(180, 204, 214);
pub const PIN: Color32 = Color32::from_rgb(214, 104, 65);
pub const USER_BUBBLE: Color32 = Color32::from_rgb(252, 226, 212);

pub const PANEL_ROUNDING: CornerRadius = CornerRadius::same(6);
pub const PANEL_PADDING: Vec2 = Vec2::new(12.0, 8.0);

/// Apply the light theme to an egui context
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = egui::Visuals::light();
    style.visuals.panel_fill = BG_PRIMARY;
    style.visuals.window_fill = BG_PRIMARY;
    style.visuals.extreme_bg_color = Color32::WHITE;
    style.visuals.hyperlink_color = ACCENT;

    style.visuals.widgets.inactive.bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.weak_bg_fill = BG_SURFACE;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.hovered.bg_fill = BG_SECONDARY;
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    style.visuals.widgets.active.bg_fill = ACCENT;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, Color32::WHITE);

    style.visuals.selection.bg_fill = ACCENT.linear_multiply(0.3);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    style.spacing.item_spacing = Vec2::new(8.0, 6.0);

    ctx.set_style(style);
}
