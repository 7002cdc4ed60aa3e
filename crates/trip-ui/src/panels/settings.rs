//! Settings panel: backend endpoints, chat options and trip origin.

use egui::{self, RichText, Vec2};

use trip_types::config::TripConfig;

use crate::state::SaveFeedback;
use crate::theme::*;

/// What the caller should do after rendering the settings panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    None,
    /// A field was edited; adapters need rebuilding
    Changed,
    /// The user clicked Save
    SaveClicked,
}

pub fn settings_panel(
    ui: &mut egui::Ui,
    config: &mut TripConfig,
    save_feedback: Option<&SaveFeedback>,
) -> SettingsAction {
    let mut changed = false;
    let mut save_clicked = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Settings").color(TEXT_PRIMARY));
            ui.separator();

            // ── Backend ──────────────────────────────────────
            ui.label(RichText::new("Backend").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("Scheduler URL").color(TEXT_SECONDARY).small());
            changed |= ui.text_edit_singleline(&mut config.api.base_url).changed();

            ui.add_space(4.0);
            ui.label(RichText::new("Summary WebSocket URL").color(TEXT_SECONDARY).small());
            changed |= ui.text_edit_singleline(&mut config.api.realtime_url).changed();

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);

            // ── Assistant ────────────────────────────────────
            ui.label(RichText::new("Assistant").color(ACCENT).strong());
            ui.add_space(2.0);

            ui.label(RichText::new("Proxy URL").color(TEXT_SECONDARY).small());
            changed |= ui.text_edit_singleline(&mut config.chat.proxy_url).changed();

            ui.add_space(4.0);
            ui.label(RichText::new("Model").color(TEXT_SECONDARY).small());
            changed |= ui.text_edit_singleline(&mut config.chat.model).changed();

            ui.add_space(4.0);
            ui.label(RichText::new("Messages remembered").color(TEXT_SECONDARY).small());
            changed |= ui
                .add(egui::Slider::new(&mut config.chat.max_memory, 1..=50))
                .changed();

            ui.add_space(12.0);
            ui.separator();
            ui.add_space(4.0);

            // ── Origin ───────────────────────────────────────
            ui.label(RichText::new("Starting point").color(ACCENT).strong());
            ui.horizontal(|ui| {
                ui.label(RichText::new("Lat").color(TEXT_SECONDARY).small());
                changed |= ui
                    .add(egui::DragValue::new(&mut config.origin.lat).speed(0.001).range(-90.0..=90.0))
                    .changed();
                ui.label(RichText::new("Lon").color(TEXT_SECONDARY).small());
                changed |= ui
                    .add(egui::DragValue::new(&mut config.origin.lon).speed(0.001).range(-180.0..=180.0))
                    .changed();
            });

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn = ui.add(
                    egui::Button::new(RichText::new("Save Settings").color(egui::Color32::WHITE).strong())
                        .fill(ACCENT)
                        .corner_radius(PANEL_ROUNDING)
                        .min_size(Vec2::new(120.0, 28.0)),
                );
                if btn.clicked() {
                    save_clicked = true;
                }
                if ui.button("Reset").clicked() {
                    *config = TripConfig::default();
                    changed = true;
                }

                if let Some(fb) = save_feedback {
                    let color = if fb.success { SUCCESS } else { ERROR };
                    ui.label(RichText::new(&fb.message).color(color).small());
                }
            });
        });

    if save_clicked {
        SettingsAction::SaveClicked
    } else if changed {
        SettingsAction::Changed
    } else {
        SettingsAction::None
    }
}
