//! Live summary card and the multi-day weather grid.

use egui::{self, RichText};

use trip_core::view::ItineraryView;
use trip_types::itinerary::WeatherForecastEntry;

use crate::theme::*;

pub fn summary_panel(ui: &mut egui::Ui, view: &ItineraryView) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(RichText::new("SUMMARY").color(TEXT_PRIMARY).strong());
                if view.is_live() {
                    ui.label(RichText::new("●").color(SUCCESS).small())
                        .on_hover_text("Live");
                }
            });
            ui.label(RichText::new(view.summary_display()).color(TEXT_PRIMARY));
        });
}

pub fn weather_panel(ui: &mut egui::Ui, forecasts: &[WeatherForecastEntry]) {
    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("WEATHER FORECAST").color(TEXT_PRIMARY).strong());
            ui.add_space(4.0);
            egui::Grid::new("weather_grid")
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    for entry in forecasts {
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(&entry.day).color(TEXT_SECONDARY).strong());
                            ui.label(RichText::new(entry.icon.glyph()).size(26.0))
                                .on_hover_text(entry.icon_url());
                            ui.label(RichText::new(format!("{}°", entry.temp)).color(TEXT_PRIMARY));
                        });
                    }
                    ui.end_row();
                });
        });
}
