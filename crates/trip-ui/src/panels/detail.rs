//! Expanded item window.

use egui::{self, RichText};

use trip_core::detail::{parse_hourly_forecast, slot_recommendation};
use trip_core::view::Selection;

use crate::theme::*;

/// Render the expanded item. Returns `false` once the user closes it.
pub fn detail_window(ctx: &egui::Context, selection: &Selection) -> bool {
    let mut open = true;
    let item = &selection.item;

    egui::Window::new(RichText::new(format!("{}. {}", selection.number, item.title)).strong())
        .id(egui::Id::new("expanded_item"))
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_width(420.0)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                if let Some(url) = &item.website_url {
                    ui.hyperlink_to("Website", url);
                }
                if let Some(url) = &item.naver_url {
                    ui.hyperlink_to("Naver Map", url);
                }
            });

            ui.label(RichText::new(&item.open_hours).color(TEXT_SECONDARY));
            ui.add_space(6.0);
            ui.label(RichText::new(&item.description).color(TEXT_PRIMARY));

            if let Some(slot) = &item.slot {
                ui.add_space(6.0);
                ui.label(
                    RichText::new(slot_recommendation(slot))
                        .color(ACCENT)
                        .italics(),
                );
            }

            let forecast = item
                .weather
                .as_deref()
                .map(parse_hourly_forecast)
                .unwrap_or_default();
            if !forecast.is_empty() {
                ui.add_space(8.0);
                ui.separator();
                let heading = match &selection.date_label {
                    Some(label) => format!("{}'s Forecast", label),
                    None => "Forecast".to_string(),
                };
                ui.label(RichText::new(heading).color(TEXT_PRIMARY).strong());
                ui.horizontal_wrapped(|ui| {
                    for hour in &forecast {
                        egui::Frame::default()
                            .fill(BG_SECONDARY)
                            .corner_radius(PANEL_ROUNDING)
                            .inner_margin(6.0)
                            .show(ui, |ui| {
                                ui.vertical_centered(|ui| {
                                    ui.label(RichText::new(&hour.time).color(TEXT_SECONDARY).small());
                                    ui.label(RichText::new(hour.glyph()).size(22.0));
                                    ui.label(RichText::new(format!("{}°C", hour.temp)).color(TEXT_PRIMARY));
                                });
                            });
                    }
                });
            }
        });

    open
}
