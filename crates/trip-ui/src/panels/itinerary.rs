//! Day list: numbered items for the current day plus the day navigator.

use egui::{self, Align, Layout, RichText, ScrollArea, Sense};

use trip_core::detail::preview_description;
use trip_core::view::ItineraryView;

use crate::theme::*;

/// What the caller should do after rendering the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItineraryAction {
    None,
    /// Expand the item at this index of the current day
    SelectItem(usize),
    PrevDay,
    NextDay,
}

pub fn itinerary_panel(ui: &mut egui::Ui, view: &ItineraryView) -> ItineraryAction {
    let mut action = ItineraryAction::None;

    let Some(day) = view.current_day() else {
        ui.label(RichText::new("Loading Itinerary...").color(TEXT_SECONDARY));
        return action;
    };
    let selected_id = view.selected().map(|s| s.item.id);

    let list_height = (ui.available_height() - 40.0).max(120.0);
    ScrollArea::vertical()
        .id_salt("day_items")
        .max_height(list_height)
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for (index, item) in day.items.iter().enumerate() {
                let highlighted = selected_id == Some(item.id);
                let frame = egui::Frame::default()
                    .fill(if highlighted { BG_SURFACE } else { BG_SECONDARY })
                    .corner_radius(PANEL_ROUNDING)
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(format!("{}", index + 1))
                                    .color(ACCENT)
                                    .strong()
                                    .size(20.0),
                            );
                            ui.vertical(|ui| {
                                ui.label(RichText::new(&item.title).color(TEXT_PRIMARY).strong());
                                ui.label(RichText::new(&item.open_hours).color(TEXT_SECONDARY).small());
                                ui.label(
                                    RichText::new(preview_description(&item.description))
                                        .color(TEXT_PRIMARY),
                                );
                            });
                        });
                    });

                let response = ui.interact(
                    frame.response.rect,
                    ui.id().with(("day_item", index)),
                    Sense::click(),
                );
                if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                    action = ItineraryAction::SelectItem(index);
                }
                ui.add_space(4.0);
            }
        });

    ui.separator();

    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
        if ui
            .add_enabled(!view.is_first_day(), egui::Button::new("<"))
            .clicked()
        {
            action = ItineraryAction::PrevDay;
        }
        ui.label(
            RichText::new(format!(" DAY {} ", view.current_day_index() + 1))
                .color(TEXT_PRIMARY)
                .strong(),
        );
        if ui
            .add_enabled(!view.is_last_day(), egui::Button::new(">"))
            .clicked()
        {
            action = ItineraryAction::NextDay;
        }
    });

    action
}
