//! Chat panel: itinerary Q&A history and the input row.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use trip_core::chat::ChatAssistant;
use trip_types::message::{ConversationMessage, Role};

use crate::theme::*;

/// Render the chat panel. Returns Some(message) when the user submits input.
///
/// The input is disabled while a request is in flight.
pub fn chat_panel(
    ui: &mut egui::Ui,
    chat: &ChatAssistant,
    input_text: &mut String,
    placeholder: &str,
) -> Option<String> {
    let mut submitted = None;
    let sending = chat.is_sending();

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new("Have a question about the itinerary? Ask!")
                            .color(TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let (status, color) = if sending {
                            ("Thinking...", WARNING)
                        } else {
                            ("Ready", SUCCESS)
                        };
                        ui.label(RichText::new(status).color(color).small());
                    });
                });

                ui.separator();

                let available_height = (ui.available_height() - 60.0).max(80.0);
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        for message in chat.history() {
                            render_message(ui, message);
                            ui.add_space(4.0);
                        }

                        if sending {
                            egui::Frame::default()
                                .fill(BG_PRIMARY)
                                .corner_radius(PANEL_ROUNDING)
                                .inner_margin(8.0)
                                .show(ui, |ui| {
                                    ui.horizontal(|ui| {
                                        ui.spinner();
                                        ui.label(RichText::new("typing...").color(TEXT_SECONDARY).italics());
                                    });
                                });
                        }
                    });

                ui.add_space(8.0);

                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(input_text)
                        .hint_text(placeholder)
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add_enabled(!sending, input);

                    let send_enabled = !input_text.trim().is_empty() && !sending;
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(egui::Color32::WHITE))
                            .fill(if send_enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    let enter_pressed =
                        response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                    if send_enabled && (enter_pressed || send_btn.clicked()) {
                        submitted = Some(input_text.trim().to_string());
                        input_text.clear();
                        response.request_focus();
                    }
                });
            });
        });

    submitted
}

fn render_message(ui: &mut egui::Ui, message: &ConversationMessage) {
    let (label, label_color, bg, layout) = match message.role {
        Role::User => ("You", ACCENT, USER_BUBBLE, Layout::top_down(Align::Max)),
        Role::Assistant => ("Assistant", SUCCESS, BG_PRIMARY, Layout::top_down(Align::Min)),
    };

    ui.with_layout(layout, |ui| {
        egui::Frame::default()
            .fill(bg)
            .corner_radius(PANEL_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.set_max_width(ui.available_width() * 0.8);
                ui.label(RichText::new(label).color(label_color).strong().small());
                ui.label(RichText::new(&message.content).color(TEXT_PRIMARY));
            });
    });
}
