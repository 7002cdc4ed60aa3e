//! Trip input form: dates, one prompt per day, and the generate button.

use egui::{self, RichText, Vec2};

use crate::state::PlannerForm;
use crate::theme::*;

/// Render the planner form. Returns `true` when the user asks to generate.
pub fn planner_panel(
    ui: &mut egui::Ui,
    form: &mut PlannerForm,
    generating: bool,
    error: Option<&str>,
) -> bool {
    let mut generate = false;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.set_max_width(640.0);
            ui.heading(RichText::new("Plan Your Trip").color(TEXT_PRIMARY).strong());
            ui.label(
                RichText::new(
                    "Enter your trip dates and tell us what you'd like to do each day. Be descriptive!",
                )
                .color(TEXT_SECONDARY),
            );
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label(RichText::new("From").color(TEXT_SECONDARY));
                ui.add(
                    egui::TextEdit::singleline(&mut form.start_date)
                        .hint_text("YYYY-MM-DD")
                        .desired_width(110.0),
                );
                ui.label(RichText::new("To").color(TEXT_SECONDARY));
                ui.add(
                    egui::TextEdit::singleline(&mut form.end_date)
                        .hint_text("YYYY-MM-DD")
                        .desired_width(110.0),
                );
            });

            ui.add_space(8.0);

            for (index, prompt) in form.prompts.iter_mut().enumerate() {
                ui.label(RichText::new(format!("Day {}", index + 1)).color(TEXT_PRIMARY).strong());
                ui.add(
                    egui::TextEdit::multiline(prompt)
                        .hint_text(
                            "e.g., A visit to a historical temple and a traditional Korean BBQ dinner.",
                        )
                        .desired_rows(3)
                        .desired_width(f32::INFINITY),
                );
                ui.add_space(4.0);
            }

            if ui.button("+ Add Day").clicked() {
                form.add_day();
            }

            ui.add_space(8.0);
            egui::Frame::default()
                .fill(BG_PRIMARY)
                .corner_radius(PANEL_ROUNDING)
                .inner_margin(8.0)
                .show(ui, |ui| {
                    ui.label(RichText::new("How to get the best results:").strong());
                    ui.label(
                        RichText::new("• Mention specific interests like \"history,\" \"food,\" \"beaches,\" or \"hiking.\"")
                            .small()
                            .color(TEXT_SECONDARY),
                    );
                    ui.label(
                        RichText::new("• Include the general vibe: \"a relaxed pace\" or \"a packed, adventurous day.\"")
                            .small()
                            .color(TEXT_SECONDARY),
                    );
                    if ui.link("Show an example").clicked() {
                        form.load_example();
                    }
                });

            if let Some(error) = error {
                ui.add_space(8.0);
                ui.label(RichText::new(error).color(ERROR));
            }

            ui.add_space(8.0);
            let label = if generating { "Generating..." } else { "Generate Itinerary" };
            let button = egui::Button::new(RichText::new(label).color(egui::Color32::WHITE).strong())
                .fill(if generating { BG_SURFACE } else { ACCENT })
                .corner_radius(PANEL_ROUNDING)
                .min_size(Vec2::new(ui.available_width(), 36.0));
            if ui.add_enabled(!generating, button).clicked() {
                generate = true;
            }
        });

    generate
}
