use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// A card showing one headline figure with an optional caption
pub fn render_metric_card(
    ui: &mut egui::Ui,
    title: &str,
    value: &str,
    value_color: egui::Color32,
    caption: Option<&str>,
) {
    DesignSystem::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.set_min_height(110.0);

        ui.label(
            egui::RichText::new(title)
                .size(12.0)
                .color(DesignSystem::TEXT_SECONDARY)
                .strong(),
        );
        ui.add_space(DesignSystem::SPACING_SMALL);
        ui.label(
            egui::RichText::new(value)
                .size(28.0)
                .strong()
                .color(value_color),
        );

        if let Some(text) = caption {
            ui.label(
                egui::RichText::new(text)
                    .size(11.0)
                    .italics()
                    .color(DesignSystem::TEXT_MUTED),
            );
        }
    });
}

/// Full-width message strip (success, info, warning or error)
pub fn render_banner(ui: &mut egui::Ui, icon: &str, text: &str, color: egui::Color32) {
    DesignSystem::banner_frame(color).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_wrapped(|ui| {
            ui.label(egui::RichText::new(icon).size(16.0));
            ui.label(egui::RichText::new(text).size(15.0).color(color));
        });
    });
}
