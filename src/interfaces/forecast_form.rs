//! Sidebar inputs: price, weekday, season, language and author credit.

use crate::application::session::ForecastSession;
use crate::domain::forecast::{Season, Weekday};
use crate::infrastructure::i18n::I18nService;
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

const AUTHOR_NAME: &str = "Marsello Ormanda";
const AUTHOR_URL: &str = "https://www.linkedin.com/in/marsello-ormanda/";

/// Renders the parameter widgets. Returns `true` when the forecast button was clicked.
pub fn render_input_panel(
    ui: &mut egui::Ui,
    session: &mut ForecastSession,
    i18n: &I18nService,
) -> bool {
    ui.add_space(DesignSystem::SPACING_SMALL);
    ui.heading(format!("🎛️ {}", i18n.t("sidebar_header")));
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    let bounds = *session.bounds();

    // A. Price
    ui.label(egui::RichText::new(i18n.t("input_price")).strong());
    ui.horizontal(|ui| {
        let price = &mut session.form.price_per_kg;
        if ui.button("−").clicked() {
            *price = bounds.clamp(price.saturating_sub(bounds.step));
        }
        ui.add(
            egui::DragValue::new(price)
                .range(bounds.min..=bounds.max)
                .speed(bounds.step as f64)
                .prefix("Rp "),
        );
        if ui.button("+").clicked() {
            *price = bounds.clamp(price.saturating_add(bounds.step));
        }
    });
    ui.label(
        egui::RichText::new(i18n.tf(
            "input_price_hint",
            &[
                ("min", bounds.min.to_string().as_str()),
                ("max", bounds.max.to_string().as_str()),
            ],
        ))
        .small()
        .color(DesignSystem::TEXT_MUTED),
    );
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    // B. Day
    ui.label(egui::RichText::new(i18n.t("input_day")).strong());
    egui::ComboBox::from_id_salt("weekday_select")
        .width(ui.available_width())
        .selected_text(session.form.weekday.label())
        .show_ui(ui, |ui| {
            for day in Weekday::all() {
                ui.selectable_value(&mut session.form.weekday, day, day.label());
            }
        });
    ui.add_space(DesignSystem::SPACING_MEDIUM);

    // C. Season
    ui.label(egui::RichText::new(i18n.t("input_season")).strong());
    egui::ComboBox::from_id_salt("season_select")
        .width(ui.available_width())
        .selected_text(session.form.season.label())
        .show_ui(ui, |ui| {
            for season in Season::all() {
                ui.selectable_value(&mut session.form.season, season, season.label());
            }
        });
    ui.add_space(DesignSystem::SPACING_LARGE);

    let button = egui::Button::new(
        egui::RichText::new(format!("🚀 {}", i18n.t("button_predict")))
            .size(16.0)
            .strong()
            .color(DesignSystem::TEXT_PRIMARY),
    )
    .fill(DesignSystem::ACCENT_PRIMARY)
    .min_size(egui::vec2(ui.available_width(), 36.0));

    ui.add(button).clicked()
}

/// Language picker
pub fn render_language_selector(ui: &mut egui::Ui, i18n: &mut I18nService) {
    let languages = i18n.available_languages().to_vec();
    if languages.len() < 2 {
        return;
    }

    let current_code = i18n.current_language_code().to_string();
    ui.horizontal_wrapped(|ui| {
        for lang in languages {
            if ui
                .selectable_label(
                    current_code == lang.code,
                    format!("{} {}", lang.flag, lang.name),
                )
                .clicked()
            {
                i18n.set_language(&lang.code);
            }
        }
    });
}

pub fn render_author(ui: &mut egui::Ui, i18n: &I18nService) {
    ui.label(egui::RichText::new(format!("👤 {}", i18n.t("author_header"))).strong());
    DesignSystem::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(AUTHOR_NAME).strong());
        ui.hyperlink_to(i18n.t("author_connect"), AUTHOR_URL);
    });
}
