use crate::application::forecast_service::{ForecastOutcome, ModelStatus};
use crate::domain::forecast::{InsightParameters, format_thousands};
use crate::domain::ml::feature_registry::FeatureVector;
use crate::infrastructure::i18n::I18nService;
use crate::interfaces::components::metrics::{render_banner, render_metric_card};
use crate::interfaces::design_system::DesignSystem;
use eframe::egui;

/// Persistent banner shown when the model artifact failed to load
pub fn render_model_status(ui: &mut egui::Ui, status: &ModelStatus, i18n: &I18nService) {
    if let ModelStatus::Unavailable { reason } = status {
        render_banner(
            ui,
            "⛔",
            &i18n.tf("error_model_load", &[("reason", reason.as_str())]),
            DesignSystem::DANGER,
        );
        ui.add_space(DesignSystem::SPACING_MEDIUM);
    }
}

pub fn render_outcome(
    ui: &mut egui::Ui,
    outcome: Option<&ForecastOutcome>,
    params: &InsightParameters,
    i18n: &I18nService,
) {
    let Some(outcome) = outcome else {
        render_banner(ui, "ℹ️", i18n.t("prompt_idle"), DesignSystem::INFO);
        return;
    };

    match outcome {
        ForecastOutcome::Success {
            insight,
            computed_at,
            ..
        } => {
            render_banner(
                ui,
                "📦",
                &i18n.tf(
                    "result_prediction",
                    &[("kg", insight.predicted_kg.to_string().as_str())],
                ),
                DesignSystem::SUCCESS,
            );
            ui.add_space(DesignSystem::SPACING_MEDIUM);
            ui.separator();
            ui.add_space(DesignSystem::SPACING_MEDIUM);

            let buffer_pct = format!("{:.0}", params.stock_buffer_rate * 100.0);
            let stock_caption = i18n.tf("result_stock_caption", &[("pct", buffer_pct.as_str())]);
            let money_caption = i18n.tf(
                "result_money_caption",
                &[("amount", format_thousands(insight.money_saved_idr).as_str())],
            );

            ui.columns(2, |cols| {
                render_metric_card(
                    &mut cols[0],
                    &format!("💡 {}", i18n.t("result_stock_title")),
                    &format!("{} Kg", insight.stock_recommendation_kg),
                    DesignSystem::INFO,
                    Some(stock_caption.as_str()),
                );
                render_metric_card(
                    &mut cols[1],
                    &format!("🌱 {}", i18n.t("result_waste_title")),
                    &format!("{} Kg", insight.waste_avoided_kg),
                    DesignSystem::SUCCESS,
                    Some(money_caption.as_str()),
                );
            });

            ui.add_space(DesignSystem::SPACING_SMALL);
            ui.label(
                egui::RichText::new(computed_at.format("%H:%M:%S UTC").to_string())
                    .small()
                    .color(DesignSystem::TEXT_MUTED),
            );
        }
        ForecastOutcome::ModelUnavailable { .. } => {
            render_banner(ui, "⚠️", i18n.t("warning_model_missing"), DesignSystem::WARNING);
        }
        ForecastOutcome::Failed { message, features } => {
            render_banner(
                ui,
                "⛔",
                &i18n.tf("error_prediction", &[("message", message.as_str())]),
                DesignSystem::DANGER,
            );
            ui.add_space(DesignSystem::SPACING_MEDIUM);
            ui.label(egui::RichText::new(i18n.t("debug_input")).strong());
            render_feature_table(ui, features);
        }
    }
}

/// Debug view of the row that was sent to the model
fn render_feature_table(ui: &mut egui::Ui, features: &FeatureVector) {
    egui::Grid::new("feature_debug_grid")
        .striped(true)
        .spacing([20.0, 6.0])
        .show(ui, |ui| {
            for (name, _) in features.entries() {
                ui.label(egui::RichText::new(name).monospace().strong());
            }
            ui.end_row();
            for (_, value) in features.entries() {
                ui.label(egui::RichText::new(value.to_string()).monospace());
            }
            ui.end_row();
        });
}
