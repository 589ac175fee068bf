use crate::application::forecast_service::ModelStatus;
use crate::application::session::ForecastSession;
use crate::infrastructure::i18n::I18nService;
use crate::interfaces::design_system::DesignSystem;
use crate::interfaces::forecast_form::{
    render_author, render_input_panel, render_language_selector,
};
use crate::interfaces::results_panel::{render_model_status, render_outcome};
use eframe::egui;

/// Forecast window
pub struct ForecastApp {
    session: ForecastSession,
    i18n: I18nService,
    model_status: ModelStatus,
}

impl ForecastApp {
    /// Loads the model right away so a broken artifact is reported on first paint.
    pub fn new(session: ForecastSession, i18n: I18nService) -> Self {
        let model_status = session.model_status();
        Self {
            session,
            i18n,
            model_status,
        }
    }
}

impl eframe::App for ForecastApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(DesignSystem::theme());

        egui::SidePanel::left("input_panel")
            .default_width(300.0)
            .min_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    if render_input_panel(ui, &mut self.session, &self.i18n) {
                        self.session.submit();
                    }

                    ui.add_space(DesignSystem::SPACING_LARGE);
                    ui.separator();
                    if let ModelStatus::Ready { name, version } = &self.model_status {
                        ui.label(
                            egui::RichText::new(format!("🤖 {} {}", name, version))
                                .small()
                                .color(DesignSystem::TEXT_MUTED),
                        );
                    }
                    render_language_selector(ui, &mut self.i18n);
                    ui.separator();
                    render_author(ui, &self.i18n);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(DesignSystem::SPACING_MEDIUM);
            ui.heading(
                egui::RichText::new(format!("🌶️ {}", self.i18n.t("app_title")))
                    .size(28.0)
                    .strong(),
            );
            ui.label(
                egui::RichText::new(self.i18n.t("app_subtitle"))
                    .color(DesignSystem::TEXT_SECONDARY),
            );
            ui.add_space(DesignSystem::SPACING_LARGE);

            render_model_status(ui, &self.model_status, &self.i18n);
            render_outcome(
                ui,
                self.session.last_outcome(),
                self.session.service().params(),
                &self.i18n,
            );
        });
    }
}
