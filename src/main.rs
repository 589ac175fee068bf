use chili_forecast::application::forecast_service::ForecastService;
use chili_forecast::application::ml::ModelHandle;
use chili_forecast::application::session::ForecastSession;
use chili_forecast::config::Config;
use chili_forecast::infrastructure::i18n::I18nService;
use chili_forecast::interfaces::ui::ForecastApp;

use tracing::{Level, info};
use tracing_subscriber::prelude::*;

fn main() -> anyhow::Result<()> {
    // 0. Load Env (before starting anything)
    dotenvy::dotenv().ok();

    // 1. Setup Logging
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .pretty();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with(stdout_layer)
        .init();

    info!("Initializing Chili Demand Forecaster...");

    // 2. Config
    let config = Config::from_env()?;
    info!(
        "Model artifact: {:?}, price range {}..={} (step {})",
        config.model_path, config.price.min, config.price.max, config.price.step
    );

    // 3. Wire the pipeline; the model itself loads lazily on first use
    let service = ForecastService::new(ModelHandle::from_path(&config.model_path), config.insight);
    let session = ForecastSession::new(service, config.price);
    let i18n = I18nService::load(&config.translations_dir, &config.language);

    // 4. Run UI (Blocks Main Thread)
    let native_options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_title("Chili Demand Forecast"),
        ..Default::default()
    };

    eframe::run_native(
        "Chili Demand Forecast",
        native_options,
        Box::new(|_cc| Ok(Box::new(ForecastApp::new(session, i18n)))),
    )
    .map_err(|e| anyhow::anyhow!("Eframe error: {}", e))?;

    Ok(())
}
