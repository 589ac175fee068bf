use chili_forecast::application::forecast_service::{ForecastOutcome, ForecastService, ModelStatus};
use chili_forecast::application::ml::{Estimator, ModelArtifact, ModelHandle};
use chili_forecast::application::session::ForecastSession;
use chili_forecast::config::PriceBounds;
use chili_forecast::domain::forecast::{BusinessInsight, InsightParameters, Season, Weekday};
use chili_forecast::domain::ml::feature_registry::encode;
use smartcore::ensemble::random_forest_regressor::{
    RandomForestRegressor, RandomForestRegressorParameters,
};
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::{LinearRegression, LinearRegressionParameters};
use std::path::Path;

fn forest_artifact() -> ModelArtifact {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for season in Season::all() {
        for day in Weekday::all() {
            for price in [15_000u32, 45_000, 120_000] {
                let holiday_boost = if season.is_holiday() { 60.0 } else { 0.0 };
                x.push(encode(price, day, season).to_row());
                y.push(180.0 - price as f64 / 1_000.0 + holiday_boost);
            }
        }
    }
    let matrix = DenseMatrix::from_2d_vec(&x).unwrap();
    let params = RandomForestRegressorParameters::default()
        .with_n_trees(20)
        .with_max_depth(8)
        .with_min_samples_split(2);
    let model = RandomForestRegressor::fit(&matrix, &y, params).unwrap();
    ModelArtifact::new(Estimator::RandomForest(model))
}

/// Linear model on well-conditioned synthetic rows: y = 2 + 0.001 * price + 3 * DayOfWeek
fn linear_artifact() -> ModelArtifact {
    let mut x = Vec::new();
    let mut y = Vec::new();
    for i in 0..60u32 {
        let price = 10_000.0 + ((i * 3_700) % 140_000) as f64;
        let row = vec![
            price,
            ((i * 7) % 5) as f64,
            (i % 7) as f64,
            ((i * 3) % 4) as f64,
            ((i * 5) % 6) as f64,
            (i % 3) as f64,
        ];
        y.push(2.0 + 0.001 * price + 3.0 * row[2]);
        x.push(row);
    }
    let matrix = DenseMatrix::from_2d_vec(&x).unwrap();
    let model = LinearRegression::fit(&matrix, &y, LinearRegressionParameters::default()).unwrap();
    ModelArtifact::new(Estimator::Linear(model))
}

fn session_for(path: &Path) -> ForecastSession {
    let service = ForecastService::new(ModelHandle::from_path(path), InsightParameters::default());
    ForecastSession::new(service, PriceBounds::default())
}

#[test]
fn test_forest_artifact_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model_cabai.json");
    forest_artifact().save(&path).unwrap();

    let mut session = session_for(&path);
    assert!(matches!(session.model_status(), ModelStatus::Ready { .. }));

    match session.submit().clone() {
        ForecastOutcome::Success {
            features,
            raw_prediction,
            insight,
            ..
        } => {
            assert_eq!(features.values(), &[45_000.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
            assert!(raw_prediction > 0.0 && raw_prediction < 300.0);
            assert_eq!(
                insight,
                BusinessInsight::derive(raw_prediction, &InsightParameters::default()).unwrap()
            );
            assert!(insight.stock_recommendation_kg >= insight.predicted_kg);
            assert_eq!(insight.money_saved_idr, insight.waste_avoided_kg * 30_000);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_linear_artifact_prediction_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("linear.json");
    linear_artifact().save(&path).unwrap();

    let mut session = session_for(&path);
    session.form.weekday = Weekday::Wednesday;
    session.form.price_per_kg = 50_000;

    match session.submit() {
        ForecastOutcome::Success { raw_prediction, .. } => {
            // 2 + 50 + 3 * 2
            assert!((raw_prediction - 58.0).abs() < 1e-3, "{raw_prediction}");
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}

#[test]
fn test_missing_model_then_fresh_handle_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model_cabai.json");

    let mut broken = session_for(&path);
    assert!(matches!(
        broken.submit(),
        ForecastOutcome::ModelUnavailable { .. }
    ));

    // Writing the file later does not help the cached failure
    forest_artifact().save(&path).unwrap();
    assert!(matches!(
        broken.submit(),
        ForecastOutcome::ModelUnavailable { .. }
    ));

    // A new process (new handle) picks it up
    let mut fresh = session_for(&path);
    assert!(fresh.submit().is_success());
}

#[test]
fn test_drifted_artifact_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drifted.json");
    let mut artifact = forest_artifact();
    artifact.feature_names.swap(0, 1);
    artifact.save(&path).unwrap();

    let session = session_for(&path);
    match session.model_status() {
        ModelStatus::Unavailable { reason } => assert!(reason.contains("schema"), "{reason}"),
        other => panic!("unexpected status: {:?}", other),
    }
}

#[test]
fn test_idul_adha_request_reaches_model_as_reference_category() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model_cabai.json");
    forest_artifact().save(&path).unwrap();

    let mut session = session_for(&path);
    session.form.season = Season::IdulAdha;

    match session.submit() {
        ForecastOutcome::Success { features, .. } => {
            assert_eq!(features.get("Is_Holiday_Season"), Some(1.0));
            assert_eq!(&features.values()[3..], &[0.0, 0.0, 0.0]);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }
}
