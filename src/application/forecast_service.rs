//! Trigger path of the form: encode, predict, derive.

use crate::application::ml::model_handle::ModelHandle;
use crate::application::ml::predictor::DemandPredictor;
use crate::domain::errors::PredictionError;
use crate::domain::forecast::{BusinessInsight, InsightParameters, PredictionRequest};
use crate::domain::ml::feature_registry::{self, FeatureVector};
use chrono::{DateTime, Utc};
use tracing::{error, info, warn};

/// Result of one press of the forecast button
#[derive(Debug, Clone, PartialEq)]
pub enum ForecastOutcome {
    Success {
        request: PredictionRequest,
        features: FeatureVector,
        raw_prediction: f64,
        insight: BusinessInsight,
        computed_at: DateTime<Utc>,
    },
    /// The model could not be loaded; nothing was evaluated
    ModelUnavailable { reason: String },
    /// Inference or post-processing failed for this row
    Failed {
        message: String,
        features: FeatureVector,
    },
}

impl ForecastOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, ForecastOutcome::Success { .. })
    }

    pub fn insight(&self) -> Option<&BusinessInsight> {
        match self {
            ForecastOutcome::Success { insight, .. } => Some(insight),
            _ => None,
        }
    }
}

/// Model loading status for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelStatus {
    Ready { name: String, version: String },
    Unavailable { reason: String },
}

pub struct ForecastService {
    model: ModelHandle,
    params: InsightParameters,
}

impl ForecastService {
    pub fn new(model: ModelHandle, params: InsightParameters) -> Self {
        Self { model, params }
    }

    pub fn params(&self) -> &InsightParameters {
        &self.params
    }

    /// Forces the lazy load and reports its result
    pub fn model_status(&self) -> ModelStatus {
        match self.model.get() {
            Ok(predictor) => ModelStatus::Ready {
                name: predictor.name().to_string(),
                version: predictor.version().to_string(),
            },
            Err(e) => ModelStatus::Unavailable {
                reason: e.to_string(),
            },
        }
    }

    /// Evaluates one request. Never panics on model or input errors.
    pub fn forecast(&self, request: &PredictionRequest) -> ForecastOutcome {
        let predictor = match self.model.get() {
            Ok(p) => p,
            Err(e) => {
                warn!("Forecast requested but model is not loaded: {}", e);
                return ForecastOutcome::ModelUnavailable {
                    reason: e.to_string(),
                };
            }
        };

        let features = feature_registry::encode_request(request);

        let evaluated = self.predict(predictor, &features).and_then(|raw_prediction| {
            BusinessInsight::derive(raw_prediction, &self.params)
                .map(|insight| (raw_prediction, insight))
        });

        match evaluated {
            Ok((raw_prediction, insight)) => {
                info!(
                    "Forecast {} / {} / Rp {}: {} kg (stock {} kg)",
                    request.season,
                    request.day_of_week,
                    request.price_per_kg,
                    insight.predicted_kg,
                    insight.stock_recommendation_kg
                );
                ForecastOutcome::Success {
                    request: *request,
                    features,
                    raw_prediction,
                    insight,
                    computed_at: Utc::now(),
                }
            }
            Err(e) => {
                error!("Prediction failed for [{}]: {}", features, e);
                ForecastOutcome::Failed {
                    message: e.to_string(),
                    features,
                }
            }
        }
    }

    fn predict(
        &self,
        predictor: &dyn DemandPredictor,
        features: &FeatureVector,
    ) -> Result<f64, PredictionError> {
        feature_registry::ensure_schema(&predictor.feature_names()[..])?;

        let prediction = predictor.predict(features)?;
        if !prediction.is_finite() {
            return Err(PredictionError::NonFinitePrediction(prediction));
        }
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forecast::{Season, Weekday};
    use crate::domain::errors::ModelLoadError;
    use crate::infrastructure::mock::MockDemandPredictor;
    use std::path::PathBuf;

    fn request(season: Season) -> PredictionRequest {
        PredictionRequest {
            price_per_kg: 45_000,
            day_of_week: Weekday::Monday,
            season,
        }
    }

    fn service_with(mock: MockDemandPredictor) -> ForecastService {
        ForecastService::new(
            ModelHandle::preloaded(Box::new(mock)),
            InsightParameters::default(),
        )
    }

    #[test]
    fn test_successful_forecast() {
        let service = service_with(MockDemandPredictor::constant(100.4));
        let outcome = service.forecast(&request(Season::Normal));

        match outcome {
            ForecastOutcome::Success {
                features,
                insight,
                raw_prediction,
                ..
            } => {
                assert_eq!(features.values(), &[45_000.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
                assert!((raw_prediction - 100.4).abs() < 1e-9);
                assert_eq!(insight.predicted_kg, 100);
                assert_eq!(insight.stock_recommendation_kg, 110);
                assert_eq!(insight.waste_avoided_kg, 30);
                assert_eq!(insight.money_saved_idr, 900_000);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_unavailable_model_warns_without_evaluating() {
        let handle = ModelHandle::with_loader("model_cabai.json", || {
            Err(ModelLoadError::NotFound {
                path: PathBuf::from("model_cabai.json"),
            })
        });
        let service = ForecastService::new(handle, InsightParameters::default());

        let outcome = service.forecast(&request(Season::Lebaran));
        assert!(matches!(outcome, ForecastOutcome::ModelUnavailable { .. }));
        assert!(matches!(
            service.model_status(),
            ModelStatus::Unavailable { .. }
        ));
    }

    #[test]
    fn test_inference_failure_reports_row() {
        let service = service_with(MockDemandPredictor::failing("booster exploded"));
        let outcome = service.forecast(&request(Season::IdulAdha));

        match outcome {
            ForecastOutcome::Failed { message, features } => {
                assert!(message.contains("booster exploded"));
                assert_eq!(features.get("Is_Holiday_Season"), Some(1.0));
                assert_eq!(&features.values()[3..], &[0.0, 0.0, 0.0]);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_schema_drift_fails_the_forecast() {
        let mock = MockDemandPredictor::constant(10.0)
            .with_feature_names(vec!["Harga_Per_Kg".to_string(), "DayOfWeek".to_string()]);
        let service = service_with(mock);

        let outcome = service.forecast(&request(Season::Nataru));
        match outcome {
            ForecastOutcome::Failed { message, .. } => {
                assert!(message.contains("schema mismatch"), "{message}")
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_non_finite_prediction_is_an_error() {
        let service = service_with(MockDemandPredictor::constant(f64::NAN));
        let outcome = service.forecast(&request(Season::Normal));
        assert!(matches!(outcome, ForecastOutcome::Failed { .. }));
    }

    #[test]
    fn test_out_of_range_prediction_fails_with_row() {
        let service = service_with(MockDemandPredictor::constant(1e300));
        let outcome = service.forecast(&request(Season::Lebaran));

        match outcome {
            ForecastOutcome::Failed { message, features } => {
                assert!(message.contains("outside the displayable range"), "{message}");
                assert_eq!(features.values(), &[45_000.0, 1.0, 0.0, 1.0, 0.0, 0.0]);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_negative_prediction_shows_zero_figures() {
        let service = service_with(MockDemandPredictor::constant(-0.5));
        let outcome = service.forecast(&request(Season::Normal));

        assert_eq!(
            outcome.insight(),
            Some(&BusinessInsight {
                predicted_kg: 0,
                stock_recommendation_kg: 0,
                waste_avoided_kg: 0,
                money_saved_idr: 0,
            })
        );
    }

    #[test]
    fn test_repeated_forecasts_are_independent() {
        let service = service_with(MockDemandPredictor::price_sensitive(200.0, -0.002));

        let first = service.forecast(&request(Season::Normal));
        let second = service.forecast(&request(Season::Normal));
        assert_eq!(first.insight(), second.insight());
        // 200 - 0.002 * 45000 = 110
        assert_eq!(first.insight().map(|i| i.predicted_kg), Some(110));
    }
}
