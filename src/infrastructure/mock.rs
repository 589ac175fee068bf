use crate::application::ml::predictor::DemandPredictor;
use crate::domain::errors::PredictionError;
use crate::domain::ml::feature_registry::FeatureVector;

#[derive(Debug, Clone)]
enum MockBehavior {
    Constant(f64),
    /// demand = intercept + slope * price
    PriceSensitive { intercept: f64, slope: f64 },
    Fail(String),
}

/// In-memory predictor for service and handle tests.
#[derive(Debug)]
pub struct MockDemandPredictor {
    behavior: MockBehavior,
    feature_names: Option<Vec<String>>,
}

impl MockDemandPredictor {
    fn with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            feature_names: None,
        }
    }

    pub fn constant(value: f64) -> Self {
        Self::with_behavior(MockBehavior::Constant(value))
    }

    pub fn price_sensitive(intercept: f64, slope: f64) -> Self {
        Self::with_behavior(MockBehavior::PriceSensitive { intercept, slope })
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_behavior(MockBehavior::Fail(message.into()))
    }

    /// Pretend the model was trained on a different column list
    pub fn with_feature_names(mut self, names: Vec<String>) -> Self {
        self.feature_names = Some(names);
        self
    }
}

impl DemandPredictor for MockDemandPredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        match &self.behavior {
            MockBehavior::Constant(value) => Ok(*value),
            MockBehavior::PriceSensitive { intercept, slope } => {
                Ok(intercept + slope * features.values()[0])
            }
            MockBehavior::Fail(message) => Err(PredictionError::Inference(message.clone())),
        }
    }

    fn feature_names(&self) -> Vec<String> {
        match &self.feature_names {
            Some(names) => names.clone(),
            None => crate::domain::ml::feature_registry::FEATURE_NAMES
                .iter()
                .map(|n| n.to_string())
                .collect(),
        }
    }

    fn name(&self) -> &str {
        "Mock"
    }

    fn version(&self) -> &str {
        "test"
    }
}
