use crate::domain::errors::PredictionError;
use crate::domain::ml::feature_registry::{FEATURE_NAMES, FeatureVector};

/// Interface for demand forecasting models
pub trait DemandPredictor: Send + Sync {
    /// Predict demand in kg for one feature row
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError>;

    /// Column order the model was trained on
    fn feature_names(&self) -> Vec<String> {
        FEATURE_NAMES.iter().map(|n| n.to_string()).collect()
    }

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}
