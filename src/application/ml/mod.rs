pub mod model_handle;
pub mod predictor;
pub mod smartcore_predictor;

pub use model_handle::ModelHandle;
pub use predictor::DemandPredictor;
pub use smartcore_predictor::{Estimator, ModelArtifact, SmartCorePredictor};
