use super::predictor::DemandPredictor;
use crate::domain::errors::{ModelLoadError, PredictionError};
use crate::domain::ml::feature_registry::{self, FEATURE_NAMES, FeatureVector};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use smartcore::ensemble::random_forest_regressor::RandomForestRegressor;
use smartcore::linalg::basic::matrix::DenseMatrix;
use smartcore::linear::linear_regression::LinearRegression;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::info;

type Forest = RandomForestRegressor<f64, f64, DenseMatrix<f64>, Vec<f64>>;
type Linear = LinearRegression<f64, f64, DenseMatrix<f64>, Vec<f64>>;

/// Fitted smartcore estimator stored inside an artifact
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", content = "model", rename_all = "snake_case")]
pub enum Estimator {
    RandomForest(Forest),
    Linear(Linear),
}

impl Estimator {
    fn predict_row(&self, row: Vec<f64>) -> Result<f64, PredictionError> {
        let input = DenseMatrix::from_2d_vec(&vec![row])
            .map_err(|e| PredictionError::Matrix(e.to_string()))?;

        let predictions = match self {
            Estimator::RandomForest(model) => model.predict(&input),
            Estimator::Linear(model) => model.predict(&input),
        }
        .map_err(|e| PredictionError::Inference(e.to_string()))?;

        predictions
            .first()
            .copied()
            .ok_or(PredictionError::EmptyOutput)
    }

    fn kind(&self) -> &'static str {
        match self {
            Estimator::RandomForest(_) => "SmartCore Random Forest",
            Estimator::Linear(_) => "SmartCore Linear Regression",
        }
    }
}

fn default_version() -> String {
    "v1.0".to_string()
}

/// On-disk model file: the estimator plus the column list it was fitted on.
#[derive(Serialize, Deserialize)]
pub struct ModelArtifact {
    pub feature_names: Vec<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default = "default_version")]
    pub version: String,
    pub estimator: Estimator,
}

impl ModelArtifact {
    /// Wraps an estimator fitted on `FEATURE_NAMES` columns.
    pub fn new(estimator: Estimator) -> Self {
        Self {
            feature_names: FEATURE_NAMES.iter().map(|n| n.to_string()).collect(),
            target: Some("Qty_Kg".to_string()),
            version: default_version(),
            estimator,
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let mut file =
            File::create(path).with_context(|| format!("Failed to create {:?}", path))?;
        serde_json::to_writer(&mut file, self)
            .context("Failed to serialize model artifact")?;
        info!("Saved model artifact to {:?}", path);
        Ok(())
    }
}

pub struct SmartCorePredictor {
    artifact: ModelArtifact,
    model_path: PathBuf,
}

impl SmartCorePredictor {
    /// Reads and validates the artifact. Fails on a missing file, bad JSON
    /// or a column list that differs from `FEATURE_NAMES`.
    pub fn load(model_path: impl Into<PathBuf>) -> Result<Self, ModelLoadError> {
        let model_path = model_path.into();
        if !model_path.exists() {
            return Err(ModelLoadError::NotFound { path: model_path });
        }

        let buffer = fs::read(&model_path).map_err(|source| ModelLoadError::Io {
            path: model_path.clone(),
            source,
        })?;

        let artifact: ModelArtifact =
            serde_json::from_slice(&buffer).map_err(|source| ModelLoadError::Deserialize {
                path: model_path.clone(),
                source,
            })?;

        feature_registry::ensure_schema(&artifact.feature_names[..])?;

        info!(
            "Successfully loaded {} ({}) from {:?}",
            artifact.estimator.kind(),
            artifact.version,
            model_path
        );
        Ok(Self {
            artifact,
            model_path,
        })
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

impl DemandPredictor for SmartCorePredictor {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictionError> {
        self.artifact.estimator.predict_row(features.to_row())
    }

    fn feature_names(&self) -> Vec<String> {
        self.artifact.feature_names.clone()
    }

    fn name(&self) -> &str {
        self.artifact.estimator.kind()
    }

    fn version(&self) -> &str {
        &self.artifact.version
    }
}
