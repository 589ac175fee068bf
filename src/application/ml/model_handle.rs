use super::predictor::DemandPredictor;
use super::smartcore_predictor::SmartCorePredictor;
use crate::domain::errors::ModelLoadError;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing::{error, info};

type LoadResult = Result<Box<dyn DemandPredictor>, ModelLoadError>;
type Loader = Box<dyn Fn() -> LoadResult + Send + Sync>;

/// Lazily loaded, process-lifetime model.
///
/// The loader runs on the first `get()` only. Its result, success or
/// failure, is kept for every later call so the artifact is never re-read.
pub struct ModelHandle {
    source: String,
    loader: Loader,
    cell: OnceLock<LoadResult>,
}

impl ModelHandle {
    /// Handle backed by a smartcore artifact on disk
    pub fn from_path(model_path: impl Into<PathBuf>) -> Self {
        let model_path = model_path.into();
        let source = model_path.display().to_string();
        Self::with_loader(source, move || {
            SmartCorePredictor::load(model_path.clone())
                .map(|p| Box::new(p) as Box<dyn DemandPredictor>)
        })
    }

    pub fn with_loader<F>(source: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> LoadResult + Send + Sync + 'static,
    {
        Self {
            source: source.into(),
            loader: Box::new(loader),
            cell: OnceLock::new(),
        }
    }

    /// Handle that is already initialized with `predictor`
    pub fn preloaded(predictor: Box<dyn DemandPredictor>) -> Self {
        let handle = Self::with_loader("preloaded", || {
            Err(ModelLoadError::NotFound {
                path: PathBuf::from("preloaded"),
            })
        });
        let _ = handle.cell.set(Ok(predictor));
        handle
    }

    pub fn get(&self) -> Result<&dyn DemandPredictor, &ModelLoadError> {
        let result = self.cell.get_or_init(|| {
            let loaded = (self.loader)();
            match &loaded {
                Ok(predictor) => info!(
                    "Model ready: {} {} (source: {})",
                    predictor.name(),
                    predictor.version(),
                    self.source
                ),
                Err(e) => error!("Error loading model from {}: {}", self.source, e),
            }
            loaded
        });

        match result {
            Ok(predictor) => Ok(predictor.as_ref()),
            Err(e) => Err(e),
        }
    }

    /// True once a load has been attempted
    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}
