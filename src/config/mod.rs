//! Configuration module for the chili forecaster.
//!
//! Values come from environment variables (optionally a `.env` file loaded in
//! `main`), organized by concern: model artifact, price input, business
//! assumptions and UI.

mod form_config;
mod insight_config;

pub use form_config::PriceBounds;

use crate::domain::forecast::InsightParameters;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Source of configuration values, `std::env::var` in production.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

pub const DEFAULT_MODEL_PATH: &str = "model_cabai.json";

/// Main application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub model_path: PathBuf,
    pub price: PriceBounds,
    pub insight: InsightParameters,
    pub translations_dir: PathBuf,
    pub language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            price: PriceBounds::default(),
            insight: InsightParameters::default(),
            translations_dir: PathBuf::from("translations"),
            language: "id".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(&|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self> {
        let model_path = lookup("MODEL_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MODEL_PATH));

        let price = PriceBounds::from_lookup(lookup).context("Failed to load price config")?;
        let insight = insight_config::insight_from_lookup(lookup)
            .context("Failed to load business assumptions")?;

        let translations_dir = lookup("TRANSLATIONS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("translations"));
        let language = lookup("UI_LANGUAGE")
            .map(|l| l.trim().to_lowercase())
            .unwrap_or_else(|| "id".to_string());

        Ok(Self {
            model_path,
            price,
            insight,
            translations_dir,
            language,
        })
    }
}

fn parse_var<T>(lookup: EnvLookup<'_>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Failed to parse {}", key)),
        None => Ok(default),
    }
}
