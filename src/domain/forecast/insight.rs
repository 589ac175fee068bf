//! Business metrics derived from a raw demand forecast.

use crate::domain::errors::PredictionError;
use serde::{Deserialize, Serialize};

/// Assumptions used to turn a forecast into stock and waste figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsightParameters {
    /// Safety margin added on top of the forecast (0.10 = 10%)
    pub stock_buffer_rate: f64,
    /// Share of the forecast that manual ordering typically over-buys
    pub over_order_rate: f64,
    /// Cost of one kg of stock, in IDR
    pub unit_cost_idr: i64,
}

impl Default for InsightParameters {
    fn default() -> Self {
        Self {
            stock_buffer_rate: 0.10,
            over_order_rate: 0.30,
            unit_cost_idr: 30_000,
        }
    }
}

/// Figures rendered after a successful forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessInsight {
    pub predicted_kg: i64,
    pub stock_recommendation_kg: i64,
    pub waste_avoided_kg: i64,
    pub money_saved_idr: i64,
}

impl BusinessInsight {
    /// Derives all display figures from a raw model output.
    ///
    /// Quantities truncate toward zero, so a slightly negative forecast shows
    /// as 0 kg everywhere. Outputs too large for the integer figures are
    /// rejected instead of saturating.
    pub fn derive(prediction: f64, params: &InsightParameters) -> Result<Self, PredictionError> {
        if !prediction.is_finite() {
            return Err(PredictionError::NonFinitePrediction(prediction));
        }

        let predicted_kg = whole_kg(prediction, prediction)?;
        let stock_recommendation_kg =
            whole_kg(prediction * (1.0 + params.stock_buffer_rate), prediction)?;
        let waste_avoided_kg = whole_kg(prediction * params.over_order_rate, prediction)?;
        let money_saved_idr = waste_avoided_kg
            .checked_mul(params.unit_cost_idr)
            .ok_or(PredictionError::OutOfRange(prediction))?;

        Ok(Self {
            predicted_kg,
            stock_recommendation_kg,
            waste_avoided_kg,
            money_saved_idr,
        })
    }
}

/// Truncates toward zero; `i64::MAX as f64` rounds up to 2^63, hence the strict bound.
fn whole_kg(value: f64, prediction: f64) -> Result<i64, PredictionError> {
    let truncated = value.trunc();
    if truncated >= -(i64::MAX as f64) && truncated < i64::MAX as f64 {
        Ok(truncated as i64)
    } else {
        Err(PredictionError::OutOfRange(prediction))
    }
}

/// Formats an integer with comma thousands separators, e.g. `900,000`.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
