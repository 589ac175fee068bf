//! Business assumption configuration parsing from environment variables.

use super::{EnvLookup, parse_var};
use crate::domain::forecast::InsightParameters;
use anyhow::{Result, bail};

pub fn insight_from_lookup(lookup: EnvLookup<'_>) -> Result<InsightParameters> {
    let defaults = InsightParameters::default();
    let params = InsightParameters {
        stock_buffer_rate: parse_var(lookup, "STOCK_BUFFER_RATE", defaults.stock_buffer_rate)?,
        over_order_rate: parse_var(lookup, "OVER_ORDER_RATE", defaults.over_order_rate)?,
        unit_cost_idr: parse_var(lookup, "UNIT_COST_IDR", defaults.unit_cost_idr)?,
    };

    if !params.stock_buffer_rate.is_finite() || params.stock_buffer_rate < 0.0 {
        bail!("STOCK_BUFFER_RATE must be a non-negative number");
    }
    if !(0.0..=1.0).contains(&params.over_order_rate) {
        bail!("OVER_ORDER_RATE must be between 0 and 1");
    }
    if params.unit_cost_idr < 0 {
        bail!("UNIT_COST_IDR must not be negative");
    }

    Ok(params)
}
