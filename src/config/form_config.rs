//! Price input configuration parsing from environment variables.
//!
//! The bounds drive the numeric widget and the clamping applied before a
//! request reaches the encoder.

use super::{EnvLookup, parse_var};
use anyhow::{Result, bail};

/// Closed range, step and initial value of the price widget (IDR per kg)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBounds {
    pub min: u32,
    pub max: u32,
    pub step: u32,
    pub default: u32,
}

impl Default for PriceBounds {
    fn default() -> Self {
        Self {
            min: 10_000,
            max: 150_000,
            step: 1_000,
            default: 45_000,
        }
    }
}

impl PriceBounds {
    pub fn from_lookup(lookup: EnvLookup<'_>) -> Result<Self> {
        let defaults = Self::default();
        let bounds = Self {
            min: parse_var(lookup, "PRICE_MIN", defaults.min)?,
            max: parse_var(lookup, "PRICE_MAX", defaults.max)?,
            step: parse_var(lookup, "PRICE_STEP", defaults.step)?,
            default: parse_var(lookup, "PRICE_DEFAULT", defaults.default)?,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min == 0 {
            bail!("PRICE_MIN must be positive");
        }
        if self.min >= self.max {
            bail!(
                "PRICE_MIN ({}) must be lower than PRICE_MAX ({})",
                self.min,
                self.max
            );
        }
        if self.step == 0 {
            bail!("PRICE_STEP must be greater than zero");
        }
        if !(self.min..=self.max).contains(&self.default) {
            bail!(
                "PRICE_DEFAULT ({}) must lie within {}..={}",
                self.default,
                self.min,
                self.max
            );
        }
        Ok(())
    }

    /// Clamps into range and snaps to the nearest step counted from `min`.
    pub fn clamp(&self, value: u32) -> u32 {
        let bounded = value.clamp(self.min, self.max);
        let offset = bounded - self.min;
        let steps = (offset + self.step / 2) / self.step;
        self.min
            .saturating_add(steps.saturating_mul(self.step))
            .min(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_snaps_to_step() {
        let bounds = PriceBounds::default();
        assert_eq!(bounds.clamp(45_000), 45_000);
        assert_eq!(bounds.clamp(45_400), 45_000);
        assert_eq!(bounds.clamp(45_500), 46_000);
        assert_eq!(bounds.clamp(5_000), 10_000);
        assert_eq!(bounds.clamp(1_000_000), 150_000);
    }

    #[test]
    fn test_clamp_never_exceeds_max_with_uneven_step() {
        let bounds = PriceBounds {
            min: 10_000,
            max: 15_500,
            step: 1_000,
            default: 12_000,
        };
        assert_eq!(bounds.clamp(15_500), 15_500);
        assert_eq!(bounds.clamp(99_000), 15_500);
        assert_eq!(bounds.clamp(15_400), 15_000);
    }

    #[test]
    fn test_validation() {
        assert!(PriceBounds::default().validate().is_ok());

        let inverted = PriceBounds {
            min: 50_000,
            max: 10_000,
            ..PriceBounds::default()
        };
        assert!(inverted.validate().is_err());

        let zero_step = PriceBounds {
            step: 0,
            ..PriceBounds::default()
        };
        assert!(zero_step.validate().is_err());

        let outside = PriceBounds {
            default: 200_000,
            ..PriceBounds::default()
        };
        assert!(outside.validate().is_err());
    }
}
