use crate::error::{Error, Result};
use crate::surface::Style;

pub const DEFAULT_GENERATIONS: u32 = 10;
pub const DEFAULT_INITIAL_DENSITY: f64 = 0.5;
pub const DEFAULT_STACKING_THRESHOLD: f64 = 0.2;
pub const CELL_SIZE: f64 = 10.0;

/// Tunables for [`crate::generate_background`]. `Default` reproduces the stock look.
#[derive(Clone, Debug, PartialEq)]
pub struct BackgroundConfig {
    pub generations: u32,
    /// Probability that a cell starts out alive, in `[0, 1]`.
    pub initial_density: f64,
    /// Stacking continues while `r / n` exceeds this. Must be positive, or a
    /// cluster would never stop growing.
    pub stacking_threshold: f64,
    pub style: Style,
}

impl Default for BackgroundConfig {
    fn default() -> Self {
        Self {
            generations: DEFAULT_GENERATIONS,
            initial_density: DEFAULT_INITIAL_DENSITY,
            stacking_threshold: DEFAULT_STACKING_THRESHOLD,
            style: Style::default(),
        }
    }
}

impl BackgroundConfig {
    pub fn validate(&self) -> Result<()> {
        validate_density(self.initial_density)?;
        validate_stacking_threshold(self.stacking_threshold)
    }
}

pub(crate) fn validate_density(density: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&density) {
        return Err(Error::InvalidConfig(format!(
            "initial density {} is not a probability",
            density
        )));
    }
    Ok(())
}

// NaN fails the comparison too.
pub(crate) fn validate_stacking_threshold(threshold: f64) -> Result<()> {
    if !(threshold > 0.0 && threshold.is_finite()) {
        return Err(Error::InvalidConfig(format!(
            "stacking threshold {} must be positive and finite",
            threshold
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(BackgroundConfig::default().validate(), Ok(()));
    }

    #[test]
    fn non_positive_threshold_is_rejected() {
        for threshold in [0.0, -0.2, f64::NAN, f64::INFINITY] {
            let config = BackgroundConfig {
                stacking_threshold: threshold,
                ..BackgroundConfig::default()
            };
            assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        }
    }

    #[test]
    fn density_outside_unit_interval_is_rejected() {
        for density in [f64::NAN, -0.1, 1.5] {
            let config = BackgroundConfig {
                initial_density: density,
                ..BackgroundConfig::default()
            };
            assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
        }
        assert!(validate_density(0.0).is_ok());
        assert!(validate_density(1.0).is_ok());
    }
}
