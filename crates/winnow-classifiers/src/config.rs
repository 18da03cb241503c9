use std::fmt;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{Result, WinnowError};

/// Hyper-parameters of the Balanced Winnow update rule.
///
/// Missing fields fall back to their defaults when deserializing, so a
/// config file may only list the values it overrides.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct WinnowConfig {
    /// Multiplier (> 1) applied to the model that should have been trusted more.
    pub promotion: f64,
    /// Multiplier in (0, 1) applied to the model that caused the mistake.
    pub demotion: f64,
    /// Margin offset; also scales the initial weights.
    pub threshold: f64,
}

impl WinnowConfig {
    pub const DEFAULT_PROMOTION: f64 = 1.5;
    pub const DEFAULT_DEMOTION: f64 = 0.5;
    pub const DEFAULT_THRESHOLD: f64 = 1.0;

    pub fn new(promotion: f64, demotion: f64, threshold: f64) -> Self {
        Self {
            promotion,
            demotion,
            threshold,
        }
    }

    /// Check every hyper-parameter, reporting the first invalid one.
    pub fn validate(&self) -> Result<()> {
        validate_promotion(self.promotion)?;
        validate_demotion(self.demotion)?;
        validate_threshold(self.threshold)?;
        Ok(())
    }
}

impl Default for WinnowConfig {
    fn default() -> Self {
        Self {
            promotion: Self::DEFAULT_PROMOTION,
            demotion: Self::DEFAULT_DEMOTION,
            threshold: Self::DEFAULT_THRESHOLD,
        }
    }
}

impl fmt::Display for WinnowConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "promotion={:?}, demotion={:?}, threshold={:?}",
            self.promotion, self.demotion, self.threshold
        )
    }
}

pub(crate) fn validate_promotion(value: f64) -> Result<()> {
    if value.is_finite() && value > 1.0 {
        Ok(())
    } else {
        Err(WinnowError::InvalidPromotion(value))
    }
}

pub(crate) fn validate_demotion(value: f64) -> Result<()> {
    if value > 0.0 && value < 1.0 {
        Ok(())
    } else {
        Err(WinnowError::InvalidDemotion(value))
    }
}

pub(crate) fn validate_threshold(value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(WinnowError::InvalidThreshold(value))
    }
}

/// Load a `WinnowConfig` from a JSON file and validate it.
pub fn load_config<P: AsRef<Path>>(path: P) -> anyhow::Result<WinnowConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: WinnowConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid config: {}", path.as_ref().display()))?;
    log::debug!("Loaded winnow config ({}) from {}", config, path.as_ref().display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = WinnowConfig::default();
        assert_eq!(config.promotion, 1.5);
        assert_eq!(config.demotion, 0.5);
        assert_eq!(config.threshold, 1.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_promotion_not_above_one() {
        let config = WinnowConfig::new(1.0, 0.5, 1.0);
        assert_eq!(config.validate(), Err(WinnowError::InvalidPromotion(1.0)));
    }

    #[test]
    fn rejects_demotion_outside_unit_interval() {
        assert_eq!(
            WinnowConfig::new(1.5, 1.0, 1.0).validate(),
            Err(WinnowError::InvalidDemotion(1.0))
        );
        assert_eq!(
            WinnowConfig::new(1.5, 0.0, 1.0).validate(),
            Err(WinnowError::InvalidDemotion(0.0))
        );
    }

    #[test]
    fn rejects_only_non_finite_threshold() {
        assert!(WinnowConfig::new(1.5, 0.5, f64::NAN).validate().is_err());
        assert_eq!(
            WinnowConfig::new(1.5, 0.5, f64::INFINITY).validate(),
            Err(WinnowError::InvalidThreshold(f64::INFINITY))
        );
        assert!(WinnowConfig::new(1.5, 0.5, 0.0).validate().is_ok());
        assert!(WinnowConfig::new(1.5, 0.5, -1.0).validate().is_ok());
    }

    #[test]
    fn display_keeps_decimal_point() {
        assert_eq!(
            WinnowConfig::default().to_string(),
            "promotion=1.5, demotion=0.5, threshold=1.0"
        );
    }

    #[test]
    fn partial_json_uses_defaults() {
        let config: WinnowConfig = serde_json::from_str(r#"{"threshold": 2.0}"#).unwrap();
        assert_eq!(config.promotion, 1.5);
        assert_eq!(config.demotion, 0.5);
        assert_eq!(config.threshold, 2.0);
    }
}
