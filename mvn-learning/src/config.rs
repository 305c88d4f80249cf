//! Training configuration

use crate::error::{LearningError, LearningResult};
use serde::{Deserialize, Serialize};

/// Parameters of a training run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Learning rate handed to every correction
    pub learning_rate: f64,
    /// Upper bound on epochs for the `train_until_*` loops
    pub max_epochs: usize,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            learning_rate: 1.0,
            max_epochs: 10_000,
        }
    }
}

impl TrainingConfig {
    pub fn from_json(json: &str) -> LearningResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> LearningResult<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(LearningError::Config(format!(
                "learning rate must be finite and positive, got {}",
                self.learning_rate
            )));
        }
        if self.max_epochs == 0 {
            return Err(LearningError::Config("max_epochs must be at least 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrainingConfig::default();
        assert_eq!(config.learning_rate, 1.0);
        assert_eq!(config.max_epochs, 10_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = TrainingConfig::from_json(r#"{"max_epochs": 50}"#).unwrap();
        assert_eq!(config.max_epochs, 50);
        assert_eq!(config.learning_rate, 1.0);
    }

    #[test]
    fn test_invalid_config() {
        assert!(TrainingConfig::from_json(r#"{"learning_rate": -0.5}"#).is_err());
        assert!(TrainingConfig::from_json(r#"{"max_epochs": 0}"#).is_err());
        assert!(matches!(
            TrainingConfig::from_json("not json"),
            Err(LearningError::Config(_))
        ));
    }
}
