use serde::{Serialize, Deserialize};

use crate::error::{NetError, Result};

/// Configuration for a `train_loop` run.
///
/// # Fields
/// - `epochs`        — total number of full passes over the training data
/// - `learning_rate` — gradient-descent step size
/// - `log_interval`  — emit an info-level progress event every N epochs (0 disables)
/// - `shuffle`       — visit samples in a fresh random order each epoch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub epochs: usize,
    pub learning_rate: f64,
    pub log_interval: usize,
    pub shuffle: bool,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            epochs: 1000,
            learning_rate: 0.1,
            log_interval: 100,
            shuffle: false,
        }
    }
}

impl TrainConfig {
    pub fn new(epochs: usize, learning_rate: f64) -> Self {
        TrainConfig { epochs, learning_rate, ..TrainConfig::default() }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(NetError::InvalidConfig(format!(
                "learning_rate must be finite and > 0, got {}",
                self.learning_rate
            )));
        }
        Ok(())
    }

    pub fn load_json(path: &str) -> Result<TrainConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let config: TrainConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learning_rate_must_be_positive() {
        assert!(TrainConfig::new(10, 0.0).validate().is_err());
        assert!(TrainConfig::new(10, f64::NAN).validate().is_err());
        assert!(TrainConfig::new(10, 0.05).validate().is_ok());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: TrainConfig = serde_json::from_str(r#"{ "epochs": 5 }"#).unwrap();
        assert_eq!(config.epochs, 5);
        assert_eq!(config.learning_rate, 0.1);
        assert!(!config.shuffle);
    }
}
