use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;
use crate::error::{NetError, Result};

/// Initial bias given to every computed node.
pub const DEFAULT_BIAS: f64 = 1.0;

/// A serializable description of a network topology.
///
/// Fields:
/// - `layer_count`       — total layers including input and output (≥ 3 to run)
/// - `input_size`        — nodes in the input layer (one per sample feature)
/// - `hidden_size`       — nodes in every hidden layer
/// - `output_size`       — nodes in the output layer
/// - `hidden_activation` — activation shared by all hidden layers (ReLU)
/// - `output_activation` — activation of the output layer (sigmoid)
/// - `initial_bias`      — starting bias of every hidden/output node
///
/// Missing fields in a JSON file fall back to `NetworkSpec::default()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSpec {
    pub layer_count: usize,
    pub input_size: usize,
    pub hidden_size: usize,
    pub output_size: usize,
    pub hidden_activation: ActivationFunction,
    pub output_activation: ActivationFunction,
    pub initial_bias: f64,
}

impl Default for NetworkSpec {
    fn default() -> Self {
        NetworkSpec {
            layer_count: 6,
            input_size: 4,
            hidden_size: 4,
            output_size: 1,
            hidden_activation: ActivationFunction::ReLU,
            output_activation: ActivationFunction::Sigmoid,
            initial_bias: DEFAULT_BIAS,
        }
    }
}

impl NetworkSpec {
    /// Checks what construction needs.  A `layer_count` of 1 or 2 is accepted
    /// here and rejected by forward propagation instead.
    ///
    /// Hidden layers always compute with ReLU and the output layer with
    /// sigmoid, so any other choice is refused rather than stored on a layer
    /// that would never use it.
    pub fn validate(&self) -> Result<()> {
        if self.layer_count == 0 {
            return Err(NetError::InvalidConfig(
                "layer_count must be at least 1 (the input layer)".to_string(),
            ));
        }
        for (name, size) in [
            ("input_size", self.input_size),
            ("hidden_size", self.hidden_size),
            ("output_size", self.output_size),
        ] {
            if size == 0 {
                return Err(NetError::InvalidConfig(format!("{name} must be at least 1")));
            }
        }
        if self.hidden_activation != ActivationFunction::ReLU {
            return Err(NetError::InvalidConfig(format!(
                "hidden layers use ReLU, got {:?}",
                self.hidden_activation
            )));
        }
        if self.output_activation != ActivationFunction::Sigmoid {
            return Err(NetError::InvalidConfig(format!(
                "the output layer uses Sigmoid, got {:?}",
                self.output_activation
            )));
        }
        if !self.initial_bias.is_finite() {
            return Err(NetError::InvalidConfig(format!(
                "initial_bias must be finite, got {}",
                self.initial_bias
            )));
        }
        Ok(())
    }

    /// Serializes the spec to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    /// Deserializes and validates a `NetworkSpec` from a JSON file.
    pub fn load_json(path: &str) -> Result<NetworkSpec> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        let spec: NetworkSpec = serde_json::from_reader(reader)?;
        spec.validate()?;
        Ok(spec)
    }
}
