use serde::{Serialize, Deserialize};
use std::f64::consts::E;

/// Rectified linear unit: `max(0, x)`.
pub fn relu(x: f64) -> f64 {
    if x > 0.0 { x } else { 0.0 }
}

/// `1` for positive `x`, `0` otherwise (including exactly zero).
pub fn relu_derivative(x: f64) -> f64 {
    if x > 0.0 { 1.0 } else { 0.0 }
}

pub fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + E.powf(-x))
}

/// `sigmoid(x) * (1 - sigmoid(x))`.
///
/// Back-propagation calls this with a node's *output*, which for a sigmoid
/// layer is already `sigmoid(z)`, so the squashing is applied twice.
pub fn sigmoid_derivative(x: f64) -> f64 {
    let s = sigmoid(x);
    s * (1.0 - s)
}

/// Activation carried by every hidden or output layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivationFunction {
    ReLU,
    Sigmoid,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::ReLU => relu(x),
            ActivationFunction::Sigmoid => sigmoid(x),
        }
    }

    /// Derivative evaluated on an already-activated node output.
    pub fn derivative(&self, output: f64) -> f64 {
        match self {
            ActivationFunction::ReLU => relu_derivative(output),
            ActivationFunction::Sigmoid => sigmoid_derivative(output),
        }
    }
}
