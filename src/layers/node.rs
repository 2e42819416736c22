use std::fmt;

use rand::Rng;

use crate::math::init::xavier_init;

/// A computed neuron: weighted sum of its inputs plus a bias, then an activation.
///
/// `weights` and `inputs` are sized once at construction and only ever
/// exposed as slices, so their length always equals the declared fan-in.
#[derive(Debug, Clone)]
pub struct Node {
    pub bias: f64,
    weights: Vec<f64>,
    inputs: Vec<f64>,
    /// Activation computed by the last forward pass.
    pub output: f64,
    /// Error term computed by the last back-propagation; 0 until then.
    pub delta: f64,
}

impl Node {
    /// Zero-filled inputs, Xavier-initialized weights, `output = delta = 0`.
    pub fn new<R: Rng + ?Sized>(n_inputs: usize, bias: f64, rng: &mut R) -> Node {
        let weights = (0..n_inputs).map(|_| xavier_init(rng, n_inputs)).collect();

        Node {
            bias,
            weights,
            inputs: vec![0.0; n_inputs],
            output: 0.0,
            delta: 0.0,
        }
    }

    pub fn n_inputs(&self) -> usize {
        self.inputs.len()
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn weights_mut(&mut self) -> &mut [f64] {
        &mut self.weights
    }

    pub fn inputs(&self) -> &[f64] {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut [f64] {
        &mut self.inputs
    }

    /// `Σ weights[k] * inputs[k] + bias`
    pub fn weighted_sum(&self) -> f64 {
        let dot: f64 = self.weights.iter().zip(self.inputs.iter())
            .map(|(w, x)| w * x)
            .sum();
        dot + self.bias
    }

    /// One gradient-descent step using the stored delta and last-seen inputs.
    pub fn descend(&mut self, learning_rate: f64) {
        let step = learning_rate * self.delta;
        for (w, x) in self.weights.iter_mut().zip(self.inputs.iter()) {
            *w -= step * x;
        }
        self.bias -= step;
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "inputs:  {}", join(&self.inputs))?;
        writeln!(f, "weights: {}", join(&self.weights))?;
        write!(f, "bias: {:.6}  output: {:.6}  delta: {:.6}", self.bias, self.output, self.delta)
    }
}

/// A slot of the input layer.  Holds one external sample value and passes it
/// through unchanged; it has no weights or bias.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputNode {
    pub input: f64,
    pub output: f64,
}

impl fmt::Display for InputNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input: {:.6}  output: {:.6}", self.input, self.output)
    }
}

fn join(values: &[f64]) -> String {
    values.iter()
        .map(|v| format!("{v:.6}"))
        .collect::<Vec<_>>()
        .join(" ")
}
