use std::fmt;

use serde::{Serialize, Deserialize};

use crate::activation::activation::ActivationFunction;

/// Role of a layer within the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayerKind {
    Input,
    Hidden,
    Output,
}

/// Read access shared by the input layer and the computed layers.
///
/// The network hands out `&dyn Layer` for navigation and inspection; mutation
/// goes through the concrete `InputLayer` / `DenseLayer` types.
pub trait Layer: fmt::Display {
    fn kind(&self) -> LayerKind;

    /// Number of nodes.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Output of node `index` from the last forward pass.
    fn output(&self, index: usize) -> f64;

    fn outputs(&self) -> Vec<f64> {
        (0..self.len()).map(|j| self.output(j)).collect()
    }

    /// `None` for the input layer.
    fn activation(&self) -> Option<ActivationFunction>;
}
