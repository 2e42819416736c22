use std::fmt;

use crate::activation::activation::ActivationFunction;
use crate::layers::layer::{Layer, LayerKind};
use crate::layers::node::InputNode;

/// First layer of every network: one pass-through slot per sample feature.
#[derive(Debug, Clone)]
pub struct InputLayer {
    pub nodes: Vec<InputNode>,
}

impl InputLayer {
    pub fn new(n_nodes: usize) -> InputLayer {
        InputLayer { nodes: vec![InputNode::default(); n_nodes] }
    }
}

impl Layer for InputLayer {
    fn kind(&self) -> LayerKind {
        LayerKind::Input
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn output(&self, index: usize) -> f64 {
        self.nodes[index].output
    }

    fn activation(&self) -> Option<ActivationFunction> {
        None
    }
}

impl fmt::Display for InputLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input layer ({} nodes)", self.nodes.len())?;
        for (i, node) in self.nodes.iter().enumerate() {
            writeln!(f, "  [{i}] {node}")?;
        }
        Ok(())
    }
}
