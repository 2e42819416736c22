use std::fmt;

use rand::Rng;

use crate::activation::activation::ActivationFunction;
use crate::layers::layer::{Layer, LayerKind};
use crate::layers::node::Node;

/// A hidden or output layer: every node is connected to every node of the
/// previous layer.
#[derive(Debug, Clone)]
pub struct DenseLayer {
    kind: LayerKind,
    pub nodes: Vec<Node>,
    activation: ActivationFunction,
}

impl DenseLayer {
    /// Allocates `size` nodes, each accepting `input_size` inputs (the node
    /// count of the previous layer) and starting with `bias`.
    pub fn new<R: Rng + ?Sized>(
        kind: LayerKind,
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        bias: f64,
        rng: &mut R,
    ) -> DenseLayer {
        debug_assert_ne!(kind, LayerKind::Input, "input layers are built with InputLayer::new");

        let nodes = (0..size).map(|_| Node::new(input_size, bias, rng)).collect();

        DenseLayer { kind, nodes, activation }
    }

    /// The activation applied by every node of this layer.
    pub fn activator(&self) -> ActivationFunction {
        self.activation
    }

    /// Fan-in of each node.
    pub fn input_size(&self) -> usize {
        self.nodes.first().map_or(0, Node::n_inputs)
    }
}

impl Layer for DenseLayer {
    fn kind(&self) -> LayerKind {
        self.kind
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn output(&self, index: usize) -> f64 {
        self.nodes[index].output
    }

    fn activation(&self) -> Option<ActivationFunction> {
        Some(self.activation)
    }
}

impl fmt::Display for DenseLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?} layer ({} nodes, {:?})", self.kind, self.nodes.len(), self.activation)?;
        for (i, node) in self.nodes.iter().enumerate() {
            writeln!(f, "  [{i}]")?;
            for line in node.to_string().lines() {
                writeln!(f, "    {line}")?;
            }
        }
        Ok(())
    }
}
