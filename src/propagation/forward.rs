use tracing::trace;

use crate::activation::activation::ActivationFunction;
use crate::error::{NetError, Result};
use crate::layers::{DenseLayer, InputLayer, Layer, LayerKind, Node};
use crate::network::network::Network;

/// Smallest chain that has an input, a hidden and an output layer.
pub const MIN_LAYERS: usize = 3;

/// Loads one sample into the input slots.
pub fn take_input(input_layer: &mut InputLayer, sample: &[f64]) -> Result<()> {
    if sample.len() != input_layer.len() {
        return Err(NetError::InputLength {
            expected: input_layer.len(),
            found: sample.len(),
        });
    }
    for (node, &value) in input_layer.nodes.iter_mut().zip(sample) {
        node.input = value;
    }
    Ok(())
}

/// Copies every output of `prev` into the inputs of every node of `cur`.
///
/// Node `j` of `prev` feeds input `j` of each node in `cur`; construction
/// guarantees each node of `cur` has exactly `prev.len()` inputs.
pub fn collect_output(prev: &dyn Layer, cur: &mut DenseLayer) {
    for node in cur.nodes.iter_mut() {
        debug_assert_eq!(node.n_inputs(), prev.len());
        let inputs = node.inputs_mut();
        for j in 0..prev.len() {
            inputs[j] = prev.output(j);
        }
    }
}

/// `output = activation(bias + Σ w·x)`, or the bare sum without an activation.
pub fn compute_node(node: &mut Node, activation: Option<ActivationFunction>) {
    let sum = node.weighted_sum();
    node.output = match activation {
        Some(activation) => activation.function(sum),
        None => sum,
    };
}

/// Activation a layer of `kind` computes with: hidden layers are ReLU, the
/// output layer is sigmoid, input slots pass through.
pub fn layer_activation(kind: LayerKind) -> Option<ActivationFunction> {
    match kind {
        LayerKind::Input => None,
        LayerKind::Hidden => Some(ActivationFunction::ReLU),
        LayerKind::Output => Some(ActivationFunction::Sigmoid),
    }
}

/// Computes layer `index` of the network from the outputs of layer `index - 1`.
///
/// The input layer just copies each slot's value to its output.  Callers keep
/// `index < network.layer_count()`.
pub(crate) fn compute_layer(network: &mut Network, index: usize) {
    let (input, dense) = network.parts_mut();

    if index == 0 {
        for node in input.nodes.iter_mut() {
            node.output = node.input;
        }
        return;
    }

    let (before, rest) = dense.split_at_mut(index - 1);
    let layer = &mut rest[0];
    let prev: &dyn Layer = match before.last() {
        Some(prev) => prev as &dyn Layer,
        None => &*input as &dyn Layer,
    };

    collect_output(prev, layer);
    let activation = layer_activation(layer.kind());
    debug_assert_eq!(activation, Some(layer.activator()));
    for node in layer.nodes.iter_mut() {
        compute_node(node, activation);
    }
}

/// Drives `sample` through every layer in order.  Afterwards the output
/// layer's node outputs hold the prediction.
pub fn forward_propagation(network: &mut Network, sample: &[f64]) -> Result<()> {
    let found = network.layer_count();
    if found < MIN_LAYERS {
        return Err(NetError::TooFewLayers { found });
    }

    take_input(network.input_layer_mut(), sample)?;
    for index in 0..found {
        compute_layer(network, index);
    }
    network.mark_propagated();

    trace!(outputs = ?network.outputs(), "forward pass complete");
    Ok(())
}
