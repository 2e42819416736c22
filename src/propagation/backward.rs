use tracing::trace;

use crate::activation::sigmoid_derivative;
use crate::error::{NetError, Result};
use crate::layers::{DenseLayer, Layer};
use crate::loss::mse::MseLoss;
use crate::network::network::Network;
use crate::propagation::forward::MIN_LAYERS;

/// Back-propagation reads the outputs of a completed forward pass on a
/// network long enough to have run one.
fn ensure_propagated(network: &Network) -> Result<()> {
    let found = network.layer_count();
    if found < MIN_LAYERS {
        return Err(NetError::TooFewLayers { found });
    }
    if !network.has_propagated() {
        return Err(NetError::NotPropagated);
    }
    Ok(())
}

fn ensure_targets(network: &Network, targets: &[f64]) -> Result<()> {
    let expected = network.output_layer().len();
    if targets.len() != expected {
        return Err(NetError::TargetLength { expected, found: targets.len() });
    }
    Ok(())
}

/// Mean squared error of the current outputs against `targets`.  Read-only.
pub fn mean_squared_error(network: &Network, targets: &[f64]) -> Result<f64> {
    ensure_targets(network, targets)?;
    Ok(MseLoss::loss(&network.outputs(), targets))
}

/// Output-layer error terms: `delta = (output - target) * sigmoid_derivative(output)`.
///
/// The derivative is taken of the already-activated output.
pub fn calculate_delta(network: &mut Network, targets: &[f64]) -> Result<()> {
    ensure_propagated(network)?;
    ensure_targets(network, targets)?;

    let Some(output) = network.dense_layers_mut().last_mut() else {
        return Err(NetError::TooFewLayers { found: 1 });
    };

    let errors = MseLoss::derivative(&output.outputs(), targets);
    for (node, error) in output.nodes.iter_mut().zip(errors) {
        node.delta = error * sigmoid_derivative(node.output);
    }
    Ok(())
}

/// Node `j` of `current` receives the deltas of `next` weighted by the
/// connections leaving it: `delta_j = Σ_k w_kj · delta_k · f'(output_j)`,
/// where `f'` is the derivative of `current`'s activation.
pub fn hidden_deltas(current: &mut DenseLayer, next: &DenseLayer) {
    let activation = current.activator();

    for (j, node) in current.nodes.iter_mut().enumerate() {
        let sum_delta: f64 = next.nodes.iter()
            .map(|n| n.weights()[j] * n.delta)
            .sum();
        node.delta = sum_delta * activation.derivative(node.output);
    }
}

/// Walks from the layer before the output back to the first hidden layer.
/// Input nodes never get a delta.
pub fn back_prop_hidden_layers(network: &mut Network) {
    let layers = network.dense_layers_mut();

    for i in (0..layers.len().saturating_sub(1)).rev() {
        let (head, tail) = layers.split_at_mut(i + 1);
        hidden_deltas(&mut head[i], &tail[0]);
    }
}

/// Gradient-descent step on every hidden and output node:
/// `w -= lr · delta · input`, `bias -= lr · delta`.
///
/// Uses the inputs recorded by the last forward pass, so no forward pass with
/// different data may run between computing deltas and calling this.
pub fn update_weights_biases(network: &mut Network, learning_rate: f64) -> Result<()> {
    ensure_propagated(network)?;

    for layer in network.dense_layers_mut() {
        for node in layer.nodes.iter_mut() {
            node.descend(learning_rate);
        }
    }
    Ok(())
}

/// One training step for the sample last fed to `forward_propagation`:
/// output deltas, hidden deltas, then the weight and bias update.
pub fn back_propagate(network: &mut Network, targets: &[f64], learning_rate: f64) -> Result<()> {
    calculate_delta(network, targets)?;
    back_prop_hidden_layers(network);
    update_weights_biases(network, learning_rate)?;

    trace!(learning_rate, "back-propagation step applied");
    Ok(())
}
