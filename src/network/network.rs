use std::fmt;

use rand::Rng;
use tracing::debug;

use crate::activation::activation::ActivationFunction;
use crate::error::Result;
use crate::layers::{DenseLayer, InputLayer, Layer, LayerKind};
use crate::network::spec::{NetworkSpec, DEFAULT_BIAS};
use crate::propagation::forward::forward_propagation;

/// An ordered chain of layers: input, hidden…, output.
///
/// Layer `0` is the input layer; layer `i ≥ 1` is a `DenseLayer`.  Neighbours
/// are found by index (`previous(i)`, `next(i)`), so the chain is an arena
/// that owns every layer and node outright.
#[derive(Debug, Clone)]
pub struct Network {
    input: InputLayer,
    layers: Vec<DenseLayer>,
    propagated: bool,
}

impl Network {
    /// Builds every layer described by `spec`, drawing weights from `rng`.
    ///
    /// A `layer_count` below 3 still builds (layer sizes follow the same
    /// rules) but the network refuses to forward-propagate.
    pub fn new<R: Rng + ?Sized>(spec: &NetworkSpec, rng: &mut R) -> Result<Network> {
        spec.validate()?;

        let last = spec.layer_count - 1;
        let mut layers = Vec::with_capacity(last);
        for i in 1..spec.layer_count {
            let layer = if i == last {
                DenseLayer::new(
                    LayerKind::Output,
                    spec.output_size,
                    spec.hidden_size,
                    spec.output_activation,
                    spec.initial_bias,
                    rng,
                )
            } else {
                let input_size = if i == 1 { spec.input_size } else { spec.hidden_size };
                DenseLayer::new(
                    LayerKind::Hidden,
                    spec.hidden_size,
                    input_size,
                    spec.hidden_activation,
                    spec.initial_bias,
                    rng,
                )
            };
            layers.push(layer);
        }

        debug!(
            layers = spec.layer_count,
            input = spec.input_size,
            hidden = spec.hidden_size,
            output = spec.output_size,
            "network built"
        );

        Ok(Network {
            input: InputLayer::new(spec.input_size),
            layers,
            propagated: false,
        })
    }

    pub fn layer_count(&self) -> usize {
        1 + self.layers.len()
    }

    pub fn input_layer(&self) -> &InputLayer {
        &self.input
    }

    pub fn input_layer_mut(&mut self) -> &mut InputLayer {
        &mut self.input
    }

    /// The last layer.  For a one-layer network this is the input layer.
    pub fn output_layer(&self) -> &dyn Layer {
        match self.layers.last() {
            Some(layer) => layer as &dyn Layer,
            None => &self.input as &dyn Layer,
        }
    }

    pub fn layer(&self, index: usize) -> Option<&dyn Layer> {
        match index {
            0 => Some(&self.input as &dyn Layer),
            i => self.layers.get(i - 1).map(|l| l as &dyn Layer),
        }
    }

    /// Computed layer at network index `index` (≥ 1).
    pub fn dense(&self, index: usize) -> Option<&DenseLayer> {
        index.checked_sub(1).and_then(|i| self.layers.get(i))
    }

    pub fn layers(&self) -> impl Iterator<Item = &dyn Layer> + '_ {
        std::iter::once(&self.input as &dyn Layer)
            .chain(self.layers.iter().map(|l| l as &dyn Layer))
    }

    pub fn previous(&self, index: usize) -> Option<usize> {
        if index < self.layer_count() { index.checked_sub(1) } else { None }
    }

    pub fn next(&self, index: usize) -> Option<usize> {
        (index + 1 < self.layer_count()).then_some(index + 1)
    }

    /// Outputs of the last layer after the most recent forward pass.
    pub fn outputs(&self) -> Vec<f64> {
        self.output_layer().outputs()
    }

    /// Runs forward propagation and returns a copy of the prediction vector.
    pub fn forward(&mut self, sample: &[f64]) -> Result<Vec<f64>> {
        forward_propagation(self, sample)?;
        Ok(self.outputs())
    }

    /// Whether a forward pass has completed since construction.
    pub fn has_propagated(&self) -> bool {
        self.propagated
    }

    pub(crate) fn mark_propagated(&mut self) {
        self.propagated = true;
    }

    pub(crate) fn parts_mut(&mut self) -> (&mut InputLayer, &mut [DenseLayer]) {
        (&mut self.input, &mut self.layers)
    }

    /// Hidden layers followed by the output layer.
    pub fn dense_layers(&self) -> &[DenseLayer] {
        &self.layers
    }

    pub(crate) fn dense_layers_mut(&mut self) -> &mut [DenseLayer] {
        &mut self.layers
    }
}

/// Builds a network with the default bias from positional sizes.
pub fn make_network<R: Rng + ?Sized>(
    n_layers: usize,
    n_input: usize,
    n_hidden: usize,
    n_output: usize,
    hidden_activation: ActivationFunction,
    output_activation: ActivationFunction,
    rng: &mut R,
) -> Result<Network> {
    let spec = NetworkSpec {
        layer_count: n_layers,
        input_size: n_input,
        hidden_size: n_hidden,
        output_size: n_output,
        hidden_activation,
        output_activation,
        initial_bias: DEFAULT_BIAS,
    };
    Network::new(&spec, rng)
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, layer) in self.layers().enumerate() {
            write!(f, "#{i} {layer}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NetError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn build(n_layers: usize, n_input: usize, n_hidden: usize, n_output: usize) -> Network {
        let mut rng = StdRng::seed_from_u64(0);
        make_network(
            n_layers,
            n_input,
            n_hidden,
            n_output,
            ActivationFunction::ReLU,
            ActivationFunction::Sigmoid,
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn layer_sizes_follow_topology_rules() {
        let net = build(5, 2, 3, 1);
        assert_eq!(net.layer_count(), 5);

        let kinds: Vec<LayerKind> = net.layers().map(|l| l.kind()).collect();
        assert_eq!(
            kinds,
            vec![LayerKind::Input, LayerKind::Hidden, LayerKind::Hidden, LayerKind::Hidden, LayerKind::Output]
        );

        assert_eq!(net.input_layer().len(), 2);
        assert_eq!(net.dense(1).unwrap().input_size(), 2);
        assert_eq!(net.dense(2).unwrap().input_size(), 3);
        assert_eq!(net.dense(3).unwrap().input_size(), 3);
        assert_eq!(net.dense(4).unwrap().input_size(), 3);
        assert_eq!(net.output_layer().len(), 1);
        assert_eq!(net.output_layer().activation(), Some(ActivationFunction::Sigmoid));
        assert_eq!(net.layer(1).unwrap().activation(), Some(ActivationFunction::ReLU));
        assert_eq!(net.input_layer().activation(), None);
    }

    #[test]
    fn adjacent_layers_link_both_ways() {
        let net = build(4, 4, 4, 1);
        for i in 0..net.layer_count() - 1 {
            assert_eq!(net.next(i), Some(i + 1));
            assert_eq!(net.previous(i + 1), Some(i));
        }
        assert_eq!(net.previous(0), None);
        assert_eq!(net.next(3), None);
        assert_eq!(net.previous(4), None);
    }

    #[test]
    fn short_networks_still_build() {
        let two = build(2, 3, 5, 1);
        assert_eq!(two.layer_count(), 2);
        assert_eq!(two.dense(1).unwrap().input_size(), 5);

        let one = build(1, 3, 5, 1);
        assert_eq!(one.layer_count(), 1);
        assert_eq!(one.output_layer().kind(), LayerKind::Input);
    }

    #[test]
    fn zero_layers_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let res = make_network(
            0, 1, 1, 1, ActivationFunction::ReLU, ActivationFunction::Sigmoid, &mut rng,
        );
        assert!(matches!(res, Err(NetError::InvalidConfig(_))));
    }

    #[test]
    fn biases_start_at_default() {
        let net = build(3, 2, 2, 2);
        for layer in net.dense_layers() {
            assert!(layer.nodes.iter().all(|n| n.bias == DEFAULT_BIAS && n.delta == 0.0));
        }
        assert!(!net.has_propagated());
    }

    #[test]
    fn display_dumps_every_layer() {
        let net = build(3, 2, 2, 1);
        let text = net.to_string();
        assert!(text.contains("#0 Input layer (2 nodes)"));
        assert!(text.contains("#1 Hidden layer (2 nodes, ReLU)"));
        assert!(text.contains("#2 Output layer (1 nodes, Sigmoid)"));
    }
}
