use nodal_nn::{
    back_propagate, forward_propagation, make_network, mean_squared_error, ActivationFunction,
    Layer, LayerKind, NetError, Network,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn relu_sigmoid(n_layers: usize, n_input: usize, n_hidden: usize, n_output: usize, seed: u64) -> Network {
    let mut rng = StdRng::seed_from_u64(seed);
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
fn output_stays_in_sigmoid_range() {
    let mut samples = StdRng::seed_from_u64(100);
    for seed in 0..20 {
        let mut net = relu_sigmoid(4, 4, 4, 1, seed);
        for _ in 0..25 {
            let sample: Vec<f64> = (0..4).map(|_| samples.gen_range(-2.0..2.0)).collect();
            forward_propagation(&mut net, &sample).unwrap();

            let out = net.output_layer().output(0);
            assert!(out > 0.0 && out < 1.0, "output {out} for {sample:?}");
        }
    }
}

#[test]
fn forward_is_deterministic_after_construction() {
    let mut net = relu_sigmoid(4, 4, 4, 1, 1);
    let sample = [0.3, -0.7, 1.2, 0.0];

    let first = net.forward(&sample).unwrap();
    let second = net.forward(&sample).unwrap();

    assert_eq!(first.len(), 1);
    assert_eq!(first[0].to_bits(), second[0].to_bits());
}

#[test]
fn same_seed_builds_identical_networks() {
    let mut a = relu_sigmoid(5, 3, 4, 2, 77);
    let mut b = relu_sigmoid(5, 3, 4, 2, 77);
    let sample = [0.1, 0.2, 0.3];
    assert_eq!(a.forward(&sample).unwrap(), b.forward(&sample).unwrap());
}

#[test]
fn one_backprop_step_usually_lowers_the_error() {
    let mut samples = StdRng::seed_from_u64(200);
    let trials = 100;
    let mut improved = 0;

    for seed in 0..trials {
        let mut net = relu_sigmoid(4, 4, 4, 1, seed);
        let sample: Vec<f64> = (0..4).map(|_| samples.gen_range(-1.0..1.0)).collect();

        let out = net.forward(&sample).unwrap()[0];
        let target = [if out > 0.5 { 0.0 } else { 1.0 }];
        let before = mean_squared_error(&net, &target).unwrap();

        back_propagate(&mut net, &target, 0.1).unwrap();
        net.forward(&sample).unwrap();
        let after = mean_squared_error(&net, &target).unwrap();

        if after < before {
            improved += 1;
        }
    }

    assert!(improved >= 90, "only {improved}/{trials} steps reduced the error");
}

#[test]
fn two_layer_network_refuses_to_run() {
    let mut net = relu_sigmoid(2, 2, 2, 1, 3);
    let err = forward_propagation(&mut net, &[1.0, 1.0]).unwrap_err();
    assert!(matches!(err, NetError::TooFewLayers { found: 2 }));

    let err = back_propagate(&mut net, &[1.0], 0.1).unwrap_err();
    assert!(matches!(err, NetError::TooFewLayers { found: 2 }));
}

#[test]
fn relu_hidden_layers_and_sigmoid_head() {
    let mut net = relu_sigmoid(4, 2, 3, 1, 4);
    net.forward(&[1.0, -1.0]).unwrap();

    let hidden: Vec<&dyn Layer> = net.layers().filter(|l| l.kind() == LayerKind::Hidden).collect();
    assert_eq!(hidden.len(), 2);
    for layer in hidden {
        assert_eq!(layer.len(), 3);
        assert!(layer.outputs().iter().all(|&o| o >= 0.0));
    }

    let out = net.outputs();
    assert_eq!(out.len(), 1);
    assert!(out[0] > 0.0 && out[0] < 1.0);
}

#[test]
fn contract_violations_are_errors() {
    let mut net = relu_sigmoid(3, 2, 2, 1, 5);

    assert!(matches!(back_propagate(&mut net, &[0.0], 0.1), Err(NetError::NotPropagated)));
    assert!(matches!(
        forward_propagation(&mut net, &[1.0]),
        Err(NetError::InputLength { expected: 2, found: 1 })
    ));

    net.forward(&[1.0, 0.0]).unwrap();
    assert!(matches!(
        back_propagate(&mut net, &[0.0, 1.0], 0.1),
        Err(NetError::TargetLength { expected: 1, found: 2 })
    ));
}

#[test]
fn other_activation_choices_are_refused() {
    let mut rng = StdRng::seed_from_u64(1);
    let relu_head = make_network(3, 2, 3, 1, ActivationFunction::ReLU, ActivationFunction::ReLU, &mut rng);
    assert!(matches!(relu_head, Err(NetError::InvalidConfig(_))));

    let sigmoid_hidden =
        make_network(3, 2, 3, 1, ActivationFunction::Sigmoid, ActivationFunction::Sigmoid, &mut rng);
    assert!(matches!(sigmoid_hidden, Err(NetError::InvalidConfig(_))));
}

#[test]
fn empty_output_layer_is_refused() {
    let mut rng = StdRng::seed_from_u64(2);
    let res = make_network(3, 2, 3, 0, ActivationFunction::ReLU, ActivationFunction::Sigmoid, &mut rng);
    assert!(matches!(res, Err(NetError::InvalidConfig(_))));
}
