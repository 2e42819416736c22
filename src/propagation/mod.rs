pub mod backward;
pub mod forward;

pub use backward::{
    back_prop_hidden_layers, back_propagate, calculate_delta, hidden_deltas, mean_squared_error,
    update_weights_biases,
};
pub use forward::{collect_output, compute_node, forward_propagation, layer_activation, take_input};
