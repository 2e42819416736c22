pub mod error;
pub mod math;
pub mod activation;
pub mod layers;
pub mod network;
pub mod propagation;
pub mod loss;
pub mod data;
pub mod train;

// Convenience re-exports
pub use error::{NetError, Result};
pub use activation::activation::ActivationFunction;
pub use layers::{DenseLayer, InputLayer, InputNode, Layer, LayerKind, Node};
pub use network::network::{make_network, Network};
pub use network::spec::NetworkSpec;
pub use propagation::{back_propagate, forward_propagation, mean_squared_error};
pub use loss::mse::MseLoss;
pub use data::dataset::Dataset;
pub use train::{evaluate, train_loop, train_network, EpochStats, TrainConfig};
