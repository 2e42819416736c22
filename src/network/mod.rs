pub mod network;
pub mod spec;

pub use network::{make_network, Network};
pub use spec::NetworkSpec;
