pub mod dense;
pub mod input;
pub mod layer;
pub mod node;

pub use dense::DenseLayer;
pub use input::InputLayer;
pub use layer::{Layer, LayerKind};
pub use node::{InputNode, Node};
