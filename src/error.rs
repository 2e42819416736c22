use thiserror::Error;

/// Everything that can go wrong while building, running or training a network.
#[derive(Debug, Error)]
pub enum NetError {
    /// Forward propagation needs an input, at least one hidden and an output layer.
    #[error("need at least 3 layers, network has {found}")]
    TooFewLayers { found: usize },

    #[error("sample has {found} values but the input layer has {expected} nodes")]
    InputLength { expected: usize, found: usize },

    #[error("target has {found} values but the output layer has {expected} nodes")]
    TargetLength { expected: usize, found: usize },

    /// Deltas are computed from the outputs of the last forward pass.
    #[error("back-propagation called before any forward propagation")]
    NotPropagated,

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, NetError>;
