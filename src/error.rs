use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("a network needs at least 2 layers, got {0}")]
    TooFewLayers(usize),

    #[error("layer {index} has no neurons")]
    EmptyLayer { index: usize },

    #[error("parameter shape mismatch: {0}")]
    ShapeMismatch(String),
}

pub type Result<T> = std::result::Result<T, NetworkError>;
