use thiserror::Error;

#[derive(Error, Debug)]
pub enum EceError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Length mismatch: left has {left} fingerprints, right has {right}")]
    LengthMismatch { left: usize, right: usize },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, EceError>;
