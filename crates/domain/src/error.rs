use crate::capability::Capability;

/// Shared error type used across all modelcaps crates.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("config: {0}")]
    Config(String),

    #[error("model {model} does not support {capability}")]
    Unsupported { model: String, capability: Capability },
}

pub type Result<T> = std::result::Result<T, Error>;
