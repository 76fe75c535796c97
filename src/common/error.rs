use thiserror::Error;

/// Simulator error types
#[derive(Error, Debug)]
pub enum SimError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid cache capacity {0}, capacity must be positive")]
    InvalidCapacity(usize),

    #[error("address token {token:?} has width {} but expected {expected}", token.len())]
    TokenWidth { token: String, expected: usize },

    #[error("address token {0:?} is not valid hexadecimal")]
    MalformedToken(String),
}

impl SimError {
    /// Whether this error came from decoding a trace token.
    /// Decode failures are recoverable per reference; I/O failures are not.
    pub fn is_decode(&self) -> bool {
        matches!(self, SimError::TokenWidth { .. } | SimError::MalformedToken(_))
    }
}

pub type Result<T> = std::result::Result<T, SimError>;
