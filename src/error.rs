use std::fmt;

/// Error type for xor-mlp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A layer size of zero was passed to `Network::new`.
    ZeroLayerSize,
    /// An input or target vector length disagrees with the configured layer size.
    DimensionMismatch { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ZeroLayerSize => {
                write!(f, "all layer sizes must be at least 1")
            }
            Error::DimensionMismatch { expected, got } => {
                write!(f, "vector of length {got} where the network expects {expected}")
            }
        }
    }
}

impl std::error::Error for Error {}
