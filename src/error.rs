use thiserror::Error as ThisError;

use crate::types::Weight;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Edge weight was negative, NaN or infinite. Raised at construction.
    #[error("invalid weight {weight} on edge ({u}, {v}): weights must be finite and >= 0")]
    InvalidWeight { u: String, v: String, weight: Weight },
    /// The graph, ignoring isolated vertices, is not connected.
    #[error("graph is not connected (ignoring isolated vertices)")]
    Disconnected,
    /// An odd-degree vertex could not be reached from another one even
    /// though the connectivity check passed. Indicates a defect, not bad
    /// user input.
    #[error("vertex '{target}' is unreachable from '{origin}' despite a connected graph")]
    Unreachable { origin: String, target: String },
    /// The number of odd-degree vertices came out odd, contradicting the
    /// handshake lemma. Indicates a defect, not bad user input.
    #[error("odd-degree vertex count {count} is not even")]
    OddVertexParity { count: usize },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
