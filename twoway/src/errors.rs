use thiserror::Error;

use crate::base::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TwoWayError {
    /// Lookup key has no entry on the given side.
    #[error("key not found on the {0} side")]
    KeyNotFound(Side),
    /// Add-only insertion hit a key already present on the given side.
    #[error("key already present on the {0} side")]
    DuplicateKey(Side),
    /// Source mapping repeats a value, so it is not a bijection.
    #[error("value repeated on the {0} side of a source mapping")]
    DuplicateValue(Side),
}

impl TwoWayError {
    pub fn side(&self) -> Side {
        match self {
            TwoWayError::KeyNotFound(side)
            | TwoWayError::DuplicateKey(side)
            | TwoWayError::DuplicateValue(side) => *side,
        }
    }
}
