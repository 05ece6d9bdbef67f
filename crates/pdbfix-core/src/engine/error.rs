use crate::core::models::record::CodecError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(
        "{total_residues} residues cannot be split evenly by {divisor} (remainder {remainder})"
    )]
    NotDivisible {
        total_residues: usize,
        divisor: usize,
        remainder: usize,
    },

    #[error("{required} chains need names but only {available} are available")]
    InsufficientChainNames { required: usize, available: usize },

    #[error("Invalid chain partition: {0}")]
    InvalidPartitionSpec(String),

    #[error("Expected {expected} coordinate triples, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    #[error("Record range {start}..{end} is out of bounds for {len} records")]
    InvalidRange { start: usize, end: usize, len: usize },
}
