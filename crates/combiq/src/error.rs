use num_bigint::BigUint;
use thiserror::Error as ThisError;

///
/// EngineError
///
/// Errors surfaced by the enumeration engine. All of them indicate caller
/// bugs (bad index arithmetic), not bad data: an empty candidate set is not
/// an error, it makes the product empty and enumeration yields nothing.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum EngineError {
    #[error("combination index {index} out of range for a product of {total}")]
    IndexOutOfRange { index: BigUint, total: BigUint },

    #[error("entry index {index} out of range at position {position} ({len} candidates)")]
    EntryOutOfRange {
        position: usize,
        index: usize,
        len: usize,
    },

    #[error("expected {expected} positions, found {found}")]
    ArityMismatch { expected: usize, found: usize },
}

///
/// TESTS
///
