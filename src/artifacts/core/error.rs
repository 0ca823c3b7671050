//! Typed failures surfaced by the engine
//!
//! Every expected failure (missing object, ambiguous prefix, corrupt file, bad
//! input, unmet precondition) is raised as a [`BitError`] wrapped in an
//! [`anyhow::Error`]. Callers that need to branch on the failure kind use
//! [`BitError::kind_of`] instead of matching on message text.

use thiserror::Error;

/// Failure kinds reported by the object store, index, refs and commands
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitError {
    /// Missing object, ref, remote or path
    #[error("{0}")]
    NotFound(String),
    /// A short object id matches more than one object
    #[error("{0}")]
    Ambiguous(String),
    /// Checksum or length mismatch in the index or an object
    #[error("{0}")]
    Corrupt(String),
    /// Unsupported object kind, malformed pathspec or missing input
    #[error("{0}")]
    InvalidArgument(String),
    /// The repository is not in a state that allows the operation
    #[error("{0}")]
    PreconditionFailed(String),
}

impl BitError {
    pub fn not_found(message: impl Into<String>) -> anyhow::Error {
        BitError::NotFound(message.into()).into()
    }

    pub fn ambiguous(message: impl Into<String>) -> anyhow::Error {
        BitError::Ambiguous(message.into()).into()
    }

    pub fn corrupt(message: impl Into<String>) -> anyhow::Error {
        BitError::Corrupt(message.into()).into()
    }

    pub fn invalid_argument(message: impl Into<String>) -> anyhow::Error {
        BitError::InvalidArgument(message.into()).into()
    }

    pub fn precondition_failed(message: impl Into<String>) -> anyhow::Error {
        BitError::PreconditionFailed(message.into()).into()
    }

    /// Find the typed failure carried by an error, looking through any context layers
    pub fn kind_of(error: &anyhow::Error) -> Option<&BitError> {
        error.chain().find_map(|cause| cause.downcast_ref::<BitError>())
    }

    pub fn is_not_found(error: &anyhow::Error) -> bool {
        matches!(Self::kind_of(error), Some(BitError::NotFound(_)))
    }

    pub fn is_ambiguous(error: &anyhow::Error) -> bool {
        matches!(Self::kind_of(error), Some(BitError::Ambiguous(_)))
    }

    pub fn is_corrupt(error: &anyhow::Error) -> bool {
        matches!(Self::kind_of(error), Some(BitError::Corrupt(_)))
    }

    pub fn is_invalid_argument(error: &anyhow::Error) -> bool {
        matches!(Self::kind_of(error), Some(BitError::InvalidArgument(_)))
    }

    pub fn is_precondition_failed(error: &anyhow::Error) -> bool {
        matches!(Self::kind_of(error), Some(BitError::PreconditionFailed(_)))
    }
}
