//! Error type definitions for cipher and hash operations

use std::collections::TryReserveError;

/// Primary error type for the gmalg engines
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A crypter was requested with a key size the algorithm does not support
    #[error("invalid {algorithm} key size: expected {expected} bytes, got {actual}")]
    InvalidKeySize {
        algorithm: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The algorithm identifier names nothing this crate implements
    #[error("{context}: unsupported algorithm '{name}'")]
    UnsupportedAlgorithm {
        context: &'static str,
        name: String,
    },

    /// An output buffer could not be obtained
    #[error("{context}: could not allocate {requested} bytes")]
    AllocationFailure {
        context: &'static str,
        requested: usize,
    },

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Invalid parameter error
    #[error("{context}: {message}")]
    InvalidParameter {
        context: &'static str,
        message: String,
    },
}

/// Result type for cipher and hash operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for an [`Error::UnsupportedAlgorithm`]
    pub fn unsupported(context: &'static str, name: impl Into<String>) -> Self {
        Self::UnsupportedAlgorithm {
            context,
            name: name.into(),
        }
    }

    /// Shorthand for an [`Error::InvalidParameter`]
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            context,
            message: message.into(),
        }
    }

    /// Map a failed reservation to [`Error::AllocationFailure`]
    pub fn allocation(context: &'static str, requested: usize, _: TryReserveError) -> Self {
        Self::AllocationFailure { context, requested }
    }
}
