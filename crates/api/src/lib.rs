//! Public API traits and types for the gmalg library
//!
//! This crate provides the public API surface for the gmalg engines: the
//! crypter and hasher contracts, the algorithm identifiers they are built
//! for, and the error type shared by every member crate.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::{CipherFamily, EncryptionAlgorithm, HashAlgorithm, Mode};

// Re-export all traits from the traits module
pub use traits::{Crypter, Hasher};
