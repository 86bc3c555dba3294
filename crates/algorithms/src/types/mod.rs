//! Type-safe wrappers for cryptographic types
//!
//! Fixed-size digests with constant-time comparison and secret buffers
//! that scrub themselves when dropped.

pub mod digest;
pub mod secret;

// Re-export main types
pub use digest::Digest;
pub use secret::SecretBuffer;

/// Trait for cryptographic types with constant-time equality
pub trait ConstantTimeEq {
    /// Compare two values in constant time
    fn ct_eq(&self, other: &Self) -> bool;
}
