//! Error handling for the gmalg engines

pub mod types;
pub mod validate;

// Re-export the primary error type and result
pub use types::{Error, Result};

// Specialized result types for different operations
pub type CipherResult<T> = Result<T>;
pub type HashResult<T> = Result<T>;
