//! Cryptographic hash functions
//!
//! The compression functions come from external primitive crates; the types
//! here give them a uniform streaming interface.

pub mod sm3;

pub use self::sm3::Sm3;

/// Trait for streaming hash functions
pub trait HashFunction {
    /// Digest type produced by this hash function
    type Output;

    /// Creates a new instance in the algorithm's initial state
    fn new() -> Self;

    /// Updates the hash function state with new data
    fn update(&mut self, data: &[u8]);

    /// Finalizes the hash computation, returns the digest and returns the
    /// state to its initial value
    fn finalize(&mut self) -> Self::Output;

    /// Returns the output size of the hash function in bytes
    fn output_size() -> usize;

    /// Returns the block size of the hash function in bytes
    fn block_size() -> usize;

    /// Convenience method to hash data in a single call
    fn digest(data: &[u8]) -> Self::Output
    where
        Self: Sized,
    {
        let mut hasher = Self::new();
        hasher.update(data);
        hasher.finalize()
    }

    /// Returns the name of the hash function
    fn name() -> &'static str;
}
