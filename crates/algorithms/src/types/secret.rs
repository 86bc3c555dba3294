//! Fixed-size secret buffer with guaranteed zeroization

use core::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed-size secret buffer that is scrubbed when dropped
///
/// The `Debug` output never contains the bytes.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    /// Create a new secret buffer with the given data
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed secret buffer
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Get the length of the buffer
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the buffer is empty (always false for non-zero N)
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Overwrite the leading bytes with `src`
    ///
    /// Copies `min(src.len(), N)` bytes and leaves the rest as it was.
    /// Returns the number of bytes copied.
    pub fn copy_prefix_from(&mut self, src: &[u8]) -> usize {
        let n = src.len().min(N);
        self.data[..n].copy_from_slice(&src[..n]);
        n
    }

    /// Borrow the bytes as a fixed-size array
    pub fn as_array(&self) -> &[u8; N] {
        &self.data
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}
