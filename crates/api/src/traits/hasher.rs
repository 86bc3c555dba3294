//! Trait definition for streaming hash engines

use crate::error::{validate, Error, Result};
use crate::types::HashAlgorithm;

/// Streaming hash engine contract
///
/// Finalizing leaves the instance ready for the next message, so one hasher
/// can serve many messages without being rebuilt.
pub trait Hasher {
    /// Algorithm this instance was constructed for
    fn algorithm(&self) -> HashAlgorithm;

    /// Digest size in bytes
    fn hash_size(&self) -> usize;

    /// Absorb `data`; the digest covers the concatenation of every call
    fn update(&mut self, data: &[u8]);

    /// Write the digest into the first [`Hasher::hash_size`] bytes of `out`
    /// and reset the instance
    fn finalize_into(&mut self, out: &mut [u8]) -> Result<()>;

    /// Discard everything absorbed since the last reset
    fn reset(&mut self);

    /// Absorb `data` and, when `out` is given, finalize into it
    fn get_hash(&mut self, data: &[u8], out: Option<&mut [u8]>) -> Result<()> {
        if let Some(out) = &out {
            validate::min_length("hash output", out.len(), self.hash_size())?;
        }
        self.update(data);
        match out {
            Some(out) => self.finalize_into(out),
            None => Ok(()),
        }
    }

    /// Absorb `data` and finalize into a freshly allocated buffer
    fn allocate_hash(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        let size = self.hash_size();
        let mut out = Vec::new();
        out.try_reserve_exact(size)
            .map_err(|e| Error::allocation("hash output", size, e))?;
        out.resize(size, 0);
        self.get_hash(data, Some(&mut out))?;
        Ok(out)
    }

    /// Release the instance
    fn destroy(self)
    where
        Self: Sized,
    {
        drop(self)
    }
}
