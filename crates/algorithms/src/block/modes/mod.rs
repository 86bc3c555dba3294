//! Block cipher modes of operation
//!
//! ECB and CBC over any [`BlockCipher`](super::BlockCipher). Neither mode
//! pads: whole blocks are transformed and a trailing partial block is
//! dropped. Callers are expected to hand in block-aligned data.

pub mod cbc;
pub mod ecb;

// Re-exports
pub use cbc::Cbc;
pub use ecb::Ecb;

use super::BLOCK_SIZE;
use crate::error::{Error, Result};

/// Number of bytes covered by whole blocks
#[inline]
pub(crate) fn whole_blocks_len(len: usize) -> usize {
    len - len % BLOCK_SIZE
}

/// Allocate an output buffer of `input.len()` bytes for a mode to work on
///
/// The whole-block prefix is copied from `input`; the bytes of a trailing
/// partial block are zero so that none of the input leaks through.
pub(crate) fn output_buffer(context: &'static str, input: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    out.try_reserve_exact(input.len())
        .map_err(|e| Error::allocation(context, input.len(), e))?;
    out.extend_from_slice(&input[..whole_blocks_len(input.len())]);
    out.resize(input.len(), 0);
    Ok(out)
}
