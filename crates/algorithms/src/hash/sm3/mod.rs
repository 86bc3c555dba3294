//! SM3 hash function (GB/T 32905-2016)
//!
//! Streaming wrapper over the RustCrypto `sm3` compression function.

use ::sm3::Digest as _;
use gmalg_params::utils::hash::{SM3_BLOCK_SIZE, SM3_OUTPUT_SIZE};

use super::HashFunction;
use crate::types::Digest;

/// SM3 hash function state
#[derive(Clone, Default)]
pub struct Sm3 {
    state: ::sm3::Sm3,
}

impl HashFunction for Sm3 {
    type Output = Digest<SM3_OUTPUT_SIZE>;

    fn new() -> Self {
        Self::default()
    }

    fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    fn finalize(&mut self) -> Self::Output {
        let out = self.state.finalize_reset();
        let mut digest = [0u8; SM3_OUTPUT_SIZE];
        digest.copy_from_slice(&out);
        Digest::new(digest)
    }

    fn output_size() -> usize {
        SM3_OUTPUT_SIZE
    }

    fn block_size() -> usize {
        SM3_BLOCK_SIZE
    }

    fn name() -> &'static str {
        "SM3"
    }
}
