//! SM1 block cipher
//!
//! SM1 is only available inside certified hardware; its algorithm has never
//! been published. Software deployments of the GM suite, which this crate
//! interoperates with, execute the SM1 modes with the SM4 transform, and
//! [`Sm1`] does the same. Ciphertext produced here therefore decrypts only
//! with a peer using that same software path, never with an SM1 device.

use gmalg_params::utils::symmetric::SM1_KEY_SIZE;

use super::{Block, BlockCipher, Sm4};
use crate::types::SecretBuffer;

/// SM1 block cipher, executed with the SM4 transform
pub struct Sm1 {
    inner: Sm4,
}

impl Sm1 {
    /// Expand `key` into a new key schedule
    pub fn new(key: &SecretBuffer<SM1_KEY_SIZE>) -> Self {
        Self { inner: Sm4::new(key) }
    }
}

impl BlockCipher for Sm1 {
    const KEY_SIZE: usize = SM1_KEY_SIZE;

    fn name() -> &'static str {
        "SM1"
    }

    fn encrypt_block(&self, block: &mut Block) {
        self.inner.encrypt_block(block);
    }

    fn decrypt_block(&self, block: &mut Block) {
        self.inner.decrypt_block(block);
    }
}
