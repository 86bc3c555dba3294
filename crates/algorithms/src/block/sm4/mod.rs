//! SM4 block cipher (GB/T 32907-2016)
//!
//! The round function and key expansion are provided by the RustCrypto `sm4`
//! crate. This wrapper owns the expanded key, which covers both directions,
//! and scrubs it on drop.

use ::sm4::cipher::generic_array::GenericArray;
use ::sm4::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use gmalg_params::utils::symmetric::SM4_KEY_SIZE;

use super::{Block, BlockCipher};
use crate::types::SecretBuffer;

/// SM4 block cipher with an expanded key schedule
pub struct Sm4 {
    schedule: ::sm4::Sm4,
}

impl Sm4 {
    /// Expand `key` into a new key schedule
    pub fn new(key: &SecretBuffer<SM4_KEY_SIZE>) -> Self {
        Self {
            schedule: ::sm4::Sm4::new(GenericArray::from_slice(key.as_array())),
        }
    }
}

impl BlockCipher for Sm4 {
    const KEY_SIZE: usize = SM4_KEY_SIZE;

    fn name() -> &'static str {
        "SM4"
    }

    fn encrypt_block(&self, block: &mut Block) {
        self.schedule.encrypt_block(GenericArray::from_mut_slice(block));
    }

    fn decrypt_block(&self, block: &mut Block) {
        self.schedule.decrypt_block(GenericArray::from_mut_slice(block));
    }
}
