//! Electronic Codebook (ECB) mode
//!
//! Every block is transformed on its own with the same key, so equal
//! plaintext blocks give equal ciphertext blocks.

use zeroize::Zeroize;

use super::super::{Block, BlockCipher, BLOCK_SIZE};
use super::output_buffer;
use crate::error::Result;

/// ECB mode over a borrowed block cipher
pub struct Ecb<'a, B: BlockCipher> {
    cipher: &'a B,
}

impl<'a, B: BlockCipher> Ecb<'a, B> {
    /// Creates a new ECB mode instance
    pub fn new(cipher: &'a B) -> Self {
        Self { cipher }
    }

    /// Encrypts the whole blocks of `data` in place
    pub fn encrypt_in_place(&self, data: &mut [u8]) {
        self.apply(data, B::encrypt_block);
    }

    /// Decrypts the whole blocks of `data` in place
    pub fn decrypt_in_place(&self, data: &mut [u8]) {
        self.apply(data, B::decrypt_block);
    }

    /// Encrypts `plaintext` into a new buffer of the same length
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut out = output_buffer("ECB ciphertext", plaintext)?;
        self.encrypt_in_place(&mut out);
        Ok(out)
    }

    /// Decrypts `ciphertext` into a new buffer of the same length
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut out = output_buffer("ECB plaintext", ciphertext)?;
        self.decrypt_in_place(&mut out);
        Ok(out)
    }

    fn apply(&self, data: &mut [u8], transform: fn(&B, &mut Block)) {
        let mut block = [0u8; BLOCK_SIZE];
        for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
            block.copy_from_slice(chunk);
            transform(self.cipher, &mut block);
            chunk.copy_from_slice(&block);
        }
        block.zeroize();
    }
}
