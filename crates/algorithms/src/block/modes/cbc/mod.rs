//! Cipher Block Chaining (CBC) mode implementation
//!
//! CBC mode XORs each plaintext block with the previous ciphertext block
//! before encryption. The first block is XORed with the initialization
//! vector (IV).
//!
//! This implementation follows NIST SP 800-38A and GB/T 17964 and does not
//! pad: only whole blocks are processed.

use zeroize::{Zeroize, ZeroizeOnDrop};

use super::super::{Block, BlockCipher, BLOCK_SIZE};
use super::output_buffer;
use crate::error::{validate, Result};

/// CBC mode over a borrowed block cipher
pub struct Cbc<'a, B: BlockCipher> {
    cipher: &'a B,
    iv: ChainValue,
}

#[derive(Zeroize, ZeroizeOnDrop)]
struct ChainValue(Block);

impl<'a, B: BlockCipher> Cbc<'a, B> {
    /// Creates a new CBC mode instance with the given cipher and IV
    ///
    /// The IV must be exactly one block long.
    pub fn new(cipher: &'a B, iv: &[u8]) -> Result<Self> {
        validate::length("CBC initialization vector", iv.len(), BLOCK_SIZE)?;

        let mut chain = [0u8; BLOCK_SIZE];
        chain.copy_from_slice(iv);
        Ok(Self {
            cipher,
            iv: ChainValue(chain),
        })
    }

    /// Encrypts the whole blocks of `data` in place
    pub fn encrypt_in_place(&self, data: &mut [u8]) {
        let mut prev = ChainValue(self.iv.0);
        for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
            for (p, c) in prev.0.iter_mut().zip(chunk.iter()) {
                *p ^= c;
            }
            self.cipher.encrypt_block(&mut prev.0);
            chunk.copy_from_slice(&prev.0);
        }
    }

    /// Decrypts the whole blocks of `data` in place
    pub fn decrypt_in_place(&self, data: &mut [u8]) {
        let mut prev = ChainValue(self.iv.0);
        let mut block = ChainValue([0u8; BLOCK_SIZE]);
        for chunk in data.chunks_exact_mut(BLOCK_SIZE) {
            block.0.copy_from_slice(chunk);
            self.cipher.decrypt_block(&mut block.0);
            for ((out, b), p) in chunk.iter_mut().zip(block.0.iter()).zip(prev.0.iter_mut()) {
                // Keep the ciphertext byte for the next block before overwriting it
                let c = *out;
                *out = b ^ *p;
                *p = c;
            }
        }
    }

    /// Encrypts `plaintext` into a new buffer of the same length
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let mut out = output_buffer("CBC ciphertext", plaintext)?;
        self.encrypt_in_place(&mut out);
        Ok(out)
    }

    /// Decrypts `ciphertext` into a new buffer of the same length
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let mut out = output_buffer("CBC plaintext", ciphertext)?;
        self.decrypt_in_place(&mut out);
        Ok(out)
    }
}
