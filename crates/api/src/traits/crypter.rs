//! Trait definition for block-cipher engines
//!
//! A crypter is bound to one [`EncryptionAlgorithm`] for its whole life. It is
//! constructed with a key size, keyed with [`Crypter::set_key`], used for any
//! number of encrypt/decrypt calls and finally destroyed.
//!
//! # Caller contract
//!
//! Input lengths must be a whole multiple of [`Crypter::block_size`]. The
//! ciphers handled here have no padding: only whole blocks are transformed
//! and a trailing partial block is dropped, not rejected.

use crate::error::Result;
use crate::types::EncryptionAlgorithm;

/// Block-cipher engine contract
pub trait Crypter {
    /// Algorithm this instance was constructed for
    fn algorithm(&self) -> EncryptionAlgorithm;

    /// Encrypt `data` into a freshly allocated buffer of `data.len()` bytes
    ///
    /// `iv` is only consulted by chaining modes.
    fn encrypt(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt `data` into a freshly allocated buffer of `data.len()` bytes
    fn decrypt(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>>;

    /// Encrypt the whole blocks of `data` in place
    fn encrypt_in_place(&self, data: &mut [u8], iv: &[u8]) -> Result<()>;

    /// Decrypt the whole blocks of `data` in place
    fn decrypt_in_place(&self, data: &mut [u8], iv: &[u8]) -> Result<()>;

    /// Block size in bytes
    fn block_size(&self) -> usize;

    /// IV size in bytes
    fn iv_size(&self) -> usize;

    /// Key size in bytes
    fn key_size(&self) -> usize;

    /// Replace the key and re-derive the key schedule
    ///
    /// At most [`Crypter::key_size`] bytes are taken from `key`.
    fn set_key(&mut self, key: &[u8]) -> Result<()>;

    /// Release the instance, scrubbing its key material
    fn destroy(self)
    where
        Self: Sized,
    {
        drop(self)
    }
}
