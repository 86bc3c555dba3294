//! Block ciphers and their modes of operation
//!
//! The raw 128-bit transforms live behind [`BlockCipher`]; the modes in
//! [`modes`] only ever see that trait.

pub mod modes;
pub mod sm1;
pub mod sm4;

pub use gmalg_params::utils::symmetric::SM4_BLOCK_SIZE as BLOCK_SIZE;

// Re-exports
pub use self::modes::{Cbc, Ecb};
pub use self::sm1::Sm1;
pub use self::sm4::Sm4;

/// One cipher block
pub type Block = [u8; BLOCK_SIZE];

/// A keyed 128-bit block transform and its inverse
pub trait BlockCipher {
    /// Key size in bytes
    const KEY_SIZE: usize;

    /// Display name of the cipher
    fn name() -> &'static str;

    /// Encrypt a single block in place
    fn encrypt_block(&self, block: &mut Block);

    /// Decrypt a single block in place
    fn decrypt_block(&self, block: &mut Block);
}
