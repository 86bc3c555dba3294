//! Block-cipher engine for the SM1 and SM4 families
//!
//! [`GmalgCrypter`] is the [`Crypter`] implementation handed to the host
//! framework. It owns the key and the expanded key schedule and routes every
//! call to the mode named by its [`EncryptionAlgorithm`].

use gmalg_api::{CipherFamily, Crypter, EncryptionAlgorithm, Mode};
use gmalg_params::utils::symmetric::{SM4_BLOCK_SIZE, SM4_IV_SIZE, SM4_KEY_SIZE};
use tracing::debug;

use crate::block::{BlockCipher, Cbc, Ecb, Sm1, Sm4};
use crate::error::{validate, Result};
use crate::types::SecretBuffer;

/// Key schedule for the selected cipher family
enum Schedule {
    Sm1(Sm1),
    Sm4(Sm4),
}

impl Schedule {
    fn derive(family: CipherFamily, key: &SecretBuffer<SM4_KEY_SIZE>) -> Self {
        match family {
            CipherFamily::Sm1 => Self::Sm1(Sm1::new(key)),
            CipherFamily::Sm4 => Self::Sm4(Sm4::new(key)),
        }
    }
}

/// Direction of a cipher call
#[derive(Clone, Copy)]
enum Direction {
    Encrypt,
    Decrypt,
}

/// SM1/SM4 crypter in ECB or CBC mode
///
/// A new instance carries an all-zero key until [`Crypter::set_key`] is
/// called. The key and its schedule are scrubbed on drop.
pub struct GmalgCrypter {
    algorithm: EncryptionAlgorithm,
    key: SecretBuffer<SM4_KEY_SIZE>,
    schedule: Schedule,
}

impl GmalgCrypter {
    /// Block size of every supported algorithm
    pub const BLOCK_SIZE: usize = SM4_BLOCK_SIZE;

    /// IV size of every supported algorithm
    pub const IV_SIZE: usize = SM4_IV_SIZE;

    /// Key size of every supported algorithm
    pub const KEY_SIZE: usize = SM4_KEY_SIZE;

    /// Create a crypter for `algorithm`
    ///
    /// `key_size` must be 16; anything else fails with `InvalidKeySize`.
    pub fn new(algorithm: EncryptionAlgorithm, key_size: usize) -> Result<Self> {
        let family = algorithm.family();
        if let Err(e) = validate::key_size(family.name(), key_size, Self::KEY_SIZE) {
            debug!(%algorithm, key_size, "rejected crypter key size");
            return Err(e);
        }

        let key = SecretBuffer::zeroed();
        let schedule = Schedule::derive(family, &key);
        debug!(%algorithm, "created crypter");
        Ok(Self {
            algorithm,
            key,
            schedule,
        })
    }

    fn run_in_place(&self, direction: Direction, data: &mut [u8], iv: &[u8]) -> Result<()> {
        let mode = self.algorithm.mode();
        match &self.schedule {
            Schedule::Sm1(cipher) => run_mode_in_place(cipher, mode, direction, data, iv),
            Schedule::Sm4(cipher) => run_mode_in_place(cipher, mode, direction, data, iv),
        }
    }

    fn run(&self, direction: Direction, data: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        let mode = self.algorithm.mode();
        match &self.schedule {
            Schedule::Sm1(cipher) => run_mode(cipher, mode, direction, data, iv),
            Schedule::Sm4(cipher) => run_mode(cipher, mode, direction, data, iv),
        }
    }
}

fn run_mode_in_place<B: BlockCipher>(
    cipher: &B,
    mode: Mode,
    direction: Direction,
    data: &mut [u8],
    iv: &[u8],
) -> Result<()> {
    match (mode, direction) {
        (Mode::Ecb, Direction::Encrypt) => Ecb::new(cipher).encrypt_in_place(data),
        (Mode::Ecb, Direction::Decrypt) => Ecb::new(cipher).decrypt_in_place(data),
        (Mode::Cbc, Direction::Encrypt) => Cbc::new(cipher, iv)?.encrypt_in_place(data),
        (Mode::Cbc, Direction::Decrypt) => Cbc::new(cipher, iv)?.decrypt_in_place(data),
    }
    Ok(())
}

fn run_mode<B: BlockCipher>(
    cipher: &B,
    mode: Mode,
    direction: Direction,
    data: &[u8],
    iv: &[u8],
) -> Result<Vec<u8>> {
    match (mode, direction) {
        (Mode::Ecb, Direction::Encrypt) => Ecb::new(cipher).encrypt(data),
        (Mode::Ecb, Direction::Decrypt) => Ecb::new(cipher).decrypt(data),
        (Mode::Cbc, Direction::Encrypt) => Cbc::new(cipher, iv)?.encrypt(data),
        (Mode::Cbc, Direction::Decrypt) => Cbc::new(cipher, iv)?.decrypt(data),
    }
}

impl Crypter for GmalgCrypter {
    fn algorithm(&self) -> EncryptionAlgorithm {
        self.algorithm
    }

    /// ECB ignores `iv`; CBC requires exactly 16 bytes
    fn encrypt(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        self.run(Direction::Encrypt, data, iv)
    }

    fn decrypt(&self, data: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        self.run(Direction::Decrypt, data, iv)
    }

    fn encrypt_in_place(&self, data: &mut [u8], iv: &[u8]) -> Result<()> {
        self.run_in_place(Direction::Encrypt, data, iv)
    }

    fn decrypt_in_place(&self, data: &mut [u8], iv: &[u8]) -> Result<()> {
        self.run_in_place(Direction::Decrypt, data, iv)
    }

    fn block_size(&self) -> usize {
        Self::BLOCK_SIZE
    }

    fn iv_size(&self) -> usize {
        Self::IV_SIZE
    }

    fn key_size(&self) -> usize {
        Self::KEY_SIZE
    }

    /// Copies `min(key.len(), 16)` bytes over the current key
    ///
    /// A short key only replaces the leading bytes; the rest of the previous
    /// key stays in place. Never fails.
    fn set_key(&mut self, key: &[u8]) -> Result<()> {
        let copied = self.key.copy_prefix_from(key);
        self.schedule = Schedule::derive(self.algorithm.family(), &self.key);
        debug!(algorithm = %self.algorithm, supplied = key.len(), copied, "crypter rekeyed");
        Ok(())
    }
}

impl core::fmt::Debug for GmalgCrypter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GmalgCrypter")
            .field("algorithm", &self.algorithm)
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
