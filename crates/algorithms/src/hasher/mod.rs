//! Streaming SM3 engine with optional SM2 identity binding
//!
//! A plain [`GmalgHasher`] computes SM3 over the absorbed bytes. One built
//! with [`GmalgHasher::with_identity`] computes `SM3(Z || message)` where Z
//! is the SM2 identity pre-hash of a signer, which is the digest an SM2
//! signature is taken over.

use gmalg_api::{HashAlgorithm, Hasher};
use gmalg_params::utils::hash::SM3_OUTPUT_SIZE;
use tracing::debug;

use crate::ec::{compute_z, PublicKey};
use crate::error::{validate, Result};
use crate::hash::{HashFunction, Sm3};
use crate::types::Digest;

/// SM3 hasher, optionally seeded with an SM2 Z-value
#[derive(Clone)]
pub struct GmalgHasher {
    algorithm: HashAlgorithm,
    state: Sm3,
    // State every message starts from: empty, or with Z absorbed
    seeded: Sm3,
    z: Option<Digest<SM3_OUTPUT_SIZE>>,
}

impl GmalgHasher {
    /// Digest size in bytes
    pub const HASH_SIZE: usize = SM3_OUTPUT_SIZE;

    /// Create a plain hasher
    pub fn new(algorithm: HashAlgorithm) -> Self {
        match algorithm {
            HashAlgorithm::Sm3 => Self::from_seed(algorithm, Sm3::new(), None),
        }
    }

    /// Create a hasher whose every message is prefixed with the Z-value of
    /// `public_key` and `identity`
    ///
    /// An empty identity gives a plain hasher.
    pub fn with_identity(
        algorithm: HashAlgorithm,
        public_key: &PublicKey,
        identity: &[u8],
    ) -> Result<Self> {
        if identity.is_empty() {
            debug!(%algorithm, "empty identity, hashing without Z prefix");
            return Ok(Self::new(algorithm));
        }

        let z = compute_z(public_key, identity)?;
        let mut seeded = Sm3::new();
        seeded.update(&z);
        debug!(%algorithm, identity_len = identity.len(), "created identity-bound hasher");
        Ok(Self::from_seed(algorithm, seeded, Some(z)))
    }

    fn from_seed(algorithm: HashAlgorithm, seeded: Sm3, z: Option<Digest<SM3_OUTPUT_SIZE>>) -> Self {
        Self {
            algorithm,
            state: seeded.clone(),
            seeded,
            z,
        }
    }

    /// The Z-value this hasher is bound to, if any
    pub fn z(&self) -> Option<&Digest<SM3_OUTPUT_SIZE>> {
        self.z.as_ref()
    }

    /// Finish the current message and start the next one
    pub fn finalize(&mut self) -> Digest<SM3_OUTPUT_SIZE> {
        let digest = self.state.finalize();
        self.reset();
        digest
    }
}

impl Hasher for GmalgHasher {
    fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    fn hash_size(&self) -> usize {
        Self::HASH_SIZE
    }

    fn update(&mut self, data: &[u8]) {
        self.state.update(data);
    }

    fn finalize_into(&mut self, out: &mut [u8]) -> Result<()> {
        validate::min_length("hash output", out.len(), Self::HASH_SIZE)?;
        let digest = self.finalize();
        out[..Self::HASH_SIZE].copy_from_slice(&digest);
        Ok(())
    }

    /// Return to the state right after construction, Z included
    fn reset(&mut self) {
        self.state = self.seeded.clone();
    }
}

impl core::fmt::Debug for GmalgHasher {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GmalgHasher")
            .field("algorithm", &self.algorithm)
            .field("z", &self.z)
            .finish_non_exhaustive()
    }
}
