//! # gmalg
//!
//! SM4 block encryption (ECB and CBC) and SM3 hashing with SM2 identity
//! pre-hash support, behind algorithm-agnostic crypter and hasher contracts.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! gmalg = "0.3"
//! ```
//!
//! ```
//! use gmalg::prelude::*;
//!
//! let mut crypter = GmalgCrypter::new("sm4-cbc".parse()?, 16)?;
//! crypter.set_key(b"0123456789abcdef")?;
//! let ct = crypter.encrypt(&[0u8; 32], &[0u8; 16])?;
//! assert_eq!(crypter.decrypt(&ct, &[0u8; 16])?, [0u8; 32]);
//!
//! let mut hasher = GmalgHasher::new(HashAlgorithm::Sm3);
//! assert_eq!(hasher.allocate_hash(b"abc")?.len(), 32);
//! # Ok::<(), gmalg::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: serialize and deserialize algorithm identifiers
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from its sub-crates:
//!
//! - [`gmalg-api`]: crypter and hasher contracts, algorithm identifiers, errors
//! - [`gmalg-params`]: algorithm and curve constants
//! - [`gmalg-algorithms`]: the SM4/SM1 and SM3 engines

#![forbid(unsafe_code)]

pub use gmalg_algorithms as algorithms;
pub use gmalg_api as api;
pub use gmalg_params as params;

/// Common imports for gmalg users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Contracts and identifiers
    pub use crate::api::{CipherFamily, Crypter, EncryptionAlgorithm, HashAlgorithm, Hasher, Mode};

    // Engines
    pub use crate::algorithms::{compute_z, GmalgCrypter, GmalgHasher, PublicKey, DEFAULT_ID};

    // Security types
    pub use crate::algorithms::{Digest, SecretBuffer};
    pub use zeroize::Zeroize;
}
