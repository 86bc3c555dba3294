//! SM4/SM1 cipher and SM3 hash engines for the gmalg library
//!
//! This crate provides the engines behind the [`gmalg_api`] contracts:
//!
//! - [`GmalgCrypter`]: SM1 and SM4 in ECB and CBC mode
//! - [`GmalgHasher`]: streaming SM3, optionally prefixed with the SM2
//!   identity pre-hash of a signer
//!
//! along with the building blocks they are made of. Key material is held in
//! [`SecretBuffer`] and scrubbed on drop.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

// Error type and validation helpers shared with the API crate
pub use gmalg_api::error;
pub use error::{validate, Error, Result};

// Block cipher implementations
pub mod block;
pub use block::{BlockCipher, Cbc, Ecb, Sm1, Sm4};

// Hash function implementations
pub mod hash;
pub use hash::{HashFunction, Sm3};

// SM2 public keys and the identity pre-hash
pub mod ec;
pub use ec::{compute_z, PublicKey};

// Engines
pub mod crypter;
pub use crypter::GmalgCrypter;

pub mod hasher;
pub use hasher::GmalgHasher;

// Type system
pub mod types;
pub use types::{ConstantTimeEq, Digest, SecretBuffer};

/// Identity used when a signer has none of its own
pub const DEFAULT_ID: &[u8] = gmalg_params::traditional::sm2::SM2_DEFAULT_ID;
