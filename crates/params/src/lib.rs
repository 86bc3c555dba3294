//! Constant values for gmalg cryptographic operations
//!
//! Sizes of the SM4 and SM3 primitives and the domain parameters of the SM2
//! recommended curve. Everything here is `const` data shared read-only by
//! every engine instance.

#![no_std]

pub mod traditional;
pub mod utils;
