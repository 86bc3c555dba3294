//! Elliptic curve material consumed by the hash engine
//!
//! Only what the SM2 identity pre-hash needs lives here: public key
//! encodings and the Z-value construction. Point arithmetic is out of scope.

pub mod sm2;

pub use self::sm2::{compute_z, PublicKey};
