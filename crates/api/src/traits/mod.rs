//! Contract traits implemented by the gmalg engines

pub mod crypter;
pub mod hasher;

pub use crypter::Crypter;
pub use hasher::Hasher;
