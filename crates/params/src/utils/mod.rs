//! Sizes of the symmetric and hash primitives

pub mod hash;
pub mod symmetric;
