//! Constants for symmetric encryption algorithms

/// SM4 key size in bytes
pub const SM4_KEY_SIZE: usize = 16;

/// SM4 block size in bytes
pub const SM4_BLOCK_SIZE: usize = 16;

/// SM4 IV size in bytes (one block)
pub const SM4_IV_SIZE: usize = SM4_BLOCK_SIZE;

/// SM1 key size in bytes
pub const SM1_KEY_SIZE: usize = 16;

/// SM1 block size in bytes
pub const SM1_BLOCK_SIZE: usize = 16;
