//! Domain parameters of the SM2 recommended curve
//!
//! GB/T 32918.5-2017 fixes a single 256-bit prime curve
//! `y^2 = x^3 + ax + b` over `F_p`. Every value is a big-endian field
//! element of [`SM2_FIELD_ELEMENT_SIZE`] bytes, the layout in which the
//! identity pre-hash absorbs them.

/// Size of an SM2 field element in bytes (32 bytes = 256 bits)
pub const SM2_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of an uncompressed SM2 point in bytes: format byte (0x04) + x-coordinate + y-coordinate
pub const SM2_POINT_UNCOMPRESSED_SIZE: usize = 1 + 2 * SM2_FIELD_ELEMENT_SIZE; // 65 bytes: 0x04 || x || y

/// Width of one coordinate array in the GM/T 0018 `ECCrefPublicKey` structure
pub const ECCREF_MAX_LEN: usize = 64;

/// Default user identity of GM/T 0009 ("1234567812345678")
pub const SM2_DEFAULT_ID: &[u8] = b"1234567812345678";

/// Longest identity whose bit length still fits the 16-bit ENTL field
pub const SM2_MAX_ID_LEN: usize = (u16::MAX as usize) / 8;

/// Prime modulus p of the underlying field
pub const SM2_P: [u8; SM2_FIELD_ELEMENT_SIZE] = [
    0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
];

/// Curve coefficient a
pub const SM2_A: [u8; SM2_FIELD_ELEMENT_SIZE] = [
    0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x00,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfc,
];

/// Curve coefficient b
pub const SM2_B: [u8; SM2_FIELD_ELEMENT_SIZE] = [
    0x28, 0xe9, 0xfa, 0x9e, 0x9d, 0x9f, 0x5e, 0x34,
    0x4d, 0x5a, 0x9e, 0x4b, 0xcf, 0x65, 0x09, 0xa7,
    0xf3, 0x97, 0x89, 0xf5, 0x15, 0xab, 0x8f, 0x92,
    0xdd, 0xbc, 0xbd, 0x41, 0x4d, 0x94, 0x0e, 0x93,
];

/// Order n of the base point
pub const SM2_N: [u8; SM2_FIELD_ELEMENT_SIZE] = [
    0xff, 0xff, 0xff, 0xfe, 0xff, 0xff, 0xff, 0xff,
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x72, 0x03, 0xdf, 0x6b, 0x21, 0xc6, 0x05, 0x2b,
    0x53, 0xbb, 0xf4, 0x09, 0x39, 0xd5, 0x41, 0x23,
];

/// Base point x-coordinate
pub const SM2_GX: [u8; SM2_FIELD_ELEMENT_SIZE] = [
    0x32, 0xc4, 0xae, 0x2c, 0x1f, 0x19, 0x81, 0x19,
    0x5f, 0x99, 0x04, 0x46, 0x6a, 0x39, 0xc9, 0x94,
    0x8f, 0xe3, 0x0b, 0xbf, 0xf2, 0x66, 0x0b, 0xe1,
    0x71, 0x5a, 0x45, 0x89, 0x33, 0x4c, 0x74, 0xc7,
];

/// Base point y-coordinate
pub const SM2_GY: [u8; SM2_FIELD_ELEMENT_SIZE] = [
    0xbc, 0x37, 0x36, 0xa2, 0xf4, 0xf6, 0x77, 0x9c,
    0x59, 0xbd, 0xce, 0xe3, 0x6b, 0x69, 0x21, 0x53,
    0xd0, 0xa9, 0x87, 0x7c, 0xc6, 0x2a, 0x47, 0x40,
    0x02, 0xdf, 0x32, 0xe5, 0x21, 0x39, 0xf0, 0xa0,
];
