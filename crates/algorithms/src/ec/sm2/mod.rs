//! SM2 public keys and the identity pre-hash (Z-value)
//!
//! GB/T 32918.2-2016 section 5.5 binds a signature to its signer by
//! prefixing the message with
//!
//! ```text
//! Z = SM3(ENTL || ID || a || b || xG || yG || xA || yA)
//! ```
//!
//! where ENTL is the bit length of ID as a 16-bit big-endian integer and
//! every other field is a 32-byte big-endian field element.

use gmalg_params::traditional::sm2::{
    ECCREF_MAX_LEN, SM2_A, SM2_B, SM2_FIELD_ELEMENT_SIZE, SM2_GX, SM2_GY, SM2_MAX_ID_LEN,
    SM2_POINT_UNCOMPRESSED_SIZE,
};
use gmalg_params::utils::hash::SM3_OUTPUT_SIZE;

use crate::error::{validate, Result};
use crate::hash::{HashFunction, Sm3};
use crate::types::Digest;

/// One SM2 field element in big-endian form
pub type FieldBytes = [u8; SM2_FIELD_ELEMENT_SIZE];

/// SM2 public key as an affine point
///
/// No curve membership check is made; the key is only ever hashed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey {
    x: FieldBytes,
    y: FieldBytes,
}

impl PublicKey {
    /// Build a key from big-endian coordinates of any length
    ///
    /// Shorter coordinates are left-padded with zeros; longer ones keep
    /// their least significant 32 bytes.
    pub fn from_coordinates(x: &[u8], y: &[u8]) -> Self {
        Self {
            x: field_element(x),
            y: field_element(y),
        }
    }

    /// Parse the SEC1 uncompressed encoding `0x04 || x || y`
    pub fn from_uncompressed(bytes: &[u8]) -> Result<Self> {
        validate::length(
            "SM2 uncompressed public key",
            bytes.len(),
            SM2_POINT_UNCOMPRESSED_SIZE,
        )?;
        validate::parameter(
            bytes[0] == 0x04,
            "SM2 uncompressed public key",
            "leading byte must be 0x04",
        )?;

        let (x, y) = bytes[1..].split_at(SM2_FIELD_ELEMENT_SIZE);
        Ok(Self::from_coordinates(x, y))
    }

    /// Build a key from the coordinate arrays of a GM/T 0018 `ECCrefPublicKey`
    ///
    /// Each coordinate is stored right-aligned in a 64-byte array.
    pub fn from_ecc_ref(x: &[u8; ECCREF_MAX_LEN], y: &[u8; ECCREF_MAX_LEN]) -> Self {
        Self::from_coordinates(x, y)
    }

    /// The x-coordinate
    pub fn x(&self) -> &FieldBytes {
        &self.x
    }

    /// The y-coordinate
    pub fn y(&self) -> &FieldBytes {
        &self.y
    }

    /// SEC1 uncompressed encoding
    pub fn to_uncompressed(&self) -> [u8; SM2_POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; SM2_POINT_UNCOMPRESSED_SIZE];
        out[0] = 0x04;
        out[1..1 + SM2_FIELD_ELEMENT_SIZE].copy_from_slice(&self.x);
        out[1 + SM2_FIELD_ELEMENT_SIZE..].copy_from_slice(&self.y);
        out
    }
}

/// Pad or truncate a big-endian integer to the field width
fn field_element(src: &[u8]) -> FieldBytes {
    let mut out = [0u8; SM2_FIELD_ELEMENT_SIZE];
    if src.len() >= SM2_FIELD_ELEMENT_SIZE {
        out.copy_from_slice(&src[src.len() - SM2_FIELD_ELEMENT_SIZE..]);
    } else {
        out[SM2_FIELD_ELEMENT_SIZE - src.len()..].copy_from_slice(src);
    }
    out
}

/// Compute the identity pre-hash Z for `public_key` and `identity`
///
/// Fails with `InvalidLength` when the identity is longer than 8191 bytes,
/// since its bit length would not fit ENTL.
pub fn compute_z(public_key: &PublicKey, identity: &[u8]) -> Result<Digest<SM3_OUTPUT_SIZE>> {
    validate::max_length("SM2 identity", identity.len(), SM2_MAX_ID_LEN)?;
    let entl = (identity.len() * 8) as u16;

    let mut sm3 = Sm3::new();
    sm3.update(&entl.to_be_bytes());
    sm3.update(identity);
    for field in [&SM2_A, &SM2_B, &SM2_GX, &SM2_GY, &public_key.x, &public_key.y] {
        sm3.update(field);
    }
    Ok(sm3.finalize())
}
