//! Algorithm identifiers understood by the gmalg engines
//!
//! The host framework hands algorithms over by name. Parsing a name is the
//! single place where an unknown algorithm is rejected; once a value of one
//! of these enums exists, every dispatch over it is exhaustive.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};

/// Block cipher family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CipherFamily {
    /// SM1 (GM/T 0002 predecessor, hardware only)
    Sm1,
    /// SM4 (GB/T 32907-2016)
    Sm4,
}

impl CipherFamily {
    /// Display name of the family
    pub fn name(self) -> &'static str {
        match self {
            Self::Sm1 => "SM1",
            Self::Sm4 => "SM4",
        }
    }
}

/// Block cipher mode of operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    /// Electronic Codebook
    Ecb,
    /// Cipher Block Chaining
    Cbc,
}

/// Encryption algorithm: a cipher family combined with a mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum EncryptionAlgorithm {
    /// SM1 in ECB mode
    Sm1Ecb,
    /// SM1 in CBC mode
    Sm1Cbc,
    /// SM4 in ECB mode
    Sm4Ecb,
    /// SM4 in CBC mode
    Sm4Cbc,
}

impl EncryptionAlgorithm {
    /// Every supported combination
    pub const ALL: [Self; 4] = [Self::Sm1Ecb, Self::Sm1Cbc, Self::Sm4Ecb, Self::Sm4Cbc];

    /// Canonical lowercase name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sm1Ecb => "sm1-ecb",
            Self::Sm1Cbc => "sm1-cbc",
            Self::Sm4Ecb => "sm4-ecb",
            Self::Sm4Cbc => "sm4-cbc",
        }
    }

    /// Cipher family of this algorithm
    pub fn family(self) -> CipherFamily {
        match self {
            Self::Sm1Ecb | Self::Sm1Cbc => CipherFamily::Sm1,
            Self::Sm4Ecb | Self::Sm4Cbc => CipherFamily::Sm4,
        }
    }

    /// Mode of operation of this algorithm
    pub fn mode(self) -> Mode {
        match self {
            Self::Sm1Ecb | Self::Sm4Ecb => Mode::Ecb,
            Self::Sm1Cbc | Self::Sm4Cbc => Mode::Cbc,
        }
    }
}

impl fmt::Display for EncryptionAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EncryptionAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|alg| alg.name() == normalized)
            .ok_or_else(|| Error::unsupported("EncryptionAlgorithm", s))
    }
}

/// Hash algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HashAlgorithm {
    /// SM3 (GB/T 32905-2016)
    Sm3,
}

impl HashAlgorithm {
    /// Canonical lowercase name, as accepted by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sm3 => "sm3",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sm3" => Ok(Self::Sm3),
            _ => Err(Error::unsupported("HashAlgorithm", s)),
        }
    }
}
