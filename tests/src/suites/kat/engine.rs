//! Known-answer engine backed by the gmalg crypter and hasher

use gmalg_algorithms::{GmalgCrypter, GmalgHasher, PublicKey};
use gmalg_api::{Crypter, EncryptionAlgorithm, HashAlgorithm, Hasher};

use super::error::{KatError, Result};
use super::model::{TestCase, TestGroup, TestSuite};
use super::runner::KatEngine;

/// Concrete engine used by the tests: one instance serves every suite
pub struct GmalgEngine;

impl KatEngine for GmalgEngine {
    fn run(&self, suite: &TestSuite, group: &TestGroup, case: &TestCase) -> Result<()> {
        if let Ok(algorithm) = suite.algorithm.parse::<EncryptionAlgorithm>() {
            return run_cipher(algorithm, group, case);
        }
        if let Ok(algorithm) = suite.algorithm.parse::<HashAlgorithm>() {
            return run_hash(algorithm, group, case);
        }
        Err(KatError::Unsupported {
            kind: "algorithm",
            value: suite.algorithm.clone(),
        })
    }
}

fn field<'c>(case: &'c TestCase, name: &'static str) -> Result<&'c str> {
    case.inputs
        .get(name)
        .map(String::as_str)
        .ok_or(KatError::MissingField(name))
}

fn hex_field(case: &TestCase, name: &'static str) -> Result<Vec<u8>> {
    Ok(hex::decode(field(case, name)?)?)
}

fn expect_hex(field: &'static str, expected: &str, actual: &[u8]) -> Result<()> {
    let actual = hex::encode(actual);
    if !expected.eq_ignore_ascii_case(&actual) {
        return Err(KatError::Mismatch {
            field,
            expected: expected.to_string(),
            actual,
        });
    }
    Ok(())
}

fn run_cipher(algorithm: EncryptionAlgorithm, group: &TestGroup, case: &TestCase) -> Result<()> {
    let key = hex_field(case, "key")?;
    let iv = match case.inputs.get("iv") {
        Some(iv) => hex::decode(iv)?,
        None => Vec::new(),
    };

    let mut crypter = GmalgCrypter::new(algorithm, key.len())?;
    crypter.set_key(&key)?;

    let (encrypt, input, expected_field) = match group.direction.as_deref() {
        Some("encrypt") => (true, hex_field(case, "pt")?, "ct"),
        Some("decrypt") => (false, hex_field(case, "ct")?, "pt"),
        other => {
            return Err(KatError::Unsupported {
                kind: "direction",
                value: other.unwrap_or("<none>").to_string(),
            })
        }
    };
    let expected = field(case, expected_field)?;

    let result = if encrypt {
        crypter.encrypt(&input, &iv)?
    } else {
        crypter.decrypt(&input, &iv)?
    };
    expect_hex(expected_field, expected, &result)?;

    // The in-place path must agree with the allocating one
    let mut buf = input;
    if encrypt {
        crypter.encrypt_in_place(&mut buf, &iv)?;
    } else {
        crypter.decrypt_in_place(&mut buf, &iv)?;
    }
    expect_hex(expected_field, expected, &buf)
}

fn run_hash(algorithm: HashAlgorithm, group: &TestGroup, case: &TestCase) -> Result<()> {
    let msg = hex_field(case, "msg")?;

    let mut hasher = match group.test_type.as_str() {
        "plain" => GmalgHasher::new(algorithm),
        "identity" => {
            let qx = hex_field(case, "qx")?;
            let qy = hex_field(case, "qy")?;
            let id = hex_field(case, "id")?;
            let key = PublicKey::from_coordinates(&qx, &qy);
            let hasher = GmalgHasher::with_identity(algorithm, &key, &id)?;
            if let Some(z) = case.inputs.get("z") {
                let actual = hasher.z().map(|z| z.to_vec()).unwrap_or_default();
                expect_hex("z", z, &actual)?;
            }
            hasher
        }
        other => {
            return Err(KatError::Unsupported {
                kind: "test type",
                value: other.to_string(),
            })
        }
    };

    let digest = hasher.allocate_hash(&msg)?;
    expect_hex("md", field(case, "md")?, &digest)
}
