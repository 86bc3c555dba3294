//! Property-based tests for the SM1/SM4 crypter

use gmalg_algorithms::block::{BlockCipher, Cbc, Ecb, Sm4};
use gmalg_algorithms::types::SecretBuffer;
use gmalg_algorithms::GmalgCrypter;
use gmalg_api::{Crypter, EncryptionAlgorithm};
use proptest::prelude::*;

/// Generate data that's a multiple of 16 bytes (SM4 block size)
fn block_aligned_data() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=256).prop_map(|mut v| {
        v.truncate(v.len() - v.len() % 16);
        v
    })
}

fn algorithm() -> impl Strategy<Value = EncryptionAlgorithm> {
    prop::sample::select(EncryptionAlgorithm::ALL.to_vec())
}

fn keyed(alg: EncryptionAlgorithm, key: &[u8; 16]) -> GmalgCrypter {
    let mut crypter = GmalgCrypter::new(alg, 16).unwrap();
    crypter.set_key(key).unwrap();
    crypter
}

proptest! {
    #[test]
    fn crypter_roundtrip(
        alg in algorithm(),
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data()
    ) {
        let crypter = keyed(alg, &key);

        let ciphertext = crypter.encrypt(&data, &iv).unwrap();
        prop_assert_eq!(ciphertext.len(), data.len());

        let plaintext = crypter.decrypt(&ciphertext, &iv).unwrap();
        prop_assert_eq!(plaintext, data);
    }

    #[test]
    fn in_place_matches_allocating(
        alg in algorithm(),
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data()
    ) {
        let crypter = keyed(alg, &key);
        let expected = crypter.encrypt(&data, &iv).unwrap();

        let mut buf = data.clone();
        crypter.encrypt_in_place(&mut buf, &iv).unwrap();
        prop_assert_eq!(&buf, &expected);

        crypter.decrypt_in_place(&mut buf, &iv).unwrap();
        prop_assert_eq!(buf, data);
    }

    #[test]
    fn cbc_chaining(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data()
    ) {
        // C_i = E(P_i xor C_{i-1}), C_0 = IV
        let cipher = Sm4::new(&SecretBuffer::new(key));
        let ciphertext = Cbc::new(&cipher, &iv).unwrap().encrypt(&data).unwrap();

        let mut prev = iv;
        for (p, c) in data.chunks_exact(16).zip(ciphertext.chunks_exact(16)) {
            let mut block = [0u8; 16];
            for ((b, x), y) in block.iter_mut().zip(p).zip(prev.iter()) {
                *b = x ^ y;
            }
            cipher.encrypt_block(&mut block);
            prop_assert_eq!(&block[..], c);
            prev = block;
        }
    }

    #[test]
    fn ecb_blocks_are_independent(
        key in any::<[u8; 16]>(),
        data in block_aligned_data()
    ) {
        let cipher = Sm4::new(&SecretBuffer::new(key));
        let ciphertext = Ecb::new(&cipher).encrypt(&data).unwrap();

        for (p, c) in data.chunks_exact(16).zip(ciphertext.chunks_exact(16)) {
            let mut block = [0u8; 16];
            block.copy_from_slice(p);
            cipher.encrypt_block(&mut block);
            prop_assert_eq!(&block[..], c);
        }
    }

    #[test]
    fn sm1_matches_sm4(
        key in any::<[u8; 16]>(),
        iv in any::<[u8; 16]>(),
        data in block_aligned_data()
    ) {
        for (sm1, sm4) in [
            (EncryptionAlgorithm::Sm1Ecb, EncryptionAlgorithm::Sm4Ecb),
            (EncryptionAlgorithm::Sm1Cbc, EncryptionAlgorithm::Sm4Cbc),
        ] {
            prop_assert_eq!(sm1.mode(), sm4.mode());
            prop_assert_eq!(
                keyed(sm1, &key).encrypt(&data, &iv).unwrap(),
                keyed(sm4, &key).encrypt(&data, &iv).unwrap()
            );
        }
    }

    #[test]
    fn partial_tail_is_not_transformed(
        alg in algorithm(),
        key in any::<[u8; 16]>(),
        data in block_aligned_data(),
        tail in prop::collection::vec(any::<u8>(), 1..16)
    ) {
        let crypter = keyed(alg, &key);
        let iv = [0u8; 16];
        let mut input = data.clone();
        input.extend_from_slice(&tail);

        let out = crypter.encrypt(&input, &iv).unwrap();
        prop_assert_eq!(out.len(), input.len());
        prop_assert_eq!(&out[..data.len()], &crypter.encrypt(&data, &iv).unwrap()[..]);
        prop_assert!(out[data.len()..].iter().all(|&b| b == 0));

        let mut in_place = input.clone();
        crypter.encrypt_in_place(&mut in_place, &iv).unwrap();
        prop_assert_eq!(&in_place[data.len()..], &tail[..]);
    }
}
