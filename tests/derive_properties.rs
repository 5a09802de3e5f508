use hex_literal::hex;
use proptest::prelude::*;
use seedkey::{
    DEFAULT_ALGORITHM, DEFAULT_IVSIZE, DEFAULT_KEYSIZE, KeyAlgorithm, KeyError, KeyParams,
    derive_key, derive_key_default, derive_key_with_sizes,
};

#[test]
fn golden_correct_horse_aes_128() {
    let key = derive_key_with_sizes("AES", 128, 128, "correct horse").unwrap();
    assert_eq!(key.algorithm(), "AES");
    assert_eq!(key.keysize(), 128);
    assert_eq!(key.key(), hex!("e2aad56459d9b36c049f2b2e34417256"));
    assert_eq!(key.iv(), hex!("15825f85b09744c6ce653f54965b37fa"));
}

#[test]
fn error_scenarios() {
    assert!(matches!(
        derive_key_with_sizes("NOPE", 128, 128, "pw"),
        Err(KeyError::UnsupportedAlgorithm(_))
    ));
    assert!(matches!(
        derive_key_with_sizes("AES", 999, 128, "pw"),
        Err(KeyError::InvalidKeySize { bits: 999, .. })
    ));
}

fn aes_size() -> impl Strategy<Value = u32> {
    prop_oneof![Just(128u32), Just(192u32), Just(256u32)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn derivation_is_deterministic(
        password in ".*",
        keysize in aes_size(),
        ivsize in aes_size(),
    ) {
        let a = derive_key_with_sizes("AES", keysize, ivsize, &password).unwrap();
        let b = derive_key_with_sizes("AES", keysize, ivsize, &password).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn sizes_are_exact(keysize in aes_size(), ivsize in aes_size(), password in "[a-z]{0,16}") {
        let key = derive_key_with_sizes("AES", keysize, ivsize, &password).unwrap();
        prop_assert_eq!(key.key().len(), (keysize / 8) as usize);
        prop_assert_eq!(key.iv().len(), (ivsize / 8) as usize);
        prop_assert_ne!(key.key(), key.iv());
    }

    #[test]
    fn range_families_honor_sizes(bytes in 5u32..=56, iv_bytes in 5u32..=56) {
        let params = KeyParams::new("Blowfish", bytes * 8, iv_bytes * 8).unwrap();
        let key = derive_key(b"pw", &params).unwrap();
        prop_assert_eq!(key.key().len(), bytes as usize);
        prop_assert_eq!(key.iv().len(), iv_bytes as usize);
    }

    #[test]
    fn flipping_a_password_byte_changes_key(
        password in proptest::collection::vec(any::<u8>(), 1..64),
        index in any::<prop::sample::Index>(),
        flip in 1u8..=255,
    ) {
        let mut changed = password.clone();
        let i = index.index(changed.len());
        changed[i] ^= flip;

        let params = KeyParams::default();
        let a = derive_key(&password, &params).unwrap();
        let b = derive_key(&changed, &params).unwrap();
        prop_assert_ne!(a.key(), b.key());
    }

    #[test]
    fn defaults_match_explicit_call(password in "\\PC{0,24}") {
        let implicit = derive_key_default(&password).unwrap();
        let explicit = derive_key_with_sizes(
            DEFAULT_ALGORITHM,
            DEFAULT_KEYSIZE,
            DEFAULT_IVSIZE,
            &password,
        )
        .unwrap();
        prop_assert_eq!(implicit, explicit);
    }

    #[test]
    fn mode_suffix_does_not_change_bytes(suffix in "/[A-Z0-9]{1,8}(/[A-Za-z0-9]{1,12})?") {
        let plain = derive_key_with_sizes("AES", 128, 128, "pw").unwrap();
        let algorithm = format!("AES{suffix}");
        let suffixed = derive_key_with_sizes(&algorithm, 128, 128, "pw").unwrap();
        prop_assert_eq!(suffixed.algorithm(), algorithm.as_str());
        prop_assert_eq!(plain.key(), suffixed.key());
        prop_assert_eq!(plain.iv(), suffixed.iv());
    }
}

#[test]
fn every_family_derives_at_its_smallest_size() {
    for alg in KeyAlgorithm::ALL {
        let bits = (8..=1024).step_by(8).find(|b| alg.supports(*b)).unwrap();
        let key = derive_key_with_sizes(alg.name(), bits, bits, "pw").unwrap();
        assert_eq!(key.key().len() * 8, bits as usize);
    }
}
