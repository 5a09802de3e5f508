//! Deterministic symmetric key and IV derivation from a password.
//!
//! The password is hashed into a 64-byte seed, the seed drives a
//! deterministic generator, and the key and IV are drawn one after the other
//! from that generator. The same password and parameters always yield the
//! same [`SecureKey`], on every run and every platform.
//!
//! ```
//! use seedkey::{derive_key_default, derive_key_with_sizes};
//!
//! let a = derive_key_default("correct horse").unwrap();
//! let b = derive_key_with_sizes("AES", 128, 128, "correct horse").unwrap();
//! assert_eq!(a, b);
//! assert_eq!(a.key().len(), 16);
//! ```

mod crypto;
mod error;
pub mod files;
mod key;
pub mod stream;

pub use crate::crypto::{
    DEFAULT_ALGORITHM, DEFAULT_DIGEST, DEFAULT_IVSIZE, DEFAULT_KEYSIZE, DigestAlgorithm,
    KeyAlgorithm, KeyParams, SEED_LEN, Seed, SeededRandom, base_name, derive_key,
    derive_key_default, derive_key_with_algorithm, derive_key_with_keysize,
    derive_key_with_sizes, digest_password,
};
pub use crate::error::KeyError;
pub use crate::key::SecureKey;

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn seeded_random_drives_key_generation() {
        let seed = digest_password(DEFAULT_DIGEST, b"pw").unwrap();
        let mut random = SeededRandom::new(&seed);

        let key = KeyAlgorithm::Aes.generate(128, &mut random).unwrap();
        let iv = KeyAlgorithm::Aes.generate(128, &mut random).unwrap();

        let derived = derive_key_default("pw").unwrap();
        assert_eq!(derived.key(), &key[..]);
        assert_eq!(derived.iv(), &iv[..]);
    }

    #[test]
    fn concurrent_derivations_agree() {
        let expected = derive_key_default("shared").unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| derive_key_default("shared").unwrap()))
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    }

    #[test]
    fn errors_render_readably() {
        let err = derive_key_with_sizes("NOPE", 128, 128, "pw").unwrap_err();
        assert_eq!(err.to_string(), "no key generator for algorithm 'NOPE'");

        let err = derive_key_with_sizes("AES", 999, 128, "pw").unwrap_err();
        assert_eq!(err.to_string(), "invalid key size 999 for algorithm 'AES'");

        let err = DigestAlgorithm::from_name("MD5").unwrap_err();
        assert_eq!(err.to_string(), "digest 'MD5' is not available");
    }
}
