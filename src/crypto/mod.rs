//! Cryptographic primitives for key derivation.
//!
//! Provides password digesting, the seeded generator, per-family key
//! generation and the derivation pipeline tying them together.

pub mod digest;
pub mod kdf;
pub mod keygen;
pub mod rng;

pub use digest::{DigestAlgorithm, Seed, digest_password};
pub use kdf::{
    DEFAULT_ALGORITHM, DEFAULT_DIGEST, DEFAULT_IVSIZE, DEFAULT_KEYSIZE, KeyParams, base_name,
    derive_key, derive_key_default, derive_key_with_algorithm, derive_key_with_keysize,
    derive_key_with_sizes,
};
pub use keygen::KeyAlgorithm;
pub use rng::SeededRandom;

/// Length of the seed (64 bytes / 512 bits).
pub const SEED_LEN: usize = 64;
/// Length of one generator output block (one SHA-512 output).
pub const BLOCK_LEN: usize = 64;
/// Length of the generator block counter (8 bytes, big-endian).
pub const COUNTER_LEN: usize = 8;
