use sha2::{Digest, Sha512};
use sha3::Sha3_512;
use zeroize::Zeroizing;

use super::SEED_LEN;
use crate::error::KeyError;

/// Fixed-size generator seed derived from a password.
pub type Seed = Zeroizing<[u8; SEED_LEN]>;

/// 512-bit hash used to collapse a password into a [`Seed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Sha512,
    Sha3_512,
}

impl Default for DigestAlgorithm {
    fn default() -> Self {
        DigestAlgorithm::Sha512
    }
}

impl DigestAlgorithm {
    /// Resolves a digest by name, ignoring case.
    pub fn from_name(name: &str) -> Result<Self, KeyError> {
        match name.to_ascii_uppercase().as_str() {
            "SHA-512" | "SHA512" => Ok(DigestAlgorithm::Sha512),
            "SHA3-512" => Ok(DigestAlgorithm::Sha3_512),
            _ => Err(KeyError::DigestUnavailable(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha512 => "SHA-512",
            DigestAlgorithm::Sha3_512 => "SHA3-512",
        }
    }

    pub fn digest(&self, password: &[u8]) -> Seed {
        let mut seed = Zeroizing::new([0u8; SEED_LEN]);
        match self {
            DigestAlgorithm::Sha512 => seed.copy_from_slice(&Sha512::digest(password)),
            DigestAlgorithm::Sha3_512 => seed.copy_from_slice(&Sha3_512::digest(password)),
        }
        seed
    }
}

/// Digest a password with the named hash.
pub fn digest_password(digest: &str, password: &[u8]) -> Result<Seed, KeyError> {
    Ok(DigestAlgorithm::from_name(digest)?.digest(password))
}
