use std::mem;
use tracing::debug;

use super::{DigestAlgorithm, KeyAlgorithm, SeededRandom};
use crate::error::KeyError;
use crate::key::SecureKey;

pub const DEFAULT_ALGORITHM: &str = "AES";
pub const DEFAULT_KEYSIZE: u32 = 128;
pub const DEFAULT_IVSIZE: u32 = 128;
pub const DEFAULT_DIGEST: &str = "SHA-512";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyParams {
    algorithm: String,
    keysize: u32,
    ivsize: u32,
    digest: DigestAlgorithm,
}

impl Default for KeyParams {
    fn default() -> Self {
        Self {
            algorithm: DEFAULT_ALGORITHM.to_string(),
            keysize: DEFAULT_KEYSIZE,
            ivsize: DEFAULT_IVSIZE,
            // changing this changes every derived key
            digest: DigestAlgorithm::Sha512,
        }
    }
}

impl KeyParams {
    pub fn new(algorithm: &str, keysize: u32, ivsize: u32) -> Result<Self, KeyError> {
        let params = Self {
            algorithm: algorithm.to_string(),
            keysize,
            ivsize,
            ..Self::default()
        };
        params.validate()?;
        Ok(params)
    }

    pub fn with_digest(mut self, digest: DigestAlgorithm) -> Self {
        self.digest = digest;
        self
    }

    pub fn with_digest_name(self, name: &str) -> Result<Self, KeyError> {
        Ok(self.with_digest(DigestAlgorithm::from_name(name)?))
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn keysize(&self) -> u32 {
        self.keysize
    }

    pub fn ivsize(&self) -> u32 {
        self.ivsize
    }

    pub fn digest(&self) -> DigestAlgorithm {
        self.digest
    }

    /// Key-generation family named by the part of the algorithm before `/`.
    pub fn key_algorithm(&self) -> Result<KeyAlgorithm, KeyError> {
        KeyAlgorithm::from_name(base_name(&self.algorithm))
    }

    pub fn validate(&self) -> Result<(), KeyError> {
        let family = self.key_algorithm()?;
        family.validate(self.keysize)?;
        family.validate(self.ivsize)?;
        Ok(())
    }
}

/// Strips any mode and padding suffix: `"AES/CBC/PKCS5Padding"` gives `"AES"`.
pub fn base_name(algorithm: &str) -> &str {
    algorithm
        .split_once('/')
        .map_or(algorithm, |(base, _)| base)
}

/// Derive a key and IV from a password.
///
/// The password digest seeds a single [`SeededRandom`]; the key is drawn
/// first and the IV continues from where the key stopped. No salt is mixed
/// in, so equal passwords and parameters always give equal keys.
pub fn derive_key(password: &[u8], params: &KeyParams) -> Result<SecureKey, KeyError> {
    let seed = params.digest.digest(password);
    let mut random = SeededRandom::new(&seed);

    let family = params.key_algorithm()?;
    family.validate(params.ivsize)?;

    let mut key = family.generate(params.keysize, &mut random)?;
    let mut iv = family.generate(params.ivsize, &mut random)?;

    debug!(
        algorithm = %params.algorithm,
        family = family.name(),
        keysize = params.keysize,
        ivsize = params.ivsize,
        digest = params.digest.name(),
        "derived key material"
    );

    Ok(SecureKey::new(
        params.algorithm.clone(),
        params.keysize,
        mem::take(&mut *key),
        mem::take(&mut *iv),
    ))
}

pub fn derive_key_default(password: &str) -> Result<SecureKey, KeyError> {
    derive_key(password.as_bytes(), &KeyParams::default())
}

pub fn derive_key_with_algorithm(algorithm: &str, password: &str) -> Result<SecureKey, KeyError> {
    derive_key_with_sizes(algorithm, DEFAULT_KEYSIZE, DEFAULT_IVSIZE, password)
}

pub fn derive_key_with_keysize(
    algorithm: &str,
    keysize: u32,
    password: &str,
) -> Result<SecureKey, KeyError> {
    derive_key_with_sizes(algorithm, keysize, DEFAULT_IVSIZE, password)
}

pub fn derive_key_with_sizes(
    algorithm: &str,
    keysize: u32,
    ivsize: u32,
    password: &str,
) -> Result<SecureKey, KeyError> {
    let params = KeyParams::new(algorithm, keysize, ivsize)?;
    derive_key(password.as_bytes(), &params)
}
