use rand_core::RngCore;
use zeroize::Zeroizing;

use crate::error::KeyError;

/// Cipher family backing key generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAlgorithm {
    Aes,
    Blowfish,
    Rc2,
    Arcfour,
    ChaCha20,
}

impl KeyAlgorithm {
    pub const ALL: [KeyAlgorithm; 5] = [
        KeyAlgorithm::Aes,
        KeyAlgorithm::Blowfish,
        KeyAlgorithm::Rc2,
        KeyAlgorithm::Arcfour,
        KeyAlgorithm::ChaCha20,
    ];

    /// Resolves a base algorithm name, ignoring case.
    pub fn from_name(name: &str) -> Result<Self, KeyError> {
        match name.to_ascii_uppercase().as_str() {
            "AES" => Ok(KeyAlgorithm::Aes),
            "BLOWFISH" => Ok(KeyAlgorithm::Blowfish),
            "RC2" => Ok(KeyAlgorithm::Rc2),
            "ARCFOUR" | "RC4" => Ok(KeyAlgorithm::Arcfour),
            "CHACHA20" => Ok(KeyAlgorithm::ChaCha20),
            _ => Err(KeyError::UnsupportedAlgorithm(name.to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            KeyAlgorithm::Aes => "AES",
            KeyAlgorithm::Blowfish => "Blowfish",
            KeyAlgorithm::Rc2 => "RC2",
            KeyAlgorithm::Arcfour => "ARCFOUR",
            KeyAlgorithm::ChaCha20 => "ChaCha20",
        }
    }

    /// Human-readable list of accepted sizes in bits.
    pub fn sizes(&self) -> &'static str {
        match self {
            KeyAlgorithm::Aes => "128, 192, 256",
            KeyAlgorithm::Blowfish => "32-448 (multiple of 8)",
            KeyAlgorithm::Rc2 | KeyAlgorithm::Arcfour => "40-1024 (multiple of 8)",
            KeyAlgorithm::ChaCha20 => "256",
        }
    }

    pub fn supports(&self, bits: u32) -> bool {
        match self {
            KeyAlgorithm::Aes => matches!(bits, 128 | 192 | 256),
            KeyAlgorithm::Blowfish => (32..=448).contains(&bits) && bits % 8 == 0,
            KeyAlgorithm::Rc2 | KeyAlgorithm::Arcfour => {
                (40..=1024).contains(&bits) && bits % 8 == 0
            }
            KeyAlgorithm::ChaCha20 => bits == 256,
        }
    }

    pub fn validate(&self, bits: u32) -> Result<(), KeyError> {
        if !self.supports(bits) {
            return Err(KeyError::InvalidKeySize {
                algorithm: self.name().to_string(),
                bits,
            });
        }
        Ok(())
    }

    /// Draws `bits / 8` bytes of key material from `rng`.
    pub fn generate<R: RngCore + ?Sized>(
        &self,
        bits: u32,
        rng: &mut R,
    ) -> Result<Zeroizing<Vec<u8>>, KeyError> {
        self.validate(bits)?;

        let mut key = Zeroizing::new(vec![0u8; (bits / 8) as usize]);
        rng.fill_bytes(&mut key);
        Ok(key)
    }
}
