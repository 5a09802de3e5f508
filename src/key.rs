use serde::Serialize;
use std::fmt;
use zeroize::Zeroize;

/// Symmetric key material derived from a password.
///
/// Holds the full algorithm string as requested (mode and padding suffix
/// included), the key size in bits, and the key and IV bytes. Both byte
/// buffers are wiped when the value is dropped.
#[derive(Serialize, Clone, PartialEq, Eq)]
pub struct SecureKey {
    algorithm: String,
    keysize: u32,
    #[serde(serialize_with = "hex::serde::serialize")]
    key: Vec<u8>,
    #[serde(serialize_with = "hex::serde::serialize")]
    iv: Vec<u8>,
}

impl Drop for SecureKey {
    fn drop(&mut self) {
        self.key.zeroize();
        self.iv.zeroize();
    }
}

impl SecureKey {
    pub(crate) fn new(algorithm: String, keysize: u32, key: Vec<u8>, iv: Vec<u8>) -> Self {
        Self {
            algorithm,
            keysize,
            key,
            iv,
        }
    }

    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    pub fn keysize(&self) -> u32 {
        self.keysize
    }

    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn iv(&self) -> &[u8] {
        &self.iv
    }

    /// IV size in bits.
    pub fn ivsize(&self) -> u32 {
        (self.iv.len() * 8) as u32
    }
}

impl fmt::Debug for SecureKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureKey")
            .field("algorithm", &self.algorithm)
            .field("keysize", &self.keysize)
            .field("key", &"<redacted>")
            .field("iv", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SecureKey {
        SecureKey::new(
            "AES/CBC/PKCS5Padding".to_string(),
            128,
            vec![0xab; 16],
            vec![0x01; 16],
        )
    }

    #[test]
    fn accessors_return_fields() {
        let key = sample();
        assert_eq!(key.algorithm(), "AES/CBC/PKCS5Padding");
        assert_eq!(key.keysize(), 128);
        assert_eq!(key.key(), &[0xab; 16]);
        assert_eq!(key.iv(), &[0x01; 16]);
        assert_eq!(key.ivsize(), 128);
    }

    #[test]
    fn equality_compares_every_field() {
        let a = sample();
        assert_eq!(a, sample());

        let other_iv = SecureKey::new(
            a.algorithm().to_string(),
            128,
            a.key().to_vec(),
            vec![2; 16],
        );
        assert_ne!(a, other_iv);

        let other_alg = SecureKey::new("AES".to_string(), 128, a.key().to_vec(), a.iv().to_vec());
        assert_ne!(a, other_alg);
    }

    #[test]
    fn debug_redacts_key_material() {
        let out = format!("{:?}", sample());
        assert!(out.contains("AES/CBC/PKCS5Padding"));
        assert!(out.contains("<redacted>"));
        assert!(!out.contains("171"));
    }

    #[test]
    fn serializes_bytes_as_hex() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["algorithm"], "AES/CBC/PKCS5Padding");
        assert_eq!(json["keysize"], 128);
        assert_eq!(json["key"], "ab".repeat(16));
        assert_eq!(json["iv"], "01".repeat(16));
    }
}
