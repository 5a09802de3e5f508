use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    DigestUnavailable(String),
    UnsupportedAlgorithm(String),
    InvalidKeySize { algorithm: String, bits: u32 },
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::DigestUnavailable(name) => write!(f, "digest '{name}' is not available"),
            KeyError::UnsupportedAlgorithm(name) => {
                write!(f, "no key generator for algorithm '{name}'")
            }
            KeyError::InvalidKeySize { algorithm, bits } => {
                write!(f, "invalid key size {bits} for algorithm '{algorithm}'")
            }
        }
    }
}

impl std::error::Error for KeyError {}
