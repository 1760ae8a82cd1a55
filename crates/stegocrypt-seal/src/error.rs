pub use aes_gcm::Error as AeadError;
pub use rsa::Error as RsaError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SealError {
    /// The RSA key pair could not be generated, usually an entropy source failure
    #[error("Key generation error")]
    KeyGeneration(RsaError),

    /// The plaintext could not be sealed, e.g. it exceeds the AEAD message limit
    #[error("Encryption error: {0}")]
    Encryption(String),

    /// The wrapped symmetric key could not be opened with the given private key
    #[error("Private key does not match the key the payload was sealed for")]
    KeyMismatch(RsaError),

    /// Authentication of nonce and ciphertext failed, nothing is returned
    #[error("Integrity check failed, the payload was tampered with or corrupted")]
    Integrity,

    /// A PEM document could not be parsed or encoded as an RSA key
    #[error("Invalid key encoding: {0}")]
    InvalidKey(String),
}
