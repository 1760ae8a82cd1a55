//! # Hybrid sealing
//! Every payload is encrypted with a fresh AES-128-GCM key, that key in turn is wrapped with
//! RSA-OAEP (SHA-256) under the recipient's public key. Only the matching private key can
//! unwrap it, and the GCM tag makes any change to nonce or ciphertext fail closed.

use aes_gcm::aead::{AeadCore, AeadInPlace, KeyInit};
use aes_gcm::{Aes128Gcm, Nonce, Tag};
use rand::rngs::OsRng;
use rand::RngCore;
use rsa::Oaep;
use sha2::Sha256;
use zeroize::Zeroizing;

pub mod error;
pub mod keys;

pub use crate::error::SealError;
pub use crate::keys::{import_key, Key, KeyPair, PrivateKey, PublicKey, KEY_BITS};

/// 128 bit symmetric key
pub const SYMMETRIC_KEY_LEN: usize = 16;
pub const NONCE_LEN: usize = 12;
pub const TAG_LEN: usize = 16;
/// AES-GCM limits a single message to 2^39 - 256 bits
pub const MAX_PLAINTEXT_LEN: u64 = (1 << 36) - 32;

pub type Result<T> = std::result::Result<T, SealError>;

/// Everything needed to open a sealed message, given the right private key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedPayload {
    pub wrapped_key: Vec<u8>,
    pub nonce: Vec<u8>,
    pub tag: Vec<u8>,
    pub ciphertext: Vec<u8>,
}

/// seals `plaintext` for the owner of `public_key`
pub fn encrypt(plaintext: &[u8], public_key: &PublicKey) -> Result<EncryptedPayload> {
    if plaintext.len() as u64 > MAX_PLAINTEXT_LEN {
        return Err(SealError::Encryption(format!(
            "plaintext of {} bytes exceeds the AEAD limit of {MAX_PLAINTEXT_LEN} bytes",
            plaintext.len()
        )));
    }

    let mut key = Zeroizing::new([0u8; SYMMETRIC_KEY_LEN]);
    OsRng.fill_bytes(&mut key[..]);

    let cipher = Aes128Gcm::new(&(*key).into());
    let nonce = Aes128Gcm::generate_nonce(&mut OsRng);
    let mut ciphertext = plaintext.to_vec();
    let tag = cipher
        .encrypt_in_place_detached(&nonce, b"", &mut ciphertext)
        .map_err(|e| SealError::Encryption(e.to_string()))?;

    let wrapped_key = public_key
        .0
        .encrypt(&mut OsRng, Oaep::new::<Sha256>(), &key[..])
        .map_err(|e| SealError::Encryption(e.to_string()))?;

    Ok(EncryptedPayload {
        wrapped_key,
        nonce: nonce.to_vec(),
        tag: tag.to_vec(),
        ciphertext,
    })
}

/// opens a payload sealed by [`encrypt`], no plaintext is returned unless the tag verifies
pub fn decrypt(payload: &EncryptedPayload, private_key: &PrivateKey) -> Result<Vec<u8>> {
    let key = Zeroizing::new(
        private_key
            .0
            .decrypt(Oaep::new::<Sha256>(), &payload.wrapped_key)
            .map_err(SealError::KeyMismatch)?,
    );
    if key.len() != SYMMETRIC_KEY_LEN {
        return Err(SealError::KeyMismatch(rsa::Error::Decryption));
    }
    if payload.nonce.len() != NONCE_LEN || payload.tag.len() != TAG_LEN {
        return Err(SealError::Integrity);
    }

    let cipher = Aes128Gcm::new_from_slice(&key).map_err(|_| SealError::Integrity)?;
    let mut plaintext = payload.ciphertext.clone();
    cipher
        .decrypt_in_place_detached(
            Nonce::from_slice(&payload.nonce),
            b"",
            &mut plaintext,
            Tag::from_slice(&payload.tag),
        )
        .map_err(|_| SealError::Integrity)?;

    Ok(plaintext)
}
