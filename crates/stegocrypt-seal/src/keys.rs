use std::fmt::{self, Debug, Formatter};

use rand::rngs::OsRng;
use rsa::pkcs1::{
    DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey, EncodeRsaPublicKey, LineEnding,
};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

use crate::error::SealError;
use crate::Result;

/// modulus size of freshly generated key pairs
pub const KEY_BITS: usize = 2048;

/// RSA public key, used to wrap the per message symmetric key
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey(pub(crate) RsaPublicKey);

/// RSA private key, the only way to unwrap a sealed symmetric key
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(pub(crate) RsaPrivateKey);

/// Either half of a key pair, as returned by [`import_key`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Public(PublicKey),
    Private(PrivateKey),
}

pub struct KeyPair {
    public: PublicKey,
    private: PrivateKey,
}

impl KeyPair {
    /// generates a fresh 2048 bit RSA key pair from the OS entropy source
    pub fn generate() -> Result<Self> {
        let private = RsaPrivateKey::new(&mut OsRng, KEY_BITS).map_err(SealError::KeyGeneration)?;
        let public = RsaPublicKey::from(&private);
        log::debug!("generated a {KEY_BITS} bit key pair");

        Ok(Self {
            public: PublicKey(public),
            private: PrivateKey(private),
        })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// PKCS#1 PEM documents of the public and private half, in that order
    pub fn export(&self) -> Result<(String, Zeroizing<String>)> {
        Ok((self.public.to_pem()?, self.private.to_pem()?))
    }

    pub fn into_parts(self) -> (PublicKey, PrivateKey) {
        (self.public, self.private)
    }
}

impl Debug for KeyPair {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("public", &self.public)
            .field("private", &self.private)
            .finish()
    }
}

impl PublicKey {
    pub fn to_pem(&self) -> Result<String> {
        self.0
            .to_pkcs1_pem(LineEnding::LF)
            .map_err(|e| SealError::InvalidKey(e.to_string()))
    }

    /// accepts PKCS#1 (`RSA PUBLIC KEY`) as well as SPKI (`PUBLIC KEY`) documents
    pub fn from_pem(pem: &str) -> Result<Self> {
        RsaPublicKey::from_pkcs1_pem(pem)
            .or_else(|_| RsaPublicKey::from_public_key_pem(pem))
            .map(Self)
            .map_err(|e| SealError::InvalidKey(e.to_string()))
    }

    /// length of a wrapped key in bytes, equal to the modulus size
    pub fn wrapped_key_len(&self) -> usize {
        self.0.size()
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey(rsa-{})", self.0.size() * 8)
    }
}

impl PrivateKey {
    pub fn to_pem(&self) -> Result<Zeroizing<String>> {
        self.0
            .to_pkcs1_pem(LineEnding::LF)
            .map_err(|e| SealError::InvalidKey(e.to_string()))
    }

    /// accepts PKCS#1 (`RSA PRIVATE KEY`) as well as PKCS#8 (`PRIVATE KEY`) documents
    pub fn from_pem(pem: &str) -> Result<Self> {
        RsaPrivateKey::from_pkcs1_pem(pem)
            .or_else(|_| RsaPrivateKey::from_pkcs8_pem(pem))
            .map(Self)
            .map_err(|e| SealError::InvalidKey(e.to_string()))
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey(RsaPublicKey::from(&self.0))
    }
}

impl Debug for PrivateKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey(********)")
    }
}

/// Reads a PEM encoded key, the PEM label decides whether it is the public or private half.
pub fn import_key(bytes: &[u8]) -> Result<Key> {
    let pem = std::str::from_utf8(bytes).map_err(|e| SealError::InvalidKey(e.to_string()))?;

    match pem_label(pem) {
        Some("RSA PRIVATE KEY" | "PRIVATE KEY") => PrivateKey::from_pem(pem).map(Key::Private),
        Some("RSA PUBLIC KEY" | "PUBLIC KEY") => PublicKey::from_pem(pem).map(Key::Public),
        Some(other) => Err(SealError::InvalidKey(format!(
            "unexpected PEM label `{other}`"
        ))),
        None => Err(SealError::InvalidKey("no PEM header found".to_string())),
    }
}

fn pem_label(pem: &str) -> Option<&str> {
    const BEGIN: &str = "-----BEGIN ";
    let start = pem.find(BEGIN)? + BEGIN.len();
    let rest = &pem[start..];
    let end = rest.find("-----")?;

    Some(rest[..end].trim())
}
