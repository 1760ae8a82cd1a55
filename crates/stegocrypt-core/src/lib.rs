//! # Stegocrypt Core API
//!
//! Hides an audio payload, sealed with RSA-OAEP wrapped AES-128-GCM, in the least significant
//! bits of an image, a WAV file or an animated PNG video. The same framed bitstream is used
//! for every kind of carrier:
//!
//! `[32 bit payload bit length][total len][len][wrapped key][len][nonce][len][tag][len][ciphertext]`
//!
//! There are 3 builders in [`api`]:
//! - [`api::hide`] seals a payload and writes it into a carrier
//! - [`api::unveil`] recovers and decrypts the payload
//! - [`api::unveil_raw`] dumps the serialized frame without decrypting it
//!
//! # Usage Examples
//!
//! ## Seal a payload into an in-memory image
//!
//! ```rust
//! use stegocrypt_core::media::image::StillImage;
//! use stegocrypt_core::{open_from, seal_into, KeyPair};
//!
//! let pair = KeyPair::generate().expect("Failed to generate a key pair");
//! let mut carrier = StillImage::new(image::RgbaImage::new(64, 64), false);
//!
//! seal_into(&mut carrier, b"HELLO STEGOCRYPT", pair.public_key())
//!     .expect("Failed to hide the payload");
//! let recovered = open_from(&carrier, pair.private_key())
//!     .expect("Failed to unveil the payload");
//!
//! assert_eq!(recovered, b"HELLO STEGOCRYPT");
//! ```
//!
//! ## Hide a recording inside a WAV file
//!
//! ```rust,no_run
//! use stegocrypt_core::commands::read_public_key;
//!
//! let public_key = read_public_key("public.pem".as_ref()).expect("Failed to read the key");
//!
//! stegocrypt_core::api::hide::prepare()
//!     .with_payload_file("voice.wav")
//!     .with_public_key(public_key)
//!     .with_carrier("music.wav")
//!     .with_output("music-with-voice.wav")
//!     .execute()
//!     .expect("Failed to hide the recording");
//! ```

#![warn(clippy::redundant_else)]

pub mod api;
pub mod bitstream;
pub mod commands;
pub mod error;
pub mod lsb;
pub mod media;
pub mod metrics;
pub mod result;
pub mod universal_decoder;
pub mod universal_encoder;

use log::info;

pub use crate::error::{CarrierIoError, SealError, StegoError};
pub use crate::media::{Carrier, Media, MediaKind, Persist};
pub use crate::result::Result;
pub use stegocrypt_seal::{EncryptedPayload, KeyPair, PrivateKey, PublicKey};

/// Encrypts `plaintext` for the owner of `public_key` and embeds it into `carrier`.
/// The carrier stays untouched if the sealed payload does not fit.
pub fn seal_into<C: Carrier + ?Sized>(
    carrier: &mut C,
    plaintext: &[u8],
    public_key: &PublicKey,
) -> Result<()> {
    let sealed = stegocrypt_seal::encrypt(plaintext, public_key)?;
    lsb::hide(carrier, &sealed)?;
    info!("sealed {} bytes into the carrier", plaintext.len());

    Ok(())
}

/// Extracts the sealed payload from `carrier` and decrypts it, tampering fails closed.
pub fn open_from<C: Carrier + ?Sized>(carrier: &C, private_key: &PrivateKey) -> Result<Vec<u8>> {
    let sealed = lsb::extract(carrier)?;

    Ok(stegocrypt_seal::decrypt(&sealed, private_key)?)
}
