//! File based entry points, key files are PEM documents.

use std::io::Write;
use std::path::Path;

use log::{error, info};
use stegocrypt_seal::{import_key, Key, KeyPair, PrivateKey, PublicKey, SealError};

use crate::error::CarrierIoError;
use crate::media::{write_atomically, Carrier, Media, MediaKind};
use crate::metrics::{self, Distortion};
use crate::result::Result;
use crate::{api, lsb};

/// What a carrier can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityReport {
    pub kind: MediaKind,
    pub capacity_bits: usize,
    /// largest plaintext in bytes, `None` if even an empty one does not fit
    pub max_plaintext_len: Option<usize>,
}

/// Generates a key pair and writes both halves as PKCS#1 PEM.
pub fn keygen(public_key_file: &Path, private_key_file: &Path) -> Result<()> {
    let pair = KeyPair::generate()?;
    let (public_pem, private_pem) = pair.export()?;

    // a public key is useless without its private half, so that half goes first
    write_text(private_key_file, &private_pem)?;
    if let Err(e) = write_text(public_key_file, &public_pem) {
        if let Err(cleanup) = std::fs::remove_file(private_key_file) {
            error!("Error removing {private_key_file:?}: {cleanup}");
        }
        return Err(e);
    }
    info!("wrote key pair to {public_key_file:?} and {private_key_file:?}");

    Ok(())
}

pub fn hide(
    carrier: &Path,
    payload_file: &Path,
    public_key_file: &Path,
    output: &Path,
) -> Result<()> {
    api::hide::prepare()
        .with_carrier(carrier)
        .with_payload_file(payload_file)
        .with_public_key(read_public_key(public_key_file)?)
        .with_output(output)
        .execute()
}

pub fn unveil(secret_media: &Path, private_key_file: &Path, output: &Path) -> Result<()> {
    api::unveil::prepare()
        .from_secret_file(secret_media)
        .with_private_key(read_private_key(private_key_file)?)
        .into_output_file(output)
        .execute()
}

/// unveil the raw payload frame, no decryption is happening
pub fn unveil_raw(secret_media: &Path, destination_file: &Path) -> Result<()> {
    api::unveil_raw::prepare()
        .from_secret_file(secret_media)
        .into_raw_file(destination_file)
        .execute()
}

/// Capacity of `carrier`. The plaintext limit depends on the wrapped key size, so it is
/// derived from `key_file` when given and from a 2048 bit key otherwise.
pub fn capacity(carrier: &Path, key_file: Option<&Path>) -> Result<CapacityReport> {
    let media = Media::from_file(carrier)?;
    let wrapped_key_len = match key_file {
        Some(file) => read_public_key(file)?.wrapped_key_len(),
        None => stegocrypt_seal::KEY_BITS / 8,
    };
    let capacity_bits = media.capacity_bits();

    Ok(CapacityReport {
        kind: media.kind(),
        capacity_bits,
        max_plaintext_len: lsb::max_plaintext_len(capacity_bits, wrapped_key_len),
    })
}

pub fn compare(original: &Path, stego: &Path) -> Result<Distortion> {
    metrics::compare(&Media::from_file(original)?, &Media::from_file(stego)?)
}

/// A private key file works as well, its public half is used.
pub fn read_public_key(file: &Path) -> Result<PublicKey> {
    match read_key(file)? {
        Key::Public(key) => Ok(key),
        Key::Private(key) => Ok(key.public_key()),
    }
}

pub fn read_private_key(file: &Path) -> Result<PrivateKey> {
    match read_key(file)? {
        Key::Private(key) => Ok(key),
        Key::Public(_) => Err(SealError::InvalidKey(format!(
            "{} holds a public key, a private key is needed",
            file.display()
        ))
        .into()),
    }
}

fn read_key(file: &Path) -> Result<Key> {
    let pem = std::fs::read(file).map_err(|source| CarrierIoError::ReadError { source })?;

    Ok(import_key(&pem)?)
}

fn write_text(file: &Path, text: &str) -> Result<()> {
    write_atomically(file, |w| {
        w.write_all(text.as_bytes())
            .map_err(|source| CarrierIoError::WriteError { source }.into())
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;
    use crate::test_utils::{test_key_pair, write_test_png, write_test_wav};
    use crate::StegoError;

    fn write_test_keys(dir: &Path) -> (std::path::PathBuf, std::path::PathBuf) {
        let (public_pem, private_pem) = test_key_pair().export().unwrap();
        let public = dir.join("public.pem");
        let private = dir.join("private.pem");
        fs::write(&public, public_pem).unwrap();
        fs::write(&private, private_pem.as_bytes()).unwrap();

        (public, private)
    }

    #[test]
    fn keygen_should_write_matching_pem_files() {
        let dir = TempDir::new().unwrap();
        let public = dir.path().join("pub.pem");
        let private = dir.path().join("priv.pem");

        keygen(&public, &private).unwrap();

        let private_key = read_private_key(&private).unwrap();
        assert_eq!(read_public_key(&public).unwrap(), private_key.public_key());
        assert_eq!(read_public_key(&private).unwrap(), private_key.public_key());
    }

    #[test]
    fn keygen_should_leave_no_half_of_a_key_pair_behind() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let public = dir.path().join("pub.pem");
        assert!(keygen(&public, &missing.join("priv.pem")).is_err());
        assert!(!public.exists());

        let private = dir.path().join("priv.pem");
        assert!(keygen(&missing.join("pub.pem"), &private).is_err());
        assert!(!private.exists());
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn should_hide_and_unveil_through_files() {
        let dir = TempDir::new().unwrap();
        let (public, private) = write_test_keys(dir.path());
        let carrier = dir.path().join("carrier.wav");
        let payload = dir.path().join("voice.wav");
        let stego = dir.path().join("stego.wav");
        let recovered = dir.path().join("recovered.wav");
        write_test_wav(&carrier, 16, 20_000);
        write_test_wav(&payload, 8, 100);

        hide(&carrier, &payload, &public, &stego).unwrap();
        unveil(&stego, &private, &recovered).unwrap();

        assert_eq!(fs::read(&recovered).unwrap(), fs::read(&payload).unwrap());
        let d = compare(&carrier, &stego).unwrap();
        assert!(d.changed_units > 0);
        assert!(d.psnr > 60.0);
    }

    #[test]
    fn unveil_should_refuse_a_public_key_file() {
        let dir = TempDir::new().unwrap();
        let (public, _) = write_test_keys(dir.path());

        assert!(matches!(
            read_private_key(&public),
            Err(StegoError::Cipher(SealError::InvalidKey(_)))
        ));
    }

    #[test]
    fn capacity_should_account_for_the_sealing_overhead() {
        let dir = TempDir::new().unwrap();
        let carrier = dir.path().join("carrier.png");
        write_test_png(&carrier, 64, 64);

        let report = capacity(&carrier, None).unwrap();

        assert_eq!(report.kind, MediaKind::Image);
        assert_eq!(report.capacity_bits, 12288);
        assert_eq!(report.max_plaintext_len, Some(1228));
    }

    #[test]
    fn unveil_raw_should_write_the_frame() {
        let dir = TempDir::new().unwrap();
        let (public, _) = write_test_keys(dir.path());
        let carrier = dir.path().join("carrier.png");
        let payload = dir.path().join("voice.raw");
        let stego = dir.path().join("stego.png");
        let raw = dir.path().join("frame.bin");
        write_test_png(&carrier, 32, 32);
        fs::write(&payload, [0u8; 3]).unwrap();

        hide(&carrier, &payload, &public, &stego).unwrap();
        unveil_raw(&stego, &raw).unwrap();

        let frame = fs::read(&raw).unwrap();
        assert_eq!(frame.len(), 20 + 256 + 12 + 16 + 3);
    }
}
