use std::path::{Path, PathBuf};

use stegocrypt_seal::PublicKey;

use crate::error::CarrierIoError;
use crate::media::{Media, Persist};
use crate::{seal_into, StegoError};

pub fn prepare() -> HideApi {
    HideApi::default()
}

#[derive(Default, Debug)]
pub struct HideApi {
    payload: Option<Vec<u8>>,
    payload_file: Option<PathBuf>,
    public_key: Option<PublicKey>,
    carrier: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl HideApi {
    /// the audio bytes to hide
    pub fn with_payload(mut self, payload: impl Into<Vec<u8>>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// reads the audio to hide from a file, e.g. a wav recording
    pub fn with_payload_file<A: AsRef<Path>>(mut self, payload_file: A) -> Self {
        self.payload_file = Some(payload_file.as_ref().to_path_buf());
        self
    }

    /// the recipient's key, only the matching private key can unveil the payload
    pub fn with_public_key(mut self, public_key: PublicKey) -> Self {
        self.public_key = Some(public_key);
        self
    }

    pub fn with_carrier<A: AsRef<Path>>(mut self, carrier: A) -> Self {
        self.carrier = Some(carrier.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Encrypts the payload, embeds it and writes the stego media. The output file is only
    /// created when every step succeeded.
    pub fn execute(self) -> Result<(), StegoError> {
        let Some(carrier) = self.carrier else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };
        let Some(public_key) = self.public_key else {
            return Err(StegoError::MissingKey);
        };
        let payload = match (self.payload, self.payload_file) {
            (Some(payload), _) => payload,
            (None, Some(file)) => {
                std::fs::read(&file).map_err(|source| CarrierIoError::ReadError { source })?
            }
            (None, None) => return Err(StegoError::MissingPayload),
        };

        let mut media = Media::from_file(&carrier)?;
        media.ensure_writable_as(&output)?;
        seal_into(&mut media, &payload, &public_key)?;
        media.save_as(&output)
    }
}
