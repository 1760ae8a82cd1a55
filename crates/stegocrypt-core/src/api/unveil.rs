use std::io::Write;
use std::path::{Path, PathBuf};

use log::info;
use stegocrypt_seal::PrivateKey;

use crate::error::CarrierIoError;
use crate::media::{write_atomically, Media};
use crate::{open_from, StegoError};

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

#[derive(Default, Debug)]
pub struct UnveilApi {
    secret_media: Option<PathBuf>,
    private_key: Option<PrivateKey>,
    output: Option<PathBuf>,
}

impl UnveilApi {
    /// This is the stego media that contains the sealed payload
    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    pub fn with_private_key(mut self, private_key: PrivateKey) -> Self {
        self.private_key = Some(private_key);
        self
    }

    /// This is the file the recovered audio is written to
    pub fn into_output_file(mut self, output: impl AsRef<Path>) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    /// Execute the unveil process and blocks until it is finished
    pub fn execute(self) -> Result<(), StegoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };
        let Some(private_key) = self.private_key else {
            return Err(StegoError::MissingKey);
        };

        let media = Media::from_file(&secret_media)?;
        let plaintext = open_from(&media, &private_key)?;
        write_atomically(&output, |w| {
            w.write_all(&plaintext)
                .map_err(|source| CarrierIoError::WriteError { source }.into())
        })?;
        info!("unveiled {} bytes into {output:?}", plaintext.len());

        Ok(())
    }
}
