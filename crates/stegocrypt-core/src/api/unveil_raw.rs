use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::CarrierIoError;
use crate::lsb;
use crate::media::{write_atomically, Media};
use crate::StegoError;

pub fn prepare() -> UnveilRawApi {
    UnveilRawApi::default()
}

/// Dumps the serialized payload frame as it is stored in the media, nothing gets decrypted.
#[derive(Default, Debug)]
pub struct UnveilRawApi {
    secret_media: Option<PathBuf>,
    output_file: Option<PathBuf>,
}

impl UnveilRawApi {
    pub fn from_secret_file(mut self, secret_media: impl AsRef<Path>) -> Self {
        self.secret_media = Some(secret_media.as_ref().to_path_buf());
        self
    }

    pub fn into_raw_file(mut self, output_file: impl AsRef<Path>) -> Self {
        self.output_file = Some(output_file.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<(), StegoError> {
        let Some(secret_media) = self.secret_media else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output_file) = self.output_file else {
            return Err(StegoError::TargetNotSet);
        };

        let media = Media::from_file(&secret_media)?;
        let frame = lsb::extract_frame(&media)?;

        write_atomically(&output_file, |w| {
            w.write_all(&frame)
                .map_err(|source| CarrierIoError::WriteError { source }.into())
        })
    }
}
