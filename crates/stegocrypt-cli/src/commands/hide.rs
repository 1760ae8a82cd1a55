use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Encrypts an audio file and hides it in a PNG, BMP or JPEG image, a WAV file or an APNG video
#[derive(Args, Debug)]
pub struct HideArgs {
    /// Carrier media such as PNG image, WAV audio or APNG video file, used readonly.
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Final media will be stored as file, images are always written as PNG
    #[arg(
        short = 'o',
        long = "out",
        value_name = "output media file",
        required = true
    )]
    pub write_to_file: PathBuf,

    /// Audio file to hide
    #[arg(short = 'd', long = "data", value_name = "audio file", required = true)]
    pub payload: PathBuf,

    /// Public key of the recipient (PEM)
    #[arg(short = 'k', long = "key", value_name = "public key file", required = true)]
    pub public_key: PathBuf,
}

impl HideArgs {
    pub fn run(self) -> CliResult<()> {
        stegocrypt_core::commands::hide(
            &self.media,
            &self.payload,
            &self.public_key,
            &self.write_to_file,
        )
    }
}
