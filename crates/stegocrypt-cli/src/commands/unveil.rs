use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Unveils and decrypts the hidden audio
#[derive(Args, Debug)]
pub struct UnveilArgs {
    /// Source media that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Private key matching the public key used for hiding (PEM)
    #[arg(short = 'k', long = "key", value_name = "private key file", required = true)]
    pub private_key: PathBuf,

    /// Recovered audio will be stored as file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl UnveilArgs {
    pub fn run(self) -> CliResult<()> {
        stegocrypt_core::commands::unveil(&self.media, &self.private_key, &self.output_file)
    }
}
