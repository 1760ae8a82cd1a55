use std::path::PathBuf;

use clap::Args;

/// Unveils the sealed payload frame without decrypting it
#[derive(Args, Debug)]
pub struct UnveilRawArgs {
    /// Source media that contains secret data
    #[arg(
        short = 'i',
        long = "in",
        value_name = "media source file",
        required = true
    )]
    pub media: PathBuf,

    /// Raw data will be stored as binary file
    #[arg(short = 'o', long = "out", value_name = "output file", required = true)]
    pub output_file: PathBuf,
}

impl UnveilRawArgs {
    pub fn run(self) -> crate::CliResult<()> {
        stegocrypt_core::api::unveil_raw::prepare()
            .from_secret_file(self.media)
            .into_raw_file(self.output_file)
            .execute()
    }
}
