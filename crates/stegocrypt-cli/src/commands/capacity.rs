use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Shows how much audio a carrier can hold
#[derive(Args, Debug)]
pub struct CapacityArgs {
    /// Carrier media such as PNG image, WAV audio or APNG video file
    #[arg(short = 'i', long = "in", value_name = "media file", required = true)]
    pub media: PathBuf,

    /// Public key the payload will be sealed for, a 2048 bit key is assumed otherwise
    #[arg(short = 'k', long = "key", value_name = "public key file")]
    pub public_key: Option<PathBuf>,
}

impl CapacityArgs {
    pub fn run(self) -> CliResult<()> {
        let report = stegocrypt_core::commands::capacity(&self.media, self.public_key.as_deref())?;

        println!("media:    {}", report.kind);
        println!("capacity: {} bits", report.capacity_bits);
        match report.max_plaintext_len {
            Some(bytes) => println!("payload:  up to {bytes} bytes"),
            None => println!("payload:  too small for any sealed payload"),
        }

        Ok(())
    }
}
