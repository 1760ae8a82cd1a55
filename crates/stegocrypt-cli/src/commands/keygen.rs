use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Generates a 2048 bit RSA key pair as PEM files
#[derive(Args, Debug)]
pub struct KeygenArgs {
    /// Public key file, hand it to whoever hides data for you
    #[arg(
        long = "public",
        value_name = "public key file",
        default_value = "public.pem"
    )]
    pub public_key: PathBuf,

    /// Private key file, needed to unveil
    #[arg(
        long = "private",
        value_name = "private key file",
        default_value = "private.pem"
    )]
    pub private_key: PathBuf,
}

impl KeygenArgs {
    pub fn run(self) -> CliResult<()> {
        stegocrypt_core::commands::keygen(&self.public_key, &self.private_key)
    }
}
