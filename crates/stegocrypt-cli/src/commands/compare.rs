use std::path::PathBuf;

use clap::Args;

use crate::CliResult;

/// Measures the distortion between a carrier and its stego version
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// The original carrier
    #[arg(value_name = "original media file")]
    pub original: PathBuf,

    /// The media that carries hidden data
    #[arg(value_name = "stego media file")]
    pub stego: PathBuf,
}

impl CompareArgs {
    pub fn run(self) -> CliResult<()> {
        let d = stegocrypt_core::commands::compare(&self.original, &self.stego)?;

        println!("changed: {} of {} units", d.changed_units, d.units);
        println!("mse:     {:.6}", d.mse);
        if d.psnr.is_infinite() {
            println!("psnr:    inf (identical)");
        } else {
            println!("psnr:    {:.2} dB", d.psnr);
        }

        Ok(())
    }
}
