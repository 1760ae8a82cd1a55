use clap::Parser;
use log::debug;

mod cli;
mod commands;

use cli::{CliArgs, Commands};

pub type CliResult<T> = stegocrypt_core::Result<T>;

fn main() -> CliResult<()> {
    env_logger::init();

    let args = CliArgs::parse();
    debug!("{args:?}");

    match args.command {
        Commands::Keygen(args) => args.run(),
        Commands::Hide(args) => args.run(),
        Commands::Unveil(args) => args.run(),
        Commands::UnveilRaw(args) => args.run(),
        Commands::Capacity(args) => args.run(),
        Commands::Compare(args) => args.run(),
    }
}
