use clap::{Parser, Subcommand};

use crate::commands::*;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Keygen(keygen::KeygenArgs),
    Hide(hide::HideArgs),
    Unveil(unveil::UnveilArgs),
    UnveilRaw(unveil_raw::UnveilRawArgs),
    Capacity(capacity::CapacityArgs),
    Compare(compare::CompareArgs),
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn should_parse_hide_with_short_flags() {
        let args = CliArgs::try_parse_from([
            "stegocrypt", "hide", "-i", "cat.png", "-d", "voice.wav", "-k", "id.pub.pem", "-o",
            "cat-with-voice.png",
        ])
        .unwrap();

        let Commands::Hide(hide) = args.command else {
            panic!("hide was not parsed");
        };
        assert_eq!(hide.media, Path::new("cat.png"));
        assert_eq!(hide.payload, Path::new("voice.wav"));
        assert_eq!(hide.public_key, Path::new("id.pub.pem"));
        assert_eq!(hide.write_to_file, Path::new("cat-with-voice.png"));
    }

    #[test]
    fn should_require_the_private_key_for_unveil() {
        assert!(
            CliArgs::try_parse_from(["stegocrypt", "unveil", "-i", "a.png", "-o", "b.wav"])
                .is_err()
        );
    }

    #[test]
    fn should_parse_unveil_raw_as_kebab_case() {
        let args =
            CliArgs::try_parse_from(["stegocrypt", "unveil-raw", "-i", "a.wav", "-o", "frame.bin"])
                .unwrap();

        assert!(matches!(args.command, Commands::UnveilRaw(_)));
    }
}
