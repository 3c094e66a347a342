use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};

use b58::codec::{max_decode_len, MAX_ENCODE_LEN};

#[derive(Parser)]
#[command(name = "b58")]
#[command(about = "Base58 encode/decode CLI")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    #[command(about = "Encode binary data to a base58 string")]
    Encode {
        #[arg(help = "Data to encode; '-' reads stdin, '@path' reads a file")]
        input: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Decode a base58 string to binary data")]
    Decode {
        #[arg(help = "Base58 string to decode; '-' reads stdin, '@path' reads a file")]
        input: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },

    #[command(about = "Check whether input is a valid base58 string")]
    Check {
        #[arg(help = "Candidate base58 string; '-' reads stdin, '@path' reads a file")]
        input: String,

        #[arg(long, help = "Output as JSON")]
        json: bool,
    },
}

pub fn command() -> clap::Command {
    Cli::command().after_help(format!(
        "Constraints:\n  encode: max input length is {} bytes\n  decode: max input length is {} characters",
        MAX_ENCODE_LEN,
        max_decode_len()
    ))
}

pub fn parse() -> Result<Cli, clap::Error> {
    let matches = command().try_get_matches()?;
    Cli::from_arg_matches(&matches)
}
