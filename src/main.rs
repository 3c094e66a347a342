mod cli;
mod commands;
mod io;

use std::process::ExitCode;

use clap::error::ErrorKind;

use b58::types::InputSource;
use cli::Command;
use commands::CommandHandler;

fn main() -> ExitCode {
    let cli = match cli::parse() {
        Ok(cli) => cli,
        Err(err) => {
            return match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = err.print();
                    ExitCode::SUCCESS
                }
                // Missing or unknown arguments: usage on stdout, exit 1.
                _ => {
                    print_usage();
                    ExitCode::FAILURE
                }
            };
        }
    };

    let handler: Box<dyn CommandHandler> = match cli.command {
        Command::Encode { input, json } => Box::new(commands::EncodeCommand {
            input: InputSource::parse(&input),
            json,
        }),

        Command::Decode { input, json } => Box::new(commands::DecodeCommand {
            input: InputSource::parse(&input),
            json,
        }),

        Command::Check { input, json } => Box::new(commands::CheckCommand {
            input: InputSource::parse(&input),
            json,
        }),
    };

    match handler.execute() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    let mut cmd = cli::command();
    let _ = cmd.print_help();
}
