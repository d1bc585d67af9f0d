//! # botpick CLI
//!
//! Binary entry point for the `botpick` command-line tool.
//!
//! Its responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the selected subcommand.
//! - Turning the final error into a message on stderr and a process exit
//!   code. A failed cherry-pick exits with git's own status; every other
//!   error exits with `1`.
//!
//! The collect/replay logic lives in the `botpick` library crate so the binary
//! stays a thin wrapper.

mod cli;
mod commands;

use std::process::ExitCode;

use botpick::exit_codes;
use clap::Parser;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();

    match cli.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}

/// Map a command error to the process exit status.
fn exit_code_for(e: &anyhow::Error) -> u8 {
    let code = e
        .downcast_ref::<botpick::error::Error>()
        .map(botpick::error::Error::exit_code)
        .unwrap_or(exit_codes::ERROR);

    u8::try_from(code)
        .ok()
        .filter(|code| *code != 0)
        .unwrap_or(exit_codes::ERROR as u8)
}
