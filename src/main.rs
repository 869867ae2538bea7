mod cli;
mod cli_handlers;
mod core;
mod modules;
mod utils;

use cli::Cli;
use modules::ui::{artwork, printer};

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let result = cli_handlers::from_cli(cli.command).execute();

    // Give a pending inline-artwork render its chance to reach the terminal.
    artwork::drain();

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            printer::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}
