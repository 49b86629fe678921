mod cli;
mod config;
mod convert;
mod extract_cmd;
mod logging;
mod output;
mod series_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Extract(args) => extract_cmd::run(args),
        Command::Series(args) => series_cmd::run(args),
    }
}
