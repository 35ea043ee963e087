mod build_cmd;
mod cli;
mod config;
mod convert;
mod logging;
mod moon_cmd;
mod names_cmd;
mod scratch;

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
        Command::Build(args) => build_cmd::run(args),
        Command::Moon(args) => moon_cmd::run(args),
        Command::Names(args) => names_cmd::run(args),
    }
}
