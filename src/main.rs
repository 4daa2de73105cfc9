mod cli;
mod config;
mod convert;
mod day_cmd;
mod logging;
mod render;
mod show;
mod year_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = config::load(&cli.config)?;
    match &cli.command {
        Command::Show(args) => show::run(args, &config),
        Command::Day(args) => day_cmd::run(args, &config),
        Command::Year(args) => year_cmd::run(args),
    }
}
