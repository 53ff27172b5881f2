//! ATM CLI - a line-oriented bank terminal

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

mod commands;
mod controller;
mod output;

use atm_core::{logging, AtmContext};

/// ATM - deposit, withdraw and transfer money between customers
#[derive(Parser)]
#[command(name = "atm", version, about, long_about = None)]
struct Cli {
    /// Read commands from a file instead of standard input
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Do not print the start-up banner
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let atm_dir = commands::get_atm_dir();
    let mut ctx = AtmContext::new(&atm_dir)
        .with_context(|| format!("Failed to load settings from {:?}", atm_dir))?;

    logging::init(&ctx.config.log_filter);

    if cli.quiet {
        ctx.config.show_banner = false;
    }

    let stdout = io::stdout();
    match cli.file {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("Failed to open command file: {:?}", path))?;
            controller::run(&mut ctx, BufReader::new(file), stdout.lock(), false)?;
        }
        None => {
            let interactive = atty::is(atty::Stream::Stdin);
            controller::run(&mut ctx, io::stdin().lock(), stdout.lock(), interactive)?;
        }
    }

    Ok(())
}
