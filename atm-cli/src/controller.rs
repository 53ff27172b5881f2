//! Front controller - reads command lines and prints their outcome
//!
//! Every failure is reported and the loop moves on to the next line; only
//! `exit` or the end of input stops it.

use std::io::{self, BufRead, Write};

use tracing::{debug, error, info, warn};

use atm_core::{AtmContext, Error};

use crate::commands::Command;

pub const BANNER: &str =
    "ATM started. All inputs are case-sensitive. Use 'help' to see available commands.";

/// Run the command loop until `exit` or end of input
///
/// The prompt is only written when `interactive` is set.
pub fn run<R: BufRead, W: Write>(
    ctx: &mut AtmContext,
    input: R,
    mut out: W,
    interactive: bool,
) -> io::Result<()> {
    info!("ATM started");

    if ctx.config.show_banner {
        writeln!(out, "{}", BANNER)?;
        writeln!(out)?;
    }

    let mut lines = input.lines();
    loop {
        if interactive {
            write!(out, "{}", ctx.config.prompt)?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                report(&mut out, &e)?;
                continue;
            }
        };

        debug!(command = command.name(), "executing");
        match command.execute(&mut ctx.bank) {
            Ok(outcome) => {
                write!(out, "{}", outcome.output)?;
                writeln!(out)?;
                if outcome.exit {
                    break;
                }
            }
            Err(e) => report(&mut out, &e)?,
        }
    }

    out.flush()?;
    info!("ATM stopped");
    Ok(())
}

/// Print a failed command; environmental failures are logged louder
fn report<W: Write>(out: &mut W, err: &anyhow::Error) -> io::Result<()> {
    match err.downcast_ref::<Error>() {
        Some(e) if !e.is_business() => error!(error = %err, "command failed"),
        _ => warn!(error = %err, "command rejected"),
    }
    writeln!(out, "Error occurred: {}", err)?;
    writeln!(out)
}
