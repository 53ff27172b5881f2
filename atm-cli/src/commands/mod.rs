//! CLI command implementations
//!
//! Each input line is tokenized and parsed into a [`Command`]; the command
//! then runs against the bank service and returns the text to print.

pub mod deposit;
pub mod help;
pub mod login;
pub mod logout;
pub mod transfer;
pub mod withdraw;

use std::path::PathBuf;

use anyhow::{anyhow, bail, Result};
use rust_decimal::Decimal;

use atm_core::services::BankService;

/// Get the ATM directory from environment or default
pub fn get_atm_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("ATM_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .map(|home| home.join(".atm"))
            .unwrap_or_else(|| PathBuf::from(".atm"))
    }
}

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login(String),
    Logout,
    Deposit(Decimal),
    Withdraw(Decimal),
    Transfer { to: String, amount: Decimal },
    Help,
    Exit,
}

/// Result of running one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    /// Stop reading input after printing
    pub exit: bool,
}

impl Outcome {
    fn print(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            exit: false,
        }
    }
}

fn expect_args(args: &[&str], count: usize, usage: &str) -> Result<()> {
    if args.len() != count {
        bail!("Wrong argument count. Correct command format '{}'", usage);
    }
    Ok(())
}

fn parse_amount(token: &str) -> Result<Decimal> {
    token
        .parse::<Decimal>()
        .map_err(|_| anyhow!("Invalid amount '{}'", token))
}

impl Command {
    /// Parse one input line. Blank lines yield `None`.
    ///
    /// Command names are case-sensitive.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let tokens: Vec<&str> = line
            .split(' ')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();

        let Some((name, args)) = tokens.split_first() else {
            return Ok(None);
        };

        let command = match *name {
            "login" => {
                expect_args(args, 1, login::USAGE)?;
                Command::Login(args[0].to_string())
            }
            "logout" => {
                expect_args(args, 0, logout::USAGE)?;
                Command::Logout
            }
            "deposit" => {
                expect_args(args, 1, deposit::USAGE)?;
                Command::Deposit(parse_amount(args[0])?)
            }
            "withdraw" => {
                expect_args(args, 1, withdraw::USAGE)?;
                Command::Withdraw(parse_amount(args[0])?)
            }
            "transfer" => {
                expect_args(args, 2, transfer::USAGE)?;
                Command::Transfer {
                    to: args[0].to_string(),
                    amount: parse_amount(args[1])?,
                }
            }
            "help" => {
                expect_args(args, 0, "help")?;
                Command::Help
            }
            "exit" => {
                expect_args(args, 0, "exit")?;
                Command::Exit
            }
            other => bail!("Unknown command '{}'", other),
        };

        Ok(Some(command))
    }

    /// Name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Login(_) => "login",
            Command::Logout => "logout",
            Command::Deposit(_) => "deposit",
            Command::Withdraw(_) => "withdraw",
            Command::Transfer { .. } => "transfer",
            Command::Help => "help",
            Command::Exit => "exit",
        }
    }

    pub fn execute(&self, bank: &mut BankService) -> Result<Outcome> {
        let output = match self {
            Command::Login(name) => login::run(bank, name)?,
            Command::Logout => logout::run(bank)?,
            Command::Deposit(amount) => deposit::run(bank, *amount)?,
            Command::Withdraw(amount) => withdraw::run(bank, *amount)?,
            Command::Transfer { to, amount } => transfer::run(bank, to, *amount)?,
            Command::Help => help::run(),
            Command::Exit => {
                return Ok(Outcome {
                    output: "ATM stopped.\n".to_string(),
                    exit: true,
                })
            }
        };
        Ok(Outcome::print(output))
    }
}
