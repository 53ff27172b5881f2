//! Transfer command - move money to another customer

use anyhow::Result;
use rust_decimal::Decimal;

use atm_core::services::BankService;

use crate::output;

pub const USAGE: &str = "transfer [to_login_name] [amount]";

pub fn run(bank: &mut BankService, to: &str, amount: Decimal) -> Result<String> {
    let transactions = bank.transfer(to, amount)?;
    let summary = bank.current_summary()?;
    Ok(format!(
        "{}{}",
        output::transfers(&transactions),
        output::statement(&summary)
    ))
}
