//! Withdraw command - take cash out of the current balance

use anyhow::Result;
use rust_decimal::Decimal;

use atm_core::services::BankService;

use crate::output;

pub const USAGE: &str = "withdraw [amount]";

pub fn run(bank: &mut BankService, amount: Decimal) -> Result<String> {
    bank.withdraw(amount)?;
    let summary = bank.current_summary()?;
    Ok(output::statement(&summary))
}
