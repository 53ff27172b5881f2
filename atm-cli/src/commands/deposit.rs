//! Deposit command - bring cash in, paying off debts first

use anyhow::Result;
use rust_decimal::Decimal;

use atm_core::services::BankService;

use crate::output;

pub const USAGE: &str = "deposit [amount]";

pub fn run(bank: &mut BankService, amount: Decimal) -> Result<String> {
    let transactions = bank.deposit(amount)?;
    let summary = bank.current_summary()?;
    Ok(format!(
        "{}{}",
        output::transfers(&transactions),
        output::statement(&summary)
    ))
}
