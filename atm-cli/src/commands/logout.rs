//! Logout command - end the current session

use anyhow::Result;

use atm_core::services::BankService;

pub const USAGE: &str = "logout";

pub fn run(bank: &mut BankService) -> Result<String> {
    let customer = bank.logout()?;
    Ok(format!("Goodbye, {}!\n", customer.login_name()))
}
