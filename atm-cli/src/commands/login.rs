//! Login command - start a session, creating the customer if needed

use anyhow::Result;

use atm_core::services::BankService;

use crate::output;

pub const USAGE: &str = "login [login_name]";

pub fn run(bank: &mut BankService, login_name: &str) -> Result<String> {
    let name = bank.login(login_name)?.login_name().to_string();
    let summary = bank.current_summary()?;
    Ok(format!("Hello, {}!\n{}", name, output::statement(&summary)))
}
