//! Output formatting utilities
//!
//! Renders customers and transactions into the ATM's statement text.

use colored::Colorize;
use rust_decimal::Decimal;

use atm_core::{CustomerSummary, Transaction, TransactionKind};

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Format an amount without trailing zeros, e.g. `$100` or `$12.5`
pub fn money(amount: Decimal) -> String {
    format!("${}", amount.normalize())
}

/// Balance line followed by one line per debt in either direction
pub fn statement(summary: &CustomerSummary) -> String {
    let mut text = format!("Your balance is {}\n", money(summary.balance));
    for debt in &summary.owed_to {
        text.push_str(&format!("Owed {} to {}\n", money(debt.amount), debt.counterparty));
    }
    for debt in &summary.owed_from {
        text.push_str(&format!("Owed {} from {}\n", money(debt.amount), debt.counterparty));
    }
    text
}

/// One line per peer-to-peer transfer
///
/// External deposits and withdrawals are left out; the balance line
/// already reflects them.
pub fn transfers(transactions: &[Transaction]) -> String {
    transactions
        .iter()
        .filter(|tx| tx.kind() == TransactionKind::Transfer)
        .filter_map(|tx| tx.to.as_deref().map(|to| (to, tx.amount)))
        .map(|(to, amount)| format!("Transferred {} to {}\n", money(amount), to))
        .collect()
}
