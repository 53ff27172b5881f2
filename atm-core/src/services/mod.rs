//! Service layer - business logic orchestration
//!
//! The ledger owns all customers and their mutual debts; the bank service
//! wraps it with the customer registry and login session.

mod bank;
pub mod ledger;

pub use bank::{BankService, Session};
pub use ledger::Ledger;
