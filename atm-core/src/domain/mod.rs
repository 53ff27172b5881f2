//! Core domain entities
//!
//! Pure data structures with their own validation. Operations that touch
//! more than one customer live in the ledger service.

pub mod balance;
mod customer;
mod debt;
pub mod result;
mod transaction;

pub use balance::Balance;
pub use customer::{Customer, CustomerId, CustomerSummary, Debt};
pub use debt::DebtBook;
pub use transaction::{Transaction, TransactionKind};
