//! Transaction domain model

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How a completed money movement relates to the bank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Cash brought in from outside the bank
    Deposit,
    /// Cash taken out of the bank
    Withdrawal,
    /// Money moved between two customers
    Transfer,
}

/// A completed money movement
///
/// `from` is absent for an external deposit, `to` is absent for an external
/// withdrawal. Two transactions are equal iff all three fields match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    pub from: Option<String>,
    pub to: Option<String>,
    pub amount: Decimal,
}

impl Transaction {
    pub fn new(from: Option<String>, to: Option<String>, amount: Decimal) -> Self {
        Self { from, to, amount }
    }

    /// Cash deposited into `to` from outside
    pub fn deposit(to: impl Into<String>, amount: Decimal) -> Self {
        Self::new(None, Some(to.into()), amount)
    }

    /// Cash withdrawn by `from`
    pub fn withdrawal(from: impl Into<String>, amount: Decimal) -> Self {
        Self::new(Some(from.into()), None, amount)
    }

    /// Peer-to-peer movement between two customers
    pub fn transfer(from: impl Into<String>, to: impl Into<String>, amount: Decimal) -> Self {
        Self::new(Some(from.into()), Some(to.into()), amount)
    }

    pub fn kind(&self) -> TransactionKind {
        match (&self.from, &self.to) {
            (None, _) => TransactionKind::Deposit,
            (Some(_), None) => TransactionKind::Withdrawal,
            (Some(_), Some(_)) => TransactionKind::Transfer,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = self.from.as_deref().unwrap_or("<cash>");
        let to = self.to.as_deref().unwrap_or("<cash>");
        write!(f, "{} -> {}: {}", from, to, self.amount.normalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        assert_eq!(Transaction::deposit("alice", Decimal::TEN).kind(), TransactionKind::Deposit);
        assert_eq!(Transaction::withdrawal("alice", Decimal::TEN).kind(), TransactionKind::Withdrawal);
        assert_eq!(Transaction::transfer("alice", "bob", Decimal::TEN).kind(), TransactionKind::Transfer);
    }

    #[test]
    fn test_equality_uses_all_fields() {
        let a = Transaction::transfer("alice", "bob", Decimal::from(60));
        assert_eq!(a, Transaction::transfer("alice", "bob", Decimal::from(60)));
        assert_ne!(a, Transaction::transfer("alice", "bob", Decimal::from(61)));
        assert_ne!(a, Transaction::transfer("bob", "alice", Decimal::from(60)));
        assert_ne!(Transaction::deposit("bob", Decimal::ONE), Transaction::withdrawal("bob", Decimal::ONE));
    }

    #[test]
    fn test_display() {
        let tx = Transaction::transfer("alice", "bob", Decimal::new(1250, 2));
        assert_eq!(tx.to_string(), "alice -> bob: 12.5");
    }
}
