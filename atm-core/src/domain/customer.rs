//! Customer domain model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::balance::Balance;
use super::debt::DebtBook;

/// Stable handle of a customer inside the ledger arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerId(pub usize);

/// A bank customer
///
/// Identified by an immutable login name. Holds its own funds plus two
/// debt books: what it owes to others and what others owe to it. The two
/// books of any pair of customers mirror each other; only the ledger
/// mutates them, so the mirror is maintained in one place.
#[derive(Debug, Clone)]
pub struct Customer {
    id: CustomerId,
    login_name: String,
    pub(crate) balance: Balance,
    pub(crate) owed_by_me: DebtBook,
    pub(crate) owed_to_me: DebtBook,
}

impl Customer {
    pub(crate) fn new(id: CustomerId, login_name: impl Into<String>) -> Self {
        Self {
            id,
            login_name: login_name.into(),
            balance: Balance::new(),
            owed_by_me: DebtBook::new(),
            owed_to_me: DebtBook::new(),
        }
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn login_name(&self) -> &str {
        &self.login_name
    }

    /// Spendable funds
    pub fn balance(&self) -> Decimal {
        self.balance.get()
    }

    /// Debts this customer owes, oldest first
    pub fn owed_by_me(&self) -> &DebtBook {
        &self.owed_by_me
    }

    /// Debts owed to this customer, oldest first
    pub fn owed_to_me(&self) -> &DebtBook {
        &self.owed_to_me
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.login_name == other.login_name
    }
}

impl Eq for Customer {}

/// A debt line resolved to the counterparty's login name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Debt {
    pub counterparty: String,
    pub amount: Decimal,
}

/// Point-in-time view of a customer, suitable for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub login_name: String,
    pub balance: Decimal,
    /// Debts the customer owes, oldest first
    pub owed_to: Vec<Debt>,
    /// Debts owed to the customer, oldest first
    pub owed_from: Vec<Debt>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_customer_is_empty() {
        let customer = Customer::new(CustomerId(0), "alice");
        assert_eq!(customer.login_name(), "alice");
        assert_eq!(customer.balance(), Decimal::ZERO);
        assert!(customer.owed_by_me().is_empty());
        assert!(customer.owed_to_me().is_empty());
    }

    #[test]
    fn test_identity_is_login_name() {
        assert_eq!(Customer::new(CustomerId(0), "alice"), Customer::new(CustomerId(3), "alice"));
        assert_ne!(Customer::new(CustomerId(0), "alice"), Customer::new(CustomerId(0), "bob"));
    }
}
