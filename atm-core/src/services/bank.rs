//! Bank service - customer registry and login session
//!
//! Validates every request (session, amount, counterparty) before handing
//! it to the ledger, so the ledger itself only sees well-formed input.

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::domain::result::{Error, Result};
use crate::domain::{Customer, CustomerId, CustomerSummary, Transaction};
use crate::services::ledger::Ledger;

/// Login state: nobody, or exactly one active customer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    LoggedOut,
    Active(CustomerId),
}

/// Registry of customers plus the single active session
#[derive(Debug, Default)]
pub struct BankService {
    ledger: Ledger,
    session: Session,
}

impl BankService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn session(&self) -> Session {
        self.session
    }

    fn active(&self) -> Result<CustomerId> {
        match self.session {
            Session::Active(id) => Ok(id),
            Session::LoggedOut => Err(Error::NoActiveSession),
        }
    }

    fn check_amount(amount: Decimal) -> Result<()> {
        if amount <= Decimal::ZERO {
            warn!(amount = %amount, "rejected non-positive amount");
            return Err(Error::InvalidAmount(amount));
        }
        Ok(())
    }

    /// Start a session, creating the customer on first login
    pub fn login(&mut self, login_name: &str) -> Result<&Customer> {
        if let Session::Active(id) = self.session {
            let active = self.ledger.customer(id).login_name().to_string();
            warn!(active = %active, requested = login_name, "login while a session is active");
            return Err(Error::AlreadyLoggedIn(active));
        }

        let id = self.ledger.open(login_name);
        self.session = Session::Active(id);
        info!(customer = login_name, "logged in");
        Ok(self.ledger.customer(id))
    }

    pub fn current_customer(&self) -> Result<&Customer> {
        Ok(self.ledger.customer(self.active()?))
    }

    /// Summary of the active customer with debts resolved to names
    pub fn current_summary(&self) -> Result<CustomerSummary> {
        Ok(self.ledger.summary(self.active()?))
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<Vec<Transaction>> {
        Self::check_amount(amount)?;
        let id = self.active()?;
        self.ledger.deposit(id, amount)
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<Transaction> {
        Self::check_amount(amount)?;
        let id = self.active()?;
        self.ledger.withdraw(id, amount)
    }

    pub fn transfer(&mut self, to: &str, amount: Decimal) -> Result<Vec<Transaction>> {
        Self::check_amount(amount)?;
        let from = self.active()?;
        let target = self
            .ledger
            .find(to)
            .ok_or_else(|| Error::UnknownCustomer(to.to_string()))?;
        if target == from {
            return Err(Error::SelfTransfer);
        }
        self.ledger.transfer(from, target, amount)
    }

    /// End the session, returning the customer who was logged in
    pub fn logout(&mut self) -> Result<&Customer> {
        let id = self.active()?;
        self.session = Session::LoggedOut;
        let customer = self.ledger.customer(id);
        info!(customer = customer.login_name(), "logged out");
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(value: i64) -> Decimal {
        Decimal::from(value)
    }

    #[test]
    fn test_login_creates_customer() {
        let mut bank = BankService::new();
        let customer = bank.login("user").unwrap();

        assert_eq!(customer.login_name(), "user");
        assert_eq!(customer.balance(), Decimal::ZERO);
        assert!(customer.owed_by_me().is_empty());
        assert!(customer.owed_to_me().is_empty());
        assert_eq!(bank.current_customer().unwrap().login_name(), "user");
    }

    #[test]
    fn test_login_rejected_while_active() {
        let mut bank = BankService::new();
        bank.login("user").unwrap();

        assert!(matches!(bank.login("user"), Err(Error::AlreadyLoggedIn(_))));
        assert!(matches!(bank.login("another_user"), Err(Error::AlreadyLoggedIn(_))));
        assert_eq!(bank.current_customer().unwrap().login_name(), "user");
    }

    #[test]
    fn test_logout_then_login_again() {
        let mut bank = BankService::new();
        bank.login("user").unwrap();
        bank.deposit(dec(30)).unwrap();

        assert_eq!(bank.logout().unwrap().login_name(), "user");
        assert_eq!(bank.session(), Session::LoggedOut);
        assert!(matches!(bank.logout(), Err(Error::NoActiveSession)));
        assert!(matches!(bank.current_customer(), Err(Error::NoActiveSession)));

        bank.login("other").unwrap();
        bank.logout().unwrap();

        // balance survives logout
        assert_eq!(bank.login("user").unwrap().balance(), dec(30));
    }

    #[test]
    fn test_operations_require_session() {
        let mut bank = BankService::new();
        assert!(matches!(bank.deposit(dec(10)), Err(Error::NoActiveSession)));
        assert!(matches!(bank.withdraw(dec(10)), Err(Error::NoActiveSession)));
        assert!(matches!(bank.transfer("x", dec(10)), Err(Error::NoActiveSession)));
    }

    #[test]
    fn test_amount_checked_before_session() {
        let mut bank = BankService::new();
        assert!(matches!(bank.deposit(Decimal::ZERO), Err(Error::InvalidAmount(_))));
        assert!(matches!(bank.withdraw(dec(-1)), Err(Error::InvalidAmount(_))));
        assert!(matches!(bank.transfer("x", dec(-5)), Err(Error::InvalidAmount(_))));
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        let mut bank = BankService::new();
        bank.login("user").unwrap();
        assert!(matches!(bank.deposit(Decimal::ZERO), Err(Error::InvalidAmount(_))));
        assert!(matches!(bank.deposit(dec(-1)), Err(Error::InvalidAmount(_))));
        assert!(matches!(bank.withdraw(Decimal::ZERO), Err(Error::InvalidAmount(_))));
        assert_eq!(bank.current_customer().unwrap().balance(), Decimal::ZERO);
    }

    #[test]
    fn test_withdraw_more_than_balance() {
        let mut bank = BankService::new();
        bank.login("user").unwrap();
        assert!(matches!(bank.withdraw(dec(10)), Err(Error::InsufficientFunds { .. })));

        bank.deposit(dec(20)).unwrap();
        let tx = bank.withdraw(dec(10)).unwrap();
        assert_eq!(tx, Transaction::withdrawal("user", dec(10)));
        assert_eq!(bank.current_customer().unwrap().balance(), dec(10));
    }

    #[test]
    fn test_transfer_target_validation() {
        let mut bank = BankService::new();
        bank.login("user").unwrap();

        assert!(matches!(bank.transfer("user", dec(5)), Err(Error::SelfTransfer)));
        assert!(matches!(
            bank.transfer("nonexistent", dec(5)),
            Err(Error::UnknownCustomer(name)) if name == "nonexistent"
        ));
    }

    #[test]
    fn test_transfer_between_customers() {
        let mut bank = BankService::new();
        bank.login("bob").unwrap();
        bank.logout().unwrap();
        bank.login("alice").unwrap();
        bank.deposit(dec(60)).unwrap();

        let transactions = bank.transfer("bob", dec(100)).unwrap();

        assert_eq!(transactions, vec![Transaction::transfer("alice", "bob", dec(60))]);
        let summary = bank.current_summary().unwrap();
        assert_eq!(summary.balance, Decimal::ZERO);
        assert_eq!(summary.owed_to[0].counterparty, "bob");
        assert_eq!(summary.owed_to[0].amount, dec(40));
    }
}
