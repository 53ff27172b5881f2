//! Balance primitive
//!
//! A non-negative amount holder. Every customer's own funds and every
//! recorded debt are a `Balance`, so the non-negativity invariant is
//! enforced in one place.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::result::{Error, Result};

/// A non-negative decimal amount
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    amount: Decimal,
}

impl Balance {
    /// Create an empty balance
    pub fn new() -> Self {
        Self::default()
    }

    /// Current amount, never negative
    pub fn get(&self) -> Decimal {
        self.amount
    }

    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Increase the balance, failing if the result is not representable
    pub fn add(&mut self, amount: Decimal) -> Result<()> {
        self.amount = self
            .amount
            .checked_add(amount)
            .ok_or(Error::AmountOverflow(amount))?;
        Ok(())
    }

    /// Decrease the balance, failing if it would go negative
    pub fn subtract(&mut self, amount: Decimal) -> Result<()> {
        if amount > self.amount {
            return Err(Error::insufficient(amount, self.amount));
        }
        self.amount -= amount;
        Ok(())
    }
}
