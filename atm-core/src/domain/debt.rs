//! Ordered debt book
//!
//! Maps a counterparty to the amount owed, oldest entry first. Entries are
//! dropped as soon as the amount reaches zero.

use rust_decimal::Decimal;

use super::balance::Balance;
use super::customer::CustomerId;
use super::result::Result;

#[derive(Debug, Clone, Default)]
pub struct DebtBook {
    entries: Vec<(CustomerId, Balance)>,
}

impl DebtBook {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, counterparty: CustomerId) -> Option<usize> {
        self.entries.iter().position(|(id, _)| *id == counterparty)
    }

    pub fn contains(&self, counterparty: CustomerId) -> bool {
        self.position(counterparty).is_some()
    }

    /// Outstanding amount for a counterparty, zero if there is no entry
    pub fn get(&self, counterparty: CustomerId) -> Decimal {
        self.position(counterparty)
            .map(|i| self.entries[i].1.get())
            .unwrap_or(Decimal::ZERO)
    }

    /// Increase the debt, appending a new entry if the counterparty is new
    ///
    /// Fails with `AmountOverflow` if the total would not be representable,
    /// leaving the book unchanged.
    pub fn increase(&mut self, counterparty: CustomerId, amount: Decimal) -> Result<()> {
        match self.position(counterparty) {
            Some(i) => self.entries[i].1.add(amount),
            None => {
                let mut balance = Balance::new();
                balance.add(amount)?;
                self.entries.push((counterparty, balance));
                Ok(())
            }
        }
    }

    /// Reduce the debt, removing the entry once it reaches zero
    ///
    /// Fails with `InsufficientFunds` if `amount` exceeds the recorded debt,
    /// in which case the book is left unchanged.
    pub fn decrease(&mut self, counterparty: CustomerId, amount: Decimal) -> Result<()> {
        match self.position(counterparty) {
            Some(i) => {
                self.entries[i].1.subtract(amount)?;
                if self.entries[i].1.is_zero() {
                    self.entries.remove(i);
                }
                Ok(())
            }
            None => Balance::new().subtract(amount),
        }
    }

    /// Entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (CustomerId, Decimal)> + '_ {
        self.entries.iter().map(|(id, balance)| (*id, balance.get()))
    }

    /// Sum of all entries, saturating at `Decimal::MAX`
    pub fn total(&self) -> Decimal {
        self.iter()
            .fold(Decimal::ZERO, |total, (_, amount)| total.saturating_add(amount))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::result::Error;

    #[test]
    fn test_insertion_order_is_kept() {
        let mut book = DebtBook::new();
        book.increase(CustomerId(2), Decimal::from(25)).unwrap();
        book.increase(CustomerId(1), Decimal::from(35)).unwrap();
        book.increase(CustomerId(2), Decimal::from(5)).unwrap();

        let ids: Vec<CustomerId> = book.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![CustomerId(2), CustomerId(1)]);
        assert_eq!(book.get(CustomerId(2)), Decimal::from(30));
    }

    #[test]
    fn test_entry_removed_at_zero() {
        let mut book = DebtBook::new();
        book.increase(CustomerId(0), Decimal::from(10)).unwrap();
        book.decrease(CustomerId(0), Decimal::from(4)).unwrap();
        assert!(book.contains(CustomerId(0)));

        book.decrease(CustomerId(0), Decimal::from(6)).unwrap();
        assert!(book.is_empty());
    }

    #[test]
    fn test_overshoot_fails_without_mutation() {
        let mut book = DebtBook::new();
        book.increase(CustomerId(0), Decimal::from(10)).unwrap();

        let err = book.decrease(CustomerId(0), Decimal::from(11)).unwrap_err();
        assert!(matches!(err, Error::InsufficientFunds { .. }));
        assert_eq!(book.get(CustomerId(0)), Decimal::from(10));

        assert!(book.decrease(CustomerId(7), Decimal::ONE).is_err());
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_increase_overflow_fails_without_mutation() {
        let mut book = DebtBook::new();
        book.increase(CustomerId(0), Decimal::MAX).unwrap();
        book.increase(CustomerId(1), Decimal::MAX).unwrap();

        let err = book.increase(CustomerId(0), Decimal::ONE).unwrap_err();
        assert!(matches!(err, Error::AmountOverflow(_)));
        assert_eq!(book.get(CustomerId(0)), Decimal::MAX);
        assert_eq!(book.total(), Decimal::MAX);
    }
}
