//! Ledger service - balances and mutual debt between customers
//!
//! All customers live in one arena owned by [`Ledger`] and refer to each
//! other through [`CustomerId`] handles. Any operation that touches two
//! customers goes through `&mut Ledger`, which keeps every pair of debt
//! books mirrored.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::result::{Error, Result};
use crate::domain::{Customer, CustomerId, CustomerSummary, Debt, DebtBook, Transaction};

/// Arena of customers plus the login name index
#[derive(Debug, Default)]
pub struct Ledger {
    customers: Vec<Customer>,
    index: HashMap<String, CustomerId>,
}

/// One customer's share of a deposit cascade, still being paid out
#[derive(Debug)]
struct Cascade {
    debtor: CustomerId,
    /// Creditors at the time the cash arrived, oldest first
    creditors: Vec<CustomerId>,
    next: usize,
    remaining: Decimal,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a customer by login name, creating it on first use
    pub fn open(&mut self, login_name: &str) -> CustomerId {
        if let Some(id) = self.find(login_name) {
            return id;
        }

        let id = CustomerId(self.customers.len());
        self.customers.push(Customer::new(id, login_name));
        self.index.insert(login_name.to_string(), id);
        debug!(customer = login_name, "customer created");
        id
    }

    pub fn find(&self, login_name: &str) -> Option<CustomerId> {
        self.index.get(login_name).copied()
    }

    /// Handles are only issued by this ledger, so indexing cannot miss
    pub fn customer(&self, id: CustomerId) -> &Customer {
        &self.customers[id.0]
    }

    fn customer_mut(&mut self, id: CustomerId) -> &mut Customer {
        &mut self.customers[id.0]
    }

    fn name(&self, id: CustomerId) -> &str {
        self.customer(id).login_name()
    }

    pub fn customers(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Apply incoming cash to the customer's oldest debts, then bank the rest
    ///
    /// Every creditor that gets paid immediately deposits what it received,
    /// so the payment cascades through the creditor's own debts. The cascade
    /// runs on an explicit stack of [`Cascade`] frames, so a long chain of
    /// debtors does not grow the call stack.
    ///
    /// Only the depositor's own transactions are returned: its debt payments
    /// in order, followed by the self-deposit of the remainder, if any.
    /// Cascaded payments between other customers change their state but are
    /// not part of the result.
    ///
    /// Fails with `AmountOverflow`, before anything is mutated, if the cash
    /// held across the ledger would no longer be representable.
    pub fn deposit(&mut self, id: CustomerId, amount: Decimal) -> Result<Vec<Transaction>> {
        // every balance is bounded by the total, so no step below can overflow
        self.total_cash()
            .checked_add(amount)
            .ok_or(Error::AmountOverflow(amount))?;

        let mut transactions = Vec::new();
        let mut stack = vec![self.cascade(id, amount)];

        while let Some(frame) = stack.last_mut() {
            let debtor = frame.debtor;

            // read the live debt: a cascade that looped back here may already
            // have reduced a later one
            let step = frame
                .creditors
                .get(frame.next)
                .map(|&creditor| (creditor, self.customer(debtor).owed_by_me.get(creditor)))
                .map(|(creditor, debt)| (creditor, debt.min(frame.remaining)))
                .filter(|(_, payment)| *payment > Decimal::ZERO);

            match step {
                Some((creditor, payment)) => {
                    frame.next += 1;
                    frame.remaining -= payment;
                    let top_level = stack.len() == 1;

                    let transaction = self.pay_to(debtor, creditor, payment)?;
                    if top_level {
                        transactions.push(transaction);
                    }

                    debug!(
                        creditor = self.name(creditor),
                        amount = %payment,
                        "cascading payment into creditor"
                    );
                    let next = self.cascade(creditor, payment);
                    stack.push(next);
                }
                None => {
                    let remaining = frame.remaining;
                    stack.pop();
                    let top_level = stack.is_empty();
                    if remaining > Decimal::ZERO {
                        let customer = self.customer_mut(debtor);
                        customer.balance.add(remaining)?;
                        if top_level {
                            transactions.push(Transaction::deposit(customer.login_name(), remaining));
                        }
                    }
                }
            }
        }

        Ok(transactions)
    }

    /// Pending deposit into `debtor`, over a copy of its creditors
    fn cascade(&self, debtor: CustomerId, amount: Decimal) -> Cascade {
        Cascade {
            debtor,
            creditors: self
                .customer(debtor)
                .owed_by_me
                .iter()
                .map(|(creditor, _)| creditor)
                .collect(),
            next: 0,
            remaining: amount,
        }
    }

    /// Take cash out of the customer's own balance. Debts are not touched.
    pub fn withdraw(&mut self, id: CustomerId, amount: Decimal) -> Result<Transaction> {
        let customer = self.customer_mut(id);
        customer.balance.subtract(amount)?;
        debug!(customer = customer.login_name(), amount = %amount, "cash withdrawn");
        Ok(Transaction::withdrawal(customer.login_name(), amount))
    }

    /// Move funds from one customer to another
    ///
    /// 1. If `to` already owes `from`, that debt is reduced by the whole
    ///    `amount` and nothing else happens. The reduction is not capped:
    ///    an amount larger than the debt fails with `InsufficientFunds`.
    /// 2. Otherwise cash moves, up to the sender's balance.
    /// 3. Whatever could not be paid in cash becomes a new debt.
    ///
    /// Only the cash movement of step 2 produces a transaction.
    pub fn transfer(
        &mut self,
        from: CustomerId,
        to: CustomerId,
        amount: Decimal,
    ) -> Result<Vec<Transaction>> {
        let mut transactions = Vec::new();
        let mut remaining = amount;

        if self.customer(to).owed_by_me.contains(from) {
            self.pay_to(to, from, remaining)?;
            remaining = Decimal::ZERO;
        }

        let available = self.customer(from).balance.get();
        let moved = if remaining > Decimal::ZERO {
            available.min(remaining)
        } else {
            Decimal::ZERO
        };

        // the new debt must fit before any cash moves
        let shortfall = remaining - moved;
        if shortfall > Decimal::ZERO {
            self.customer(from)
                .owed_by_me
                .get(to)
                .checked_add(shortfall)
                .ok_or(Error::AmountOverflow(amount))?;
        }

        if moved > Decimal::ZERO {
            self.customer_mut(from).balance.subtract(moved)?;
            self.customer_mut(to).balance.add(moved)?;
            debug!(
                from = self.name(from),
                to = self.name(to),
                amount = %moved,
                "cash transferred"
            );
            transactions.push(Transaction::transfer(self.name(from), self.name(to), moved));
            remaining -= moved;
        }

        if remaining > Decimal::ZERO {
            self.owe_to(from, to, remaining)?;
        }

        Ok(transactions)
    }

    /// Settle part of a debt, keeping both books mirrored
    fn pay_to(&mut self, debtor: CustomerId, creditor: CustomerId, amount: Decimal) -> Result<Transaction> {
        self.customer_mut(debtor).owed_by_me.decrease(creditor, amount)?;
        self.customer_mut(creditor).owed_to_me.decrease(debtor, amount)?;

        debug!(
            debtor = self.name(debtor),
            creditor = self.name(creditor),
            amount = %amount,
            "debt settled"
        );
        Ok(Transaction::transfer(self.name(debtor), self.name(creditor), amount))
    }

    /// Record a new or increased debt on both books
    ///
    /// Both sides hold the same amount, so once the debtor's book accepts
    /// the increase the creditor's cannot overflow.
    fn owe_to(&mut self, debtor: CustomerId, creditor: CustomerId, amount: Decimal) -> Result<()> {
        self.customer_mut(debtor).owed_by_me.increase(creditor, amount)?;
        self.customer_mut(creditor).owed_to_me.increase(debtor, amount)?;

        debug!(
            debtor = self.name(debtor),
            creditor = self.name(creditor),
            amount = %amount,
            "debt recorded"
        );
        Ok(())
    }

    fn resolve(&self, book: &DebtBook) -> Vec<Debt> {
        book.iter()
            .map(|(id, amount)| Debt {
                counterparty: self.name(id).to_string(),
                amount,
            })
            .collect()
    }

    /// Debts the customer owes, resolved to login names, oldest first
    pub fn debts_owed_by(&self, id: CustomerId) -> Vec<Debt> {
        self.resolve(&self.customer(id).owed_by_me)
    }

    /// Debts owed to the customer, resolved to login names, oldest first
    pub fn debts_owed_to(&self, id: CustomerId) -> Vec<Debt> {
        self.resolve(&self.customer(id).owed_to_me)
    }

    pub fn summary(&self, id: CustomerId) -> CustomerSummary {
        let customer = self.customer(id);
        CustomerSummary {
            login_name: customer.login_name().to_string(),
            balance: customer.balance(),
            owed_to: self.debts_owed_by(id),
            owed_from: self.debts_owed_to(id),
        }
    }

    /// Cash held across all customers
    ///
    /// Transfers and debt settlement only move cash between customers, so
    /// only deposits and withdrawals change this figure.
    pub fn total_cash(&self) -> Decimal {
        self.customers.iter().map(|c| c.balance()).sum()
    }

    /// Every outstanding debt, counted once on the debtor's side
    pub fn total_debt(&self) -> Decimal {
        self.customers
            .iter()
            .fold(Decimal::ZERO, |total, c| total.saturating_add(c.owed_by_me.total()))
    }

    /// True if every debt entry has an identical mirror on the other side
    pub fn debts_mirrored(&self) -> bool {
        self.customers.iter().all(|debtor| {
            debtor.owed_by_me.iter().all(|(creditor, amount)| {
                self.customer(creditor).owed_to_me.get(debtor.id()) == amount
            }) && debtor.owed_to_me.iter().all(|(other, amount)| {
                self.customer(other).owed_by_me.get(debtor.id()) == amount
            })
        })
    }
}
