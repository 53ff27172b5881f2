//! ATM Core - ledger engine for the ATM simulator
//!
//! - **domain**: Core entities (Balance, Customer, Transaction, errors)
//! - **services**: The ledger arena and the bank service (registry + session)
//! - **config**: Settings file handling
//! - **logging**: Diagnostic tracing setup

pub mod config;
pub mod domain;
pub mod logging;
pub mod services;

use std::path::Path;

use anyhow::Result;

use config::Config;
use services::BankService;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{Customer, CustomerId, CustomerSummary, Debt, Transaction, TransactionKind};

/// Main context for ATM operations
///
/// Holds the loaded configuration and the bank service. Nothing is
/// persisted: every context starts with an empty registry.
pub struct AtmContext {
    pub config: Config,
    pub bank: BankService,
}

impl AtmContext {
    /// Create a new ATM context from the settings in `atm_dir`
    pub fn new(atm_dir: &Path) -> Result<Self> {
        let config = Config::load(atm_dir)?;
        Ok(Self::with_config(config))
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            bank: BankService::new(),
        }
    }
}
