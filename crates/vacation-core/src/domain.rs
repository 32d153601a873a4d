//! Domain models for the vacation ledger.
//!
//! This module contains the employee record, the ledger that owns every
//! record, and the configuration used to build a ledger at startup.

/// Employee records and balance computation.
pub mod employee;
pub use employee::Employee;

mod config;
pub use config::Config;

/// The employee directory and the operations over it.
pub mod ledger;
pub use ledger::{Ledger, LedgerError, LogPolicy, RosterError};
