//! Core types and logic for the vacation ledger.
//!
//! This crate holds the in-memory employee directory together with the
//! operations for querying vacation balances and recording vacation days.

/// Domain types and business logic.
pub mod domain;
pub use domain::{Config, Employee, Ledger, LedgerError, LogPolicy, RosterError};
