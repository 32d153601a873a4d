//! Shared server state for the MCP server.

use std::sync::Arc;

use tokio::sync::RwLock;
use vacation_core::{Config, Ledger, LogPolicy};

/// Shared state for the MCP server.
///
/// The ledger is wrapped in `Arc<RwLock>` so tool calls running on separate
/// tasks see one directory. Logging holds the write guard for the whole
/// check-then-append sequence.
#[derive(Clone)]
pub struct ServerState {
    /// The ledger built on startup.
    pub ledger: Arc<RwLock<Ledger>>,
    /// The ledger's log policy, fixed at startup.
    pub policy: LogPolicy,
}

impl ServerState {
    /// Wrap an existing ledger.
    #[must_use]
    pub fn new(ledger: Ledger) -> Self {
        Self {
            policy: ledger.policy(),
            ledger: Arc::new(RwLock::new(ledger)),
        }
    }

    /// Create a new server state by building a ledger from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured roster is invalid.
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let ledger = Ledger::from_config(config)?;
        Ok(Self::new(ledger))
    }
}
