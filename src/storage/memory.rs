use async_trait::async_trait;
use dashmap::DashMap;

use super::error::StoreError;
use super::traits::{AccountSync, PageWindow, TransactionStore};
use crate::domain::{Account, TransactionRecord};

/// DashMap-based in-memory transaction store keyed by account id
///
/// Holds each account's history in insertion order, which the pipeline treats
/// as store order. Backs the CLI and tests; production deployments implement
/// [`TransactionStore`] against the real wallet database.
pub struct MemoryTransactionStore {
    histories: DashMap<String, Vec<TransactionRecord>>,
}

impl MemoryTransactionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            histories: DashMap::new(),
        }
    }

    /// Append a record to an account's history, preserving insertion order
    pub fn push(&self, account_id: &str, record: TransactionRecord) {
        self.histories
            .entry(account_id.to_string())
            .or_default()
            .push(record);
    }

    /// Number of records held for an account
    pub fn len(&self, account_id: &str) -> usize {
        self.histories.get(account_id).map_or(0, |h| h.len())
    }

    pub fn is_empty(&self, account_id: &str) -> bool {
        self.len(account_id) == 0
    }
}

impl Default for MemoryTransactionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionStore for MemoryTransactionStore {
    async fn retrieve_transactions(
        &self,
        account: &Account,
        window: PageWindow,
    ) -> Result<Vec<TransactionRecord>, StoreError> {
        let page = match self.histories.get(&account.id) {
            Some(history) => {
                // Clamp instead of failing when the window runs past the end;
                // an empty page is the exhaustion signal.
                let from = window.from.min(history.len());
                let to = window.to.min(history.len());
                history[from..to].to_vec()
            }
            None => Vec::new(),
        };
        Ok(page)
    }
}

#[async_trait]
impl AccountSync for MemoryTransactionStore {
    async fn sync_account(&self, _account: &Account) -> Result<(), StoreError> {
        // Nothing to reconcile for a local store
        Ok(())
    }
}
