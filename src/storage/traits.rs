use std::sync::Arc;

use async_trait::async_trait;

use super::error::StoreError;
use crate::domain::{Account, TransactionRecord};

/// Half-open index range `[from, to)` into an account's transaction list
///
/// `from` is always the caller's current accumulated count, so consecutive
/// windows tile the history without gaps or overlap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub from: usize,
    pub to: usize,
}

impl PageWindow {
    /// Window of `page_size` records starting at `from`
    pub fn next(from: usize, page_size: usize) -> Self {
        Self {
            from,
            to: from + page_size,
        }
    }

    /// Number of records requested
    pub fn len(&self) -> usize {
        self.to - self.from
    }

    pub fn is_empty(&self) -> bool {
        self.to == self.from
    }
}

/// External transaction store queried in bounded windows
///
/// The store may return fewer than `window.len()` records, including none,
/// when the window runs past the available history. It does not signal
/// exhaustion explicitly; callers infer it from an empty page.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Retrieve the records in `window` for `account`, in store order
    async fn retrieve_transactions(
        &self,
        account: &Account,
        window: PageWindow,
    ) -> Result<Vec<TransactionRecord>, StoreError>;
}

/// Remote synchronization collaborator, invoked once before the first page
/// fetch of a session
#[async_trait]
pub trait AccountSync: Send + Sync {
    async fn sync_account(&self, account: &Account) -> Result<(), StoreError>;
}

// Arc impls let one shared store serve both collaborator roles
#[async_trait]
impl<S: TransactionStore + ?Sized> TransactionStore for Arc<S> {
    async fn retrieve_transactions(
        &self,
        account: &Account,
        window: PageWindow,
    ) -> Result<Vec<TransactionRecord>, StoreError> {
        (**self).retrieve_transactions(account, window).await
    }
}

#[async_trait]
impl<S: AccountSync + ?Sized> AccountSync for Arc<S> {
    async fn sync_account(&self, account: &Account) -> Result<(), StoreError> {
        (**self).sync_account(account).await
    }
}
