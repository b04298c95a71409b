use tokio_util::sync::CancellationToken;
use tracing::debug;

use super::accumulator::Accumulator;
use super::error::LoadError;
use crate::domain::{Account, TransactionRecord};
use crate::storage::{PageWindow, TransactionStore};

/// Records requested per window, matching the history screen's scroll step
const DEFAULT_PAGE_SIZE: usize = 10;

/// Upper bound on windows fetched by one bulk load
const DEFAULT_MAX_PAGES: usize = 1000;

/// Fetch-loop configuration
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    pub page_size: usize,
    /// A bulk load that fetches this many pages without hitting an empty one
    /// fails with [`LoadError::PageLimitExceeded`] instead of running forever
    /// against a misbehaving store.
    pub max_pages: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }
}

/// Drives the fetch/append cycle for one account's history
///
/// Each window starts at the current accumulated count, so the loader and the
/// store stay aligned without any cursor state on the store side.
pub struct HistoryLoader<S: TransactionStore> {
    store: S,
    account: Account,
    config: LoaderConfig,
    accumulator: Accumulator,
    cancel: CancellationToken,
}

impl<S: TransactionStore> HistoryLoader<S> {
    /// Loader with default page size and page cap
    pub fn new(store: S, account: Account) -> Self {
        Self::with_config(store, account, LoaderConfig::default())
    }

    pub fn with_config(store: S, account: Account, config: LoaderConfig) -> Self {
        Self {
            store,
            account,
            config,
            accumulator: Accumulator::new(),
            cancel: CancellationToken::new(),
        }
    }

    /// Token observed between fetches; cancelling it aborts a bulk load
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    /// Accumulated records so far, in retrieval order
    pub fn items(&self) -> &[TransactionRecord] {
        self.accumulator.items()
    }

    pub fn has_more(&self) -> bool {
        self.accumulator.has_more()
    }

    /// Fetch and append the next window, returning whether more may remain
    pub async fn fetch_next_page(&mut self) -> Result<bool, LoadError> {
        let window = PageWindow::next(self.accumulator.len(), self.config.page_size);
        debug!(
            account = %self.account.id,
            from = window.from,
            to = window.to,
            "Fetching transaction page"
        );
        let page = self
            .store
            .retrieve_transactions(&self.account, window)
            .await?;
        Ok(self.accumulator.append(page))
    }

    /// Drain the remaining history into the accumulator
    ///
    /// Iterative loop terminated by the first empty page. A fetch failure or
    /// a hit on `max_pages` aborts the drain; whatever was already appended
    /// stays in place (no rollback). Cancellation is checked before every
    /// fetch.
    pub async fn load_all(&mut self) -> Result<(), LoadError> {
        let mut pages = 0usize;
        loop {
            if self.cancel.is_cancelled() {
                return Err(LoadError::Cancelled);
            }
            if pages >= self.config.max_pages {
                return Err(LoadError::PageLimitExceeded(pages));
            }
            if !self.fetch_next_page().await? {
                debug!(account = %self.account.id, total = self.accumulator.len(), "History drained");
                return Ok(());
            }
            pages += 1;
        }
    }

    /// Consume the loader, keeping the accumulated records
    pub fn into_items(self) -> Vec<TransactionRecord> {
        self.accumulator.into_items()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::domain::Direction;
    use crate::storage::{MemoryTransactionStore, StoreError};

    fn record(txid: &str) -> TransactionRecord {
        TransactionRecord::new(txid, 1_700_000_000, "addr", dec!(1), "BTC", Direction::Incoming)
    }

    fn seeded_store(count: usize) -> Arc<MemoryTransactionStore> {
        let store = MemoryTransactionStore::new();
        for i in 0..count {
            store.push("acc-1", record(&format!("tx-{i}")));
        }
        Arc::new(store)
    }

    fn account() -> Account {
        Account::new("acc-1", "mainnet")
    }

    /// Counts fetch calls; optionally fails from a given call onward
    struct CountingStore {
        inner: Arc<MemoryTransactionStore>,
        calls: AtomicUsize,
        fail_from_call: Option<usize>,
    }

    impl CountingStore {
        fn new(inner: Arc<MemoryTransactionStore>) -> Self {
            Self {
                inner,
                calls: AtomicUsize::new(0),
                fail_from_call: None,
            }
        }

        fn failing_from(inner: Arc<MemoryTransactionStore>, call: usize) -> Self {
            Self {
                inner,
                calls: AtomicUsize::new(0),
                fail_from_call: Some(call),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TransactionStore for CountingStore {
        async fn retrieve_transactions(
            &self,
            account: &Account,
            window: PageWindow,
        ) -> Result<Vec<TransactionRecord>, StoreError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
            if let Some(fail_from) = self.fail_from_call {
                if call >= fail_from {
                    return Err(StoreError::Unavailable("injected".to_string()));
                }
            }
            self.inner.retrieve_transactions(account, window).await
        }
    }

    /// Always returns a full page, never exhausting
    struct BottomlessStore;

    #[async_trait]
    impl TransactionStore for BottomlessStore {
        async fn retrieve_transactions(
            &self,
            _account: &Account,
            window: PageWindow,
        ) -> Result<Vec<TransactionRecord>, StoreError> {
            Ok((window.from..window.to)
                .map(|i| record(&format!("tx-{i}")))
                .collect())
        }
    }

    #[tokio::test]
    async fn fetch_next_page_windows_from_accumulated_count() {
        let mut loader = HistoryLoader::new(seeded_store(15), account());

        assert!(loader.fetch_next_page().await.unwrap());
        assert_eq!(loader.items().len(), 10);

        assert!(loader.fetch_next_page().await.unwrap());
        assert_eq!(loader.items().len(), 15);
        assert_eq!(loader.items()[10].txid, "tx-10");

        assert!(!loader.fetch_next_page().await.unwrap());
        assert_eq!(loader.items().len(), 15);
    }

    #[tokio::test]
    async fn load_all_terminates_after_expected_fetch_count() {
        // 25 records at page size 10: three data pages plus one empty page
        let counting = Arc::new(CountingStore::new(seeded_store(25)));
        let mut loader = HistoryLoader::new(counting.clone(), account());

        loader.load_all().await.unwrap();

        assert_eq!(loader.items().len(), 25);
        assert!(!loader.has_more());
        assert_eq!(counting.calls(), 4);
    }

    #[tokio::test]
    async fn load_all_on_empty_history_fetches_once() {
        let counting = Arc::new(CountingStore::new(seeded_store(0)));
        let mut loader = HistoryLoader::new(counting.clone(), account());

        loader.load_all().await.unwrap();

        assert!(loader.items().is_empty());
        assert_eq!(counting.calls(), 1);
    }

    #[tokio::test]
    async fn exact_page_multiple_needs_trailing_empty_fetch() {
        let counting = Arc::new(CountingStore::new(seeded_store(20)));
        let mut loader = HistoryLoader::new(counting.clone(), account());

        loader.load_all().await.unwrap();

        assert_eq!(loader.items().len(), 20);
        assert_eq!(counting.calls(), 3);
    }

    #[tokio::test]
    async fn fetch_failure_aborts_but_keeps_partial_accumulation() {
        let counting = Arc::new(CountingStore::failing_from(seeded_store(25), 2));
        let mut loader = HistoryLoader::new(counting, account());

        let err = loader.load_all().await.unwrap_err();

        assert!(matches!(err, LoadError::Store(StoreError::Unavailable(_))));
        assert_eq!(loader.items().len(), 10);
    }

    #[tokio::test]
    async fn page_limit_bounds_bottomless_store() {
        let config = LoaderConfig {
            page_size: 10,
            max_pages: 5,
        };
        let mut loader = HistoryLoader::with_config(BottomlessStore, account(), config);

        let err = loader.load_all().await.unwrap_err();

        assert_eq!(err, LoadError::PageLimitExceeded(5));
        assert_eq!(loader.items().len(), 50);
    }

    #[tokio::test]
    async fn cancelled_token_aborts_before_fetching() {
        let counting = Arc::new(CountingStore::new(seeded_store(25)));
        let mut loader = HistoryLoader::new(counting.clone(), account());
        loader.cancellation_token().cancel();

        let err = loader.load_all().await.unwrap_err();

        assert_eq!(err, LoadError::Cancelled);
        assert_eq!(counting.calls(), 0);
    }

    #[tokio::test]
    async fn load_all_after_manual_paging_resumes_from_count() {
        let counting = Arc::new(CountingStore::new(seeded_store(25)));
        let mut loader = HistoryLoader::new(counting.clone(), account());

        loader.fetch_next_page().await.unwrap();
        loader.load_all().await.unwrap();

        assert_eq!(loader.items().len(), 25);
        // one manual page, two more data pages, one empty page
        assert_eq!(counting.calls(), 4);
    }

    proptest! {
        #[test]
        fn drains_any_finite_store(count in 0usize..200, page_size in 1usize..20) {
            let rt = tokio::runtime::Builder::new_current_thread()
                .build()
                .unwrap();
            rt.block_on(async {
                let counting = Arc::new(CountingStore::new(seeded_store(count)));
                let config = LoaderConfig { page_size, max_pages: 1000 };
                let mut loader =
                    HistoryLoader::with_config(counting.clone(), account(), config);

                loader.load_all().await.unwrap();

                assert_eq!(loader.items().len(), count);
                assert_eq!(counting.calls(), count.div_ceil(page_size) + 1);
            });
        }
    }
}
