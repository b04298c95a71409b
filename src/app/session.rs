use std::path::PathBuf;

use tracing::{debug, error};

use super::ui::{Presenter, Translations, keys};
use crate::domain::{Account, TransactionRecord};
use crate::history::{HistoryLoader, LoaderConfig};
use crate::io::{CsvExporter, FileOpener, FileSink};
use crate::storage::{AccountSync, TransactionStore};

/// One account's history view session
///
/// Reproduces the history screen's lifecycle: remote sync plus first page on
/// open, one more page per scroll step, full drain plus CSV hand-off on
/// export. Failure handling follows the screen's policy: sync and fetch
/// errors are logged and swallowed (the view keeps whatever loaded), export
/// write errors stay silent apart from the log, and only a failed viewer
/// hand-off surfaces an alert.
pub struct HistorySession<S, Y, K, O, P, T>
where
    S: TransactionStore,
    Y: AccountSync,
    K: FileSink,
    O: FileOpener,
    P: Presenter,
    T: Translations,
{
    loader: HistoryLoader<S>,
    sync: Y,
    exporter: CsvExporter<K, O>,
    presenter: P,
    translations: T,
}

impl<S, Y, K, O, P, T> HistorySession<S, Y, K, O, P, T>
where
    S: TransactionStore,
    Y: AccountSync,
    K: FileSink,
    O: FileOpener,
    P: Presenter,
    T: Translations,
{
    pub fn new(
        store: S,
        account: Account,
        sync: Y,
        exporter: CsvExporter<K, O>,
        presenter: P,
        translations: T,
    ) -> Self {
        Self::with_config(
            store,
            account,
            sync,
            exporter,
            presenter,
            translations,
            LoaderConfig::default(),
        )
    }

    pub fn with_config(
        store: S,
        account: Account,
        sync: Y,
        exporter: CsvExporter<K, O>,
        presenter: P,
        translations: T,
        config: LoaderConfig,
    ) -> Self {
        Self {
            loader: HistoryLoader::with_config(store, account, config),
            sync,
            exporter,
            presenter,
            translations,
        }
    }

    /// View entry: sync the account remotely, then fetch the first page
    ///
    /// Failures are logged and swallowed; no alert is shown and the view is
    /// left with whatever transactions were loaded so far.
    pub async fn open(&mut self) {
        let _loader = self
            .presenter
            .present_loader(&self.translations.get(keys::LOADING_TRANSACTIONS));

        if let Err(e) = self.sync.sync_account(self.loader.account()).await {
            debug!(account = %self.loader.account().id, error = %e, "History sync failed");
            return;
        }
        if let Err(e) = self.loader.fetch_next_page().await {
            debug!(account = %self.loader.account().id, error = %e, "Initial page fetch failed");
        }
    }

    /// Infinite-scroll step: fetch and append one more page
    ///
    /// Errors are swallowed so the scroll control always completes; returns
    /// whether more pages may remain.
    pub async fn load_more(&mut self) -> bool {
        match self.loader.fetch_next_page().await {
            Ok(has_more) => has_more,
            Err(e) => {
                debug!(account = %self.loader.account().id, error = %e, "Page fetch failed");
                self.loader.has_more()
            }
        }
    }

    /// Transactions loaded so far, in retrieval order
    pub fn transactions(&self) -> &[TransactionRecord] {
        self.loader.items()
    }

    pub fn has_more(&self) -> bool {
        self.loader.has_more()
    }

    pub fn account(&self) -> &Account {
        self.loader.account()
    }

    /// Block-explorer URL for one of this account's transactions
    pub fn transaction_url(&self, txid: &str) -> String {
        self.loader.account().explorer_url(txid)
    }

    /// Export the full history to `<account id>.csv` and hand it to the viewer
    ///
    /// Returns the written path once the file exists, even if the viewer
    /// hand-off failed afterwards (the file persists either way). Drain and
    /// write failures return `None` silently apart from the log; only a
    /// failed hand-off alerts the user.
    pub async fn export(&mut self) -> Option<PathBuf> {
        let written = {
            let _loader = self
                .presenter
                .present_loader(&self.translations.get(keys::LOADING_TRANSACTIONS));

            if let Err(e) = self.loader.load_all().await {
                error!(account = %self.loader.account().id, error = %e, "History drain failed");
                return None;
            }

            match self
                .exporter
                .write(self.loader.account(), self.loader.items())
                .await
            {
                Ok(path) => path,
                Err(e) => {
                    error!(account = %self.loader.account().id, error = %e, "Export write failed");
                    return None;
                }
            }
            // indicator dismissed here, before the viewer hand-off
        };

        if let Err(e) = self.exporter.open(&written).await {
            error!(account = %self.loader.account().id, error = %e, "Export open failed");
            self.presenter.alert(
                &self.translations.get(keys::EXPORT_ERROR),
                &self.translations.get(keys::MISSING_CSV_APP),
                &self.translations.get(keys::OK),
            );
        }

        Some(written)
    }
}
