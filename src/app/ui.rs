use tracing::{debug, warn};

/// Translation keys the history screen resolves through its host
pub mod keys {
    pub const LOADING_TRANSACTIONS: &str = "TEXT.LOADING_TRANSACTIONS";
    pub const EXPORT_ERROR: &str = "TEXT.EXPORT_ERROR";
    pub const MISSING_CSV_APP: &str = "TEXT.MISSING_CSV_APP";
    pub const OK: &str = "BUTTON.OK";
}

/// Scoped handle for a visible loading indicator
///
/// The indicator is dismissed when the guard drops, so every exit path of an
/// operation (success, error, early return) releases it without bookkeeping.
pub struct LoaderGuard {
    dismiss: Option<Box<dyn FnOnce() + Send>>,
}

impl LoaderGuard {
    pub fn new(dismiss: impl FnOnce() + Send + 'static) -> Self {
        Self {
            dismiss: Some(Box::new(dismiss)),
        }
    }

    /// Guard for hosts without a visible indicator
    pub fn noop() -> Self {
        Self { dismiss: None }
    }
}

impl Drop for LoaderGuard {
    fn drop(&mut self) {
        if let Some(dismiss) = self.dismiss.take() {
            dismiss();
        }
    }
}

/// Presentation collaborator: loading indicator and alert dialogs
pub trait Presenter: Send + Sync {
    /// Show a loading indicator; it stays visible until the guard drops
    fn present_loader(&self, text: &str) -> LoaderGuard;

    /// Show a modal alert with an acknowledgement button
    fn alert(&self, title: &str, subtitle: &str, button: &str);
}

/// Localized string lookup
pub trait Translations: Send + Sync {
    fn get(&self, key: &str) -> String;
}

/// Presenter for headless hosts: indicator lifecycle and alerts go to the log
pub struct TracingPresenter;

impl Presenter for TracingPresenter {
    fn present_loader(&self, text: &str) -> LoaderGuard {
        debug!(text, "Loader presented");
        LoaderGuard::new(|| debug!("Loader dismissed"))
    }

    fn alert(&self, title: &str, subtitle: &str, button: &str) {
        warn!(title, subtitle, button, "Alert");
    }
}

/// English fallback strings for the keys the history screen uses
pub struct StaticTranslations;

impl Translations for StaticTranslations {
    fn get(&self, key: &str) -> String {
        match key {
            keys::LOADING_TRANSACTIONS => "Loading transactions...",
            keys::EXPORT_ERROR => "Export failed",
            keys::MISSING_CSV_APP => "No application can open CSV files",
            keys::OK => "OK",
            other => other,
        }
        .to_string()
    }
}
