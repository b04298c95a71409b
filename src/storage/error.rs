use thiserror::Error;

/// Failures of the external store collaborators
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Transaction store unavailable: {0}")]
    Unavailable(String),

    #[error("Account sync failed: {0}")]
    SyncFailed(String),
}
