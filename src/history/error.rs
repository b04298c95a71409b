use thiserror::Error;

use crate::storage::StoreError;

/// Failures of the page-fetch loop
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Page limit reached after {0} pages without exhaustion")]
    PageLimitExceeded(usize),

    #[error("Load cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formats_correctly() {
        assert_eq!(
            LoadError::PageLimitExceeded(1000).to_string(),
            "Page limit reached after 1000 pages without exhaustion"
        );
        assert_eq!(LoadError::Cancelled.to_string(), "Load cancelled");
    }

    #[test]
    fn store_error_conversion() {
        let store_err = StoreError::Unavailable("down".to_string());
        let load_err = LoadError::from(store_err);

        match load_err {
            LoadError::Store(StoreError::Unavailable(_)) => {}
            _ => panic!("Expected Store error variant"),
        }
    }
}
