//! Prelude module for convenient imports
//!
//! Import everything you need with: `use txledger::prelude::*;`

// Domain types
pub use crate::domain::{Account, Direction, TransactionRecord};

// Storage types
pub use crate::storage::{
    AccountSync, MemoryTransactionStore, PageWindow, StoreError, TransactionStore,
};

// History types
pub use crate::history::{Accumulator, HistoryLoader, LoadError, LoaderConfig};

// IO types
pub use crate::io::{
    CSV_MIME, CsvExporter, CsvHistoryStream, ExportError, FileOpener, FileSink, IoError,
    LocalFileSink, RawHistoryRecord, TracingOpener, render_csv, utc_datetime,
};

// App types
pub use crate::app::{
    AppError, CliApp, HistorySession, LoaderGuard, Presenter, StaticTranslations,
    TracingPresenter, Translations,
};
