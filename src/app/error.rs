use std::io;

use thiserror::Error;

use crate::history::LoadError;
use crate::io::{ExportError, IoError};
use crate::storage::StoreError;

/// Top-level application errors unifying all layer errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV input error: {0}")]
    CsvInput(#[from] IoError),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Export did not complete; see log for details")]
    ExportAborted,

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
}
