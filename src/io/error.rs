use std::io;

use thiserror::Error;

use crate::history::LoadError;

/// IO-level errors for CSV seed-data parsing
#[derive(Error, Debug)]
pub enum IoError {
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv_async::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid direction: {0}")]
    InvalidDirection(String),

    #[error("Invalid amount format: {0}")]
    InvalidAmount(String),
}

/// Failures of the export pipeline: full drain, file write, viewer hand-off
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("History load failed: {0}")]
    Load(#[from] LoadError),

    #[error("File write failed: {0}")]
    WriteFailed(String),

    #[error("File open failed: {0}")]
    OpenFailed(String),
}
