use std::path::{Path, PathBuf};

use chrono::DateTime;
use rust_decimal::Decimal;
use tracing::debug;

use super::error::ExportError;
use super::sink::{FileOpener, FileSink};
use crate::domain::{Account, Direction, TransactionRecord};

/// MIME type handed to the viewer
pub const CSV_MIME: &str = "text/csv";

const HEADER: [&str; 9] = [
    "txid",
    "datetime",
    "address",
    "amount",
    "currency",
    "type",
    "payment amount",
    "payment currency",
    "status",
];

/// Hands a fully-loaded history to the file sink and viewer as CSV
pub struct CsvExporter<K: FileSink, O: FileOpener> {
    sink: K,
    opener: O,
}

impl<K: FileSink, O: FileOpener> CsvExporter<K, O> {
    pub fn new(sink: K, opener: O) -> Self {
        Self { sink, opener }
    }

    /// Render and write `<account id>.csv`, overwriting any previous export
    pub async fn write(
        &self,
        account: &Account,
        records: &[TransactionRecord],
    ) -> Result<PathBuf, ExportError> {
        let contents = render_csv(records);
        let file_name = format!("{}.csv", account.id);
        debug!(account = %account.id, rows = records.len(), file_name = %file_name, "Writing export");
        self.sink.write(&file_name, &contents).await
    }

    /// Hand a written export to the platform viewer
    pub async fn open(&self, path: &Path) -> Result<(), ExportError> {
        self.opener.open(path, CSV_MIME).await
    }

    /// Write and open in one step
    pub async fn export(
        &self,
        account: &Account,
        records: &[TransactionRecord],
    ) -> Result<PathBuf, ExportError> {
        let path = self.write(account, records).await?;
        self.open(&path).await?;
        Ok(path)
    }
}

/// Render the complete CSV document for `records`
///
/// The format is the wallet's historical one: comma-joined columns with no
/// quoting or escaping, newline-joined rows, header first. An embedded comma
/// in an address or status shifts every later column; that limitation is
/// preserved deliberately.
pub fn render_csv(records: &[TransactionRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(HEADER.join(","));
    for record in records {
        lines.push(render_row(record));
    }
    lines.join("\n")
}

fn render_row(record: &TransactionRecord) -> String {
    let direction = match record.direction {
        Direction::Incoming => "deposit",
        Direction::Outgoing => "withdrawal",
    };
    let payment_amount = match record.payment_reference_amount {
        Some(amount) if amount > Decimal::ZERO => amount.to_string(),
        _ => String::new(),
    };
    let payment_currency = record.payment_reference_currency.clone().unwrap_or_default();
    let status = record.payment_status.clone().unwrap_or_default();

    [
        record.txid.clone(),
        utc_datetime(record.timestamp),
        record.address.clone(),
        record.amount.to_string(),
        record.currency.clone(),
        direction.to_string(),
        payment_amount,
        payment_currency,
        status,
    ]
    .join(",")
}

/// Seconds since epoch to the RFC-2822/UTC form used by the export rows
///
/// The upstream representation is milliseconds, hence the `* 1000` before
/// conversion.
pub fn utc_datetime(timestamp: i64) -> String {
    timestamp
        .checked_mul(1000)
        .and_then(DateTime::from_timestamp_millis)
        .map(|dt| dt.format("%a, %d %b %Y %H:%M:%S GMT").to_string())
        .unwrap_or_default()
}
