use std::path::Path;
use std::pin::Pin;
use std::str::FromStr;
use std::task::{Context, Poll};

use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::{Stream, StreamExt};
use rust_decimal::Decimal;
use serde::Deserialize;
use tokio::fs::File;
use tokio_util::compat::TokioAsyncReadCompatExt;

use super::error::IoError;
use crate::domain::{Direction, TransactionRecord};

/// Raw CSV record as read from seed input
///
/// The three payment-reference columns may be empty or missing entirely; an
/// empty string is treated the same as an absent field.
#[derive(Debug, Deserialize)]
pub struct RawHistoryRecord {
    pub account: String,
    pub txid: String,
    pub timestamp: i64,
    pub address: String,
    pub amount: String,
    pub currency: String,
    pub direction: String,
    #[serde(default)]
    pub payment_amount: Option<String>,
    #[serde(default)]
    pub payment_currency: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl RawHistoryRecord {
    /// Parse this raw record into the owning account id and a typed record
    pub fn parse(self) -> Result<(String, TransactionRecord), IoError> {
        let direction = match self.direction.trim().to_lowercase().as_str() {
            "incoming" => Direction::Incoming,
            "outgoing" => Direction::Outgoing,
            _ => return Err(IoError::InvalidDirection(self.direction)),
        };

        let amount = Decimal::from_str(self.amount.trim())
            .map_err(|_| IoError::InvalidAmount(self.amount.clone()))?;

        let payment_reference_amount = match self.payment_amount.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Some(
                Decimal::from_str(raw.trim())
                    .map_err(|_| IoError::InvalidAmount(raw.to_string()))?,
            ),
            _ => None,
        };

        let record = TransactionRecord {
            txid: self.txid,
            timestamp: self.timestamp,
            address: self.address,
            amount,
            currency: self.currency,
            direction,
            payment_reference_amount,
            payment_reference_currency: self
                .payment_currency
                .filter(|c| !c.trim().is_empty()),
            payment_status: self.status.filter(|s| !s.trim().is_empty()),
        };

        Ok((self.account, record))
    }
}

/// Async stream of (account id, transaction record) pairs from CSV input
pub struct CsvHistoryStream {
    inner: Pin<Box<dyn Stream<Item = Result<(String, TransactionRecord), IoError>> + Send>>,
}

impl CsvHistoryStream {
    /// Create a new history stream from an async reader
    pub fn new<R>(reader: R) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let csv_reader = AsyncReaderBuilder::new()
            .trim(csv_async::Trim::All)
            .flexible(true)
            .create_deserializer(reader);

        let stream = csv_reader
            .into_deserialize::<RawHistoryRecord>()
            .map(|result| result.map_err(IoError::from).and_then(|raw| raw.parse()));

        Self {
            inner: Box::pin(stream),
        }
    }

    /// Create a new history stream from a file path
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file = File::open(path.as_ref()).await?;
        Ok(Self::new(file.compat()))
    }
}

impl Stream for CsvHistoryStream {
    type Item = Result<(String, TransactionRecord), IoError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}
