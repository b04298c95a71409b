use rust_decimal::Decimal;

/// Whether a ledger entry moved funds into or out of the account
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Incoming,
    Outgoing,
}

/// Immutable record of one ledger entry, as returned by the transaction store
///
/// Records are never modified after retrieval. Within one account's history
/// they are totally ordered by retrieval position, and that order is preserved
/// all the way through accumulation and export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    /// Unique within an account
    pub txid: String,
    /// Seconds since epoch
    pub timestamp: i64,
    pub address: String,
    /// Smallest-unit precision per currency
    pub amount: Decimal,
    pub currency: String,
    pub direction: Direction,
    /// Absent or zero means "not applicable"
    pub payment_reference_amount: Option<Decimal>,
    pub payment_reference_currency: Option<String>,
    /// Free-form status from the payment processor
    pub payment_status: Option<String>,
}

impl TransactionRecord {
    /// Create a record without payment-reference data
    pub fn new(
        txid: impl Into<String>,
        timestamp: i64,
        address: impl Into<String>,
        amount: Decimal,
        currency: impl Into<String>,
        direction: Direction,
    ) -> Self {
        Self {
            txid: txid.into(),
            timestamp,
            address: address.into(),
            amount,
            currency: currency.into(),
            direction,
            payment_reference_amount: None,
            payment_reference_currency: None,
            payment_status: None,
        }
    }

    /// Attach a payment reference in another currency
    pub fn with_payment_reference(mut self, amount: Decimal, currency: impl Into<String>) -> Self {
        self.payment_reference_amount = Some(amount);
        self.payment_reference_currency = Some(currency.into());
        self
    }

    /// Attach a payment processor status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.payment_status = Some(status.into());
        self
    }
}
