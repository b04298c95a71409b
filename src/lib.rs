//! Paginated transaction history with CSV export for wallet accounts
//!
//! Transactions are fetched from an external store in bounded windows,
//! accumulated in retrieval order, and either paged on demand (infinite
//! scroll) or drained completely and exported as `<account id>.csv`.

pub mod app;
pub mod domain;
pub mod history;
pub mod io;
pub mod prelude;
pub mod storage;
