pub mod account;
pub mod transaction;

// Re-export commonly used types
pub use account::Account;
pub use transaction::{Direction, TransactionRecord};
