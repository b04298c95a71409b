pub mod error;
pub mod memory;
pub mod traits;

// Re-export commonly used types
pub use error::StoreError;
pub use memory::MemoryTransactionStore;
pub use traits::{AccountSync, PageWindow, TransactionStore};
