pub mod accumulator;
pub mod error;
pub mod loader;

// Re-export commonly used types
pub use accumulator::Accumulator;
pub use error::LoadError;
pub use loader::{HistoryLoader, LoaderConfig};
