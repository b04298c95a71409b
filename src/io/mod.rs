pub mod error;
pub mod export;
pub mod reader;
pub mod sink;

// Re-export commonly used types
pub use error::{ExportError, IoError};
pub use export::{CSV_MIME, CsvExporter, render_csv, utc_datetime};
pub use reader::{CsvHistoryStream, RawHistoryRecord};
pub use sink::{FileOpener, FileSink, LocalFileSink, TracingOpener};
