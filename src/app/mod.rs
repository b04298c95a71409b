pub mod cli;
pub mod error;
pub mod session;
pub mod ui;

// Re-export commonly used types
pub use cli::CliApp;
pub use error::AppError;
pub use session::HistorySession;
pub use ui::{LoaderGuard, Presenter, StaticTranslations, TracingPresenter, Translations, keys};
