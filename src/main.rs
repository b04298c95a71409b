use std::sync::Arc;

use futures::StreamExt;
use tracing::info;

use txledger::prelude::*;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    CliApp::new("txledger").run(run_export).await
}

/// Parse and validate command-line arguments
fn parse_args(args: Vec<String>) -> Result<(String, String, String), AppError> {
    match args.as_slice() {
        [_, input, account_id] => Ok((input.clone(), account_id.clone(), "mainnet".to_string())),
        [_, input, account_id, network] => {
            Ok((input.clone(), account_id.clone(), network.clone()))
        }
        _ => Err(AppError::InvalidArguments(
            "Usage: txledger <transactions.csv> <account-id> [network]".to_string(),
        )),
    }
}

/// Seed an in-memory store from the CSV input, then run a history session
/// through its full lifecycle and export `<account-id>.csv` to the working
/// directory
async fn run_export() -> Result<(), AppError> {
    let (input, account_id, network) = parse_args(std::env::args().collect())?;

    let store = Arc::new(MemoryTransactionStore::new());
    let mut stream = CsvHistoryStream::from_file(&input).await?;
    let mut seeded = 0usize;
    while let Some(row) = stream.next().await {
        let (owner, record) = row?;
        store.push(&owner, record);
        seeded += 1;
    }
    info!(seeded, input = %input, "Seeded transaction store");

    let account = Account::new(account_id, network);
    let exporter = CsvExporter::new(LocalFileSink::new("."), TracingOpener);
    let mut session = HistorySession::new(
        store.clone(),
        account,
        store,
        exporter,
        TracingPresenter,
        StaticTranslations,
    );

    session.open().await;
    match session.export().await {
        Some(path) => {
            println!("{}", path.display());
            Ok(())
        }
        None => Err(AppError::ExportAborted),
    }
}
