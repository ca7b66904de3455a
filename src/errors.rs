// errors.rs
use crate::scraper::ScraperError;
use thiserror::Error;

/// Errors raised while writing the collected listings to disk.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no listings to write")]
    NoRecords,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("XLSX error: {0}")]
    Xlsx(String),
}

/// Anything that ends a run. Failed page fetches never get this far;
/// they are logged and skipped inside the scraper.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Scrape(#[from] ScraperError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

pub type AppResult<T> = Result<T, AppError>;
