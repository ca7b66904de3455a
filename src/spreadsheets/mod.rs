pub mod export_csv;
pub mod export_xlsx;

pub use export_csv::write_listings_csv;
pub use export_xlsx::write_listings_xlsx;

use crate::config::{OutputFormat, ScrapeConfig};
use crate::errors::ExportError;
use crate::scraper::ListingRecord;
use tracing::info;

/// Write the collected listings in the configured format.
pub fn write_listings(listings: &[ListingRecord], config: &ScrapeConfig) -> Result<(), ExportError> {
    let path = config.output_path.as_path();
    match config.format {
        OutputFormat::Csv => write_listings_csv(listings, path)?,
        OutputFormat::Xlsx => write_listings_xlsx(listings, path)?,
    }

    info!(path = %path.display(), records = listings.len(), "data successfully written");
    Ok(())
}
