use crate::config::ScrapeConfig;
use crate::errors::AppResult;
use crate::scraper::{scrape_all, HttpSource, ListingExtractor};
use crate::spreadsheets::write_listings;
use tracing::{error, info};

mod config;
mod errors;
mod logging;
mod scraper;
mod spreadsheets;

#[cfg(test)]
mod tests;

fn main() {
    logging::init();

    if let Err(e) = run() {
        error!(error = %e, "scrape failed");
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    // 1️⃣ Configuration
    let config = ScrapeConfig::from_env()?;
    info!(
        base_url = %config.base_url,
        output = %config.output_path.display(),
        format = ?config.format,
        "starting scrape"
    );

    // 2️⃣ Fetch every page and pull out the listings
    let source = HttpSource::new(config.request_timeout)?;
    let extractor = ListingExtractor::new()?;
    let listings = scrape_all(&source, &config, &extractor)?;

    // 3️⃣ Write them out
    write_listings(&listings, &config)?;

    Ok(())
}
