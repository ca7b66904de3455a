// pagination.rs
use crate::config::ScrapeConfig;
use crate::scraper::extract::ListingExtractor;
use crate::scraper::fetcher::{fetch_page, PageSource};
use crate::scraper::models::ListingRecord;
use crate::scraper::ScraperError;
use scraper::{Html, Selector};
use tracing::info;

const PAGINATION: &str = "div.BaseSection.Pagination";
const PAGINATION_END_ATTR: &str = "data-pagination-end";

/// Read the total page count off the pagination marker.
pub fn read_max_pages(document: &Html) -> Result<u32, ScraperError> {
    let selector = Selector::parse(PAGINATION)
        .map_err(|e| ScraperError::HtmlParse(format!("{PAGINATION}: {e}")))?;

    let raw = document
        .select(&selector)
        .next()
        .and_then(|el| el.value().attr(PAGINATION_END_ATTR))
        .ok_or(ScraperError::MissingPaginationMarker)?;

    raw.trim()
        .parse::<u32>()
        .map_err(|_| ScraperError::InvalidPageCount(raw.to_string()))
}

/// Walk pages `1..=max` and collect every listing, page order then
/// listing order. Pages that fail to fetch are skipped.
pub fn scrape_all<S: PageSource + ?Sized>(
    source: &S,
    config: &ScrapeConfig,
    extractor: &ListingExtractor,
) -> Result<Vec<ListingRecord>, ScraperError> {
    // No first page means no marker to read.
    let first = fetch_page(source, &config.page_url(1))
        .ok_or(ScraperError::MissingPaginationMarker)?;
    let max_pages = read_max_pages(&first)?;
    info!(max_pages, base_url = %config.base_url, "discovered page count");

    let mut first = Some(first);
    let mut records = Vec::new();
    let mut skipped = 0u32;

    for page in 1..=max_pages {
        let document = match first.take() {
            Some(doc) => Some(doc),
            None => fetch_page(source, &config.page_url(page)),
        };

        let Some(document) = document else {
            skipped += 1;
            continue;
        };

        let listings = extractor.extract_listings(&document)?;
        info!(page, listings = listings.len(), "scraped page");
        records.extend(listings);
    }

    info!(
        pages = max_pages,
        skipped,
        records = records.len(),
        "scrape complete"
    );

    Ok(records)
}
