pub mod extract;
pub mod fetcher;
pub mod models;
pub mod pagination;
mod scraper_error;

pub use extract::ListingExtractor;
pub use fetcher::{fetch_page, HttpSource, PageSource};
pub use models::ListingRecord;
pub use pagination::{read_max_pages, scrape_all};
pub use scraper_error::ScraperError;
