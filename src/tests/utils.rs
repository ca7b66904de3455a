use crate::config::ScrapeConfig;
use crate::scraper::{ListingRecord, PageSource, ScraperError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use url::Url;

/// In-memory stand-in for the site. Unknown URLs answer 404.
/// Every request is recorded, failed or not.
pub struct FakeSource {
    pages: HashMap<String, String>,
    pub requested: RefCell<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            requested: RefCell::new(Vec::new()),
        }
    }

    pub fn with_page(mut self, config: &ScrapeConfig, page: u32, html: String) -> Self {
        self.pages.insert(config.page_url(page).to_string(), html);
        self
    }

    pub fn requested_pages(&self) -> Vec<String> {
        self.requested
            .borrow()
            .iter()
            .map(|u| {
                Url::parse(u)
                    .unwrap()
                    .query_pairs()
                    .find(|(k, _)| k == "page")
                    .map(|(_, v)| v.into_owned())
                    .unwrap_or_default()
            })
            .collect()
    }
}

impl PageSource for FakeSource {
    fn fetch_html(&self, url: &Url) -> Result<String, ScraperError> {
        self.requested.borrow_mut().push(url.to_string());
        self.pages
            .get(url.as_str())
            .cloned()
            .ok_or_else(|| ScraperError::HttpStatus {
                url: url.to_string(),
                status: 404,
            })
    }
}

/// A results page with an optional pagination marker and one listing per title.
pub fn results_page(pagination_end: Option<&str>, titles: &[&str]) -> String {
    let marker = pagination_end
        .map(|end| format!(r#"<div class="BaseSection Pagination" data-pagination-end="{end}"></div>"#))
        .unwrap_or_default();

    let listings: String = titles
        .iter()
        .map(|title| {
            format!(
                r#"<div class="ListingCell-AllInfo ListingUnit" data-geo-point="[14.2, 121.1]">
                     <div class="ListingCell-TitleWrapper"><div><h3>{title}</h3><div>Pulo, Cabuyao</div></div></div>
                     <div class="ListingCell-KeyInfo-PriceWrapper">₱2,000,000</div>
                   </div>"#
            )
        })
        .collect();

    format!("<html><body>{listings}{marker}</body></html>")
}

/// Unique path under the system temp dir.
pub fn temp_path(name: &str, ext: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "{name}_{}.{ext}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ))
}

pub fn sample_record(title: &str) -> ListingRecord {
    ListingRecord {
        title: title.to_string(),
        price_pesos: Some("3500000".to_string()),
        barangay: "Pulo".to_string(),
        municipality: "Cabuyao".to_string(),
        seller: "Maria Santos".to_string(),
        number_bedrooms: "3".to_string(),
        floor_sqm: "85".to_string(),
        land_sqm: "120".to_string(),
        latitude: 14.1,
        longitude: 121.2,
    }
}
