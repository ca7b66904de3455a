// fetcher.rs
use crate::scraper::ScraperError;
use reqwest::blocking::Client;
use scraper::Html;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Where search-result pages come from. The HTTP client in production,
/// canned markup in tests.
pub trait PageSource {
    fn fetch_html(&self, url: &Url) -> Result<String, ScraperError>;
}

pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new(timeout: Option<Duration>) -> Result<Self, ScraperError> {
        // reqwest's blocking client defaults to 30s; None disables it.
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl PageSource for HttpSource {
    fn fetch_html(&self, url: &Url) -> Result<String, ScraperError> {
        let resp = self
            .client
            .get(url.clone())
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        // Always decode as UTF-8, whatever the Content-Type claims.
        let bytes = resp
            .bytes()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Fetch and parse one page. Failures are logged and reported as `None`
/// so the caller can skip the page and keep going.
pub fn fetch_page<S: PageSource + ?Sized>(source: &S, url: &Url) -> Option<Html> {
    match source.fetch_html(url) {
        Ok(body) => {
            debug!(%url, bytes = body.len(), "fetched page");
            Some(Html::parse_document(&body))
        }
        Err(e) => {
            warn!(%url, error = %e, "failed to fetch page");
            None
        }
    }
}
