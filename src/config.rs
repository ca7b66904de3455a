use crate::errors::AppError;
use dotenvy::dotenv;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.lamudi.com.ph/buy/laguna/house/?sort=newest";
pub const DEFAULT_OUTPUT: &str = "Properties.csv";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Xlsx,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Some(OutputFormat::Csv),
            "xlsx" => Some(OutputFormat::Xlsx),
            _ => None,
        }
    }

    /// `.xlsx` files get a workbook, everything else is CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xlsx") => OutputFormat::Xlsx,
            _ => OutputFormat::Csv,
        }
    }
}

/// Settings for one scrape run, loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub base_url: Url,
    pub output_path: PathBuf,
    pub format: OutputFormat,
    pub request_timeout: Option<Duration>,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        let output_path = PathBuf::from(DEFAULT_OUTPUT);
        Self {
            // Constant is a valid absolute URL.
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base url"),
            format: OutputFormat::from_path(&output_path),
            output_path,
            request_timeout: None,
        }
    }
}

impl ScrapeConfig {
    /// Load configuration from the process environment (and `.env` if present).
    pub fn from_env() -> Result<Self, AppError> {
        let _ = dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = match lookup("LAMUDI_BASE_URL") {
            Some(raw) => Url::parse(&raw).map_err(|e| {
                AppError::Config(format!("LAMUDI_BASE_URL must be a valid URL: {e}"))
            })?,
            None => Url::parse(DEFAULT_BASE_URL)
                .map_err(|e| AppError::Config(format!("default base url: {e}")))?,
        };

        let output_path = PathBuf::from(
            lookup("LAMUDI_OUTPUT").unwrap_or_else(|| DEFAULT_OUTPUT.to_string()),
        );

        let format = match lookup("LAMUDI_OUTPUT_FORMAT") {
            Some(raw) => OutputFormat::parse(&raw).ok_or_else(|| {
                AppError::Config(format!(
                    "LAMUDI_OUTPUT_FORMAT must be 'csv' or 'xlsx', got {raw:?}"
                ))
            })?,
            None => OutputFormat::from_path(&output_path),
        };

        let request_timeout = match lookup("LAMUDI_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(AppError::Config(format!(
                        "LAMUDI_TIMEOUT_SECS must be a positive integer, got {raw:?}"
                    )))
                }
            },
            None => None,
        };

        Ok(Self {
            base_url,
            output_path,
            format,
            request_timeout,
        })
    }

    /// Search-results URL for a 1-indexed page.
    pub fn page_url(&self, page: u32) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut().append_pair("page", &page.to_string());
        url
    }
}
