use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status} from {url}")]
    HttpStatus { url: String, status: u16 },
    #[error("HTML parse error: {0}")]
    HtmlParse(String),
    #[error("bad field pattern: {0}")]
    Pattern(String),
    #[error("pagination marker not found")]
    MissingPaginationMarker,
    #[error("invalid page count: {0:?}")]
    InvalidPageCount(String),
    #[error("malformed geo point {raw:?}: {reason}")]
    GeoPoint { raw: String, reason: String },
}
