// extract.rs
use crate::scraper::models::{Address, ListingRecord};
use crate::scraper::ScraperError;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};

const LISTING: &str = "div.ListingCell-AllInfo.ListingUnit";
const GEO_POINT_ATTR: &str = "data-geo-point";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Price,
    Address,
    Seller,
    Bedrooms,
    Floor,
    Land,
}

/// How element text is cleaned before matching.
#[derive(Debug, Clone, Copy)]
enum Clean {
    Trim,
    /// Trim, then drop every whitespace character.
    Squash,
}

struct RuleSpec {
    field: Field,
    selector: &'static str,
    clean: Clean,
    pattern: Option<&'static str>,
    transform: fn(String) -> String,
}

fn keep(value: String) -> String {
    value
}

fn strip_separators(value: String) -> String {
    value.replace(',', "")
}

const ATTRIBUTES: &str = "div.ListingCell-keyInfo-details > div";

#[rustfmt::skip]
const RULES: &[RuleSpec] = &[
    RuleSpec { field: Field::Title,    selector: "div.ListingCell-TitleWrapper > div > h3", clean: Clean::Trim,   pattern: None,                   transform: keep },
    RuleSpec { field: Field::Price,    selector: "div.ListingCell-KeyInfo-PriceWrapper",    clean: Clean::Trim,   pattern: Some(r"₱([\d,]+)"),     transform: strip_separators },
    RuleSpec { field: Field::Address,  selector: "div.ListingCell-TitleWrapper > div > div", clean: Clean::Trim,  pattern: None,                   transform: keep },
    RuleSpec { field: Field::Seller,   selector: "div.ListingDetail-agent-name",            clean: Clean::Trim,   pattern: None,                   transform: keep },
    RuleSpec { field: Field::Bedrooms, selector: ATTRIBUTES,                                clean: Clean::Squash, pattern: Some(r"(\d+)Bedrooms"), transform: keep },
    RuleSpec { field: Field::Floor,    selector: ATTRIBUTES,                                clean: Clean::Squash, pattern: Some(r"(\d+)m²Floor"),  transform: keep },
    RuleSpec { field: Field::Land,     selector: ATTRIBUTES,                                clean: Clean::Squash, pattern: Some(r"(\d+)m²Land"),   transform: keep },
];

/// A compiled row of the rule table.
struct FieldRule {
    field: Field,
    selector: Selector,
    clean: Clean,
    pattern: Option<Regex>,
    transform: fn(String) -> String,
}

impl FieldRule {
    fn compile(spec: &RuleSpec) -> Result<Self, ScraperError> {
        let selector = Selector::parse(spec.selector)
            .map_err(|e| ScraperError::HtmlParse(format!("{}: {e}", spec.selector)))?;
        let pattern = spec
            .pattern
            .map(Regex::new)
            .transpose()
            .map_err(|e| ScraperError::Pattern(e.to_string()))?;

        Ok(Self {
            field: spec.field,
            selector,
            clean: spec.clean,
            pattern,
            transform: spec.transform,
        })
    }

    /// `None` only when a pattern is set and does not match. A missing
    /// element reads as empty text.
    fn apply(&self, listing: ElementRef<'_>) -> Option<String> {
        let text = listing
            .select(&self.selector)
            .next()
            .map(|el| el.text().collect::<String>().trim().to_string())
            .unwrap_or_default();

        let text = match self.clean {
            Clean::Trim => text,
            Clean::Squash => text.chars().filter(|c| !c.is_whitespace()).collect(),
        };

        let value = match &self.pattern {
            None => text,
            Some(re) => re.captures(&text)?.get(1)?.as_str().to_string(),
        };

        Some((self.transform)(value))
    }
}

/// Turns a search-results page into listing records.
pub struct ListingExtractor {
    listing: Selector,
    rules: Vec<FieldRule>,
}

impl ListingExtractor {
    pub fn new() -> Result<Self, ScraperError> {
        let listing = Selector::parse(LISTING)
            .map_err(|e| ScraperError::HtmlParse(format!("{LISTING}: {e}")))?;
        let rules = RULES
            .iter()
            .map(FieldRule::compile)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { listing, rules })
    }

    /// One record per listing block, in document order.
    pub fn extract_listings(&self, document: &Html) -> Result<Vec<ListingRecord>, ScraperError> {
        document
            .select(&self.listing)
            .map(|listing| self.extract_listing(listing))
            .collect()
    }

    pub fn extract_listing(&self, listing: ElementRef<'_>) -> Result<ListingRecord, ScraperError> {
        let mut record = ListingRecord::default();
        let mut address = Address::Whole(String::new());

        for rule in &self.rules {
            let value = rule.apply(listing);
            match rule.field {
                Field::Title => record.title = value.unwrap_or_default(),
                Field::Price => record.price_pesos = value,
                Field::Address => address = Address::parse(&value.unwrap_or_default()),
                Field::Seller => record.seller = value.unwrap_or_default(),
                Field::Bedrooms => record.number_bedrooms = value.unwrap_or_default(),
                Field::Floor => record.floor_sqm = value.unwrap_or_default(),
                Field::Land => record.land_sqm = value.unwrap_or_default(),
            }
        }

        record.barangay = address.barangay();
        record.municipality = address.municipality();

        let (latitude, longitude) = parse_geo_point(listing.value().attr(GEO_POINT_ATTR))?;
        record.latitude = latitude;
        record.longitude = longitude;

        Ok(record)
    }
}

/// Parse a `[lat, lon]` literal. Absent or empty means `(0, 0)`.
pub fn parse_geo_point(raw: Option<&str>) -> Result<(f64, f64), ScraperError> {
    let raw = match raw {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok((0.0, 0.0)),
    };

    let [lat, lon]: [f64; 2] =
        serde_json::from_str(raw).map_err(|e| ScraperError::GeoPoint {
            raw: raw.to_string(),
            reason: e.to_string(),
        })?;

    Ok((lat, lon))
}
