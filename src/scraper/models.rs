use serde::{Deserialize, Serialize};

// listing
//  ├── Title
//  ├── Price_pesos        (absent when no ₱ amount)
//  ├── address
//  │    ├── Barangay
//  │    └── Municipality
//  ├── Seller
//  ├── attributes
//  │    ├── Number_Bedrooms
//  │    ├── Floor_sqm
//  │    └── Land_sqm
//  └── geo point
//       ├── Latitude
//       └── Longitude

/// One property advertisement, flattened into the ten output columns.
/// Field order here is the column order of every export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListingRecord {
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Price_pesos")]
    pub price_pesos: Option<String>,
    #[serde(rename = "Barangay")]
    pub barangay: String,
    #[serde(rename = "Municipality")]
    pub municipality: String,
    #[serde(rename = "Seller")]
    pub seller: String,
    #[serde(rename = "Number_Bedrooms")]
    pub number_bedrooms: String,
    #[serde(rename = "Floor_sqm")]
    pub floor_sqm: String,
    #[serde(rename = "Land_sqm")]
    pub land_sqm: String,
    #[serde(rename = "Latitude")]
    pub latitude: f64,
    #[serde(rename = "Longitude")]
    pub longitude: f64,
}

impl ListingRecord {
    pub const HEADERS: [&'static str; 10] = [
        "Title",
        "Price_pesos",
        "Barangay",
        "Municipality",
        "Seller",
        "Number_Bedrooms",
        "Floor_sqm",
        "Land_sqm",
        "Latitude",
        "Longitude",
    ];
}

/// Result of splitting the raw address line.
#[derive(Debug, Clone, PartialEq)]
pub enum Address {
    Split(Vec<String>),
    Whole(String),
}

impl Address {
    pub fn parse(raw: &str) -> Self {
        if raw.contains(',') {
            Address::Split(raw.split(", ").map(str::to_string).collect())
        } else {
            Address::Whole(raw.to_string())
        }
    }

    pub fn barangay(&self) -> String {
        match self {
            Address::Split(parts) => parts.first().cloned().unwrap_or_default(),
            Address::Whole(_) => String::new(),
        }
    }

    // Falls back to the whole string when there was nothing to split.
    pub fn municipality(&self) -> String {
        match self {
            Address::Split(parts) => parts.get(1).cloned().unwrap_or_default(),
            Address::Whole(raw) => raw.clone(),
        }
    }
}
