use crate::errors::ExportError;
use crate::scraper::ListingRecord;
use std::path::Path;

/// Write listings as CSV. The header row comes from the first record's
/// field names; nothing is created when there are no records.
pub fn write_listings_csv(listings: &[ListingRecord], path: &Path) -> Result<(), ExportError> {
    if listings.is_empty() {
        return Err(ExportError::NoRecords);
    }

    let mut wtr = csv::Writer::from_path(path)?;
    for listing in listings {
        wtr.serialize(listing)?;
    }
    wtr.flush()?;

    Ok(())
}
