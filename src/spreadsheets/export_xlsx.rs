use crate::errors::ExportError;
use crate::scraper::ListingRecord;
use rust_xlsxwriter::Workbook;
use std::path::Path;

pub fn write_listings_xlsx(listings: &[ListingRecord], path: &Path) -> Result<(), ExportError> {
    if listings.is_empty() {
        return Err(ExportError::NoRecords);
    }

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // Headers
    for (col, header) in ListingRecord::HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ExportError::Xlsx(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    // Rows
    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        let text_cells = [
            (0, listing.title.as_str()),
            (2, listing.barangay.as_str()),
            (3, listing.municipality.as_str()),
            (4, listing.seller.as_str()),
            (5, listing.number_bedrooms.as_str()),
            (6, listing.floor_sqm.as_str()),
            (7, listing.land_sqm.as_str()),
        ];
        for (col, value) in text_cells {
            worksheet.write_string(r, col, value).map_err(|e| {
                ExportError::Xlsx(format!("Failed to write {}: {}", ListingRecord::HEADERS[col as usize], e))
            })?;
        }

        // Absent price stays a blank cell.
        if let Some(price) = &listing.price_pesos {
            worksheet
                .write_string(r, 1, price)
                .map_err(|e| ExportError::Xlsx(format!("Failed to write price: {}", e)))?;
        }

        worksheet
            .write_number(r, 8, listing.latitude)
            .map_err(|e| ExportError::Xlsx(format!("Failed to write latitude: {}", e)))?;

        worksheet
            .write_number(r, 9, listing.longitude)
            .map_err(|e| ExportError::Xlsx(format!("Failed to write longitude: {}", e)))?;
    }

    workbook
        .save(path)
        .map_err(|e| ExportError::Xlsx(format!("Failed to save workbook: {}", e)))?;

    Ok(())
}
