use std::path::Path;
use log::{info, warn};
use calamine::{open_workbook_auto, Reader};

use crate::{
    Error,
    error::Result,
    Contact,
};
use super::cell::Cell;

/// Reads contacts from the tabular file at `path`.
///
/// The first row is taken as a header and skipped. Column 0 holds the name,
/// column 1 the phone number. Rows with a missing or blank value are dropped.
/// Any failure to open or parse the file is logged and reported as an empty
/// list, so callers only ever see "no data".
pub fn read_contacts<P: AsRef<Path>>(path: P) -> Vec<Contact> {
    let path = path.as_ref();
    match try_read_contacts(path) {
        Ok(contacts) => {
            info!("Loaded {} contacts from {}", contacts.len(), path.display());
            contacts
        },
        Err(e) => {
            warn!("Reading sheet {} error: {e}", path.display());
            Vec::new()
        }
    }
}

pub(crate) fn try_read_contacts(path: &Path) -> Result<Vec<Contact>> {
    let rows = match is_csv(path) {
        true => load_csv_rows(path)?,
        false => load_workbook_rows(path)?,
    };

    Ok(rows.iter()
        .filter_map(|(name, phone)| row_to_contact(name, phone))
        .collect())
}

fn is_csv(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

fn row_to_contact(name: &Cell, phone: &Cell) -> Option<Contact> {
    let name = name.as_text()?;
    let phone = phone.as_text()?;
    if name.trim().is_empty() || phone.trim().is_empty() {
        return None;
    }
    Contact::new(&name, &phone).ok()
}

fn load_csv_rows(path: &Path) -> Result<Vec<(Cell, Cell)>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    // cells are decoded one by one, so bad bytes only cost their own row
    let mut rows = Vec::new();
    for (i, record) in reader.byte_records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                warn!("Reading CSV record {} in {} error: {e}, stop here", i + 1, path.display());
                break;
            }
        };
        rows.push((
            Cell::from(record.get(0)),
            Cell::from(record.get(1))
        ));
    }
    Ok(rows)
}

fn load_workbook_rows(path: &Path) -> Result<Vec<(Cell, Cell)>> {
    let mut workbook = open_workbook_auto(path)?;
    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Err(Error::Parse(format!("No worksheet in {}", path.display()))),
    };

    let (Some((first, _)), Some((last, _))) = (range.start(), range.end()) else {
        return Ok(Vec::new());
    };

    // the first populated row is the header
    Ok((first + 1..=last)
        .map(|row| (
            Cell::from(range.get_value((row, 0))),
            Cell::from(range.get_value((row, 1)))
        ))
        .collect())
}
