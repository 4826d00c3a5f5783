//! Loading the two tabular feeds from disk or over HTTP.
//! Values are trimmed here, so the core only ever sees clean strings.

use crate::errors::{AppError, AppResult};
use crate::models::rows::{HoursRow, RawRow};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::de::DeserializeOwned;
use std::io::Read;
use std::time::Duration;
use tracing::{debug, warn};

/// Columns the menu sheet must provide.
pub const MENU_HEADERS: [&str; 7] = [
    "categoria",
    "nome",
    "prezzo",
    "descrizione",
    "allergeni",
    "tag",
    "disponibile",
];

pub const HOURS_HEADERS: [&str; 3] = ["day", "start", "end"];

pub fn is_remote(src: &str) -> bool {
    src.starts_with("http://") || src.starts_with("https://")
}

/// Fetch the raw feed body.
pub fn fetch_text(src: &str, timeout: Duration) -> AppResult<String> {
    if src.trim().is_empty() {
        return Err(AppError::Source("no source configured".into()));
    }
    if is_remote(src) {
        debug!(url = src, "fetching feed");
        let client = reqwest::blocking::Client::builder().timeout(timeout).build()?;
        let body = client.get(src).send()?.error_for_status()?.text()?;
        Ok(body)
    } else {
        debug!(path = src, "reading feed from disk");
        Ok(std::fs::read_to_string(src)?)
    }
}

fn normalize_headers(raw: &StringRecord) -> StringRecord {
    raw.iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_lowercase())
        .collect()
}

/// Spreadsheet exports drop trailing empty cells: pad short lines with ""
/// and cut extra cells so every line has one field per header.
fn fit_to_headers(record: &StringRecord, width: usize) -> StringRecord {
    (0..width).map(|i| record.get(i).unwrap_or("")).collect()
}

/// Parse CSV with a header line into fixed-shape rows. Rows that cannot be
/// decoded are skipped; a missing required column fails the whole feed.
pub fn read_rows<T: DeserializeOwned, R: Read>(input: R, required: &[&str]) -> AppResult<Vec<T>> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = normalize_headers(rdr.headers()?);
    if let Some(missing) = required.iter().find(|h| !headers.iter().any(|x| x == **h)) {
        return Err(AppError::Source(format!("missing column '{missing}'")));
    }
    rdr.set_headers(headers.clone());

    let mut rows = Vec::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                warn!(line = idx + 2, error = %e, "unreadable line skipped");
                continue;
            }
        };
        if record.iter().all(str::is_empty) {
            continue;
        }
        let record = fit_to_headers(&record, headers.len());
        match record.deserialize::<T>(Some(&headers)) {
            Ok(row) => rows.push(row),
            Err(e) => warn!(line = idx + 2, error = %e, "malformed line skipped"),
        }
    }
    Ok(rows)
}

pub fn load_menu(src: &str, timeout: Duration) -> AppResult<Vec<RawRow>> {
    let body = fetch_text(src, timeout)?;
    read_rows(body.as_bytes(), &MENU_HEADERS)
}

pub fn load_hours(src: &str, timeout: Duration) -> AppResult<Vec<HoursRow>> {
    let body = fetch_text(src, timeout)?;
    read_rows(body.as_bytes(), &HOURS_HEADERS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_values_are_trimmed() {
        let csv = "\u{feff}Categoria,Nome,Prezzo,Descrizione,Allergeni,Tag,Disponibile\n\
                   Bibite ,  Coca Cola ,\"3,00\",,,,\n\
                   \n\
                   AVVISO,Chiuso 25/12,,Buone feste,,,\n";
        let rows: Vec<RawRow> = read_rows(csv.as_bytes(), &MENU_HEADERS).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].categoria, "Bibite");
        assert_eq!(rows[0].nome, "Coca Cola");
        assert_eq!(rows[0].prezzo, "3,00");
        assert_eq!(rows[1].descrizione, "Buone feste");
    }

    #[test]
    fn short_lines_default_missing_fields() {
        let csv = "categoria,nome,prezzo,descrizione,allergeni,tag,disponibile\nDolci,Babà\n";
        let rows: Vec<RawRow> = read_rows(csv.as_bytes(), &MENU_HEADERS).unwrap();
        assert_eq!(rows[0].nome, "Babà");
        assert_eq!(rows[0].prezzo, "");
    }

    #[test]
    fn short_menu_line_is_kept_not_void() {
        let csv = "categoria,nome,prezzo,descrizione,allergeni,tag,disponibile\n\
                   Dolci,Babà\n\
                   Bibite,Chinotto,\"2,50\",,,,,extra\n";
        let rows: Vec<RawRow> = read_rows(csv.as_bytes(), &MENU_HEADERS).unwrap();
        assert_eq!(rows.len(), 2);
        assert!(!rows[0].is_void());
        assert_eq!(rows[0].disponibile, "");
        assert_eq!(rows[1].prezzo, "2,50");
    }

    #[test]
    fn short_hours_line_defaults_end() {
        let csv = "day,start,end\nlunedì,CHIUSO\n";
        let rows: Vec<HoursRow> = read_rows(csv.as_bytes(), &HOURS_HEADERS).unwrap();
        assert_eq!(rows, vec![HoursRow::new("lunedì", "CHIUSO", "")]);
    }

    #[test]
    fn missing_column_is_a_feed_error() {
        let csv = "day,start\nlun,07:00\n";
        let res: AppResult<Vec<HoursRow>> = read_rows(csv.as_bytes(), &HOURS_HEADERS);
        assert!(matches!(res, Err(AppError::Source(_))));
    }

    #[test]
    fn empty_source_is_rejected() {
        assert!(fetch_text("  ", Duration::from_secs(1)).is_err());
    }
}
