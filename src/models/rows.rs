//! Fixed-shape records for the two tabular feeds.
//! Every column is optional in the source and defaults to "".

use serde::{Deserialize, Serialize};

/// One line of the menu spreadsheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRow {
    pub categoria: String,
    pub nome: String,
    pub prezzo: String,
    pub descrizione: String,
    pub allergeni: String,
    pub tag: String,
    pub disponibile: String,
}

impl RawRow {
    /// A row without category or name carries nothing displayable.
    pub fn is_void(&self) -> bool {
        self.categoria.is_empty() || self.nome.is_empty()
    }

    /// "no" / "false" hide the row entirely.
    pub fn is_suppressed(&self) -> bool {
        let d = self.disponibile.to_lowercase();
        d == "no" || d == "false"
    }

    pub fn is_sold_out(&self) -> bool {
        self.disponibile.eq_ignore_ascii_case("soldout")
    }
}

/// One line of the opening-hours sheet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HoursRow {
    pub day: String,
    pub start: String,
    pub end: String,
}

impl HoursRow {
    pub fn new(day: &str, start: &str, end: &str) -> Self {
        Self {
            day: day.to_string(),
            start: start.to_string(),
            end: end.to_string(),
        }
    }
}
