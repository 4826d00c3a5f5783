use super::allergen::Allergen;
use super::rows::RawRow;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// NaN when the sheet price could not be parsed.
    #[serde(with = "price_serde")]
    pub price: f64,
    pub description: String,
    pub allergens: Vec<String>, // lowercase, trimmed
    pub tag: String,            // "new" | "hot" | anything (inert)
    pub subcategory: String,    // raw category text, case preserved
    pub sold_out: bool,
}

impl MenuItem {
    /// Build an item from a non-void, non-suppressed row.
    pub fn from_row(row: &RawRow) -> Self {
        Self {
            name: row.nome.clone(),
            price: parse_price(&row.prezzo),
            description: row.descrizione.clone(),
            allergens: split_allergens(&row.allergeni),
            tag: row.tag.clone(),
            subcategory: row.categoria.clone(),
            sold_out: row.is_sold_out(),
        }
    }

    /// Known allergens only, in source order.
    pub fn known_allergens(&self) -> Vec<Allergen> {
        self.allergens
            .iter()
            .filter_map(|a| Allergen::from_code(a))
            .collect()
    }

    pub fn tag_label(&self) -> Option<&'static str> {
        match self.tag.as_str() {
            "new" => Some("Novità"),
            "hot" => Some("Top"),
            _ => None,
        }
    }
}

static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").unwrap());

/// Comma-decimal price. Only the first ',' becomes '.', then the longest
/// numeric prefix is read ("3,50 €" is 3.5). No numeric prefix gives NaN.
pub fn parse_price(raw: &str) -> f64 {
    let normalized = raw.replacen(',', ".", 1);
    LEADING_NUMBER
        .find(normalized.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(f64::NAN)
}

/// JSON has no NaN: non-finite prices are stored as null and read back as NaN.
mod price_serde {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
        if v.is_finite() {
            s.serialize_f64(*v)
        } else {
            s.serialize_none()
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::NAN))
    }
}

fn split_allergens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}
