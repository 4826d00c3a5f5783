//! Turns raw spreadsheet rows into a category-keyed catalog.

use crate::models::catalog::{CategoryBucket, Classified};
use crate::models::category::Category;
use crate::models::menu_item::MenuItem;
use crate::models::rows::RawRow;
use tracing::{debug, trace};

/// Marker token for banner rows.
const ANNOUNCEMENT_MARKER: &str = "AVVISO";

/// Ordered keyword table: the first category with a matching keyword wins.
/// Aperitivi is checked first so "Vini e Cocktail" lands there.
const KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Aperitivi,
        &["aperitiv", "spritz", "cocktail", "prosecco", "long drink"],
    ),
    (Category::Calde, &["caff", "cald", "tè", "tisane"]),
    (Category::Fredde, &["fredd", "bibit", "succh", "acqu"]),
    (
        Category::Alcolici,
        &["alcol", "vin", "birr", "amar", "liquor", "grap"],
    ),
    (
        Category::Food,
        &["cib", "food", "panin", "snack", "taglier", "focacc"],
    ),
    (Category::Dolci, &["dolc", "dessert", "gelat", "tort"]),
];

/// Map free-text category onto the fixed taxonomy.
pub fn normalize_category(text: &str) -> Category {
    let c = text.to_lowercase();
    KEYWORDS
        .iter()
        .find(|(_, words)| words.iter().any(|w| c.contains(w)))
        .map(|(cat, _)| *cat)
        .unwrap_or(Category::Altro)
}

fn is_announcement(row: &RawRow) -> bool {
    row.categoria.to_uppercase().contains(ANNOUNCEMENT_MARKER)
}

fn announcement_text(row: &RawRow) -> String {
    if row.descrizione.is_empty() {
        row.nome.clone()
    } else {
        format!("{} - {}", row.nome, row.descrizione)
    }
}

/// Classify a full result set. Never fails: bad rows are skipped, bad
/// prices are carried through as NaN.
pub fn classify(rows: &[RawRow]) -> Classified {
    let mut out = Classified::default();

    for (idx, row) in rows.iter().enumerate() {
        if row.is_void() {
            trace!(row = idx, "skipping void row");
            continue;
        }

        if is_announcement(row) {
            if row.is_suppressed() {
                debug!(row = idx, "announcement disabled");
            } else {
                out.announcement = Some(announcement_text(row));
            }
            continue;
        }

        if row.is_suppressed() {
            debug!(row = idx, name = %row.nome, "item not available, skipped");
            continue;
        }

        let cat = normalize_category(&row.categoria);
        out.catalog
            .entry(cat)
            .or_insert_with(|| CategoryBucket::new(cat.title()))
            .items
            .push(MenuItem::from_row(row));
    }

    debug!(
        categories = out.catalog.len(),
        items = out.item_count(),
        announcement = out.announcement.is_some(),
        "classification pass done"
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cat: &str, name: &str, price: &str, avail: &str) -> RawRow {
        RawRow {
            categoria: cat.into(),
            nome: name.into(),
            prezzo: price.into(),
            disponibile: avail.into(),
            ..Default::default()
        }
    }

    #[test]
    fn keyword_table_maps_common_headings() {
        assert_eq!(normalize_category("Caffetteria"), Category::Calde);
        assert_eq!(normalize_category("Tè e Tisane"), Category::Calde);
        assert_eq!(normalize_category("Bibite"), Category::Fredde);
        assert_eq!(normalize_category("Acqua"), Category::Fredde);
        assert_eq!(normalize_category("Birre"), Category::Alcolici);
        assert_eq!(normalize_category("Grappe"), Category::Alcolici);
        assert_eq!(normalize_category("Panini"), Category::Food);
        assert_eq!(normalize_category("Taglieri"), Category::Food);
        assert_eq!(normalize_category("Gelati"), Category::Dolci);
        assert_eq!(normalize_category("Spritz"), Category::Aperitivi);
        assert_eq!(normalize_category("Pizze"), Category::Altro);
        assert_eq!(normalize_category(""), Category::Altro);
    }

    #[test]
    fn aperitivi_wins_over_alcolici() {
        assert_eq!(normalize_category("Vini e Cocktail"), Category::Aperitivi);
        assert_eq!(normalize_category("Prosecco & Vino"), Category::Aperitivi);
        assert_eq!(normalize_category("Birra Long Drink"), Category::Aperitivi);
    }

    #[test]
    fn first_table_entry_wins_regardless_of_position() {
        // "caff" (calde) appears after "fredd" (fredde) in the text
        assert_eq!(normalize_category("Freddo al caffè"), Category::Calde);
    }

    #[test]
    fn suppressed_rows_are_dropped() {
        let rows = vec![
            row("Bibite", "Aranciata", "2,50", "no"),
            row("Bibite", "Chinotto", "2,50", "FALSE"),
            row("Bibite", "Gassosa", "2,50", "No"),
        ];
        let out = classify(&rows);
        assert!(out.catalog.is_empty());
        assert_eq!(out.announcement, None);
    }

    #[test]
    fn void_rows_are_skipped() {
        let rows = vec![row("", "Senza categoria", "1", ""), row("Bibite", "", "1", "")];
        assert!(classify(&rows).is_empty());
    }

    #[test]
    fn last_announcement_wins() {
        let mut first = row("AVVISO", "Chiusura anticipata", "", "");
        first.descrizione = "ore 18".into();
        let second = row("avviso", "Musica live", "", "");
        let out = classify(&[first, second]);
        assert_eq!(out.announcement.as_deref(), Some("Musica live"));
        assert!(out.catalog.is_empty());
    }

    #[test]
    fn disabled_announcement_does_not_clear_previous() {
        let on = row("AVVISO", "Aperti a Natale", "", "");
        let off = row("Avviso sala", "Vecchio avviso", "", "false");
        let out = classify(&[on, off]);
        assert_eq!(out.announcement.as_deref(), Some("Aperti a Natale"));
    }

    #[test]
    fn sold_out_is_kept_and_flagged() {
        let out = classify(&[row("Dolci", "Cannolo", "2,00", "SoldOut")]);
        let item = &out.catalog[&Category::Dolci].items[0];
        assert!(item.sold_out);
        assert_eq!(item.price, 2.0);
    }

    #[test]
    fn bad_price_passes_through() {
        let out = classify(&[row("Panini", "Toast", "n.d.", "")]);
        assert!(out.catalog[&Category::Food].items[0].price.is_nan());
    }

    #[test]
    fn labels_collapse_into_one_category_in_order() {
        let rows = vec![
            row("Vini", "Aglianico", "5,00", ""),
            row("Birre", "Peroni", "3,00", ""),
            row("Amari", "Averna", "3,50", ""),
        ];
        let out = classify(&rows);
        let bucket = &out.catalog[&Category::Alcolici];
        assert_eq!(bucket.title, "Vini & Alcolici");
        let names: Vec<_> = bucket.items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, ["Aglianico", "Peroni", "Averna"]);
        assert_eq!(bucket.items[1].subcategory, "Birre");
    }

    #[test]
    fn classify_is_repeatable() {
        let mut avviso = row("AVVISO", "Chiuso lunedì", "", "");
        avviso.descrizione = "riposo".into();
        let rows = vec![
            row("Caffè", "Espresso", "1,20", ""),
            avviso,
            row("Cocktail", "Negroni", "7,00", "soldout"),
        ];
        assert_eq!(classify(&rows), classify(&rows));
    }

    #[test]
    fn coca_cola_and_banner() {
        let mut avviso = row("AVVISO", "Chiuso 25/12", "", "");
        avviso.descrizione = "Buone feste".into();
        let rows = vec![row("Bibite Fredde", "Coca Cola", "3,00", ""), avviso];

        let out = classify(&rows);

        assert_eq!(out.announcement.as_deref(), Some("Chiuso 25/12 - Buone feste"));
        assert_eq!(out.catalog.len(), 1);
        let bucket = &out.catalog[&Category::Fredde];
        assert_eq!(bucket.title, "Bibite Fredde");
        assert_eq!(
            bucket.items,
            vec![MenuItem {
                name: "Coca Cola".into(),
                price: 3.0,
                description: String::new(),
                allergens: vec![],
                tag: String::new(),
                subcategory: "Bibite Fredde".into(),
                sold_out: false,
            }]
        );
    }
}
