//! Read side of a classified catalog: subcategory grouping and search.

use crate::models::catalog::{Catalog, CategoryBucket};
use crate::models::category::Category;
use crate::models::menu_item::MenuItem;

/// Labels that go first, in this order, whatever the category.
const PREFERRED_ORDER: [&str; 7] = [
    "Aperitivi", "Cocktail", "Birre", "Vini", "Amari", "Liquori", "Grappe",
];

/// Distinct subcategory labels of a bucket: preferred labels first,
/// then the others alphabetically.
pub fn subcategories(bucket: &CategoryBucket) -> Vec<&str> {
    let mut labels: Vec<&str> = Vec::new();
    for item in &bucket.items {
        if !labels.contains(&item.subcategory.as_str()) {
            labels.push(&item.subcategory);
        }
    }

    labels.sort_by(|a, b| {
        let ia = PREFERRED_ORDER.iter().position(|p| p == a);
        let ib = PREFERRED_ORDER.iter().position(|p| p == b);
        match (ia, ib) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.to_lowercase().cmp(&b.to_lowercase()).then(a.cmp(b)),
        }
    });
    labels
}

/// A heading repeating the category title (or "Bibite" under fredde) is noise.
pub fn is_redundant_heading(category: Category, bucket: &CategoryBucket, label: &str) -> bool {
    let l = label.to_lowercase();
    l == bucket.title.to_lowercase() || (category == Category::Fredde && l == "bibite")
}

pub fn items_in<'a>(bucket: &'a CategoryBucket, label: &str) -> Vec<&'a MenuItem> {
    bucket
        .items
        .iter()
        .filter(|i| i.subcategory == label)
        .collect()
}

/// Case-insensitive match on item names across every category, in display
/// order. An empty query matches nothing.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> Vec<&'a MenuItem> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return Vec::new();
    }
    catalog
        .values()
        .flat_map(|b| b.items.iter())
        .filter(|i| i.name.to_lowercase().contains(&q))
        .collect()
}
