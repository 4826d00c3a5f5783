use super::category::Category;
use super::menu_item::MenuItem;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Items of one category, in source order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryBucket {
    pub title: String,
    pub items: Vec<MenuItem>,
}

impl CategoryBucket {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            items: Vec::new(),
        }
    }
}

/// Only categories that received at least one item are present.
/// BTreeMap keeps them in display order.
pub type Catalog = BTreeMap<Category, CategoryBucket>;

/// Result of one classification pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Classified {
    pub catalog: Catalog,
    pub announcement: Option<String>,
}

impl Classified {
    pub fn item_count(&self) -> usize {
        self.catalog.values().map(|b| b.items.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}
