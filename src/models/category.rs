use serde::{Deserialize, Serialize};

/// Top-level menu grouping. Declaration order is the display (tab) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Calde,
    Fredde,
    Aperitivi,
    Alcolici,
    Food,
    Dolci,
    Altro,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Calde,
        Category::Fredde,
        Category::Aperitivi,
        Category::Alcolici,
        Category::Food,
        Category::Dolci,
        Category::Altro,
    ];

    /// Key used in caches and on the command line.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Calde => "calde",
            Category::Fredde => "fredde",
            Category::Aperitivi => "aperitivi",
            Category::Alcolici => "alcolici",
            Category::Food => "food",
            Category::Dolci => "dolci",
            Category::Altro => "altro",
        }
    }

    /// Heading shown above the category.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Calde => "Caffetteria",
            Category::Fredde => "Bibite Fredde",
            Category::Aperitivi => "Aperitivi & Cocktail",
            Category::Alcolici => "Vini & Alcolici",
            Category::Food => "Food & Snack",
            Category::Dolci => "Dolci & Dessert",
            Category::Altro => "Altro",
        }
    }

    /// Helper: convert a key typed by the user (any case)
    pub fn from_key(key: &str) -> Option<Self> {
        let k = key.trim().to_lowercase();
        Category::ALL.into_iter().find(|c| c.key() == k)
    }
}
