/// Allergen codes the menu knows how to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allergen {
    Latte,
    Glutine,
    Uova,
    Guscio,
    Sedano,
}

impl Allergen {
    /// Codes outside the vocabulary yield None and are simply not shown.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "latte" => Some(Allergen::Latte),
            "glutine" => Some(Allergen::Glutine),
            "uova" => Some(Allergen::Uova),
            "guscio" => Some(Allergen::Guscio),
            "sedano" => Some(Allergen::Sedano),
            _ => None,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Allergen::Latte => "🥛",
            Allergen::Glutine => "🌾",
            Allergen::Uova => "🥚",
            Allergen::Guscio => "🥜",
            Allergen::Sedano => "🌿",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Allergen::Latte => "Latte",
            Allergen::Glutine => "Glutine",
            Allergen::Uova => "Uova",
            Allergen::Guscio => "Frutta a guscio",
            Allergen::Sedano => "Sedano",
        }
    }
}
