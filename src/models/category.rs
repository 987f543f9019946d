//! Category definitions
//!
//! A category is a user-editable, two-level classification: a display name
//! with an ordered list of subcategories, plus a color and icon used when
//! rendering. Expenses refer to categories by name.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;

/// Icon used when a category has no icon or an unknown one
pub const FALLBACK_ICON: &str = "HelpCircle";

/// Color given to new categories when none is chosen
pub const DEFAULT_COLOR: &str = "#3b82f6";

/// Color used for expenses whose category no longer exists
pub const ORPHAN_COLOR: &str = "#64748b";

/// Icons a category may use
pub const AVAILABLE_ICONS: &[&str] = &[
    "Baby",
    "ShoppingCart",
    "Activity",
    "Gamepad2",
    "IceCream",
    "Car",
    "Sparkles",
    "HelpCircle",
    "Briefcase",
    "Home",
    "Utensils",
    "Smartphone",
    "Gift",
];

/// Maximum length of a category name
const MAX_NAME_LEN: usize = 50;

/// A category with its subcategories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    /// Unique identifier
    pub id: CategoryId,

    /// Display name, referenced by expenses
    pub name: String,

    /// Ordered subcategory names
    #[serde(default)]
    pub subcategories: Vec<String>,

    /// Display color (`#rrggbb`)
    #[serde(default = "default_color")]
    pub color: String,

    /// Symbolic icon identifier
    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

fn default_icon() -> String {
    FALLBACK_ICON.to_string()
}

impl CategoryDefinition {
    /// Create a new category with the default color and icon
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            subcategories: Vec::new(),
            color: default_color(),
            icon: default_icon(),
        }
    }

    fn builtin(id: &str, name: &str, subcategories: &[&str], color: &str, icon: &str) -> Self {
        Self {
            id: CategoryId::from(id),
            name: name.to_string(),
            subcategories: subcategories.iter().map(|s| s.to_string()).collect(),
            color: color.to_string(),
            icon: icon.to_string(),
        }
    }

    /// First subcategory, used as the default when recording an expense
    pub fn first_subcategory(&self) -> Option<&str> {
        self.subcategories.first().map(String::as_str)
    }

    /// Whether `name` is one of this category's subcategories (case-insensitive)
    pub fn find_subcategory(&self, name: &str) -> Option<&str> {
        let name_lower = name.trim().to_lowercase();
        self.subcategories
            .iter()
            .find(|s| s.to_lowercase() == name_lower)
            .map(String::as_str)
    }

    /// Icon to render, falling back for unknown identifiers
    pub fn display_icon(&self) -> &str {
        if is_known_icon(&self.icon) {
            &self.icon
        } else {
            FALLBACK_ICON
        }
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if self.name.len() > MAX_NAME_LEN {
            return Err(CategoryValidationError::NameTooLong(self.name.len()));
        }

        if !is_hex_color(&self.color) {
            return Err(CategoryValidationError::InvalidColor(self.color.clone()));
        }

        if !is_known_icon(&self.icon) {
            return Err(CategoryValidationError::UnknownIcon(self.icon.clone()));
        }

        if self.subcategories.iter().any(|s| s.trim().is_empty()) {
            return Err(CategoryValidationError::EmptySubcategory);
        }

        Ok(())
    }
}

impl fmt::Display for CategoryDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Whether `icon` is in the icon catalogue
pub fn is_known_icon(icon: &str) -> bool {
    AVAILABLE_ICONS.contains(&icon)
}

/// Resolve an icon name case-insensitively against the catalogue
pub fn resolve_icon(icon: &str) -> Option<&'static str> {
    AVAILABLE_ICONS
        .iter()
        .find(|known| known.eq_ignore_ascii_case(icon.trim()))
        .copied()
}

/// Whether `color` is a `#rrggbb` hex color
pub fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

/// The built-in category set used when nothing has been stored yet
pub fn default_categories() -> Vec<CategoryDefinition> {
    vec![
        CategoryDefinition::builtin(
            "cristopher",
            "Cristopher",
            &["Colegio", "Terapias", "Ropa", "Juguetes", "Médico", "Pañales"],
            "#3b82f6",
            "Baby",
        ),
        CategoryDefinition::builtin(
            "mercado",
            "Mercado",
            &["Comida", "Aseo Personal", "Aseo Hogar", "Varios"],
            "#22c55e",
            "ShoppingCart",
        ),
        CategoryDefinition::builtin(
            "terapias",
            "Terapias Extra",
            &["Física", "Lenguaje", "Ocupacional", "Psicología"],
            "#a855f7",
            "Activity",
        ),
        CategoryDefinition::builtin(
            "entretenimiento",
            "Entretenimiento",
            &["Cine", "Parques", "Streaming", "Suscripciones", "Juegos"],
            "#f97316",
            "Gamepad2",
        ),
        CategoryDefinition::builtin(
            "gustos",
            "Gustos",
            &["Restaurantes", "Postres", "Snacks", "Regalos"],
            "#ec4899",
            "IceCream",
        ),
        CategoryDefinition::builtin(
            "movilidad",
            "Movilidad",
            &["Taxis", "Gasolina", "Transporte Público", "Mantenimiento"],
            "#eab308",
            "Car",
        ),
        CategoryDefinition::builtin(
            "limpieza",
            "Limpieza",
            &["Servicio Doméstico", "Artículos Especiales", "Lavandería"],
            "#06b6d4",
            "Sparkles",
        ),
    ]
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    InvalidColor(String),
    UnknownIcon(String),
    EmptySubcategory,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Category name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::InvalidColor(color) => {
                write!(f, "Invalid color '{}': expected #rrggbb", color)
            }
            Self::UnknownIcon(icon) => write!(
                f,
                "Unknown icon '{}'. Available: {}",
                icon,
                AVAILABLE_ICONS.join(", ")
            ),
            Self::EmptySubcategory => write!(f, "Subcategory names cannot be empty"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_category() {
        let category = CategoryDefinition::new("Educación");
        assert_eq!(category.color, DEFAULT_COLOR);
        assert_eq!(category.icon, FALLBACK_ICON);
        assert!(category.subcategories.is_empty());
        assert!(category.validate().is_ok());
    }

    #[test]
    fn test_validation() {
        let mut category = CategoryDefinition::new("  ");
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "Hogar".into();
        category.color = "blue".into();
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::InvalidColor(_))
        ));

        category.color = "#ABCDEF".into();
        category.icon = "Rocket".into();
        assert!(matches!(
            category.validate(),
            Err(CategoryValidationError::UnknownIcon(_))
        ));

        category.icon = "Home".into();
        assert!(category.validate().is_ok());
    }

    #[test]
    fn test_default_categories() {
        let defaults = default_categories();
        assert_eq!(defaults.len(), 7);
        assert_eq!(defaults[1].name, "Mercado");
        assert_eq!(defaults[1].id.as_str(), "mercado");
        assert_eq!(defaults[1].first_subcategory(), Some("Comida"));
        assert!(defaults.iter().all(|c| c.validate().is_ok()));
    }

    #[test]
    fn test_find_subcategory_case_insensitive() {
        let mercado = &default_categories()[1];
        assert_eq!(mercado.find_subcategory("aseo hogar"), Some("Aseo Hogar"));
        assert_eq!(mercado.find_subcategory("Cine"), None);
    }

    #[test]
    fn test_icons() {
        assert_eq!(resolve_icon("shoppingcart"), Some("ShoppingCart"));
        assert_eq!(resolve_icon("nope"), None);

        let mut category = CategoryDefinition::new("Raro");
        category.icon = "Unknown".into();
        assert_eq!(category.display_icon(), FALLBACK_ICON);
    }

    #[test]
    fn test_reads_minimal_stored_category() {
        let json = r#"{"id": "x", "name": "Varios"}"#;
        let category: CategoryDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(category.color, DEFAULT_COLOR);
        assert_eq!(category.icon, FALLBACK_ICON);
    }
}
