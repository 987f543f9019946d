//! Category display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::CategoryDefinition;

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Subcategories")]
    subcategories: String,
    #[tabled(rename = "Color")]
    color: String,
    #[tabled(rename = "Icon")]
    icon: String,
}

/// Format categories as a table
pub fn format_category_list(categories: &[CategoryDefinition]) -> String {
    if categories.is_empty() {
        return "No categories found.\n\nCreate one with 'gastos category add <name>'.".to_string();
    }

    let rows = categories.iter().map(|c| CategoryRow {
        name: c.name.clone(),
        subcategories: c.subcategories.join(", "),
        color: c.color.clone(),
        icon: c.display_icon().to_string(),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Format a single category with its subcategories as a tree
pub fn format_category_details(category: &CategoryDefinition, usage_count: usize) -> String {
    let mut output = String::new();

    output.push_str(&format!("Category: {}\n", category.name));
    output.push_str(&format!("  ID:       {}\n", category.id));
    output.push_str(&format!("  Color:    {}\n", category.color));
    output.push_str(&format!("  Icon:     {}\n", category.display_icon()));
    output.push_str(&format!("  Expenses: {}\n", usage_count));

    if category.subcategories.is_empty() {
        output.push_str("  (no subcategories)\n");
    } else {
        output.push_str("  Subcategories:\n");
        for (i, sub) in category.subcategories.iter().enumerate() {
            let prefix = if i == category.subcategories.len() - 1 {
                "└── "
            } else {
                "├── "
            };
            output.push_str(&format!("    {}{}\n", prefix, sub));
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::default_categories;

    #[test]
    fn test_list() {
        let output = format_category_list(&default_categories());
        assert!(output.contains("Mercado"));
        assert!(output.contains("Comida, Aseo Personal, Aseo Hogar, Varios"));
        assert!(output.contains("ShoppingCart"));

        assert!(format_category_list(&[]).starts_with("No categories found."));
    }

    #[test]
    fn test_details_tree() {
        let mercado = &default_categories()[1];
        let output = format_category_details(mercado, 3);
        assert!(output.contains("Expenses: 3"));
        assert!(output.contains("├── Comida"));
        assert!(output.contains("└── Varios"));

        let empty = CategoryDefinition::new("Hogar");
        assert!(format_category_details(&empty, 0).contains("(no subcategories)"));
    }
}
