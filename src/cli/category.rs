//! Category CLI commands
//!
//! Implements CLI commands for category and subcategory management.

use clap::Subcommand;

use super::confirm;
use crate::display::{format_category_details, format_category_list};
use crate::error::GastosResult;
use crate::models::AVAILABLE_ICONS;
use crate::services::{CategoryService, CategoryUpdate};
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// List all categories
    List,

    /// Show category details
    Show {
        /// Category name or ID
        category: String,
    },

    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Hex color (e.g., "#22c55e")
        #[arg(long)]
        color: Option<String>,
        /// Icon name (see 'gastos category icons')
        #[arg(long)]
        icon: Option<String>,
        /// Subcategory; repeat for several
        #[arg(long = "sub")]
        subcategories: Vec<String>,
    },

    /// Edit a category
    Edit {
        /// Category name or ID
        category: String,
        /// New name
        #[arg(short, long)]
        name: Option<String>,
        /// New hex color
        #[arg(long)]
        color: Option<String>,
        /// New icon name
        #[arg(long)]
        icon: Option<String>,
    },

    /// Add a subcategory
    #[command(name = "add-sub")]
    AddSub {
        /// Category name or ID
        category: String,
        /// Subcategory name
        name: String,
    },

    /// Remove a subcategory
    #[command(name = "remove-sub")]
    RemoveSub {
        /// Category name or ID
        category: String,
        /// Subcategory name
        name: String,
    },

    /// Delete a category
    Delete {
        /// Category name or ID
        category: String,
    },

    /// List the available icon names
    Icons,
}

/// Handle a category command
pub fn handle_category_command(
    storage: &Storage,
    cmd: CategoryCommands,
    assume_yes: bool,
) -> GastosResult<()> {
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            println!("{}", format_category_list(&service.list()));
        }

        CategoryCommands::Show { category } => {
            let category = service.get(&category)?;
            let usage = service.usage_count(&category.name);
            print!("{}", format_category_details(&category, usage));
        }

        CategoryCommands::Add {
            name,
            color,
            icon,
            subcategories,
        } => {
            let category =
                service.create(&name, color.as_deref(), icon.as_deref(), subcategories)?;
            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::Edit {
            category,
            name,
            color,
            icon,
        } => {
            let updated = service.update(&category, CategoryUpdate { name, color, icon })?;
            println!("Updated category: {}", updated.category.name);

            if let Some(old_name) = &updated.renamed_from {
                println!("  Renamed from: {}", old_name);
                if updated.orphaned_expenses > 0 {
                    println!(
                        "  Note: {} expense(s) still reference '{}' and will show as uncategorized.",
                        updated.orphaned_expenses, old_name
                    );
                }
            }
        }

        CategoryCommands::AddSub { category, name } => {
            let category = service.add_subcategory(&category, &name)?;
            println!("Added subcategory '{}' to {}", name.trim(), category.name);
        }

        CategoryCommands::RemoveSub { category, name } => {
            let category = service.remove_subcategory(&category, &name)?;
            println!("Removed subcategory '{}' from {}", name.trim(), category.name);
        }

        CategoryCommands::Delete { category } => {
            let target = service.get(&category)?;
            let usage = service.usage_count(&target.name);

            let question = if usage > 0 {
                format!(
                    "Delete category '{}'? {} expense(s) keep its name but lose their category.",
                    target.name, usage
                )
            } else {
                format!("Delete category '{}'?", target.name)
            };

            if !confirm(&question, assume_yes)? {
                println!("Delete cancelled.");
                return Ok(());
            }

            let deleted = service.delete_by_id(&target.id)?;
            println!("Deleted category: {}", deleted.name);
        }

        CategoryCommands::Icons => {
            for icon in AVAILABLE_ICONS {
                println!("{}", icon);
            }
        }
    }

    Ok(())
}
