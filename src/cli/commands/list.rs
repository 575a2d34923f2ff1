//! List Command
//!
//! List supported frameworks.

use crate::catalog::FrameworkCatalog;
use crate::types::{Category, FrameworkProfile, Result};

pub fn run(category: Option<Category>, format: &str) -> Result<()> {
    let catalog = FrameworkCatalog::builtin();
    let profiles: Vec<&FrameworkProfile> = catalog
        .profiles()
        .iter()
        .filter(|p| category.is_none_or(|c| p.category == c))
        .collect();

    if format == "json" {
        let entries: Vec<_> = profiles
            .iter()
            .map(|p| {
                serde_json::json!({
                    "id": p.id,
                    "name": p.name,
                    "category": p.category,
                    "description": p.description,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    println!("Supported Frameworks");
    println!("══════════════════════════════════════");
    for p in &profiles {
        println!("  {:<16} {:<22} [{}]", p.id, p.name, p.category);
        println!("  {:<16} {}", "", p.description);
    }
    if profiles.is_empty() {
        println!("  (none)");
    }
    Ok(())
}
