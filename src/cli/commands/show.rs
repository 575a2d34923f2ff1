//! Show Command
//!
//! Display one framework profile's defaults.

use crate::catalog::FrameworkCatalog;
use crate::cli::ui::Output;
use crate::generator::{render_ignore_list, serialize_config, synthesize_install_command};
use crate::types::{OutputFormat, PackageManager, Result};

pub fn run(id: &str, format: &str) -> Result<()> {
    let profile = FrameworkCatalog::builtin().get(id)?;

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(profile)?);
        return Ok(());
    }

    let output = Output::new();
    output.header(&format!("{} ({})", profile.name, profile.id));
    println!("{}", profile.description);
    println!("Category: {}", profile.category);

    output.section("Default preferences");
    print!(
        "{}",
        serialize_config(&profile.preferences, OutputFormat::Yaml)?
    );

    output.section("Install (npm)");
    println!(
        "{}",
        synthesize_install_command(&profile.install, PackageManager::Npm)
    );

    output.section("Format script");
    println!("{}", profile.format_script);

    output.section(".prettierignore");
    println!("{}", render_ignore_list(&profile.prettier_ignore));

    Ok(())
}
