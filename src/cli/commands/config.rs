//! Config Command
//!
//! Manage PrettierKit configuration.
//!
//! Usage:
//!   prettierkit config show [-f json]
//!   prettierkit config path
//!   prettierkit config init [-g] [--framework ID] [--force]

use crate::config::ConfigLoader;
use crate::types::Result;

/// Show the merged effective configuration
pub fn show(format: &str) -> Result<()> {
    ConfigLoader::show_config(format == "json")
}

/// Show configuration paths
pub fn path() -> Result<()> {
    ConfigLoader::show_path();
    Ok(())
}

/// Initialize global configuration
pub fn init_global(framework: Option<&str>, force: bool) -> Result<()> {
    let config_path = ConfigLoader::init_global(framework, force)?;
    println!("✓ Initialized global configuration");
    println!("  Config: {}", config_path.display());
    Ok(())
}

/// Initialize project configuration in the current directory
pub fn init_project(framework: Option<&str>, force: bool) -> Result<()> {
    let root = std::env::current_dir()?;
    let config_path = ConfigLoader::init_project(&root, framework, force)?;
    println!("✓ Initialized project configuration");
    println!("  Config: {}", config_path.display());
    Ok(())
}
