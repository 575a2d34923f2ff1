//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/prettierkit/config.toml)
//! 3. Project config (./.prettierkit.toml)
//! 4. Environment variables (PRETTIERKIT_* prefix)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::Config;
use crate::constants::config::{APP_DIR, ENV_PREFIX, GLOBAL_FILE, PROJECT_FILE};
use crate::catalog::FrameworkCatalog;
use crate::types::{KitError, PartialPreferences, Result};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain using Figment:
    /// defaults → global → project → env vars
    pub fn load() -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Merge global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        // Merge project config
        let project_path = Self::project_config_path();
        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(&project_path));
        }

        // Merge environment variables (e.g., PRETTIERKIT_PREFERENCES_PRINT_WIDTH -> preferences.printWidth)
        figment = figment.merge(
            Env::prefixed(ENV_PREFIX)
                .map(|key| env_key_path(key.as_str()).into())
                .lowercase(false),
        );

        Self::extract(figment)
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path));
        Self::extract(figment)
    }

    fn extract(figment: Figment) -> Result<Config> {
        let config: Config = figment
            .extract()
            .map_err(|e| KitError::Config(format!("Configuration error: {}", e)))?;

        // Validate configuration after loading
        config.validate()?;

        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/prettierkit/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join(APP_DIR))
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join(GLOBAL_FILE))
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(PROJECT_FILE)
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Show config file paths
    pub fn show_path() {
        println!("Configuration paths:");
        println!();

        if let Some(global) = Self::global_config_path() {
            let exists = if global.exists() { "✓" } else { "✗" };
            println!("  Global:  {} {}", exists, global.display());
        } else {
            println!("  Global:  (not available)");
        }

        let project = Self::project_config_path();
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("  Project: {} {}", exists, project.display());
    }

    /// Show current effective configuration
    pub fn show_config(as_json: bool) -> Result<()> {
        let config = Self::load()?;

        if as_json {
            println!("{}", serde_json::to_string_pretty(&config)?);
        } else {
            println!(
                "{}",
                toml::to_string_pretty(&config).map_err(|e| KitError::Config(e.to_string()))?
            );
        }

        Ok(())
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize global configuration
    pub fn init_global(framework: Option<&str>, force: bool) -> Result<PathBuf> {
        check_framework(framework)?;
        let global_dir = Self::global_dir().ok_or_else(|| {
            KitError::Config("Cannot determine global config directory".to_string())
        })?;

        fs::create_dir_all(&global_dir)?;

        let config_path = global_dir.join(GLOBAL_FILE);
        Self::write_config(&config_path, &Self::default_global_config(framework), force)?;
        Ok(config_path)
    }

    /// Initialize a project config file inside `dir`
    pub fn init_project(dir: &Path, framework: Option<&str>, force: bool) -> Result<PathBuf> {
        check_framework(framework)?;
        let config_path = dir.join(PROJECT_FILE);
        Self::write_config(&config_path, &Self::default_project_config(framework), force)?;
        Ok(config_path)
    }

    fn write_config(path: &Path, content: &str, force: bool) -> Result<()> {
        if path.exists() && !force {
            info!("Config exists: {}", path.display());
            return Ok(());
        }
        fs::write(path, content)?;
        info!("Created config: {}", path.display());
        Ok(())
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Generate default global config content (TOML)
    fn default_global_config(framework: Option<&str>) -> String {
        format!(
            r#"# PrettierKit Global Configuration
# User-wide defaults. Project settings in .prettierkit.toml override these.

version = "1.0"

[defaults]
{}
format = "json"
manager = "npm"
"#,
            framework_line(framework)
        )
    }

    /// Generate default project config content (TOML)
    fn default_project_config(framework: Option<&str>) -> String {
        format!(
            r#"# PrettierKit Project Configuration
# Project-specific settings that override global defaults.

version = "1.0"

[defaults]
{}
format = "json"
manager = "npm"

# Prettier options layered over the framework defaults (camelCase names)
[preferences]
# semi = false
# printWidth = 100
"#,
            framework_line(framework)
        )
    }
}

// =============================================================================
// Helpers
// =============================================================================

/// Map a prefix-stripped env var name onto a config key path.
///
/// The first segment names the table. Preference names are matched against
/// Prettier's camelCase option names, so `PREFERENCES_PRINT_WIDTH` and
/// `PREFERENCES_PRINTWIDTH` both reach `preferences.printWidth`.
fn env_key_path(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    match key.split_once('_') {
        Some(("preferences", name)) => {
            let compact = name.replace('_', "");
            let field = PartialPreferences::FIELDS
                .iter()
                .find(|field| field.eq_ignore_ascii_case(&compact))
                .map_or(compact, |field| field.to_string());
            format!("preferences.{}", field)
        }
        Some((table, name)) => format!("{}.{}", table, name),
        None => key,
    }
}

/// Reject framework ids the catalog does not know before writing them
fn check_framework(framework: Option<&str>) -> Result<()> {
    if let Some(id) = framework {
        let catalog = FrameworkCatalog::builtin();
        catalog.get(id).map_err(|_| {
            KitError::Config(format!(
                "Unknown framework '{}'. Known frameworks: {}",
                id,
                catalog.ids().join(", ")
            ))
        })?;
    }
    Ok(())
}

fn framework_line(framework: Option<&str>) -> String {
    match framework {
        Some(id) => format!("framework = \"{}\"", id.to_lowercase()),
        None => "# framework = \"react\"".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{OutputFormat, PackageManager};
    use tempfile::TempDir;

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[defaults]
framework = "nestjs"
format = "yaml"
manager = "pnpm"

[preferences]
semi = false
overrides = [{ files = "*.md", options = { proseWrap = "always" } }]
"#,
        )
        .unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.defaults.framework.as_deref(), Some("nestjs"));
        assert_eq!(config.defaults.format, OutputFormat::Yaml);
        assert_eq!(config.defaults.manager, PackageManager::Pnpm);

        let patch = config.preference_patch().unwrap();
        assert_eq!(patch.semi, Some(false));
        assert_eq!(patch.overrides.unwrap()[0].files.patterns(), vec!["*.md"]);
    }

    #[test]
    fn test_load_rejects_unknown_preference() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[preferences]\nsemicolons = false\n").unwrap();

        let err = ConfigLoader::load_from_file(&path).unwrap_err();
        assert!(matches!(err, KitError::InvalidPreference { .. }));
    }

    #[test]
    fn test_load_rejects_unknown_manager() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[defaults]\nmanager = \"deno\"\n").unwrap();

        assert!(matches!(
            ConfigLoader::load_from_file(&path),
            Err(KitError::Config(_))
        ));
    }

    #[test]
    fn test_init_project_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let path = ConfigLoader::init_project(temp_dir.path(), Some("vue"), false).unwrap();
        assert!(path.exists());

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.defaults.framework.as_deref(), Some("vue"));
        assert!(config.preferences.is_empty());
    }

    #[test]
    fn test_init_project_rejects_unknown_framework() {
        let temp_dir = TempDir::new().unwrap();
        let err = ConfigLoader::init_project(temp_dir.path(), Some("ember"), false).unwrap_err();
        assert!(matches!(err, KitError::Config(ref msg) if msg.contains("ember") && msg.contains("react")));
        assert!(!temp_dir.path().join(PROJECT_FILE).exists());
    }

    #[test]
    fn test_default_global_config_carries_framework() {
        let path_dir = TempDir::new().unwrap();
        let path = path_dir.path().join(GLOBAL_FILE);
        fs::write(&path, ConfigLoader::default_global_config(Some("Astro"))).unwrap();

        let config = ConfigLoader::load_from_file(&path).unwrap();
        assert_eq!(config.defaults.framework.as_deref(), Some("astro"));
    }

    #[test]
    fn test_env_key_path() {
        assert_eq!(env_key_path("DEFAULTS_MANAGER"), "defaults.manager");
        assert_eq!(env_key_path("PREFERENCES_PRINT_WIDTH"), "preferences.printWidth");
        assert_eq!(env_key_path("PREFERENCES_PRINTWIDTH"), "preferences.printWidth");
        assert_eq!(env_key_path("PREFERENCES_SEMI"), "preferences.semi");
        assert_eq!(env_key_path("PREFERENCES_SEMICOLONS"), "preferences.semicolons");
        assert_eq!(env_key_path("VERSION"), "version");
    }

    #[test]
    fn test_init_project_keeps_existing_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(PROJECT_FILE);
        fs::write(&path, "version = \"custom\"\n").unwrap();

        ConfigLoader::init_project(temp_dir.path(), None, false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "version = \"custom\"\n");

        ConfigLoader::init_project(temp_dir.path(), None, true).unwrap();
        assert!(fs::read_to_string(&path).unwrap().contains("[defaults]"));
    }
}
