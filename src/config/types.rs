//! Configuration Types
//!
//! User defaults for the CLI. Supports global and project level files.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::catalog::FrameworkCatalog;
use crate::types::{KitError, OutputFormat, PackageManager, PartialPreferences, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Selections used when the command line leaves them out
    pub defaults: DefaultsConfig,

    /// Preference patch applied on top of the framework defaults.
    ///
    /// Kept loosely typed so unknown option names are reported as invalid
    /// preferences rather than as a config parse failure.
    #[serde(skip_serializing_if = "Map::is_empty")]
    pub preferences: Map<String, Value>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            defaults: DefaultsConfig::default(),
            preferences: Map::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    /// Returns `KitError::Config` or `KitError::InvalidPreference` on failure.
    pub fn validate(&self) -> Result<()> {
        if let Some(framework) = &self.defaults.framework {
            FrameworkCatalog::builtin().get(framework).map_err(|_| {
                KitError::Config(format!(
                    "defaults.framework '{}' is not a known framework",
                    framework
                ))
            })?;
        }

        self.preference_patch()?.validate("")?;

        Ok(())
    }

    /// The `[preferences]` table as a typed patch
    pub fn preference_patch(&self) -> Result<PartialPreferences> {
        PartialPreferences::from_value(Value::Object(self.preferences.clone()))
    }
}

// =============================================================================
// Defaults
// =============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Framework id used when none is given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,

    /// Config encoding
    pub format: OutputFormat,

    /// Package manager for install commands
    pub manager: PackageManager,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.defaults.format, OutputFormat::Json);
        assert_eq!(config.defaults.manager, PackageManager::Npm);
        assert!(config.preference_patch().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_default_framework() {
        let mut config = Config::default();
        config.defaults.framework = Some("ember".to_string());
        assert!(matches!(config.validate(), Err(KitError::Config(_))));
    }

    #[test]
    fn test_unknown_preference_key() {
        let mut config = Config::default();
        config.preferences.insert("semicolon".into(), json!(false));
        assert!(matches!(
            config.validate(),
            Err(KitError::InvalidPreference { ref field, .. }) if field == "semicolon"
        ));
    }

    #[test]
    fn test_preference_patch() {
        let mut config = Config::default();
        config.preferences.insert("printWidth".into(), json!(100));
        let patch = config.preference_patch().unwrap();
        assert_eq!(patch.print_width, Some(100));
    }
}
