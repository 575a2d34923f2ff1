//! CLI Common Utilities
//!
//! Shared resolution of command-line selections against the loaded config.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::config::{Config, ConfigLoader};
use crate::types::{
    KitError, OutputFormat, PackageManager, PartialPreferences, Result, ResultExt,
};

/// Command execution context
///
/// Command-line selections resolved against the layered config. Command
/// line values win over config values.
#[derive(Debug, Clone)]
pub struct CommandContext {
    pub config: Config,
    pub framework: Option<String>,
    pub format: OutputFormat,
    pub manager: PackageManager,
}

impl CommandContext {
    /// Load config and apply command-line selections
    pub fn load(
        framework: Option<String>,
        format: Option<OutputFormat>,
        manager: Option<PackageManager>,
    ) -> Result<Self> {
        let config = ConfigLoader::load()?;
        Ok(Self::from_config(config, framework, format, manager))
    }

    pub fn from_config(
        config: Config,
        framework: Option<String>,
        format: Option<OutputFormat>,
        manager: Option<PackageManager>,
    ) -> Self {
        Self {
            framework: framework.or_else(|| config.defaults.framework.clone()),
            format: format.unwrap_or(config.defaults.format),
            manager: manager.unwrap_or(config.defaults.manager),
            config,
        }
    }

    /// Framework id, or an error telling the user how to pick one
    pub fn require_framework(&self) -> Result<&str> {
        self.framework.as_deref().ok_or_else(|| {
            KitError::Config(
                "No framework selected. Pass --framework or set defaults.framework".to_string(),
            )
        })
    }

    /// Build the preference patch: config table, then patch file, then `--set` pairs.
    pub fn preference_patch(
        &self,
        patch_file: Option<&Path>,
        sets: &[(String, Value)],
    ) -> Result<PartialPreferences> {
        let mut layered = self.config.preferences.clone();

        if let Some(path) = patch_file {
            for (key, value) in read_patch_file(path)? {
                layered.insert(key, value);
            }
        }

        for (key, value) in sets {
            layered.insert(key.clone(), value.clone());
        }

        PartialPreferences::from_value(Value::Object(layered))
    }
}

/// Parse a `key=value` pair for `--set`.
///
/// The value is read as JSON when possible (`false`, `4`, `["a"]`) and as a
/// plain string otherwise (`es5`).
pub fn parse_key_value(s: &str) -> std::result::Result<(String, Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("Invalid setting '{}'. Expected key=value", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("Invalid setting '{}'. Key must not be empty", s));
    }
    let raw = raw.trim();
    let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}

/// Read a JSON or YAML patch file into a loose map
pub fn read_patch_file(path: &Path) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(path)
        .with_context(format!("Reading patch file {}", path.display()))?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"));

    let value: Value = if is_yaml {
        serde_yaml::from_str(&content)?
    } else {
        serde_json::from_str(&content)?
    };

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(KitError::invalid_preference(
            "preferences",
            format!("{} must contain a map of option names", path.display()),
        )),
    }
}

/// Write `content` to `path`, refusing to replace an existing file unless `force`
pub fn write_artifact(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(KitError::Config(format!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        )));
    }
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("semi=false").unwrap(),
            ("semi".to_string(), json!(false))
        );
        assert_eq!(
            parse_key_value("tabWidth = 4").unwrap(),
            ("tabWidth".to_string(), json!(4))
        );
        assert_eq!(
            parse_key_value("trailingComma=es5").unwrap(),
            ("trailingComma".to_string(), json!("es5"))
        );
        assert_eq!(
            parse_key_value(r#"plugins=["prettier-plugin-astro"]"#).unwrap().1,
            json!(["prettier-plugin-astro"])
        );
        assert!(parse_key_value("semi").is_err());
        assert!(parse_key_value("=true").is_err());
    }

    #[test]
    fn test_selection_precedence() {
        let mut config = Config::default();
        config.defaults.framework = Some("vue".to_string());
        config.defaults.format = OutputFormat::Yaml;

        let ctx = CommandContext::from_config(config.clone(), None, None, None);
        assert_eq!(ctx.framework.as_deref(), Some("vue"));
        assert_eq!(ctx.format, OutputFormat::Yaml);
        assert_eq!(ctx.manager, PackageManager::Npm);

        let ctx = CommandContext::from_config(
            config,
            Some("react".to_string()),
            Some(OutputFormat::Js),
            Some(PackageManager::Bun),
        );
        assert_eq!(ctx.require_framework().unwrap(), "react");
        assert_eq!(ctx.format, OutputFormat::Js);
        assert_eq!(ctx.manager, PackageManager::Bun);
    }

    #[test]
    fn test_require_framework_without_selection() {
        let ctx = CommandContext::from_config(Config::default(), None, None, None);
        assert!(matches!(ctx.require_framework(), Err(KitError::Config(_))));
    }

    #[test]
    fn test_patch_layering() {
        let temp_dir = TempDir::new().unwrap();
        let patch_path = temp_dir.path().join("patch.yaml");
        fs::write(&patch_path, "semi: false\ntabWidth: 4\n").unwrap();

        let mut config = Config::default();
        config.preferences.insert("semi".into(), json!(true));
        config.preferences.insert("printWidth".into(), json!(100));
        let ctx = CommandContext::from_config(config, None, None, None);

        let sets = vec![("tabWidth".to_string(), json!(8))];
        let patch = ctx.preference_patch(Some(&patch_path), &sets).unwrap();
        assert_eq!(patch.semi, Some(false));
        assert_eq!(patch.print_width, Some(100));
        assert_eq!(patch.tab_width, Some(8));
    }

    #[test]
    fn test_patch_rejects_unknown_set() {
        let ctx = CommandContext::from_config(Config::default(), None, None, None);
        let sets = vec![("semicolons".to_string(), json!(false))];
        assert!(matches!(
            ctx.preference_patch(None, &sets),
            Err(KitError::InvalidPreference { .. })
        ));
    }

    #[test]
    fn test_write_artifact_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".prettierrc");
        write_artifact(&path, "{}\n", false).unwrap();
        assert!(write_artifact(&path, "{}\n", false).is_err());
        write_artifact(&path, "[]\n", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "[]\n");
    }
}
