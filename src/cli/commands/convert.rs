//! Convert Command
//!
//! Re-encode a generated Prettier config into another format.

use std::path::Path;

use crate::generator::{parse_config, serialize_config};
use crate::types::{KitError, OutputFormat, Result, ResultExt};

pub fn run(path: &Path, from: Option<OutputFormat>, to: OutputFormat) -> Result<()> {
    let from = match from {
        Some(format) => format,
        None => detect_format(path)?,
    };

    let text = std::fs::read_to_string(path)
        .with_context(format!("Reading {}", path.display()))?;
    print!("{}", convert(&text, from, to)?);
    Ok(())
}

fn detect_format(path: &Path) -> Result<OutputFormat> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    OutputFormat::from_file_name(name).ok_or_else(|| {
        KitError::Config(format!(
            "Cannot infer the format of {}. Pass --from json|yaml|js",
            path.display()
        ))
    })
}

pub fn convert(text: &str, from: OutputFormat, to: OutputFormat) -> Result<String> {
    let prefs = parse_config(text, from)?;
    prefs.validate()?;
    serialize_config(&prefs, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FrameworkCatalog;

    #[test]
    fn test_convert_json_to_js_and_back() {
        let prefs = &FrameworkCatalog::builtin().get("angular").unwrap().preferences;
        let json = serialize_config(prefs, OutputFormat::Json).unwrap();

        let js = convert(&json, OutputFormat::Json, OutputFormat::Js).unwrap();
        assert!(js.contains("module.exports = {"));

        let back = convert(&js, OutputFormat::Js, OutputFormat::Json).unwrap();
        assert_eq!(back, json);
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(Path::new("web/.prettierrc.yaml")).unwrap(),
            OutputFormat::Yaml
        );
        assert!(detect_format(Path::new("prettier.toml")).is_err());
    }

    #[test]
    fn test_convert_rejects_invalid_values() {
        let json = serialize_config(
            &crate::types::FormattingPreferences::default(),
            OutputFormat::Json,
        )
        .unwrap()
        .replace("\"tabWidth\": 2", "\"tabWidth\": 0");
        assert!(matches!(
            convert(&json, OutputFormat::Json, OutputFormat::Yaml),
            Err(KitError::InvalidPreference { .. })
        ));
    }
}
