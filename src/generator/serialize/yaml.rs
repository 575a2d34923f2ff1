//! YAML adapter (`.prettierrc.yaml`)

use crate::types::{FormattingPreferences, KitError, Result};

pub fn render(prefs: &FormattingPreferences) -> Result<String> {
    let mut out = serde_yaml::to_string(prefs)?;
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

pub fn parse(text: &str) -> Result<FormattingPreferences> {
    serde_yaml::from_str(text).map_err(|e| KitError::parse("yaml", e.to_string()))
}
