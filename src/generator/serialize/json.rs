//! JSON adapter (`.prettierrc`)

use crate::types::{FormattingPreferences, KitError, Result};

pub fn render(prefs: &FormattingPreferences) -> Result<String> {
    let mut out = serde_json::to_string_pretty(prefs)?;
    out.push('\n');
    Ok(out)
}

pub fn parse(text: &str) -> Result<FormattingPreferences> {
    serde_json::from_str(text).map_err(|e| KitError::parse("json", e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_default() {
        let text = render(&FormattingPreferences::default()).unwrap();
        assert!(text.starts_with("{\n  \"semi\": true,\n  \"singleQuote\": false,\n  \"tabWidth\": 2,"));
        assert!(text.contains("\"trailingComma\": \"all\""));
        assert!(text.ends_with("\"htmlWhitespaceSensitivity\": \"css\"\n}\n"));
    }

    #[test]
    fn test_parse_rejects_unknown_key() {
        let mut value = serde_json::to_value(FormattingPreferences::default()).unwrap();
        value["semicolons"] = serde_json::Value::Bool(true);
        let err = parse(&value.to_string()).unwrap_err();
        assert!(matches!(err, KitError::Parse { ref format, .. } if format == "json"));
    }

    #[test]
    fn test_parse_rejects_missing_field() {
        assert!(parse(r#"{"semi": true}"#).is_err());
    }
}
