//! Config serializers
//!
//! Renders `FormattingPreferences` into one of the supported encodings and
//! reads generated documents back. All encodings use Prettier's camelCase
//! option names; empty `plugins` and `overrides` lists are omitted.

mod js;
mod json;
mod yaml;

use crate::types::{FormattingPreferences, OutputFormat, Result};

/// Render preferences as a config document in `format`.
pub fn serialize_config(prefs: &FormattingPreferences, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::render(prefs),
        OutputFormat::Yaml => yaml::render(prefs),
        OutputFormat::Js => js::render(prefs),
    }
}

/// Read a config document produced by [`serialize_config`].
pub fn parse_config(text: &str, format: OutputFormat) -> Result<FormattingPreferences> {
    match format {
        OutputFormat::Json => json::parse(text),
        OutputFormat::Yaml => yaml::parse(text),
        OutputFormat::Js => js::parse(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::FrameworkCatalog;
    use crate::types::{
        ArrowParens, EndOfLine, FileMatch, Override, PartialPreferences, ProseWrap, TrailingComma,
    };

    fn rich() -> FormattingPreferences {
        FormattingPreferences {
            semi: false,
            single_quote: true,
            tab_width: 4,
            trailing_comma: TrailingComma::Es5,
            print_width: 120,
            use_tabs: true,
            arrow_parens: ArrowParens::Avoid,
            end_of_line: EndOfLine::Crlf,
            ..Default::default()
        }
        .with_plugins(&["prettier-plugin-tailwindcss", "@trivago/prettier-plugin-sort-imports"])
        .with_override(Override::new(
            "*.md",
            PartialPreferences {
                prose_wrap: Some(ProseWrap::Always),
                ..Default::default()
            },
        ))
        .with_override(Override {
            files: FileMatch::Many(vec!["*.yml".into(), "*.yaml".into()]),
            options: PartialPreferences {
                single_quote: Some(false),
                tab_width: Some(2),
                ..Default::default()
            },
        })
    }

    #[test]
    fn test_round_trip_every_format() {
        let prefs = rich();
        for format in OutputFormat::ALL {
            let text = serialize_config(&prefs, format).unwrap();
            let parsed = parse_config(&text, format).unwrap();
            assert_eq!(parsed, prefs, "round trip failed for {}", format);
        }
    }

    #[test]
    fn test_round_trip_catalog_defaults() {
        for profile in FrameworkCatalog::builtin().profiles() {
            for format in OutputFormat::ALL {
                let text = serialize_config(&profile.preferences, format).unwrap();
                let parsed = parse_config(&text, format).unwrap();
                assert_eq!(parsed, profile.preferences, "{} / {}", profile.id, format);
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let prefs = rich();
        for format in OutputFormat::ALL {
            assert_eq!(
                serialize_config(&prefs, format).unwrap(),
                serialize_config(&prefs, format).unwrap()
            );
        }
    }

    #[test]
    fn test_empty_lists_omitted() {
        let prefs = FormattingPreferences::default();
        for format in OutputFormat::ALL {
            let text = serialize_config(&prefs, format).unwrap();
            assert!(!text.contains("plugins"), "{}: {}", format, text);
            assert!(!text.contains("overrides"), "{}: {}", format, text);
        }
    }

    #[test]
    fn test_camel_case_keys() {
        for format in OutputFormat::ALL {
            let text = serialize_config(&FormattingPreferences::default(), format).unwrap();
            assert!(text.contains("singleQuote"), "{}", format);
            assert!(text.contains("htmlWhitespaceSensitivity"), "{}", format);
            assert!(!text.contains("single_quote"), "{}", format);
        }
    }

    #[test]
    fn test_documents_end_with_newline() {
        for format in OutputFormat::ALL {
            let text = serialize_config(&rich(), format).unwrap();
            assert!(text.ends_with('\n'));
            assert!(!text.ends_with("\n\n"));
        }
    }
}
