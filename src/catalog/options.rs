//! Option reference
//!
//! Human-readable description of every formatting option, used by the
//! `options` command.

use crate::types::{
    ArrowParens, EndOfLine, FormattingPreferences, HtmlWhitespaceSensitivity, ProseWrap,
    TrailingComma,
};

/// Description of a single Prettier option
#[derive(Debug, Clone)]
pub struct OptionInfo {
    /// Serialized option name
    pub key: &'static str,
    pub description: &'static str,
    /// Allowed tokens for closed-set options, empty otherwise
    pub choices: Vec<&'static str>,
    /// Prettier's default, rendered as text
    pub default: String,
}

fn info(
    key: &'static str,
    description: &'static str,
    choices: Vec<&'static str>,
    default: String,
) -> OptionInfo {
    OptionInfo {
        key,
        description,
        choices,
        default,
    }
}

/// Reference entries in config file order
pub fn option_reference() -> Vec<OptionInfo> {
    let d = FormattingPreferences::default();
    vec![
        info(
            "semi",
            "Print semicolons at the ends of statements",
            vec![],
            d.semi.to_string(),
        ),
        info(
            "singleQuote",
            "Use single quotes instead of double quotes",
            vec![],
            d.single_quote.to_string(),
        ),
        info(
            "tabWidth",
            "Number of spaces per indentation level",
            vec![],
            d.tab_width.to_string(),
        ),
        info(
            "trailingComma",
            "Print trailing commas wherever possible in multi-line literals",
            TrailingComma::ALL.iter().map(|v| v.as_str()).collect(),
            d.trailing_comma.to_string(),
        ),
        info(
            "printWidth",
            "Line length the printer will wrap on",
            vec![],
            d.print_width.to_string(),
        ),
        info(
            "useTabs",
            "Indent lines with tabs instead of spaces",
            vec![],
            d.use_tabs.to_string(),
        ),
        info(
            "bracketSpacing",
            "Print spaces between brackets in object literals",
            vec![],
            d.bracket_spacing.to_string(),
        ),
        info(
            "bracketSameLine",
            "Put the > of a multi-line element at the end of the last line",
            vec![],
            d.bracket_same_line.to_string(),
        ),
        info(
            "arrowParens",
            "Include parentheses around a sole arrow function parameter",
            ArrowParens::ALL.iter().map(|v| v.as_str()).collect(),
            d.arrow_parens.to_string(),
        ),
        info(
            "endOfLine",
            "Line ending style",
            EndOfLine::ALL.iter().map(|v| v.as_str()).collect(),
            d.end_of_line.to_string(),
        ),
        info(
            "proseWrap",
            "How to wrap prose in Markdown",
            ProseWrap::ALL.iter().map(|v| v.as_str()).collect(),
            d.prose_wrap.to_string(),
        ),
        info(
            "htmlWhitespaceSensitivity",
            "Global whitespace sensitivity for HTML, Vue, Angular and Handlebars",
            HtmlWhitespaceSensitivity::ALL
                .iter()
                .map(|v| v.as_str())
                .collect(),
            d.html_whitespace_sensitivity.to_string(),
        ),
        info("plugins", "Prettier plugins to load", vec![], "[]".to_string()),
        info(
            "overrides",
            "Per-file option patches keyed by file glob",
            vec![],
            "[]".to_string(),
        ),
    ]
}
