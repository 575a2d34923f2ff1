//! Formatting preference types
//!
//! `FormattingPreferences` is the complete option set written into a
//! Prettier config file. `PartialPreferences` is the sparse patch a caller
//! layers on top of a framework's defaults.
//!
//! Serialized field names follow Prettier's own camelCase option names in
//! every encoding.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{KitError, Result};

// =============================================================================
// Closed-set options
// =============================================================================

/// Trailing commas in multi-line literals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TrailingComma {
    None,
    Es5,
    #[default]
    All,
}

impl TrailingComma {
    pub const ALL: [Self; 3] = [Self::None, Self::Es5, Self::All];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Es5 => "es5",
            Self::All => "all",
        }
    }
}

/// Parentheses around a sole arrow function parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ArrowParens {
    #[default]
    Always,
    Avoid,
}

impl ArrowParens {
    pub const ALL: [Self; 2] = [Self::Always, Self::Avoid];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Avoid => "avoid",
        }
    }
}

/// Line ending policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    #[default]
    Lf,
    Crlf,
    Cr,
    Auto,
}

impl EndOfLine {
    pub const ALL: [Self; 4] = [Self::Lf, Self::Crlf, Self::Cr, Self::Auto];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "lf",
            Self::Crlf => "crlf",
            Self::Cr => "cr",
            Self::Auto => "auto",
        }
    }
}

/// Markdown prose wrapping
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProseWrap {
    Always,
    Never,
    #[default]
    Preserve,
}

impl ProseWrap {
    pub const ALL: [Self; 3] = [Self::Always, Self::Never, Self::Preserve];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Never => "never",
            Self::Preserve => "preserve",
        }
    }
}

/// Whitespace handling in HTML-like templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HtmlWhitespaceSensitivity {
    #[default]
    Css,
    Strict,
    Ignore,
}

impl HtmlWhitespaceSensitivity {
    pub const ALL: [Self; 3] = [Self::Css, Self::Strict, Self::Ignore];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Css => "css",
            Self::Strict => "strict",
            Self::Ignore => "ignore",
        }
    }
}

macro_rules! impl_display_as_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl std::fmt::Display for $ty {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

impl_display_as_str!(
    TrailingComma,
    ArrowParens,
    EndOfLine,
    ProseWrap,
    HtmlWhitespaceSensitivity
);

// =============================================================================
// Per-file overrides
// =============================================================================

/// File selector of an override: a single glob or a list of globs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileMatch {
    One(String),
    Many(Vec<String>),
}

impl FileMatch {
    pub fn patterns(&self) -> Vec<&str> {
        match self {
            Self::One(glob) => vec![glob.as_str()],
            Self::Many(globs) => globs.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for FileMatch {
    fn from(glob: &str) -> Self {
        Self::One(glob.to_string())
    }
}

impl From<&[&str]> for FileMatch {
    fn from(globs: &[&str]) -> Self {
        Self::Many(globs.iter().map(|g| g.to_string()).collect())
    }
}

/// Options applied only to files matching `files`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Override {
    pub files: FileMatch,
    pub options: PartialPreferences,
}

impl Override {
    pub fn new(files: impl Into<FileMatch>, options: PartialPreferences) -> Self {
        Self {
            files: files.into(),
            options,
        }
    }

    fn validate(&self, prefix: &str, index: usize) -> Result<()> {
        let field = format!("{}overrides[{}].files", prefix, index);
        let patterns = self.files.patterns();
        if patterns.is_empty() {
            return Err(KitError::invalid_preference(
                field,
                "must name at least one file glob",
            ));
        }
        for pattern in patterns {
            glob::Pattern::new(pattern).map_err(|e| {
                KitError::invalid_preference(&field, format!("invalid glob '{}': {}", pattern, e))
            })?;
        }
        self.options
            .validate(&format!("{}overrides[{}].options.", prefix, index))
    }
}

// =============================================================================
// Complete preferences
// =============================================================================

/// The complete, effective option set for one generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FormattingPreferences {
    pub semi: bool,
    pub single_quote: bool,
    pub tab_width: u32,
    pub trailing_comma: TrailingComma,
    pub print_width: u32,
    pub use_tabs: bool,
    pub bracket_spacing: bool,
    pub bracket_same_line: bool,
    pub arrow_parens: ArrowParens,
    pub end_of_line: EndOfLine,
    pub prose_wrap: ProseWrap,
    pub html_whitespace_sensitivity: HtmlWhitespaceSensitivity,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub overrides: Vec<Override>,
}

/// Prettier's own defaults
impl Default for FormattingPreferences {
    fn default() -> Self {
        Self {
            semi: true,
            single_quote: false,
            tab_width: 2,
            trailing_comma: TrailingComma::All,
            print_width: 80,
            use_tabs: false,
            bracket_spacing: true,
            bracket_same_line: false,
            arrow_parens: ArrowParens::Always,
            end_of_line: EndOfLine::Lf,
            prose_wrap: ProseWrap::Preserve,
            html_whitespace_sensitivity: HtmlWhitespaceSensitivity::Css,
            plugins: Vec::new(),
            overrides: Vec::new(),
        }
    }
}

impl FormattingPreferences {
    /// Check value ranges, override globs and plugin names.
    pub fn validate(&self) -> Result<()> {
        validate_width("tabWidth", self.tab_width)?;
        validate_width("printWidth", self.print_width)?;
        validate_plugins("plugins", &self.plugins)?;
        for (index, item) in self.overrides.iter().enumerate() {
            item.validate("", index)?;
        }
        Ok(())
    }

    pub fn with_plugins(mut self, plugins: &[&str]) -> Self {
        self.plugins = plugins.iter().map(|p| p.to_string()).collect();
        self
    }

    pub fn with_override(mut self, item: Override) -> Self {
        self.overrides.push(item);
        self
    }
}

// =============================================================================
// Partial preferences
// =============================================================================

/// A sparse preference patch; absent fields keep the base value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartialPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semi: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_quote: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trailing_comma: Option<TrailingComma>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_tabs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bracket_spacing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bracket_same_line: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow_parens: Option<ArrowParens>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_of_line: Option<EndOfLine>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prose_wrap: Option<ProseWrap>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_whitespace_sensitivity: Option<HtmlWhitespaceSensitivity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<Vec<Override>>,
}

impl PartialPreferences {
    /// Every key a patch may carry, in serialized form
    pub const FIELDS: [&'static str; 14] = [
        "semi",
        "singleQuote",
        "tabWidth",
        "trailingComma",
        "printWidth",
        "useTabs",
        "bracketSpacing",
        "bracketSameLine",
        "arrowParens",
        "endOfLine",
        "proseWrap",
        "htmlWhitespaceSensitivity",
        "plugins",
        "overrides",
    ];

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Build a patch from a loosely-typed map, rejecting unknown keys.
    ///
    /// Each key is checked on its own first so the error names the offending
    /// field instead of the whole patch.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(KitError::invalid_preference(
                "preferences",
                "expected a map of option names to values",
            ));
        };

        for (key, field_value) in &map {
            if !Self::FIELDS.contains(&key.as_str()) {
                return Err(KitError::invalid_preference(
                    key,
                    format!("unknown field, expected one of: {}", Self::FIELDS.join(", ")),
                ));
            }
            reject_null(key, field_value)?;
            if key == "overrides" {
                reject_override_nulls(field_value)?;
            }
            let mut single = Map::new();
            single.insert(key.clone(), field_value.clone());
            serde_json::from_value::<Self>(Value::Object(single))
                .map_err(|e| KitError::invalid_preference(key, e.to_string()))?;
        }

        serde_json::from_value(Value::Object(map))
            .map_err(|e| KitError::invalid_preference("preferences", e.to_string()))
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let value: Value = serde_yaml::from_str(text)?;
        Self::from_value(value)
    }

    /// Check the values that are present; `prefix` locates nested patches.
    pub fn validate(&self, prefix: &str) -> Result<()> {
        if let Some(width) = self.tab_width {
            validate_width(&format!("{}tabWidth", prefix), width)?;
        }
        if let Some(width) = self.print_width {
            validate_width(&format!("{}printWidth", prefix), width)?;
        }
        if let Some(plugins) = &self.plugins {
            validate_plugins(&format!("{}plugins", prefix), plugins)?;
        }
        if let Some(overrides) = &self.overrides {
            for (index, item) in overrides.iter().enumerate() {
                item.validate(prefix, index)?;
            }
        }
        Ok(())
    }
}

/// `null` is not "unset": a key that is present must carry a value.
fn reject_null(field: &str, value: &Value) -> Result<()> {
    if value.is_null() {
        return Err(KitError::invalid_preference(field, "must not be null"));
    }
    Ok(())
}

fn reject_override_nulls(overrides: &Value) -> Result<()> {
    let Some(items) = overrides.as_array() else {
        return Ok(());
    };
    for (index, item) in items.iter().enumerate() {
        let Some(options) = item.get("options").and_then(Value::as_object) else {
            continue;
        };
        for (key, value) in options {
            reject_null(&format!("overrides[{}].options.{}", index, key), value)?;
        }
    }
    Ok(())
}

fn validate_width(field: &str, width: u32) -> Result<()> {
    if width == 0 {
        return Err(KitError::invalid_preference(field, "must be greater than 0"));
    }
    Ok(())
}

fn validate_plugins(field: &str, plugins: &[String]) -> Result<()> {
    if plugins.iter().any(|p| p.trim().is_empty()) {
        return Err(KitError::invalid_preference(
            field,
            "plugin names must not be empty",
        ));
    }
    Ok(())
}
