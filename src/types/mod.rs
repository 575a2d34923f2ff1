pub mod error;
pub mod framework;
pub mod preferences;

pub use error::{ErrorCategory, KitError, Result, ResultExt};
pub use framework::{Category, FrameworkProfile, InstallProfile};
pub use preferences::{
    ArrowParens, EndOfLine, FileMatch, FormattingPreferences, HtmlWhitespaceSensitivity,
    Override, PartialPreferences, ProseWrap, TrailingComma,
};

// =============================================================================
// Generation selectors
// =============================================================================

use serde::{Deserialize, Serialize};
use std::fmt;

/// Encoding of the generated Prettier config document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
    Js,
}

impl OutputFormat {
    pub const ALL: [Self; 3] = [Self::Json, Self::Yaml, Self::Js];

    /// File name Prettier discovers for this encoding
    pub fn file_name(&self) -> &'static str {
        match self {
            OutputFormat::Json => ".prettierrc",
            OutputFormat::Yaml => ".prettierrc.yaml",
            OutputFormat::Js => ".prettierrc.js",
        }
    }

    /// Guess the encoding from a config file name
    pub fn from_file_name(name: &str) -> Option<Self> {
        if name.ends_with(".yaml") || name.ends_with(".yml") {
            Some(OutputFormat::Yaml)
        } else if name.ends_with(".js") || name.ends_with(".cjs") {
            Some(OutputFormat::Js)
        } else if name.ends_with(".json") || name.ends_with(".prettierrc") {
            Some(OutputFormat::Json)
        } else {
            None
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Js => write!(f, "js"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = KitError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "js" => Ok(OutputFormat::Js),
            _ => Err(KitError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Package manager used for the install command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    #[default]
    Npm,
    Yarn,
    Pnpm,
    Bun,
}

impl PackageManager {
    pub const ALL: [Self; 4] = [Self::Npm, Self::Yarn, Self::Pnpm, Self::Bun];
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageManager::Npm => write!(f, "npm"),
            PackageManager::Yarn => write!(f, "yarn"),
            PackageManager::Pnpm => write!(f, "pnpm"),
            PackageManager::Bun => write!(f, "bun"),
        }
    }
}

impl std::str::FromStr for PackageManager {
    type Err = KitError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "npm" => Ok(PackageManager::Npm),
            "yarn" => Ok(PackageManager::Yarn),
            "pnpm" => Ok(PackageManager::Pnpm),
            "bun" => Ok(PackageManager::Bun),
            _ => Err(KitError::UnsupportedManager(s.to_string())),
        }
    }
}
