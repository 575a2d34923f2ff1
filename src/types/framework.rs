//! Framework profile types
//!
//! A `FrameworkProfile` is one catalog entry: the defaults a project of that
//! kind starts from. Profiles are built once when the catalog loads and are
//! never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::preferences::FormattingPreferences;

/// Framework classification
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Frontend,
    Backend,
    Fullstack,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Frontend => write!(f, "frontend"),
            Category::Backend => write!(f, "backend"),
            Category::Fullstack => write!(f, "fullstack"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "frontend" => Ok(Category::Frontend),
            "backend" => Ok(Category::Backend),
            "fullstack" => Ok(Category::Fullstack),
            _ => Err(format!(
                "Unknown category: {}. Valid values: frontend, backend, fullstack",
                s
            )),
        }
    }
}

/// Packages a framework needs installed for formatting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallProfile {
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
}

impl InstallProfile {
    pub fn new(dependencies: &[&str], dev_dependencies: &[&str]) -> Self {
        Self {
            dependencies: dependencies.iter().map(|d| d.to_string()).collect(),
            dev_dependencies: dev_dependencies.iter().map(|d| d.to_string()).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dependencies.is_empty() && self.dev_dependencies.is_empty()
    }
}

/// One supported project framework
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkProfile {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub preferences: FormattingPreferences,
    pub prettier_ignore: Vec<String>,
    pub gitignore: Vec<String>,
    pub format_script: String,
    pub install: InstallProfile,
}
