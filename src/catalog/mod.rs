//! Framework Catalog
//!
//! Immutable, process-wide table of supported frameworks and their default
//! formatting, ignore, install and script data. Loaded once on first use.

mod frameworks;
pub mod ignore_patterns;
pub mod options;

use std::sync::LazyLock;

use tracing::debug;

use crate::types::{Category, FrameworkProfile, KitError, Result};

pub use ignore_patterns::{IgnoreCategory, IgnoreListBuilder};
pub use options::{OptionInfo, option_reference};

static BUILTIN: LazyLock<FrameworkCatalog> =
    LazyLock::new(|| FrameworkCatalog::new(frameworks::builtin_profiles()));

/// Keyed collection of framework profiles in display order
#[derive(Debug, Clone)]
pub struct FrameworkCatalog {
    profiles: Vec<FrameworkProfile>,
}

impl FrameworkCatalog {
    pub fn new(profiles: Vec<FrameworkProfile>) -> Self {
        debug!("Loaded framework catalog with {} profiles", profiles.len());
        Self { profiles }
    }

    /// The built-in catalog
    pub fn builtin() -> &'static FrameworkCatalog {
        &BUILTIN
    }

    /// Look up a profile by id (case-insensitive)
    pub fn get(&self, id: &str) -> Result<&FrameworkProfile> {
        self.profiles
            .iter()
            .find(|p| p.id.eq_ignore_ascii_case(id))
            .ok_or_else(|| KitError::UnknownFramework(id.to_string()))
    }

    pub fn profiles(&self) -> &[FrameworkProfile] {
        &self.profiles
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &FrameworkProfile> {
        self.profiles.iter().filter(move |p| p.category == category)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.profiles.iter().map(|p| p.id.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_known_framework() {
        let catalog = FrameworkCatalog::builtin();
        let profile = catalog.get("nextjs").unwrap();
        assert_eq!(profile.name, "Next.js");
        assert_eq!(profile.category, Category::Fullstack);
        assert_eq!(catalog.get("NextJS").unwrap().id, "nextjs");
    }

    #[test]
    fn test_get_unknown_framework() {
        let err = FrameworkCatalog::builtin().get("ember").unwrap_err();
        assert!(matches!(err, KitError::UnknownFramework(ref id) if id == "ember"));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_by_category() {
        let catalog = FrameworkCatalog::builtin();
        let backend: Vec<_> = catalog.by_category(Category::Backend).map(|p| p.id.as_str()).collect();
        assert!(backend.contains(&"express"));
        assert!(backend.contains(&"nestjs"));
        assert!(!backend.contains(&"react"));
    }

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(
            FrameworkCatalog::builtin(),
            FrameworkCatalog::builtin()
        ));
        assert!(!FrameworkCatalog::builtin().is_empty());
    }
}
