//! Configuration Generator
//!
//! Pure functions turning a framework profile plus a preference patch into
//! text artifacts. Nothing here performs I/O; callers decide whether to
//! print, copy or write the results.
//!
//! The four steps (config, ignore lists, install command, format script) are
//! independent of each other.

mod bundle;
pub mod ignore;
pub mod install;
pub mod merge;
pub mod script;
pub mod serialize;

use tracing::{debug, info};

use crate::catalog::FrameworkCatalog;
use crate::types::{
    FrameworkProfile, OutputFormat, PackageManager, PartialPreferences, Result,
};

pub use bundle::GeneratedBundle;
pub use ignore::render_ignore_list;
pub use install::{ManagerSyntax, synthesize_install_command};
pub use merge::merge_preferences;
pub use script::format_script;
pub use serialize::{parse_config, serialize_config};

/// Drives generation against a framework catalog
pub struct Generator<'a> {
    catalog: &'a FrameworkCatalog,
}

impl Generator<'static> {
    /// Generator over the built-in catalog
    pub fn builtin() -> Self {
        Self::new(FrameworkCatalog::builtin())
    }
}

impl<'a> Generator<'a> {
    pub fn new(catalog: &'a FrameworkCatalog) -> Self {
        Self { catalog }
    }

    /// Generate every artifact for `profile`.
    pub fn generate(
        profile: &FrameworkProfile,
        patch: &PartialPreferences,
        format: OutputFormat,
    ) -> Result<GeneratedBundle> {
        let prefs = merge_preferences(&profile.preferences, patch)?;
        let config = serialize_config(&prefs, format)?;

        debug!(
            "Generated {} for {} ({} bytes)",
            format.file_name(),
            profile.id,
            config.len()
        );

        Ok(GeneratedBundle {
            format,
            config_file_name: format.file_name().to_string(),
            config,
            prettier_ignore: render_ignore_list(&profile.prettier_ignore),
            gitignore: render_ignore_list(&profile.gitignore),
            format_script: format_script(profile).to_string(),
            is_placeholder: false,
        })
    }

    /// Look up `id` and generate its artifacts.
    pub fn generate_by_id(
        &self,
        id: &str,
        patch: &PartialPreferences,
        format: OutputFormat,
    ) -> Result<GeneratedBundle> {
        let profile = self.catalog.get(id)?;
        info!("Generating {} config for {}", format, profile.name);
        Self::generate(profile, patch, format)
    }

    /// Generate for an optional selection; no selection yields placeholders
    /// without touching the serializer.
    pub fn generate_selection(
        &self,
        id: Option<&str>,
        patch: &PartialPreferences,
        format: OutputFormat,
    ) -> Result<GeneratedBundle> {
        match id {
            Some(id) => self.generate_by_id(id, patch, format),
            None => {
                debug!("No framework selected, returning placeholders");
                Ok(GeneratedBundle::placeholder(format))
            }
        }
    }

    /// Install command for the framework `id`.
    pub fn install_command(&self, id: &str, manager: PackageManager) -> Result<String> {
        let profile = self.catalog.get(id)?;
        Ok(synthesize_install_command(&profile.install, manager))
    }
}
