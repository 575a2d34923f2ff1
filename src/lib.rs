//! PrettierKit - Prettier configuration generator
//!
//! Turns a framework choice plus optional formatting overrides into the
//! files a JavaScript or TypeScript project needs to adopt Prettier.
//!
//! ## Core Features
//!
//! - **Framework Catalog**: curated defaults for frontend, backend and fullstack stacks
//! - **Preference Merge**: partial overrides layered onto framework defaults
//! - **Three Encodings**: `.prettierrc` (JSON), `.prettierrc.yaml`, `.prettierrc.js`
//! - **Companion Artifacts**: `.prettierignore`, `.gitignore`, format script, install command
//!
//! ## Quick Start
//!
//! ```ignore
//! use prettierkit::{Generator, OutputFormat, PartialPreferences};
//!
//! let patch = PartialPreferences::from_json_str(r#"{"printWidth": 100}"#)?;
//! let bundle = Generator::builtin().generate_by_id("nextjs", &patch, OutputFormat::Json)?;
//! std::fs::write(&bundle.config_file_name, &bundle.config)?;
//! ```
//!
//! ## Modules
//!
//! - [`catalog`]: built-in framework profiles and option reference
//! - [`generator`]: merge, serialization and companion artifact rendering
//! - [`config`]: layered tool configuration
//! - [`types`]: preference model and error types

pub mod catalog;
pub mod cli;
pub mod config;
pub mod constants;
pub mod generator;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, DefaultsConfig};

// Error Types
pub use types::error::{ErrorCategory, KitError, Result, ResultExt};

// Preference Model
pub use types::{
    ArrowParens, Category, EndOfLine, FileMatch, FormattingPreferences, FrameworkProfile,
    HtmlWhitespaceSensitivity, InstallProfile, OutputFormat, Override, PackageManager,
    PartialPreferences, ProseWrap, TrailingComma,
};

// =============================================================================
// Generation Re-exports
// =============================================================================

pub use catalog::FrameworkCatalog;
pub use generator::{
    GeneratedBundle, Generator, merge_preferences, parse_config, render_ignore_list,
    serialize_config, synthesize_install_command,
};
