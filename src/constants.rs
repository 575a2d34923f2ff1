//! Global Constants
//!
//! Centralized file names and fixed texts.

/// Artifact file names
pub mod files {
    pub const PRETTIER_IGNORE: &str = ".prettierignore";
    pub const GITIGNORE: &str = ".gitignore";
}

/// Texts shown in place of artifacts when no framework is selected
pub mod placeholder {
    pub const CONFIG: &str = "// Select a framework to generate configuration";
    pub const PRETTIER_IGNORE: &str = "# Select a framework to generate ignore patterns";
    pub const GITIGNORE: &str = "# Select a framework to generate gitignore";
    pub const FORMAT_SCRIPT: &str = "// Select a framework to generate format script";
}

/// Configuration file locations
pub mod config {
    /// Directory name under the user's config home
    pub const APP_DIR: &str = "prettierkit";

    /// Global config file name
    pub const GLOBAL_FILE: &str = "config.toml";

    /// Project config file, relative to the working directory
    pub const PROJECT_FILE: &str = ".prettierkit.toml";

    /// Environment variable prefix
    pub const ENV_PREFIX: &str = "PRETTIERKIT_";
}
