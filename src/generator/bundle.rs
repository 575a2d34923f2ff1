//! Generated artifact bundle

use serde::Serialize;

use crate::constants::placeholder;
use crate::types::OutputFormat;

/// All text artifacts produced by one generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedBundle {
    pub format: OutputFormat,
    /// File name Prettier discovers for `config`
    pub config_file_name: String,
    pub config: String,
    pub prettier_ignore: String,
    pub gitignore: String,
    pub format_script: String,
    /// True when no framework was selected and the texts are placeholders
    pub is_placeholder: bool,
}

impl GeneratedBundle {
    /// Bundle shown when no framework is selected
    pub fn placeholder(format: OutputFormat) -> Self {
        Self {
            format,
            config_file_name: format.file_name().to_string(),
            config: placeholder::CONFIG.to_string(),
            prettier_ignore: placeholder::PRETTIER_IGNORE.to_string(),
            gitignore: placeholder::GITIGNORE.to_string(),
            format_script: placeholder::FORMAT_SCRIPT.to_string(),
            is_placeholder: true,
        }
    }

    /// Writable artifacts as (file name, contents) pairs.
    ///
    /// The format script is a `package.json` snippet, not a file, so it is
    /// not listed. Ignore files get a trailing newline here.
    pub fn files(&self) -> Vec<(&str, String)> {
        vec![
            (self.config_file_name.as_str(), self.config.clone()),
            (
                crate::constants::files::PRETTIER_IGNORE,
                format!("{}\n", self.prettier_ignore),
            ),
            (
                crate::constants::files::GITIGNORE,
                format!("{}\n", self.gitignore),
            ),
        ]
    }
}
