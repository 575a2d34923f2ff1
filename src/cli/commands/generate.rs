//! Generate Command
//!
//! Print the generated artifacts, or write them into a directory.
//!
//! Usage:
//!   prettierkit generate [--framework ID] [--format json|yaml|js]
//!                        [--set key=value]... [--patch FILE] [--out-dir DIR] [--force]

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::cli::ui::Output;
use crate::cli::util::{CommandContext, write_artifact};
use crate::generator::{GeneratedBundle, Generator};
use crate::types::{KitError, OutputFormat, Result};

pub struct GenerateOptions {
    pub framework: Option<String>,
    pub format: Option<OutputFormat>,
    pub sets: Vec<(String, Value)>,
    pub patch_file: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub force: bool,
    pub quiet: bool,
}

pub fn run(options: GenerateOptions) -> Result<()> {
    let ctx = CommandContext::load(options.framework, options.format, None)?;
    let patch = ctx.preference_patch(options.patch_file.as_deref(), &options.sets)?;

    let bundle =
        Generator::builtin().generate_selection(ctx.framework.as_deref(), &patch, ctx.format)?;

    match options.out_dir {
        Some(dir) if bundle.is_placeholder => {
            Output::quiet(options.quiet).warning(&format!(
                "No framework selected, nothing written to {}",
                dir.display()
            ));
            print_bundle(&bundle);
        }
        Some(dir) => write_bundle(&bundle, &dir, options.force, options.quiet)?,
        None => print_bundle(&bundle),
    }

    Ok(())
}

fn print_bundle(bundle: &GeneratedBundle) {
    let output = Output::new();

    for (name, content) in bundle.files() {
        output.section(name);
        println!("{}", content.trim_end());
    }

    output.section("package.json scripts");
    println!("{}", bundle.format_script);
}

fn write_bundle(bundle: &GeneratedBundle, dir: &Path, force: bool, quiet: bool) -> Result<()> {
    let output = Output::quiet(quiet);
    let files = bundle.files();

    // All or nothing: refuse before the first write
    if !force
        && let Some(existing) = files
            .iter()
            .map(|(name, _)| dir.join(name))
            .find(|path| path.exists())
    {
        return Err(KitError::Config(format!(
            "{} already exists. Use --force to overwrite.",
            existing.display()
        )));
    }

    std::fs::create_dir_all(dir)?;

    for (name, content) in files {
        let path = dir.join(name);
        write_artifact(&path, &content, force)?;
        output.success(&format!("Wrote {}", path.display()));
    }

    output.info(&format!(
        "Add to package.json scripts: {}",
        bundle.format_script
    ));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PartialPreferences;
    use tempfile::TempDir;

    fn nextjs_bundle() -> GeneratedBundle {
        Generator::builtin()
            .generate_by_id("nextjs", &PartialPreferences::default(), OutputFormat::Json)
            .unwrap()
    }

    #[test]
    fn test_write_bundle_writes_all_files() {
        let temp_dir = TempDir::new().unwrap();
        let out = temp_dir.path().join("web");

        write_bundle(&nextjs_bundle(), &out, false, true).unwrap();

        assert!(out.join(".prettierrc").exists());
        assert!(out.join(".prettierignore").exists());
        assert!(out.join(".gitignore").exists());
    }

    #[test]
    fn test_write_bundle_leaves_nothing_behind_on_conflict() {
        let temp_dir = TempDir::new().unwrap();
        let gitignore = temp_dir.path().join(".gitignore");
        std::fs::write(&gitignore, "target\n").unwrap();

        let err = write_bundle(&nextjs_bundle(), temp_dir.path(), false, true).unwrap_err();

        assert!(matches!(err, KitError::Config(_)));
        assert!(!temp_dir.path().join(".prettierrc").exists());
        assert!(!temp_dir.path().join(".prettierignore").exists());
        assert_eq!(std::fs::read_to_string(&gitignore).unwrap(), "target\n");
    }

    #[test]
    fn test_write_bundle_force_replaces_existing() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(".gitignore"), "target\n").unwrap();

        write_bundle(&nextjs_bundle(), temp_dir.path(), true, true).unwrap();

        let gitignore = std::fs::read_to_string(temp_dir.path().join(".gitignore")).unwrap();
        assert!(gitignore.starts_with("node_modules"));
    }
}
