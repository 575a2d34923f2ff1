use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prettierkit::cli::parse_key_value;
use prettierkit::{Category, OutputFormat, PackageManager};

/// Parse config encoding from string
fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse().map_err(|e: prettierkit::KitError| e.to_string())
}

/// Parse package manager from string
fn parse_package_manager(s: &str) -> Result<PackageManager, String> {
    s.parse().map_err(|e: prettierkit::KitError| e.to_string())
}

/// Parse framework category from string
fn parse_category(s: &str) -> Result<Category, String> {
    s.parse()
}

#[derive(Parser)]
#[command(name = "prettierkit")]
#[command(
    version,
    about = "Generate Prettier configuration for JavaScript and TypeScript frameworks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Prettier config, ignore files and format script
    Generate {
        #[arg(long, help = "Framework id (see `prettierkit list`)")]
        framework: Option<String>,
        #[arg(short = 'f', long, value_parser = parse_output_format, help = "Config encoding: json, yaml, js")]
        format: Option<OutputFormat>,
        #[arg(short = 's', long = "set", value_parser = parse_key_value, help = "Override one option, e.g. --set printWidth=100")]
        sets: Vec<(String, Value)>,
        #[arg(long, help = "JSON or YAML file with option overrides")]
        patch: Option<PathBuf>,
        #[arg(short = 'o', long, help = "Write files into this directory instead of printing")]
        out_dir: Option<PathBuf>,
        #[arg(long, help = "Overwrite existing files")]
        force: bool,
    },

    /// Print the dependency install command for a framework
    Install {
        #[arg(long, help = "Framework id")]
        framework: Option<String>,
        #[arg(short = 'm', long, value_parser = parse_package_manager, help = "Package manager: npm, yarn, pnpm, bun")]
        manager: Option<PackageManager>,
    },

    /// List supported frameworks
    List {
        #[arg(short = 'c', long, value_parser = parse_category, help = "Filter: frontend, backend, fullstack")]
        category: Option<Category>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            value_parser = ["text", "json"],
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Show a framework's default settings
    Show {
        #[arg(help = "Framework id")]
        framework: String,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            value_parser = ["text", "json"],
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Describe every formatting option
    Options,

    /// Re-encode an existing Prettier config
    Convert {
        #[arg(help = "Config file to read")]
        path: PathBuf,
        #[arg(long, value_parser = parse_output_format, help = "Input encoding (inferred from file name by default)")]
        from: Option<OutputFormat>,
        #[arg(long, value_parser = parse_output_format, default_value = "json", help = "Output encoding")]
        to: OutputFormat,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            value_parser = ["text", "json"],
            help = "Output format: text, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Default framework written into the config")]
        framework: Option<String>,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mPrettierKit encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Backtrace when RUST_BACKTRACE=1
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    // stdout carries generated artifacts
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Generate {
            framework,
            format,
            sets,
            patch,
            out_dir,
            force,
        } => {
            use prettierkit::cli::commands::generate::GenerateOptions;

            prettierkit::cli::commands::generate::run(GenerateOptions {
                framework,
                format,
                sets,
                patch_file: patch,
                out_dir,
                force,
                quiet: cli.quiet,
            })?;
        }
        Commands::Install { framework, manager } => {
            prettierkit::cli::commands::install::run(framework, manager)?;
        }
        Commands::List { category, format } => {
            prettierkit::cli::commands::list::run(category, &format)?;
        }
        Commands::Show { framework, format } => {
            prettierkit::cli::commands::show::run(&framework, &format)?;
        }
        Commands::Options => {
            prettierkit::cli::commands::options::run()?;
        }
        Commands::Convert { path, from, to } => {
            prettierkit::cli::commands::convert::run(&path, from, to)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                prettierkit::cli::commands::config::show(&format)?;
            }
            ConfigAction::Path => {
                prettierkit::cli::commands::config::path()?;
            }
            ConfigAction::Init {
                global,
                framework,
                force,
            } => {
                if global {
                    prettierkit::cli::commands::config::init_global(framework.as_deref(), force)?;
                } else {
                    prettierkit::cli::commands::config::init_project(framework.as_deref(), force)?;
                }
            }
        },
    }

    Ok(())
}
