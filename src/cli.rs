//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use bomprops::output::OutputMode;
use bomprops::paths::LOCAL_REPO_ENV;

/// bomprops - Import BOM properties into a project
#[derive(Parser, Debug)]
#[command(
    name = "bomprops",
    version,
    about = "Import properties declared in Maven BOMs into a project",
    long_about = "Import properties declared in Maven BOMs into a project.\n\n\
                  Each configured BOM is resolved from a local repository, its \
                  <properties> block is filtered with include/exclude globs, and \
                  the surviving keys are published as <prefix>.<key>."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Import properties from the configured BOMs
    CopyProperties {
        /// Configuration file (default: nearest bomprops.toml)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Repository root to search instead of the local repository (repeatable)
        #[arg(long = "repo", env = LOCAL_REPO_ENV)]
        repos: Vec<PathBuf>,

        /// Write the resulting properties to this .properties file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the properties declared by one BOM
    Show {
        /// BOM coordinates: groupId:artifactId:version
        coordinates: String,

        /// Repository root to search instead of the local repository (repeatable)
        #[arg(long = "repo", env = LOCAL_REPO_ENV)]
        repos: Vec<PathBuf>,

        /// Only show keys matching one of these globs
        #[arg(short, long = "include")]
        includes: Vec<String>,

        /// Hide keys matching any of these globs
        #[arg(short = 'x', long = "exclude")]
        excludes: Vec<String>,

        /// Match globs case-insensitively
        #[arg(long)]
        ignore_case: bool,
    },

    /// Create a bomprops.toml template in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::CopyProperties {
            config,
            repos,
            output,
        }) => commands::copy_properties(config.as_deref(), &repos, output.as_deref(), output_mode),
        Some(Command::Show {
            coordinates,
            repos,
            includes,
            excludes,
            ignore_case,
        }) => commands::show(
            &coordinates,
            &repos,
            &commands::Filter {
                includes,
                excludes,
                case_sensitive: !ignore_case,
            },
            output_mode,
        ),
        Some(Command::Init { force }) => commands::init(force, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("bomprops v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("bomprops v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'bomprops --help' for usage");
                println!("Run 'bomprops init' to get started");
            }
            Ok(())
        },
    }
}
