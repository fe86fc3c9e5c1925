//! CLI Adapter.

mod config;
mod rename;
mod specs;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

/// Environment variable holding the log filter directives.
const LOG_ENV: &str = "CYMIG_LOG";

#[derive(Parser)]
#[command(name = "cymig")]
#[command(version)]
#[command(
    about = "Migrate a legacy cypress.json project to the cypress.config layout",
    long_about = None
)]
struct Cli {
    /// Project root (defaults to the current directory)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the config module from the legacy config
    #[clap(visible_alias = "c")]
    Config {
        /// Legacy config file, relative to the project root
        #[arg(long, value_name = "FILE")]
        config: Option<String>,
        /// Emit an ES module (cypress.config.ts)
        #[arg(long)]
        esm: bool,
        /// Write the module to disk instead of printing it
        #[arg(short, long)]
        write: bool,
    },
    /// Preview the spec-file migration
    #[clap(visible_alias = "s")]
    Specs {
        /// Print the preview as JSON
        #[arg(long)]
        json: bool,
    },
    /// Rename legacy spec files to the migrated convention
    #[clap(visible_alias = "r")]
    Rename {
        /// Directory whose files are renamed (defaults to the integration folder)
        #[arg(long, value_name = "DIR")]
        dir: Option<String>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Print the ProjectLike GraphQL interface
    Schema,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result: Result<(), AppError> = resolve_root(cli.root).and_then(|root| match cli.command {
        Commands::Config { config, esm, write } => config::run_config(&root, config, esm, write),
        Commands::Specs { json } => specs::run_specs(&root, json),
        Commands::Rename { dir, yes } => rename::run_rename(&root, dir, yes),
        Commands::Schema => {
            print!("{}", crate::app::api::schema_sdl());
            Ok(())
        }
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn resolve_root(root: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match root {
        Some(root) => Ok(root),
        None => Ok(std::env::current_dir()?),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
