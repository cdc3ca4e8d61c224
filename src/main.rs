use annotationdb::config::{AnnotationDbConfig, ConfigLoader, UnknownKeyPolicy};
use annotationdb::error::ConfigurationError;
use clap::{Parser, Subcommand};
use log::error;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Validate and inspect gene annotation database pipeline configuration.
///
/// Without FILE arguments the per-user config file, `../pipeline.ini` and
/// `./pipeline.ini` are layered in that order.
#[derive(Debug, Parser)]
#[command(name = "annotationdb", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
    /// Warn about unknown sections and options instead of rejecting them.
    #[arg(long, global = true)]
    lenient: bool,
    /// Ignore ANNOTATIONDB_<SECTION>__<OPTION> environment overrides.
    #[arg(long, global = true)]
    no_env: bool,
    /// Print debug logs.
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load and validate the configuration.
    Check { files: Vec<PathBuf> },
    /// Print the validated configuration with all defaults filled in.
    Show {
        files: Vec<PathBuf>,
        #[arg(long)]
        json: bool,
    },
    /// Print the flattened `section_option=value` parameters.
    Params { files: Vec<PathBuf> },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let policy = if cli.lenient {
        UnknownKeyPolicy::Warn
    } else {
        UnknownKeyPolicy::Reject
    };
    let loader = ConfigLoader::new()
        .with_policy(policy)
        .with_env_overrides(!cli.no_env);

    match cli.command {
        Command::Check { files } => {
            let config = load(&loader, &files)?;
            println!("Configuration for '{}' is valid", config.db.name);
        }
        Command::Show { files, json } => {
            let config = load(&loader, &files)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                print!("{}", config.to_raw());
            }
        }
        Command::Params { files } => {
            let config = load(&loader, &files)?;
            for (key, value) in config.to_raw().params() {
                println!("{key}={value}");
            }
        }
    }
    Ok(())
}

fn load(
    loader: &ConfigLoader,
    files: &[PathBuf],
) -> Result<AnnotationDbConfig, ConfigurationError> {
    if files.is_empty() {
        loader.discover()
    } else {
        loader.load_layered(files)
    }
}
