//! MDPLinks CLI
//!
//! Command-line interface for MDPLinks - bookmark management with tags.

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use mdplinks_core::{Config, ErrorCode, LinkError, Store};

mod commands;
mod output;

use output::{Output, OutputFormat};

#[derive(Parser)]
#[command(name = "mdplinks")]
#[command(about = "MDPLinks - Bookmark manager with tags")]
#[command(version)]
#[command(propagate_version = true)]
struct Cli {
    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Use this config file instead of the default
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty link database
    Init {
        /// Directory for the database (saved to the config file)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },
    /// Save a new link
    #[command(alias = "create")]
    Add {
        /// URL to save
        url: String,
        /// Comma-separated tags
        #[arg(short, long, default_value = "")]
        tags: String,
        /// Link title
        #[arg(short = 'T', long, default_value = "")]
        title: String,
    },
    /// List all links
    #[command(alias = "ls")]
    List,
    /// Change the tags and/or title of a link
    #[command(alias = "edit")]
    Update {
        /// URL of the link to change
        url: String,
        /// New comma-separated tags (replaces the current ones)
        #[arg(short, long, default_value = "")]
        tags: String,
        /// New title
        #[arg(short = 'T', long, default_value = "")]
        title: String,
    },
    /// List links carrying a tag
    Search {
        /// Tag to look for
        tag: String,
    },
    /// List links whose tags are exactly the given set
    SearchTags {
        /// Comma-separated tags
        tags: String,
    },
    /// Show or set configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
enum ConfigCommands {
    /// Show current configuration
    Show,
    /// Set a configuration value
    Set {
        /// Configuration key (data_dir, log_file)
        key: String,
        /// Configuration value
        value: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let output = Output::new(OutputFormat::from_flags(cli.json, cli.quiet));

    match run(cli, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output.error(&e);
            ExitCode::from(exit_status(&e))
        }
    }
}

fn run(cli: Cli, output: &Output) -> Result<()> {
    let config_path = cli.config.as_ref();

    // Config commands work without a database
    if let Commands::Config { command } = &cli.command {
        return match command.clone() {
            Some(ConfigCommands::Show) | None => commands::config::show(config_path, output),
            Some(ConfigCommands::Set { key, value }) => {
                commands::config::set(key, value, config_path, output)
            }
        };
    }

    let config =
        Config::load_with_cli_override(config_path).context(ErrorCode::FileError)?;
    init_logging(&config);

    if let Commands::Init { data_dir } = cli.command {
        return commands::init::init(config, data_dir, config_path, output);
    }

    let store = Store::new(config);
    debug!("Using database {:?}", store.config().database_path());

    match cli.command {
        Commands::Add { url, tags, title } => {
            commands::link::add(&store, &url, &tags, &title, output)
        }
        Commands::List => commands::link::list(&store, output),
        Commands::Update { url, tags, title } => {
            commands::link::update(&store, &url, &tags, &title, output)
        }
        Commands::Search { tag } => commands::link::search(&store, &tag, output),
        Commands::SearchTags { tags } => commands::link::search_tags(&store, &tags, output),
        Commands::Init { .. } | Commands::Config { .. } => unreachable!(), // Handled above
    }
}

/// Exit status for a failed command
///
/// Engine errors and errors tagged with an `ErrorCode` context (config
/// loading) use their catalog value. Anything else exits with 1, which is
/// also the value of `ErrorCode::DirError`.
fn exit_status(err: &anyhow::Error) -> u8 {
    if let Some(e) = err.downcast_ref::<LinkError>() {
        return e.code().value();
    }
    err.downcast_ref::<ErrorCode>()
        .map(|code| code.value())
        .unwrap_or(1)
}

/// Initialize logging
///
/// Only initializes if MDPLINKS_LOG environment variable is set.
/// Logs to config.log_file when set, stderr otherwise.
fn init_logging(config: &Config) {
    let Ok(log_level) = std::env::var("MDPLINKS_LOG") else {
        return;
    };

    let env_filter = EnvFilter::new(format!(
        "mdplinks_core={},mdplinks_cli={}",
        log_level, log_level
    ));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_ansi(false);

    // Ignore errors if a subscriber is already installed
    match &config.log_file {
        Some(path) => match File::create(path) {
            Ok(file) => {
                let _ = builder.with_writer(file).try_init();
            }
            Err(e) => {
                eprintln!("Warning: Could not create log file {:?}: {}", path, e);
            }
        },
        None => {
            let _ = builder.with_writer(std::io::stderr).try_init();
        }
    }
}
