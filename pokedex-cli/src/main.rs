//! pokedex - browse the public creature catalog from your terminal.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use pokedex_cli::{table, tui};
use pokedex_core::catalog::INITIAL_LOAD;
use pokedex_core::{ApiClient, DEFAULT_BASE_URL, MAX_CREATURE_ID};

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "pokedex",
    about = "Filterable, searchable browser for the public creature catalog",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,

    /// Base URL of the creature service
    #[clap(long, global = true, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Log verbosity (RUST_LOG overrides this)
    #[clap(long, global = true, value_enum, default_value = "warn")]
    log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Browse the catalog interactively (the default)
    Browse {
        /// How many records the initial load requests
        #[clap(long, default_value_t = INITIAL_LOAD)]
        limit: u32,
    },

    /// Fetch records and print them as a table
    List {
        /// How many records to request
        #[clap(long, default_value_t = INITIAL_LOAD)]
        limit: u32,

        /// Only records carrying this type tag
        #[clap(long = "type")]
        type_tag: Option<String>,

        /// Name or id substring to search for
        #[clap(long)]
        search: Option<String>,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },

    /// Show one record in full
    Show {
        /// Record identifier (1..=898)
        id: u32,

        /// Output as JSON
        #[clap(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level.to_filter_directive()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let client = ApiClient::new(&cli.api_url)?;

    match cli.command.unwrap_or(Command::Browse {
        limit: INITIAL_LOAD,
    }) {
        Command::Browse { limit } => tui::run(client, limit.min(MAX_CREATURE_ID)).await,
        Command::List {
            limit,
            type_tag,
            search,
            json,
        } => table::list(&client, limit.min(MAX_CREATURE_ID), type_tag, search, json).await,
        Command::Show { id, json } => {
            anyhow::ensure!(
                (1..=MAX_CREATURE_ID).contains(&id),
                "id must be between 1 and {MAX_CREATURE_ID}"
            );
            table::show(&client, id, json).await
        }
    }
}
