//! pearls: once-a-day tracker for the "Five Tibetan Pearls" routine.
//!
//! ## Subcommands
//!
//! - (none) / `run`: interactive daily loop, asks for every day missing up to today
//! - `status`: current state and advice without prompting (`--json` for scripts)
//! - `history`: recorded sessions with their streaks
//! - `init`: start an empty history with a first session

mod console;
mod daily;
mod history;
mod init;
mod logging;
mod status;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use pearls_core::{
    load_tracker_config, CsvRecordStore, RepsRules, StorageConfig, Tracker, TrackerError,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pearls")]
#[command(about = "Five Tibetan Pearls daily routine tracker")]
#[command(version)]
struct Cli {
    /// Data directory (default: ~/.pearls)
    #[arg(long, global = true, value_name = "PATH")]
    data_dir: Option<PathBuf>,

    /// Rules config file (default: <data-dir>/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the current date (YYYY-MM-DD)
    #[arg(long, global = true, hide = true, value_name = "DATE")]
    today: Option<NaiveDate>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record every day missing up to today (default)
    Run,

    /// Show the current state and advice without prompting
    Status {
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List recorded sessions
    History {
        /// Only show the most recent N sessions
        #[arg(long, value_name = "N")]
        limit: Option<usize>,
    },

    /// Start an empty history with its first session
    Init {
        /// Reps done on that day
        #[arg(long)]
        reps: u32,

        /// Date of the first session (default: today)
        #[arg(long, value_name = "DATE")]
        date: Option<NaiveDate>,
    },
}

/// Everything a subcommand needs, resolved once from flags and config.
pub struct Context {
    pub storage: StorageConfig,
    pub rules: RepsRules,
    pub today: NaiveDate,
}

impl Context {
    pub fn open_tracker(&self) -> pearls_core::Result<Tracker<CsvRecordStore>> {
        let store = CsvRecordStore::new(&self.storage.records_file());
        Tracker::open(store, self.rules.clone(), self.today)
    }
}

fn resolve_context(cli: &Cli, storage: StorageConfig) -> pearls_core::Result<Context> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| storage.config_file());
    let config = load_tracker_config(&config_path)?;
    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    Ok(Context {
        storage,
        rules: RepsRules::new(config.rules),
        today,
    })
}

fn run(cli: Cli, storage: StorageConfig) -> pearls_core::Result<()> {
    let ctx = resolve_context(&cli, storage)?;
    match cli.command {
        None | Some(Commands::Run) => daily::run(&ctx),
        Some(Commands::Status { json }) => status::run(&ctx, json),
        Some(Commands::History { limit }) => history::run(&ctx, limit),
        Some(Commands::Init { reps, date }) => init::run(&ctx, reps, date),
    }
}

fn main() {
    let cli = Cli::parse();

    let storage = match cli.data_dir.clone() {
        Some(root) => StorageConfig::with_root(root),
        None => match StorageConfig::from_home() {
            Ok(storage) => storage,
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        },
    };
    let logging_guard = logging::init(&storage.logs_dir());

    if let Err(e) = run(cli, storage) {
        tracing::error!(error = %e, "pearls failed");
        // Only EOF on stdin reaches here as InputAborted. Ctrl-C is left to the
        // default SIGINT handler and ends the process without this message.
        match &e {
            TrackerError::InputAborted => eprintln!("\nInterrupted by user"),
            TrackerError::EmptyHistory => eprintln!("Nothing to process: {}", e),
            _ => eprintln!("{}", e),
        }
        drop(logging_guard);
        std::process::exit(1);
    }
}
