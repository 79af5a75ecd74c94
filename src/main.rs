#![forbid(unsafe_code)]

mod catalog;
mod commands;
mod config;
mod constants;
mod context;
mod gui;
mod module_prefs;
mod projects;
mod storage;
mod theme;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn, Level as TraceLevel};
use tracing_subscriber::FmtSubscriber;

use config::ManagerConfig;
use storage::{FileStore, PrefStore};

#[derive(Parser, Debug)]
#[command(
    name = "novologic-shell",
    version,
    about = "Desktop shell for the Novologic construction management suite"
)]
struct Args {
    /// Log level (trace, debug, info, warn, error); overrides LOG_LEVEL
    #[arg(long)]
    log_level: Option<String>,

    /// Remove stored sidebar and theme preferences, then exit
    #[arg(long)]
    reset_prefs: bool,
}

fn parse_log_level(value: &str) -> TraceLevel {
    match value.to_lowercase().as_str() {
        "trace" => TraceLevel::TRACE,
        "debug" => TraceLevel::DEBUG,
        "warn" => TraceLevel::WARN,
        "error" => TraceLevel::ERROR,
        _ => TraceLevel::INFO,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Config is read before the subscriber exists so its log_level can seed
    // the subscriber; a load failure falls back to defaults and is reported
    // once logging is up.
    let (config, config_err) = match ManagerConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (ManagerConfig::default(), Some(err)),
    };

    let level = args
        .log_level
        .or_else(|| std::env::var("LOG_LEVEL").ok())
        .unwrap_or_else(|| config.log_level.clone());

    let subscriber = FmtSubscriber::builder()
        .with_max_level(parse_log_level(&level))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if let Some(err) = config_err {
        warn!(error = ?err, "Failed to load manager config, using defaults");
    }

    if args.reset_prefs {
        let mut store = FileStore::open_default();
        for key in [constants::storage::SIDEBAR_MODULES, constants::storage::THEME] {
            if let Err(err) = store.remove(key) {
                warn!(key = %key, error = ?err, "Failed to remove stored preference");
            }
        }
        info!("Stored preferences cleared");
        return Ok(());
    }

    gui::run_gui(config)
}
