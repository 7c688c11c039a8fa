//! Runtime configuration: command line flags, environment, defaults.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::builder::FalseyValueParser;
use clap::Parser;

/// File name of the best-score store inside the data directory.
pub const BEST_SCORE_FILE: &str = "best_score.json";

/// Terminal 2048.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tui-2048", version, about = "Terminal 2048 sliding-tile puzzle")]
pub struct Args {
    /// Seed for tile spawns (drawn from the OS when omitted)
    #[arg(long, env = "TUI_2048_SEED")]
    pub seed: Option<u64>,

    /// Directory holding the best-score file (default: ~/.tui-2048, or the
    /// current directory without a home)
    #[arg(long, env = "TUI_2048_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Append logs to this file; logging is off when unset
    #[arg(long, env = "TUI_2048_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Do not capture the mouse (disables drag swipes)
    #[arg(long, env = "TUI_2048_NO_MOUSE", value_parser = FalseyValueParser::new())]
    pub no_mouse: bool,
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub seed: Option<u64>,
    pub data_dir: PathBuf,
    pub log_file: Option<PathBuf>,
    pub mouse: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        Self {
            seed: args.seed,
            data_dir: args.data_dir.unwrap_or_else(default_data_dir),
            log_file: args.log_file,
            mouse: !args.no_mouse,
        }
    }

    /// Parse the process arguments and environment.
    pub fn load() -> Self {
        Self::from_args(Args::parse())
    }

    pub fn best_score_path(&self) -> PathBuf {
        self.data_dir.join(BEST_SCORE_FILE)
    }
}

fn default_data_dir() -> PathBuf {
    data_dir_for_home(std::env::var_os("HOME"))
}

fn data_dir_for_home(home: Option<OsString>) -> PathBuf {
    match home.filter(|home| !home.is_empty()) {
        Some(home) => PathBuf::from(home).join(".tui-2048"),
        None => PathBuf::from("."),
    }
}

/// Install the global logger.
///
/// The terminal belongs to the game while it runs, so records only go to a
/// file. Without one, logging stays disabled. The filter comes from
/// `RUST_LOG` and defaults to `info`.
pub fn init_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("install logger")?;
    Ok(())
}
