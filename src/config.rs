//! Command line and environment configuration

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use directories::ProjectDirs;

pub const DEFAULT_API_BASE: &str = "https://www.thecocktaildb.com/api/json/v1/1";
const FALLBACK_DATA_DIR: &str = ".cache";

/// Browse, search and bookmark cocktails from TheCocktailDB in the terminal
#[derive(Parser, Debug, Clone)]
#[command(name = "cocktail-tui", version, about)]
pub struct Cli {
    /// Base URL of the recipe API
    #[arg(long, env = "COCKTAIL_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Number of random cocktails fetched on load and refresh
    #[arg(long, env = "COCKTAIL_COUNT", default_value_t = 3,
          value_parser = clap::value_parser!(u16).range(1..))]
    pub count: u16,

    /// Milliseconds the search input has to settle before a search is sent
    #[arg(long, env = "COCKTAIL_DEBOUNCE_MS", default_value_t = 500)]
    pub debounce_ms: u64,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 10)]
    pub timeout_secs: u64,

    /// Directory holding preferences.json (theme and favorites)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Keep preferences in memory only
    #[arg(long)]
    pub ephemeral: bool,

    /// Skip the splash screen
    #[arg(long)]
    pub no_splash: bool,
}

/// Resolved runtime configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api_base: String,
    pub random_batch: usize,
    pub debounce: Duration,
    pub request_timeout: Duration,
    pub data_dir: PathBuf,
    pub ephemeral: bool,
    pub show_splash: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            random_batch: 3,
            debounce: Duration::from_millis(500),
            request_timeout: Duration::from_secs(10),
            data_dir: PathBuf::from(FALLBACK_DATA_DIR),
            ephemeral: false,
            show_splash: true,
        }
    }
}

impl From<Cli> for AppConfig {
    fn from(cli: Cli) -> Self {
        let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
        Self {
            api_base: cli.api_base.trim_end_matches('/').to_string(),
            random_batch: cli.count as usize,
            debounce: Duration::from_millis(cli.debounce_ms),
            request_timeout: Duration::from_secs(cli.timeout_secs),
            data_dir,
            ephemeral: cli.ephemeral,
            show_splash: !cli.no_splash,
        }
    }
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "cocktail-tui")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}
