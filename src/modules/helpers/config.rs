use std::env;
use std::path::PathBuf;

use dotenvy::dotenv;
use log::LevelFilter;

pub const DEFAULT_INPUT: &str = "./grid.json";

/// Settings of the grid builder binary, read from the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub logging_level: LevelFilter,
    pub log_file: Option<PathBuf>,
    pub input: PathBuf,
}

impl Settings {
    /// # settings from the environment
    /// loads a `.env` file when there is one, then reads `LOGGING_LEVEL`,
    /// `LOG_FILE` and `GRID_INPUT`
    ///
    /// ## Returns
    /// * `Settings` - the settings, with defaults for everything that is not set
    pub fn from_env() -> Settings {
        dotenv().ok();

        let logging_level = env::var("LOGGING_LEVEL")
            .map(|level| Settings::parse_level(&level))
            .unwrap_or(LevelFilter::Info);

        let log_file = env::var("LOG_FILE")
            .ok()
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let input = env::var("GRID_INPUT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_INPUT));

        Settings {
            logging_level,
            log_file,
            input,
        }
    }

    pub fn parse_level(level: &str) -> LevelFilter {
        match level.trim().to_uppercase().as_str() {
            "OFF" => LevelFilter::Off,
            "ERROR" => LevelFilter::Error,
            "WARN" => LevelFilter::Warn,
            "DEBUG" => LevelFilter::Debug,
            "TRACE" => LevelFilter::Trace,
            // default to info
            _ => LevelFilter::Info,
        }
    }
}
